//! Color entry model and hex validation
//!
//! All hexes stored in the palette are normalized: uppercase `#RRGGBB`,
//! with the `#RGB` shorthand expanded digit-by-digit (`#3d9` -> `#33DD99`).

use serde::{Deserialize, Serialize};

/// A single palette color, built-in or user-added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub name: String,
    pub hex: String,
    #[serde(default)]
    pub is_custom: bool,
}

impl ColorEntry {
    pub fn builtin(name: &str, hex: &str) -> Self {
        Self {
            name: name.to_string(),
            hex: hex.to_string(),
            is_custom: false,
        }
    }

    pub fn custom(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
            is_custom: true,
        }
    }
}

/// True iff `s` (trimmed) is `#` followed by exactly 3 or 6 hex digits.
pub fn is_valid_hex(s: &str) -> bool {
    let s = s.trim();
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Canonical form: trimmed, uppercase, shorthand expanded to six digits.
/// `None` when invalid.
pub fn normalize_hex(s: &str) -> Option<String> {
    let s = s.trim();
    if !is_valid_hex(s) {
        return None;
    }

    let digits = &s[1..];
    let mut out = String::with_capacity(7);
    out.push('#');
    if digits.len() == 3 {
        for c in digits.chars() {
            let c = c.to_ascii_uppercase();
            out.push(c);
            out.push(c);
        }
    } else {
        out.push_str(&digits.to_ascii_uppercase());
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_hex_forms() {
        assert!(is_valid_hex("#EF4444"));
        assert!(is_valid_hex("#3d9"));
        assert!(is_valid_hex("  #FfF  "));
    }

    #[test]
    fn test_invalid_hex_forms() {
        assert!(!is_valid_hex(""));
        assert!(!is_valid_hex("EF4444"));
        assert!(!is_valid_hex("#EF44"));
        assert!(!is_valid_hex("#EF44445"));
        assert!(!is_valid_hex("#GG0011"));
        assert!(!is_valid_hex("#"));
    }

    #[test]
    fn test_normalize_uppercases_and_trims() {
        assert_eq!(normalize_hex("#abCDef"), Some("#ABCDEF".to_string()));
        assert_eq!(normalize_hex("  #EF4444"), Some("#EF4444".to_string()));
        assert_eq!(normalize_hex("abCDef"), None);
    }

    #[test]
    fn test_normalize_expands_shorthand() {
        assert_eq!(normalize_hex(" #3d9 "), Some("#33DD99".to_string()));
        assert_eq!(normalize_hex("#fff"), Some("#FFFFFF".to_string()));
    }
}
