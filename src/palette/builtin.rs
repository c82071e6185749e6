//! The fixed built-in palette, in declaration order.

use super::ColorEntry;

pub const BUILTIN_COLORS: &[(&str, &str)] = &[
    ("Red", "#EF4444"),
    ("Orange", "#F97316"),
    ("Amber", "#F59E0B"),
    ("Yellow", "#EAB308"),
    ("Lime", "#84CC16"),
    ("Green", "#22C55E"),
    ("Emerald", "#10B981"),
    ("Teal", "#14B8A6"),
    ("Cyan", "#06B6D4"),
    ("Sky", "#0EA5E9"),
    ("Blue", "#3B82F6"),
    ("Indigo", "#6366F1"),
    ("Violet", "#8B5CF6"),
    ("Purple", "#A855F7"),
    ("Fuchsia", "#D946EF"),
    ("Pink", "#EC4899"),
    ("Rose", "#F43F5E"),
    ("Brown", "#92400E"),
    ("Slate", "#64748B"),
    ("Gray", "#6B7280"),
    ("Black", "#0F172A"),
    ("White", "#FFFFFF"),
];

pub fn builtin_entries() -> Vec<ColorEntry> {
    BUILTIN_COLORS
        .iter()
        .map(|(name, hex)| ColorEntry::builtin(name, hex))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::is_valid_hex;

    #[test]
    fn test_builtins_are_22_normalized_entries() {
        let entries = builtin_entries();
        assert_eq!(entries.len(), 22);
        for e in &entries {
            assert!(is_valid_hex(&e.hex), "bad builtin hex: {}", e.hex);
            assert_eq!(e.hex, e.hex.to_ascii_uppercase());
            assert!(!e.is_custom);
            assert!(!e.name.is_empty());
        }
    }
}
