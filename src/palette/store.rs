//! Combined palette: fixed built-ins plus persisted custom colors.

use super::builtin::builtin_entries;
use super::entry::{ColorEntry, normalize_hex};
use crate::storage::KeyValueStore;
use thiserror::Error;

/// Record name the custom list is persisted under.
pub const CUSTOM_COLORS_KEY: &str = "custom_colors";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddError {
    #[error("enter a hex like #RRGGBB or #RGB, got {0:?}")]
    InvalidHex(String),
    #[error("color {0} is already in the palette")]
    Duplicate(String),
}

/// Built-in colors (declaration order) followed by custom colors
/// (insertion order). The only component with I/O: every mutation of the
/// custom list is written through to the injected [`KeyValueStore`].
pub struct ColorStore<S: KeyValueStore> {
    builtins: Vec<ColorEntry>,
    customs: Vec<ColorEntry>,
    kv: S,
}

impl<S: KeyValueStore> ColorStore<S> {
    /// Hydrate from storage. Missing or unreadable data is treated as "no
    /// custom colors", never an error to the caller.
    pub fn load(kv: S) -> Self {
        let customs = match kv.get(CUSTOM_COLORS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<ColorEntry>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("discarding corrupt custom colors record: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("failed to read custom colors: {e:#}");
                Vec::new()
            }
        };

        Self {
            builtins: builtin_entries(),
            customs,
            kv,
        }
    }

    /// Add a custom color. Rejects without mutating when the hex already
    /// exists (case-insensitively) among built-ins or customs.
    pub fn add(&mut self, entry: ColorEntry) -> Result<(), AddError> {
        let hex = normalize_hex(&entry.hex).ok_or_else(|| AddError::InvalidHex(entry.hex.clone()))?;
        if self.find(&hex).is_some() {
            return Err(AddError::Duplicate(hex));
        }

        self.customs.push(ColorEntry {
            hex,
            is_custom: true,
            ..entry
        });
        self.persist();
        Ok(())
    }

    /// Remove a custom color by hex. Idempotent when absent; built-ins are
    /// untouched.
    pub fn remove(&mut self, hex: &str) {
        let Some(hex) = normalize_hex(hex) else {
            return;
        };
        let before = self.customs.len();
        self.customs
            .retain(|c| normalize_hex(&c.hex).as_deref() != Some(hex.as_str()));
        if self.customs.len() != before {
            self.persist();
        }
    }

    /// Drop all custom colors and the persisted record with them.
    pub fn clear(&mut self) {
        self.customs.clear();
        self.persist();
    }

    /// Built-ins in declaration order, then customs in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &ColorEntry> {
        self.builtins.iter().chain(self.customs.iter())
    }

    /// Case-insensitive lookup by hex; shorthand and six-digit forms of the
    /// same color compare equal.
    pub fn find(&self, hex: &str) -> Option<&ColorEntry> {
        let hex = normalize_hex(hex)?;
        self.all()
            .find(|c| normalize_hex(&c.hex).as_deref() == Some(hex.as_str()))
    }

    pub fn customs(&self) -> &[ColorEntry] {
        &self.customs
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.builtins.len() + self.customs.len()
    }

    #[cfg(test)]
    pub(crate) fn kv(&self) -> &S {
        &self.kv
    }

    /// Write-through: a non-empty custom list is serialized under
    /// [`CUSTOM_COLORS_KEY`]; an empty one removes the record so a cleared
    /// palette is distinguishable from one that never saved.
    fn persist(&mut self) {
        let result = if self.customs.is_empty() {
            self.kv.remove(CUSTOM_COLORS_KEY)
        } else {
            match serde_json::to_string(&self.customs) {
                Ok(raw) => self.kv.set(CUSTOM_COLORS_KEY, &raw),
                Err(e) => Err(e.into()),
            }
        };
        if let Err(e) = result {
            tracing::warn!("failed to persist custom colors: {e:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store() -> ColorStore<MemoryStore> {
        ColorStore::load(MemoryStore::new())
    }

    #[test]
    fn test_load_empty_storage() {
        let s = store();
        assert_eq!(s.len(), 22);
        assert!(s.customs().is_empty());
    }

    #[test]
    fn test_load_corrupt_record_falls_back_to_empty() {
        let mut kv = MemoryStore::new();
        kv.set(CUSTOM_COLORS_KEY, "not json").unwrap();
        let s = ColorStore::load(kv);
        assert!(s.customs().is_empty());
        assert_eq!(s.len(), 22);
    }

    #[test]
    fn test_add_appends_and_persists() {
        let mut s = store();
        s.add(ColorEntry::custom("Mint", "#33DD99")).unwrap();

        assert_eq!(s.len(), 23);
        assert_eq!(s.customs().len(), 1);
        assert!(s.kv.contains_key(CUSTOM_COLORS_KEY));
        // Built-ins come first; the custom entry is last.
        assert_eq!(s.all().last().unwrap().hex, "#33DD99");
    }

    #[test]
    fn test_add_normalizes_hex() {
        let mut s = store();
        s.add(ColorEntry::custom("Mint", " #3d9 ")).unwrap();
        assert_eq!(s.customs()[0].hex, "#33DD99");
    }

    #[test]
    fn test_add_shorthand_collides_with_expanded_form() {
        let mut s = store();
        s.add(ColorEntry::custom("Mint", "#33DD99")).unwrap();
        let err = s.add(ColorEntry::custom("Mint 2", "#3d9")).unwrap_err();
        assert_eq!(err, AddError::Duplicate("#33DD99".to_string()));
    }

    #[test]
    fn test_add_duplicate_of_builtin_rejected() {
        let mut s = store();
        let err = s.add(ColorEntry::custom("Also Red", "#ef4444")).unwrap_err();
        assert_eq!(err, AddError::Duplicate("#EF4444".to_string()));
        assert_eq!(s.len(), 22);
        assert!(!s.kv.contains_key(CUSTOM_COLORS_KEY));
    }

    #[test]
    fn test_add_duplicate_of_custom_rejected() {
        let mut s = store();
        s.add(ColorEntry::custom("Mint", "#33DD99")).unwrap();
        let err = s.add(ColorEntry::custom("Mint 2", "#33dd99")).unwrap_err();
        assert_eq!(err, AddError::Duplicate("#33DD99".to_string()));
        assert_eq!(s.customs().len(), 1);
    }

    #[test]
    fn test_remove_is_idempotent_and_skips_builtins() {
        let mut s = store();
        s.add(ColorEntry::custom("Mint", "#33DD99")).unwrap();

        s.remove("#33dd99");
        assert!(s.customs().is_empty());
        s.remove("#33DD99");
        assert!(s.customs().is_empty());

        s.remove("#EF4444");
        assert_eq!(s.len(), 22);
    }

    #[test]
    fn test_clear_removes_persisted_record() {
        let mut s = store();
        s.add(ColorEntry::custom("Mint", "#33DD99")).unwrap();
        assert!(s.kv.contains_key(CUSTOM_COLORS_KEY));

        s.clear();
        assert!(s.customs().is_empty());
        assert!(!s.kv.contains_key(CUSTOM_COLORS_KEY));
    }

    #[test]
    fn test_remove_last_custom_removes_record() {
        let mut s = store();
        s.add(ColorEntry::custom("Mint", "#33DD99")).unwrap();
        s.remove("#33DD99");
        assert!(!s.kv.contains_key(CUSTOM_COLORS_KEY));
    }

    #[test]
    fn test_save_load_roundtrip_preserves_order() {
        let mut s = store();
        s.add(ColorEntry::custom("Mint", "#33DD99")).unwrap();
        s.add(ColorEntry::custom("Coal", "#111111")).unwrap();
        let saved = s.customs().to_vec();

        let reloaded = ColorStore::load(s.kv);
        assert_eq!(reloaded.customs(), saved.as_slice());
    }
}
