//! Add-custom-color workflow.
//!
//! `Idle -> Drafting(hex input) -> AwaitingConfirmation(hex, name) -> Idle`
//! on save or cancel. Validation and duplicate checks happen before the
//! confirmation step so the dialog only ever carries a normalized,
//! not-yet-present hex.

use crate::palette::{AddError, ColorEntry, ColorStore, normalize_hex};
use crate::select::SelectionController;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AddState {
    #[default]
    Idle,
    /// Hex prompt is open, user is typing.
    Drafting { input: String },
    /// Hex accepted; naming dialog is open.
    AwaitingConfirmation { hex: String, name: String },
}

#[derive(Debug, Default)]
pub struct AddWorkflow {
    state: AddState,
}

impl AddWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AddState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == AddState::Idle
    }

    /// Open the hex prompt.
    pub fn open(&mut self) {
        if self.state == AddState::Idle {
            self.state = AddState::Drafting {
                input: String::new(),
            };
        }
    }

    /// Validate `raw` and move to the confirmation step.
    ///
    /// Invalid input or a duplicate hex reports the error and returns to
    /// `Idle` with no draft created.
    pub fn begin_add<S: KeyValueStore>(
        &mut self,
        raw: &str,
        store: &ColorStore<S>,
    ) -> Result<(), AddError> {
        let result = match normalize_hex(raw) {
            None => Err(AddError::InvalidHex(raw.trim().to_string())),
            Some(hex) if store.find(&hex).is_some() => Err(AddError::Duplicate(hex)),
            Some(hex) => {
                self.state = AddState::AwaitingConfirmation {
                    hex,
                    name: String::new(),
                };
                Ok(())
            }
        };
        if result.is_err() {
            self.state = AddState::Idle;
        }
        result
    }

    /// Edit the active draft field: the hex input while drafting, the name
    /// while awaiting confirmation. No-op in `Idle`.
    pub fn push_char(&mut self, c: char) {
        match &mut self.state {
            AddState::Drafting { input } => input.push(c),
            AddState::AwaitingConfirmation { name, .. } => name.push(c),
            AddState::Idle => {}
        }
    }

    pub fn backspace(&mut self) {
        match &mut self.state {
            AddState::Drafting { input } => {
                input.pop();
            }
            AddState::AwaitingConfirmation { name, .. } => {
                name.pop();
            }
            AddState::Idle => {}
        }
    }

    #[allow(dead_code)]
    pub fn set_draft_name(&mut self, value: &str) {
        if let AddState::AwaitingConfirmation { name, .. } = &mut self.state {
            *name = value.to_string();
        }
    }

    /// Save the drafted color. Only valid in `AwaitingConfirmation`; an
    /// empty name falls back to `Custom #HEX`. Returns the stored entry so
    /// the caller can select it. A duplicate race returns the error and the
    /// workflow still lands in `Idle` without touching the selection.
    pub fn confirm<S: KeyValueStore>(
        &mut self,
        store: &mut ColorStore<S>,
    ) -> Option<Result<ColorEntry, AddError>> {
        let AddState::AwaitingConfirmation { hex, name } = std::mem::take(&mut self.state) else {
            return None;
        };

        let name = name.trim();
        let name = if name.is_empty() {
            format!("Custom {hex}")
        } else {
            name.to_string()
        };

        let entry = ColorEntry::custom(name, hex);
        Some(match store.add(entry.clone()) {
            Ok(()) => Ok(entry),
            Err(e) => Err(e),
        })
    }

    /// Discard any draft and return to `Idle`.
    pub fn cancel(&mut self) {
        self.state = AddState::Idle;
    }
}

/// Remove a custom color and drop the selection if it pointed at it.
pub fn delete_custom<S: KeyValueStore>(
    store: &mut ColorStore<S>,
    selection: &mut SelectionController,
    hex: &str,
) {
    store.remove(hex);
    selection.deselect_if_matches(hex);
}

/// Empty the custom list. Confirmation comes from an external collaborator
/// (the TUI prompt, `--yes` on the CLI); an unconfirmed call changes
/// nothing. A confirmed one also clears the selection unconditionally.
pub fn clear_all<S: KeyValueStore>(
    store: &mut ColorStore<S>,
    selection: &mut SelectionController,
    confirmed: bool,
) {
    if !confirmed {
        return;
    }
    store.clear();
    selection.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::store::CUSTOM_COLORS_KEY;
    use crate::select::SelectionController;
    use crate::storage::MemoryStore;

    fn store() -> ColorStore<MemoryStore> {
        ColorStore::load(MemoryStore::new())
    }

    #[test]
    fn test_open_and_cancel() {
        let mut wf = AddWorkflow::new();
        assert!(wf.is_idle());

        wf.open();
        wf.push_char('#');
        wf.push_char('3');
        assert_eq!(
            wf.state(),
            &AddState::Drafting {
                input: "#3".to_string()
            }
        );

        wf.cancel();
        assert!(wf.is_idle());
    }

    #[test]
    fn test_begin_add_invalid_hex_stays_idle() {
        let mut wf = AddWorkflow::new();
        let s = store();

        let err = wf.begin_add("not-a-hex", &s).unwrap_err();
        assert!(matches!(err, AddError::InvalidHex(_)));
        assert!(wf.is_idle());
    }

    #[test]
    fn test_begin_add_duplicate_of_builtin_stays_idle() {
        let mut wf = AddWorkflow::new();
        let s = store();

        // #EF4444 is built-in Red.
        let err = wf.begin_add("#EF4444", &s).unwrap_err();
        assert_eq!(err, AddError::Duplicate("#EF4444".to_string()));
        assert!(wf.is_idle());
        assert_eq!(s.len(), 22);
    }

    #[test]
    fn test_end_to_end_add_and_select() {
        let mut wf = AddWorkflow::new();
        let mut s = store();
        let mut sel = SelectionController::new();

        wf.begin_add("#3d9", &s).unwrap();
        assert_eq!(
            wf.state(),
            &AddState::AwaitingConfirmation {
                hex: "#33DD99".to_string(),
                name: String::new()
            }
        );

        wf.set_draft_name("Mint");
        let entry = wf.confirm(&mut s).unwrap().unwrap();
        sel.select(entry.clone());

        assert_eq!(entry.name, "Mint");
        assert_eq!(entry.hex, "#33DD99");
        assert!(entry.is_custom);
        assert!(wf.is_idle());
        assert_eq!(s.customs().len(), 1);
        assert_eq!(sel.selected(), Some(&entry));
    }

    #[test]
    fn test_confirm_defaults_name() {
        let mut wf = AddWorkflow::new();
        let mut s = store();

        wf.begin_add("#33DD99", &s).unwrap();
        wf.set_draft_name("   ");
        let entry = wf.confirm(&mut s).unwrap().unwrap();
        assert_eq!(entry.name, "Custom #33DD99");
    }

    #[test]
    fn test_confirm_duplicate_race_returns_to_idle() {
        let mut wf = AddWorkflow::new();
        let mut s = store();

        wf.begin_add("#33DD99", &s).unwrap();
        // Another writer sneaks the same hex in before confirm.
        s.add(ColorEntry::custom("Sniped", "#33DD99")).unwrap();

        let err = wf.confirm(&mut s).unwrap().unwrap_err();
        assert_eq!(err, AddError::Duplicate("#33DD99".to_string()));
        assert!(wf.is_idle());
        assert_eq!(s.customs().len(), 1);
    }

    #[test]
    fn test_confirm_outside_dialog_is_noop() {
        let mut wf = AddWorkflow::new();
        let mut s = store();
        assert!(wf.confirm(&mut s).is_none());
    }

    #[test]
    fn test_delete_clears_selection_only_on_match() {
        let mut s = store();
        let mut sel = SelectionController::new();
        s.add(ColorEntry::custom("Mint", "#33DD99")).unwrap();
        s.add(ColorEntry::custom("Coal", "#111111")).unwrap();
        sel.select(s.find("#33DD99").unwrap().clone());

        delete_custom(&mut s, &mut sel, "#111111");
        assert_eq!(s.customs().len(), 1);
        assert!(sel.selected().is_some(), "unrelated delete keeps selection");

        delete_custom(&mut s, &mut sel, "#33DD99");
        assert!(s.customs().is_empty());
        assert!(sel.selected().is_none());
    }

    #[test]
    fn test_delete_clears_selection_for_legacy_shorthand_record() {
        // Entries saved before shorthand expansion keep their 4-char hex.
        let mut kv = MemoryStore::new();
        kv.set(
            CUSTOM_COLORS_KEY,
            r##"[{"name":"Mint","hex":"#3D9","is_custom":true}]"##,
        )
        .unwrap();
        let mut s = ColorStore::load(kv);
        let mut sel = SelectionController::new();
        sel.select(s.find("#3D9").unwrap().clone());

        delete_custom(&mut s, &mut sel, "#3D9");
        assert!(s.customs().is_empty());
        assert!(
            sel.selected().is_none(),
            "deleting the selected custom color must clear selection"
        );
    }

    #[test]
    fn test_clear_all_requires_confirmation() {
        let mut s = store();
        let mut sel = SelectionController::new();
        s.add(ColorEntry::custom("Mint", "#33DD99")).unwrap();
        sel.select(s.find("#EF4444").unwrap().clone());

        clear_all(&mut s, &mut sel, false);
        assert_eq!(s.customs().len(), 1);
        assert!(sel.selected().is_some());

        clear_all(&mut s, &mut sel, true);
        assert!(s.customs().is_empty());
        assert!(sel.selected().is_none(), "confirmed clear drops selection");
        assert!(!s.kv().contains_key(CUSTOM_COLORS_KEY));
    }

    #[test]
    fn test_persisted_record_after_confirm() {
        let mut wf = AddWorkflow::new();
        let mut s = store();

        wf.begin_add("#3d9", &s).unwrap();
        wf.set_draft_name("Mint");
        wf.confirm(&mut s).unwrap().unwrap();

        let raw = s.kv().get(CUSTOM_COLORS_KEY).unwrap().unwrap();
        let entries: Vec<ColorEntry> = serde_json::from_str(&raw).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].hex, "#33DD99");
        assert_eq!(entries[0].name, "Mint");
        assert!(entries[0].is_custom);
    }
}
