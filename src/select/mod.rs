//! Current selection and copy feedback.

use crate::palette::{ColorEntry, normalize_hex};

/// How long the "Copied!" indicator stays up after a successful clipboard
/// write.
pub const COPY_FEEDBACK_MS: u64 = 1200;

/// Tracks the selected color and the transient clipboard-copy indicator.
///
/// Selection is independent of the filter: selecting an entry that is not
/// in the current filtered view is allowed, and nothing here is persisted.
/// The feedback flag is timer-cleared; a generation counter lets a fresh
/// copy restart the window while stale timers fall through harmlessly.
#[derive(Debug, Default)]
pub struct SelectionController {
    selected: Option<ColorEntry>,
    copy_feedback: bool,
    feedback_gen: u64,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The feedback flag only ever describes the current selection, so
    /// selecting a new color ends any running "Copied!" window early.
    pub fn select(&mut self, entry: ColorEntry) {
        self.selected = Some(entry);
        self.copy_feedback = false;
    }

    pub fn selected(&self) -> Option<&ColorEntry> {
        self.selected.as_ref()
    }

    /// Clears the selection only when the deleted hex is the selected one.
    /// Entries persisted before shorthand expansion may still carry a 4-char
    /// hex, so both sides are normalized before comparing.
    pub fn deselect_if_matches(&mut self, hex: &str) {
        let target = normalize_hex(hex).unwrap_or_else(|| hex.to_string());
        let hit = self
            .selected
            .as_ref()
            .is_some_and(|s| normalize_hex(&s.hex).unwrap_or_else(|| s.hex.clone()) == target);
        if hit {
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.copy_feedback = false;
    }

    pub fn copy_feedback(&self) -> bool {
        self.copy_feedback
    }

    /// Called after a clipboard write succeeds. Returns the generation the
    /// expiry timer must present back to [`expire_feedback`].
    pub fn begin_feedback(&mut self) -> u64 {
        self.feedback_gen += 1;
        self.copy_feedback = true;
        self.feedback_gen
    }

    /// Timer callback. A stale generation means a newer copy restarted the
    /// window, so the flag stays up.
    pub fn expire_feedback(&mut self, generation: u64) {
        if generation == self.feedback_gen {
            self.copy_feedback = false;
        }
    }
}
