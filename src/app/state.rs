use crate::select::SelectionController;
use crate::workflow::AddWorkflow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Palette,
    Filter,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

/// UI state plus the pure-logic components. The palette store itself lives
/// on [`crate::app::App`] since it owns the database handle.
pub struct AppState {
    pub should_quit: bool,

    pub focus: Focus,
    pub filter_query: String,

    /// Cursor into the filtered view; independent of the selection.
    pub cursor: usize,
    pub scroll_offset: usize,

    pub selection: SelectionController,
    pub workflow: AddWorkflow,

    /// Clear-all confirmation modal.
    pub confirm_clear_open: bool,

    pub toast: Option<Toast>,
    pub status: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: Focus::Palette,
            filter_query: String::new(),
            cursor: 0,
            scroll_offset: 0,
            selection: SelectionController::new(),
            workflow: AddWorkflow::new(),
            confirm_clear_open: false,
            toast: None,
            status: String::new(),
        }
    }

    /// Keep cursor and scroll inside a list of `len` visible entries.
    pub fn clamp_cursor(&mut self, len: usize) {
        if len == 0 {
            self.cursor = 0;
            self.scroll_offset = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn update_scroll(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + visible_height {
            self.scroll_offset = self.cursor - visible_height + 1;
        }
    }

    /// True while any modal (add dialogs, clear-all prompt) is on screen.
    pub fn modal_open(&self) -> bool {
        !self.workflow.is_idle() || self.confirm_clear_open
    }
}
