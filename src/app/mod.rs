pub mod actions;
pub mod events;
pub mod state;

use crate::config::Config;
use crate::input;
use crate::palette::{ColorEntry, ColorStore, filter_entries};
use crate::select::COPY_FEEDBACK_MS;
use crate::storage::SqliteStore;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{CopyEvent, Event};
use state::{AppState, Focus, Toast};
use tokio::sync::mpsc;

pub struct App {
    cfg: Config,
    config_path: std::path::PathBuf,
    state: AppState,
    store: ColorStore<SqliteStore>,
}

impl App {
    pub fn new(cfg: Config, config_path: std::path::PathBuf) -> anyhow::Result<Self> {
        let kv = SqliteStore::open(&cfg.palette_db_path())?;
        let store = ColorStore::load(kv);

        let mut state = AppState::new();
        if let Some(filter) = &cfg.ui.last_filter {
            state.filter_query = filter.clone();
        }

        Ok(Self {
            cfg,
            config_path,
            state,
            store,
        })
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone());

        // First draw; afterwards we re-render once per handled event.
        tui::draw(terminal, &mut self.state, &self.store)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx);
                    }
                }
                Event::Copy(copy_ev) => self.handle_copy(copy_ev, &tx),
                Event::FeedbackExpired { generation } => {
                    self.state.selection.expire_feedback(generation);
                }
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &mut self.state, &self.store)?;
        }

        self.save_state_on_quit();

        Ok(())
    }

    fn save_state_on_quit(&mut self) {
        let q = self.state.filter_query.trim();
        self.cfg.ui.last_filter = if q.is_empty() {
            None
        } else {
            Some(q.to_string())
        };
        let _ = crate::config::save(&self.cfg, Some(&self.config_path));
    }

    fn filtered_len(&self) -> usize {
        filter_entries(self.store.all(), &self.state.filter_query).len()
    }

    fn entry_under_cursor(&self) -> Option<ColorEntry> {
        filter_entries(self.store.all(), &self.state.filter_query)
            .get(self.state.cursor)
            .map(|e| (*e).clone())
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::CopySelected => self.spawn_copy(tx),
            Action::SubmitDraft => self.submit_draft(),
            Action::DeleteUnderCursor => self.delete_under_cursor(),
            Action::ConfirmClearAll => self.clear_all(true),
            _ => self.reduce(action),
        }
    }

    fn reduce(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::CursorUp => {
                self.state.cursor = self.state.cursor.saturating_sub(1);
            }
            Action::CursorDown => {
                let len = self.filtered_len();
                if len > 0 {
                    self.state.cursor = (self.state.cursor + 1).min(len - 1);
                }
            }
            Action::CursorTop => {
                self.state.cursor = 0;
                self.state.scroll_offset = 0;
            }
            Action::CursorBottom => {
                self.state.cursor = self.filtered_len().saturating_sub(1);
            }
            Action::PageUp => {
                self.state.cursor = self.state.cursor.saturating_sub(10);
            }
            Action::PageDown => {
                let len = self.filtered_len();
                if len > 0 {
                    self.state.cursor = (self.state.cursor + 10).min(len - 1);
                }
            }
            Action::SelectUnderCursor => {
                if let Some(entry) = self.entry_under_cursor() {
                    self.state.status = format!("Selected {} {}", entry.name, entry.hex);
                    self.state.selection.select(entry);
                }
            }
            Action::FocusFilter => self.state.focus = Focus::Filter,
            Action::FocusPalette => self.state.focus = Focus::Palette,
            Action::FilterChar(c) => {
                self.state.filter_query.push(c);
                let len = self.filtered_len();
                self.state.clamp_cursor(len);
            }
            Action::FilterBackspace => {
                self.state.filter_query.pop();
                let len = self.filtered_len();
                self.state.clamp_cursor(len);
            }
            Action::FilterClear => {
                self.state.filter_query.clear();
                self.state.cursor = 0;
                self.state.scroll_offset = 0;
            }
            Action::OpenAdd => self.state.workflow.open(),
            Action::DraftChar(c) => self.state.workflow.push_char(c),
            Action::DraftBackspace => self.state.workflow.backspace(),
            Action::CancelDraft => self.state.workflow.cancel(),
            Action::OpenClearAll => {
                if self.store.customs().is_empty() {
                    self.state.status = "No custom colors to clear".into();
                } else {
                    self.state.confirm_clear_open = true;
                }
            }
            Action::CancelClearAll => self.clear_all(false),
            Action::Resize => {}
            // Side-effectful actions are handled in handle_action.
            Action::CopySelected
            | Action::SubmitDraft
            | Action::DeleteUnderCursor
            | Action::ConfirmClearAll => {}
        }
    }

    /// Advance the add workflow: hex prompt submits into the naming dialog,
    /// the naming dialog saves the color.
    fn submit_draft(&mut self) {
        use crate::workflow::AddState;

        match self.state.workflow.state().clone() {
            AddState::Idle => {}
            AddState::Drafting { input } => {
                if let Err(e) = self.state.workflow.begin_add(&input, &self.store) {
                    self.state.toast = Some(Toast::error(e.to_string()));
                }
            }
            AddState::AwaitingConfirmation { .. } => {
                match self.state.workflow.confirm(&mut self.store) {
                    Some(Ok(entry)) => {
                        self.state.toast = Some(Toast::success(format!("Added {}", entry.hex)));
                        self.state.selection.select(entry);
                    }
                    Some(Err(e)) => {
                        self.state.toast = Some(Toast::error(e.to_string()));
                    }
                    None => {}
                }
            }
        }
    }

    fn delete_under_cursor(&mut self) {
        let Some(entry) = self.entry_under_cursor() else {
            return;
        };
        if !entry.is_custom {
            self.state.status = format!("{} is built-in and can't be deleted", entry.name);
            return;
        }

        crate::workflow::delete_custom(&mut self.store, &mut self.state.selection, &entry.hex);
        let len = self.filtered_len();
        self.state.clamp_cursor(len);
        self.state.toast = Some(Toast::success(format!("Deleted {}", entry.hex)));
    }

    /// Clear-all only acts on a confirmed request; the confirmation comes
    /// from the modal (or `--yes` on the CLI).
    fn clear_all(&mut self, confirmed: bool) {
        self.state.confirm_clear_open = false;
        crate::workflow::clear_all(&mut self.store, &mut self.state.selection, confirmed);
        if confirmed {
            let len = self.filtered_len();
            self.state.clamp_cursor(len);
            self.state.toast = Some(Toast::success("Custom colors cleared"));
        }
    }

    /// Write the selected hex to the system clipboard off the event loop.
    /// No selection is a quiet no-op.
    fn spawn_copy(&mut self, tx: &mpsc::Sender<Event>) {
        // Normalized form goes to the clipboard even for legacy shorthand
        // entries that predate expansion.
        let Some(hex) = self
            .state
            .selection
            .selected()
            .map(|s| crate::palette::normalize_hex(&s.hex).unwrap_or_else(|| s.hex.clone()))
        else {
            self.state.status = "Nothing selected to copy".into();
            return;
        };

        let tx = tx.clone();
        tokio::task::spawn_blocking(move || {
            let result = arboard::Clipboard::new().and_then(|mut cb| cb.set_text(hex.clone()));
            let ev = match result {
                Ok(()) => Event::Copy(CopyEvent::Done { hex }),
                Err(e) => Event::Copy(CopyEvent::Failed(format!("{e}"))),
            };
            let _ = tx.blocking_send(ev);
        });
    }

    fn handle_copy(&mut self, ev: CopyEvent, tx: &mpsc::Sender<Event>) {
        match ev {
            CopyEvent::Done { hex } => {
                self.state.status = format!("Copied {hex}");
                let generation = self.state.selection.begin_feedback();
                let tx = tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(std::time::Duration::from_millis(COPY_FEEDBACK_MS)).await;
                    let _ = tx.send(Event::FeedbackExpired { generation }).await;
                });
            }
            CopyEvent::Failed(e) => {
                self.state.toast = Some(Toast::error(format!("Clipboard: {e}")));
            }
        }
    }
}
