use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, Focus};
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind,
};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                match event::read() {
                    Ok(CtEvent::Key(k)) => {
                        if k.kind == KeyEventKind::Press
                            && tx.blocking_send(Event::Input(InputEvent::Key(k))).is_err()
                        {
                            break;
                        }
                    }
                    Ok(CtEvent::Mouse(m)) => {
                        if tx.blocking_send(Event::Input(InputEvent::Mouse(m))).is_err() {
                            break;
                        }
                    }
                    Ok(CtEvent::Resize(_, _)) => {
                        if tx.blocking_send(Event::Input(InputEvent::Resize)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(_) => {}
                }
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => {
            if state.modal_open() {
                return None;
            }
            match m.kind {
                MouseEventKind::ScrollUp => Some(Action::CursorUp),
                MouseEventKind::ScrollDown => Some(Action::CursorDown),
                _ => None,
            }
        }
        InputEvent::Key(k) => {
            if !state.workflow.is_idle() {
                return handle_add_dialog(k);
            }
            if state.confirm_clear_open {
                return handle_clear_confirm(k);
            }
            match state.focus {
                Focus::Filter => handle_filter_focus(k),
                Focus::Palette => handle_palette_focus(k),
            }
        }
    }
}

fn handle_add_dialog(k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc => Some(Action::CancelDraft),
        KeyCode::Enter => Some(Action::SubmitDraft),
        KeyCode::Backspace => Some(Action::DraftBackspace),
        KeyCode::Char(c) => Some(Action::DraftChar(c)),
        _ => None,
    }
}

fn handle_clear_confirm(k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::ConfirmClearAll),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CancelClearAll),
        _ => None,
    }
}

fn handle_filter_focus(k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Down => Some(Action::FocusPalette),
        KeyCode::Backspace => Some(Action::FilterBackspace),
        KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::FilterClear)
        }
        KeyCode::Char(c) => Some(Action::FilterChar(c)),
        _ => None,
    }
}

fn handle_palette_focus(k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        // Navigation - vim style
        KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
        KeyCode::Char('g') => Some(Action::CursorTop),
        KeyCode::Char('G') => Some(Action::CursorBottom),
        KeyCode::Char('d') if k.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::PageDown)
        }
        KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::PageUp),

        KeyCode::Enter => Some(Action::SelectUnderCursor),
        KeyCode::Char('c') | KeyCode::Char('y') => Some(Action::CopySelected),

        KeyCode::Char('/') => Some(Action::FocusFilter),

        KeyCode::Char('a') => Some(Action::OpenAdd),
        KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteUnderCursor),
        KeyCode::Char('X') => Some(Action::OpenClearAll),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_palette_focus_keys() {
        let state = AppState::new();
        assert!(matches!(
            map_input_to_action(&state, key(KeyCode::Char('a'))),
            Some(Action::OpenAdd)
        ));
        assert!(matches!(
            map_input_to_action(&state, key(KeyCode::Char('c'))),
            Some(Action::CopySelected)
        ));
        assert!(matches!(
            map_input_to_action(&state, key(KeyCode::Char('q'))),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn test_add_dialog_captures_typing() {
        let mut state = AppState::new();
        state.workflow.open();

        assert!(matches!(
            map_input_to_action(&state, key(KeyCode::Char('q'))),
            Some(Action::DraftChar('q'))
        ));
        assert!(matches!(
            map_input_to_action(&state, key(KeyCode::Esc)),
            Some(Action::CancelDraft)
        ));
    }

    #[test]
    fn test_clear_confirm_keys() {
        let mut state = AppState::new();
        state.confirm_clear_open = true;

        assert!(matches!(
            map_input_to_action(&state, key(KeyCode::Char('y'))),
            Some(Action::ConfirmClearAll)
        ));
        assert!(matches!(
            map_input_to_action(&state, key(KeyCode::Esc)),
            Some(Action::CancelClearAll)
        ));
    }
}
