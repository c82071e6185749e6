//! Root layout widget
//!
//! ┌─────────────────┬───────────────────────────┐
//! │    Preview      │   Palette (filter + list) │
//! │  (selection,    │                           │
//! │   copy state)   │                           │
//! ├─────────────────┴───────────────────────────┤
//! │ status line / toast / key hints             │
//! └─────────────────────────────────────────────┘

use crate::app::state::{AppState, Focus, ToastKind};
use crate::palette::ColorStore;
use crate::storage::SqliteStore;
use crate::tui::theme::THEME;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{dialogs, preview, swatches};

pub fn render(frame: &mut Frame, state: &mut AppState, store: &ColorStore<SqliteStore>) {
    let root = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // preview | palette
            Constraint::Length(1), // status / toast
            Constraint::Length(1), // key hints
        ])
        .split(root);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(34), // preview card
            Constraint::Min(30),    // palette pane
        ])
        .split(rows[0]);

    preview::render(frame, state, cols[0]);
    swatches::render(frame, state, store, cols[1]);
    render_status(frame, state, rows[1]);
    render_hints(frame, state, rows[2]);

    dialogs::render(frame, state, root);
}

fn render_status(frame: &mut Frame, state: &AppState, area: Rect) {
    let line = if let Some(toast) = &state.toast {
        let style = match toast.kind {
            ToastKind::Success => Style::default().fg(THEME.success),
            ToastKind::Error => Style::default().fg(THEME.error),
        };
        Line::from(Span::styled(format!(" {}", toast.message), style))
    } else {
        Line::from(Span::styled(
            format!(" {}", state.status),
            Style::default().fg(THEME.fg_dim),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_hints(frame: &mut Frame, state: &AppState, area: Rect) {
    let hints = if state.modal_open() {
        " Enter confirm · Esc cancel"
    } else if state.focus == Focus::Filter {
        " type to filter · Ctrl-u clear · Esc/Enter back to list"
    } else {
        " j/k move · Enter select · c copy · / filter · a add · d delete · X clear all · q quit"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default()
                .fg(THEME.fg_dim)
                .add_modifier(Modifier::DIM),
        ))),
        area,
    );
}
