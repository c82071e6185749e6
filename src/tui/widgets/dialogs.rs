//! Centered modals: hex entry, name confirmation, clear-all prompt.

use crate::app::state::AppState;
use crate::tui::theme::{THEME, hex_color};
use crate::workflow::AddState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn render(frame: &mut Frame, state: &AppState, root: Rect) {
    match state.workflow.state() {
        AddState::Idle => {}
        AddState::Drafting { input } => {
            render_hex_prompt(frame, input, root);
            return;
        }
        AddState::AwaitingConfirmation { hex, name } => {
            render_name_prompt(frame, hex, name, root);
            return;
        }
    }

    if state.confirm_clear_open {
        render_clear_confirm(frame, root);
    }
}

fn render_hex_prompt(frame: &mut Frame, input: &str, root: Rect) {
    let area = centered(root, 44, 5);
    frame.render_widget(Clear, area);

    let block = dialog_block(" Add custom color ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled("Hex: ", Style::default().fg(THEME.accent)),
            Span::styled(input.to_string(), Style::default().fg(THEME.fg)),
            Span::styled("▏", Style::default().fg(THEME.accent)),
        ]),
        Line::from(Span::styled(
            "#RRGGBB or #RGB",
            Style::default().fg(THEME.fg_dim),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_name_prompt(frame: &mut Frame, hex: &str, name: &str, root: Rect) {
    let area = centered(root, 44, 6);
    frame.render_widget(Clear, area);

    let block = dialog_block(" Name this color ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let swatch = hex_color(hex)
        .map(|c| Span::styled("██ ", Style::default().fg(c)))
        .unwrap_or_else(|| Span::raw("   "));

    let lines = vec![
        Line::from(vec![
            swatch,
            Span::styled(hex.to_string(), Style::default().fg(THEME.fg)),
        ]),
        Line::from(vec![
            Span::styled("Name: ", Style::default().fg(THEME.accent)),
            Span::styled(name.to_string(), Style::default().fg(THEME.fg)),
            Span::styled("▏", Style::default().fg(THEME.accent)),
        ]),
        Line::from(Span::styled(
            format!("empty saves as \"Custom {hex}\""),
            Style::default().fg(THEME.fg_dim),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_clear_confirm(frame: &mut Frame, root: Rect) {
    let area = centered(root, 44, 5);
    frame.render_widget(Clear, area);

    let block = dialog_block(" Clear custom colors ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            "Delete all custom colors?",
            Style::default().fg(THEME.fg),
        )),
        Line::from(Span::styled(
            "y confirm · n cancel",
            Style::default().fg(THEME.fg_dim),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn dialog_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(THEME.accent))
        .title(title.to_string())
        .title_style(Style::default().fg(THEME.fg).add_modifier(Modifier::BOLD))
}

fn centered(root: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(root);
    let horiz = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .split(vert[1]);
    horiz[1]
}
