//! Left card: block of the selected color, its name and hex, copy state.

use crate::app::state::AppState;
use crate::tui::theme::{THEME, hex_color};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(THEME.border))
        .title(" Preview ")
        .title_style(Style::default().fg(THEME.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // color block
            Constraint::Length(3), // name / hex / copy state
        ])
        .split(inner);

    match state.selection.selected() {
        Some(entry) => {
            let fill = hex_color(&entry.hex)
                .map(|c| Style::default().bg(c))
                .unwrap_or_default();
            frame.render_widget(Block::default().style(fill), rows[0]);

            let copy_line = if state.selection.copy_feedback() {
                Line::from(Span::styled(
                    "Copied!",
                    Style::default()
                        .fg(THEME.success)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    "c to copy hex",
                    Style::default().fg(THEME.fg_dim),
                ))
            };

            let lines = vec![
                Line::from(Span::styled(
                    entry.name.clone(),
                    Style::default().fg(THEME.fg).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    entry.hex.clone(),
                    Style::default().fg(THEME.accent),
                )),
                copy_line,
            ];
            frame.render_widget(Paragraph::new(lines), rows[1]);
        }
        None => {
            let hint = Paragraph::new(vec![
                Line::default(),
                Line::from(Span::styled(
                    "No color selected.",
                    Style::default().fg(THEME.fg_dim),
                )),
                Line::from(Span::styled(
                    "Pick one from the palette.",
                    Style::default().fg(THEME.fg_dim),
                )),
            ]);
            frame.render_widget(hint, rows[0]);
        }
    }
}
