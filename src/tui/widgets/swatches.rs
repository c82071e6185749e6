//! Right pane: filter input plus the scrollable swatch list.

use crate::app::state::{AppState, Focus};
use crate::palette::{ColorStore, filter_entries};
use crate::storage::SqliteStore;
use crate::tui::theme::{THEME, hex_color};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub fn render(frame: &mut Frame, state: &mut AppState, store: &ColorStore<SqliteStore>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(THEME.border))
        .title(" Palette ")
        .title_style(Style::default().fg(THEME.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // filter input
            Constraint::Min(1),    // swatch list
        ])
        .split(inner);

    render_filter(frame, state, rows[0]);

    // Derived fresh on every draw; never cached across mutations.
    let filtered = filter_entries(store.all(), &state.filter_query);
    let len = filtered.len();
    state.clamp_cursor(len);

    if filtered.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No colors found.",
                Style::default().fg(THEME.fg_dim),
            )),
            rows[1],
        );
        return;
    }

    let visible = rows[1].height as usize;
    state.update_scroll(visible);

    let selected_hex = state.selection.selected().map(|s| s.hex.as_str());
    let items: Vec<ListItem> = filtered
        .iter()
        .enumerate()
        .skip(state.scroll_offset)
        .take(visible)
        .map(|(i, entry)| {
            let swatch = hex_color(&entry.hex)
                .map(|c| Span::styled("██ ", Style::default().fg(c)))
                .unwrap_or_else(|| Span::raw("   "));

            let mut name_style = Style::default().fg(THEME.fg);
            if Some(entry.hex.as_str()) == selected_hex {
                name_style = name_style.add_modifier(Modifier::BOLD);
            }

            let mut spans = vec![
                swatch,
                Span::styled(format!("{:<16}", entry.name), name_style),
                Span::styled(entry.hex.clone(), Style::default().fg(THEME.fg_dim)),
            ];
            if entry.is_custom {
                spans.push(Span::styled(
                    "  custom",
                    Style::default().fg(THEME.accent).add_modifier(Modifier::DIM),
                ));
            }
            if Some(entry.hex.as_str()) == selected_hex {
                spans.push(Span::styled("  ●", Style::default().fg(THEME.accent)));
            }

            let mut item = ListItem::new(Line::from(spans));
            if i == state.cursor {
                item = item.style(Style::default().bg(THEME.highlight_bg));
            }
            item
        })
        .collect();

    frame.render_widget(List::new(items), rows[1]);
}

fn render_filter(frame: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.focus == Focus::Filter;
    let label_style = if focused {
        Style::default().fg(THEME.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(THEME.fg_dim)
    };

    let query = if state.filter_query.is_empty() && !focused {
        Span::styled(
            "search by name or #hex (press /)",
            Style::default().fg(THEME.fg_dim).add_modifier(Modifier::DIM),
        )
    } else {
        Span::styled(state.filter_query.clone(), Style::default().fg(THEME.fg))
    };

    let cursor = if focused {
        Span::styled("▏", Style::default().fg(THEME.accent))
    } else {
        Span::raw("")
    };

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Filter: ", label_style),
            query,
            cursor,
        ])),
        area,
    );
}
