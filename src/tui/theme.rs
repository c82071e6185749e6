//! Chrome styling and hex-to-terminal color conversion.
//!
//! The palette entries carry their own colors; this theme only covers the
//! surrounding chrome (borders, labels, highlights).

use crate::palette::normalize_hex;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub fg: Color,
    pub fg_dim: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight_bg: Color,
    pub error: Color,
    pub success: Color,
}

pub const THEME: Theme = Theme {
    fg: Color::Rgb(255, 255, 255),
    fg_dim: Color::Rgb(136, 136, 136),
    accent: Color::Rgb(200, 200, 200),
    border: Color::Rgb(64, 64, 64),
    highlight_bg: Color::Rgb(48, 48, 48),
    error: Color::Rgb(235, 90, 90),
    success: Color::Rgb(110, 200, 130),
};

/// Decode a palette hex into a terminal RGB color. Entries are validated on
/// the way into the store, so failures only happen for in-progress drafts.
pub fn hex_color(hex: &str) -> Option<Color> {
    let normalized = normalize_hex(hex)?;
    let bytes = hex::decode(&normalized[1..]).ok()?;
    match bytes[..] {
        [r, g, b] => Some(Color::Rgb(r, g, b)),
        _ => None,
    }
}
