//! Mapping surface colours to terminal colours.

use netpulse_core::{Rgba, constants::BACKGROUND_COLOR};
use ratatui::style::Color;

/// Terminal cells have no opacity, so translucent colours are flattened
/// against the background colour first.
pub fn terminal_color(color: Rgba) -> Color {
    let (r, g, b) = color.over(BACKGROUND_COLOR);
    Color::Rgb(r, g, b)
}

/// Opaque conversion, ignoring alpha.
pub fn solid_color(color: Rgba) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}
