//! Palette for the demo widgets.
//!
//! Color tokens carried by log entries and stages are semantic; this is the
//! only place they become concrete RGB values.

use ratatui::style::Color;

use crate::player::ColorToken;

pub const BG_BASE: Color = Color::Rgb(9, 9, 11);
pub const BG_WINDOW_BAR: Color = Color::Rgb(24, 24, 27);

pub const TEXT_PRIMARY: Color = Color::Rgb(244, 244, 245);
pub const TEXT_SECONDARY: Color = Color::Rgb(161, 161, 170);
pub const TEXT_MUTED: Color = Color::Rgb(113, 113, 122);
pub const TEXT_FAINT: Color = Color::Rgb(63, 63, 70);

pub const BORDER_DEFAULT: Color = Color::Rgb(39, 39, 42);
pub const CURSOR: Color = Color::Rgb(161, 161, 170);

pub const KEY_HINT_BG: Color = Color::Rgb(39, 39, 42);

/// Window control dots (close, minimize, zoom)
pub const DOT_CLOSE: Color = Color::Rgb(0xFF, 0x5F, 0x56);
pub const DOT_MINIMIZE: Color = Color::Rgb(0xFF, 0xBD, 0x2E);
pub const DOT_ZOOM: Color = Color::Rgb(0x27, 0xC9, 0x3F);

/// Resolve a semantic token to its 500-weight shade
pub fn token_color(token: ColorToken) -> Color {
    match token {
        ColorToken::Blue => Color::Rgb(0x3b, 0x82, 0xf6),
        ColorToken::Orange => Color::Rgb(0xf9, 0x73, 0x16),
        ColorToken::Purple => Color::Rgb(0xa8, 0x55, 0xf7),
        ColorToken::Zinc => Color::Rgb(0x71, 0x71, 0x7a),
        ColorToken::Emerald => Color::Rgb(0x10, 0xb9, 0x81),
        ColorToken::Green => Color::Rgb(0x22, 0xc5, 0x5e),
        ColorToken::Red => Color::Rgb(0xef, 0x44, 0x44),
        ColorToken::Amber => Color::Rgb(0xf5, 0x9e, 0x0b),
    }
}

/// Parse a hex color string to a Color.
///
/// Supports formats: "#RGB", "#RRGGBB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        3 => Some(Color::Rgb(
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        )),
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

/// Blend `color` over the base background; stands in for opacity.
///
/// Non-RGB colors are returned unchanged.
pub fn fade(color: Color, opacity: f64) -> Color {
    let (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) = (color, BG_BASE) else {
        return color;
    };
    let t = opacity.clamp(0.0, 1.0);
    let mix = |from: u8, to: u8| (from as f64 + (to as f64 - from as f64) * t).round() as u8;
    Color::Rgb(mix(br, r), mix(bg, g), mix(bb, b))
}
