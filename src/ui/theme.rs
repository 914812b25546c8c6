//! Theme and palette for the seek indicator and its demo screen
//! Supports both dark and light modes for the surrounding chrome

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

// ============================================================================
// Indicator Palette
// ============================================================================

/// Neutral gray used for the default bar and regular markers
pub const GRAY: Color = color!(0x888888);

/// Focus marker red
pub const RED: Color = color!(0xff0000);

/// Ten-stop gradient shown by the demo screen
pub const DEMO_GRADIENT: [Color; 10] = [
    color!(0x2b2d77),
    color!(0x3949ab),
    color!(0x1e88e5),
    color!(0x00acc1),
    color!(0x00897b),
    color!(0x43a047),
    color!(0xc0ca33),
    color!(0xfdd835),
    color!(0xfb8c00),
    color!(0xe53935),
];

/// Parses `#rrggbb` / `#rrggbbaa` (leading `#` optional)
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    // The hex parser slices by byte offset
    if !value.is_ascii() {
        return None;
    }

    value.parse::<Color>().ok()
}

/// Formats a color as `#rrggbb`, or `#rrggbbaa` when translucent
pub fn to_hex(color: Color) -> String {
    let [r, g, b, a] = color.into_rgba8();
    if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

// ============================================================================
// Chrome Colors - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x121212);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Demo screen background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Outlined button, turns red on hover like the focus marker
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 24.0.into(),
            width: 1.0,
            color: GRAY,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            border: Border {
                color: RED,
                ..base.border
            },
            ..base
        },
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#888888"), Some(GRAY));
        assert_eq!(parse_color("ff0000"), Some(RED));
        assert_eq!(parse_color(" #ff0000 "), Some(RED));
        assert_eq!(parse_color("not a color"), None);
    }

    #[test]
    fn test_parse_color_rejects_non_ascii() {
        assert_eq!(parse_color("aé"), None);
        assert_eq!(parse_color("#ffé000"), None);
        assert_eq!(parse_color("ﬀ0000"), None);
    }

    #[test]
    fn test_hex_round_trip() {
        assert_eq!(to_hex(GRAY), "#888888");
        let translucent = Color::from_rgba8(255, 0, 0, 0.5);
        assert_eq!(parse_color(&to_hex(translucent)).map(to_hex), Some(to_hex(translucent)));
    }
}
