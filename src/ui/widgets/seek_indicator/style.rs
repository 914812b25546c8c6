//! Construction-time configuration for the seek indicator
//!
//! Mirrors the style attributes a host would normally read from its resource
//! system. Values are fixed once the indicator is built.

use iced::{Color, Padding};

use crate::ui::theme;

/// Visual configuration of a [`SeekIndicator`](super::SeekIndicator)
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Bar fill colors (one = solid, several = gradient)
    pub bar_colors: Vec<Color>,
    /// Bar thickness
    pub bar_height: f32,
    /// Stroke width of regular marker ticks
    pub marker_width: f32,
    /// Text size of regular marker labels
    pub marker_text_size: f32,
    pub marker_color: Color,
    /// Stroke width of the focus marker; defaults to three times `marker_width`
    pub focus_marker_width: f32,
    /// Text size of the focus label above the bar
    pub focus_marker_text_size: f32,
    pub focus_marker_color: Color,
    /// External padding assigned by the host
    pub padding: Padding,
    /// Minimum width reported when the host does not force one
    pub min_width: f32,
    /// Draw a vertical line and numeric label at the focus position
    pub show_focus_line: bool,
    /// Unit appended to the focus label
    pub focus_unit: String,
    pub initial_value: i32,
    pub min_value: i32,
    pub max_value: i32,
}

impl Style {
    pub const DEFAULT_MARKER_WIDTH: f32 = 6.0;

    /// Sets the marker width and keeps the focus marker at its 3x ratio
    pub fn marker_width(mut self, width: f32) -> Self {
        self.marker_width = width;
        self.focus_marker_width = width * 3.0;
        self
    }

    pub fn bar_height(mut self, height: f32) -> Self {
        self.bar_height = height;
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn range(mut self, min: i32, max: i32, initial: i32) -> Self {
        self.min_value = min;
        self.max_value = max;
        self.initial_value = initial;
        self
    }

    pub fn show_focus_line(mut self, show: bool) -> Self {
        self.show_focus_line = show;
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            bar_colors: vec![theme::GRAY],
            bar_height: 30.0,
            marker_width: Self::DEFAULT_MARKER_WIDTH,
            marker_text_size: 24.0,
            marker_color: theme::GRAY,
            focus_marker_width: Self::DEFAULT_MARKER_WIDTH * 3.0,
            focus_marker_text_size: 30.0,
            focus_marker_color: theme::RED,
            padding: Padding::ZERO,
            min_width: 0.0,
            show_focus_line: false,
            focus_unit: "L".to_string(),
            initial_value: 180,
            min_value: 0,
            max_value: 180,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = Style::default();
        assert_eq!(style.bar_colors, vec![theme::GRAY]);
        assert_eq!(style.bar_height, 30.0);
        assert_eq!(style.marker_text_size, 24.0);
        assert_eq!(style.focus_marker_text_size, 30.0);
        assert_eq!(style.focus_marker_width, 18.0);
        assert_eq!(style.focus_marker_color, theme::RED);
        assert_eq!(
            (style.min_value, style.max_value, style.initial_value),
            (0, 180, 180)
        );
        assert!(!style.show_focus_line);
    }

    #[test]
    fn test_marker_width_keeps_focus_ratio() {
        let style = Style::default().marker_width(4.0);
        assert_eq!(style.focus_marker_width, 12.0);
    }
}
