//! Text measurement used for label offsets and placement

use std::sync::Arc;

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use iced::Size;
use parking_lot::Mutex;

/// Measures the bounds of a single line of text
pub trait TextMetrics: Send + Sync {
    fn bounds(&self, text: &str, size: f32) -> Size;
}

/// Font-independent estimate based on average glyph proportions.
///
/// Deterministic, so layout does not depend on the fonts installed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedMetrics {
    /// Average advance as a fraction of the text size
    pub advance: f32,
    /// Ink height as a fraction of the text size
    pub height: f32,
}

impl Default for EstimatedMetrics {
    fn default() -> Self {
        Self {
            advance: 0.55,
            height: 0.72,
        }
    }
}

impl TextMetrics for EstimatedMetrics {
    fn bounds(&self, text: &str, size: f32) -> Size {
        let chars = text.chars().count();
        if chars == 0 {
            return Size::ZERO;
        }

        Size::new(
            (chars as f32 * size * self.advance).round(),
            (size * self.height).round(),
        )
    }
}

/// Shapes text with cosmic-text to measure it against real fonts
#[derive(Clone)]
pub struct FontMetrics {
    font_system: Arc<Mutex<FontSystem>>,
}

impl FontMetrics {
    pub fn new(font_system: Arc<Mutex<FontSystem>>) -> Self {
        Self { font_system }
    }

    /// Loads the system fonts; slow, do it once
    pub fn load() -> Self {
        Self::new(Arc::new(Mutex::new(FontSystem::new())))
    }
}

impl std::fmt::Debug for FontMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontMetrics").finish_non_exhaustive()
    }
}

impl TextMetrics for FontMetrics {
    fn bounds(&self, text: &str, size: f32) -> Size {
        if text.is_empty() || size <= 0.0 {
            return Size::ZERO;
        }

        let mut font_system = self.font_system.lock();
        let mut buffer = Buffer::new(&mut font_system, Metrics::new(size, size));
        buffer.set_size(&mut font_system, None, None);

        let attrs = Attrs::new().family(Family::SansSerif);
        buffer.set_text(&mut font_system, text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(&mut font_system, false);

        buffer
            .layout_runs()
            .next()
            .map(|run| {
                // Baseline minus line top approximates the ascent, i.e. the ink
                // height of digits and capitals
                Size::new(run.line_w.ceil(), (run.line_y - run.line_top).ceil())
            })
            .unwrap_or(Size::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimated_bounds() {
        let metrics = EstimatedMetrics::default();
        assert_eq!(metrics.bounds("", 24.0), Size::ZERO);

        let one = metrics.bounds("A", 24.0);
        let three = metrics.bounds("ABC", 24.0);
        assert_eq!(one.width, 13.0);
        assert_eq!(three.width, 40.0);
        assert_eq!(one.height, 17.0);
    }

    #[test]
    fn test_estimated_counts_chars_not_bytes() {
        let metrics = EstimatedMetrics::default();
        assert_eq!(metrics.bounds("éé", 20.0).width, metrics.bounds("ab", 20.0).width);
    }

    #[test]
    fn test_font_metrics_measures_text() {
        let metrics = FontMetrics::load();
        assert_eq!(metrics.bounds("", 24.0), Size::ZERO);

        let short = metrics.bounds("1", 24.0);
        let long = metrics.bounds("1111", 24.0);
        // Without any installed font nothing is shaped; only compare when
        // something was measured
        if short.width > 0.0 {
            assert!(long.width > short.width);
            assert!(short.height > 0.0);
        }
    }
}
