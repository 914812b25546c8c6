//! Layout math for the seek indicator
//!
//! Everything here is a pure function of the indicator state and the bounds
//! handed out by the host, so measurement, painting and gesture mapping all
//! agree on the same bar rectangle. Coordinates are local to the widget and
//! snapped to whole units the way an integer pixel grid would.

use iced::{Length, Padding, Point, Rectangle, Size};

/// Internal padding around the bar and between label tiers
pub const PADDING: f32 = 12.0;
/// Requested corner radius of the bar
pub const CORNER_RADIUS: f32 = 30.0;
/// How far the pointer apex pokes into the bar
pub const POINTER_APEX_INSET: f32 = 5.0;
/// Half of the pointer base width
pub const POINTER_HALF_BASE: f32 = 15.0;
/// Distance from the bar bottom to the pointer base
pub const POINTER_DEPTH: f32 = 20.0;

/// Tick scale applied to the outermost markers
const EDGE_TICK_SCALE: (f32, f32) = (0.9, 1.1);
/// Scale of the optional focus line
pub const FOCUS_LINE_SCALE: (f32, f32) = (0.85, 1.15);

/// Size constraint handed to the measurement step for one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// The host dictates the size
    Exactly(f32),
    /// The widget may pick any size up to the bound
    AtMost(f32),
    /// No constraint at all
    Unspecified,
}

impl MeasureSpec {
    /// Translates an iced [`Length`] and the available space into a measure spec
    pub fn from_length(length: Length, max: f32) -> Self {
        match length {
            Length::Fixed(size) => Self::Exactly(size),
            Length::Fill | Length::FillPortion(_) if max.is_finite() => Self::Exactly(max),
            Length::Shrink if max.is_finite() => Self::AtMost(max),
            _ => Self::Unspecified,
        }
    }
}

/// Resolves the width: an `AtMost` bound widens the intrinsic size up to it
pub fn resolve_width(spec: MeasureSpec, minimum: f32, padding: f32) -> f32 {
    match spec {
        MeasureSpec::Exactly(size) => size,
        MeasureSpec::AtMost(size) => (minimum + padding).max(size),
        MeasureSpec::Unspecified => minimum + padding,
    }
}

/// Resolves the height: an `AtMost` bound caps the intrinsic size
pub fn resolve_height(spec: MeasureSpec, minimum: f32, padding: f32) -> f32 {
    match spec {
        MeasureSpec::Exactly(size) => size,
        MeasureSpec::AtMost(size) => (minimum + padding).min(size),
        MeasureSpec::Unspecified => minimum + padding,
    }
}

/// Minimum height: focus label tier, bar and marker tier, with padding around
/// and between them.
pub fn minimum_height(bar_height: f32, focus_text_size: f32, marker_text_size: f32) -> f32 {
    (bar_height + focus_text_size + marker_text_size + PADDING * 5.0).trunc()
}

/// Computes the bar rectangle for the given widget size.
///
/// Only the left padding is honoured; the right edge is inset by the end
/// label offset and the internal padding alone.
pub fn bar_rect(
    size: Size,
    padding: Padding,
    start_offset: f32,
    end_offset: f32,
    bar_height: f32,
) -> Rectangle {
    let width = size.width.trunc();
    let half_height = (size.height.trunc() / 2.0).floor();

    let left = (padding.left + start_offset + PADDING).trunc();
    let top = (half_height - bar_height / 2.0).trunc();
    let right = (width - end_offset - PADDING).trunc();
    let bottom = (half_height + bar_height / 2.0).trunc();

    Rectangle {
        x: left,
        y: top,
        width: right - left,
        height: bottom - top,
    }
}

/// Corner radius, scaled down to fit the rectangle
pub fn corner_radius(rect: Rectangle) -> f32 {
    CORNER_RADIUS.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0)
}

/// Gradient stop offsets for `count` colors: `1/n, 2/n, ..., n/n`
pub fn gradient_stops(count: usize) -> Vec<f32> {
    let step = 1.0 / count as f32;
    (0..count).map(|i| step * (i + 1) as f32).collect()
}

/// Horizontal spacing between markers, `None` when fewer than two labels
/// or the bar has no width. Uses integer division like the pixel grid does.
pub fn marker_rate(bar: Rectangle, count: usize) -> Option<f32> {
    if count < 2 || bar.width <= 0.0 {
        return None;
    }

    let width = bar.width as i64;
    Some((width / (count as i64 - 1)) as f32)
}

/// Vertical scale of the tick at `index`: edge ticks are taller
pub fn tick_scale(index: usize, count: usize) -> (f32, f32) {
    if index == 0 || index + 1 == count {
        EDGE_TICK_SCALE
    } else {
        (1.0, 1.0)
    }
}

/// X coordinate of the focus marker, `None` when `delta` is zero
pub fn focus_x(bar: Rectangle, current: i32, delta: i32) -> Option<f32> {
    if delta == 0 {
        return None;
    }

    let rate = bar.width / delta as f32;
    Some(bar.x + (current as f32 - 0.5) * rate)
}

/// Corners of the pointer triangle: apex first, then the base corners
pub fn pointer(x: f32, bottom: f32) -> [Point; 3] {
    [
        Point::new(x, bottom - POINTER_APEX_INSET),
        Point::new(x - POINTER_HALF_BASE, bottom + POINTER_DEPTH),
        Point::new(x + POINTER_HALF_BASE, bottom + POINTER_DEPTH),
    ]
}

/// Maps a horizontal pointer position onto the nearest value.
///
/// The pixel offset is truncated to whole units first. The result is not
/// clamped; `None` when the bar has no width.
pub fn value_at(bar: Rectangle, x: f32, delta: i32) -> Option<i32> {
    if bar.width <= 0.0 {
        return None;
    }

    let local_x = (x - bar.x).trunc();
    Some((local_x * delta as f32 / bar.width).round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(left: f32, right: f32) -> Rectangle {
        Rectangle {
            x: left,
            y: 35.0,
            width: right - left,
            height: 30.0,
        }
    }

    #[test]
    fn test_measure_spec_from_length() {
        assert_eq!(
            MeasureSpec::from_length(Length::Fixed(50.0), 300.0),
            MeasureSpec::Exactly(50.0)
        );
        assert_eq!(
            MeasureSpec::from_length(Length::Fill, 300.0),
            MeasureSpec::Exactly(300.0)
        );
        assert_eq!(
            MeasureSpec::from_length(Length::Shrink, 300.0),
            MeasureSpec::AtMost(300.0)
        );
        assert_eq!(
            MeasureSpec::from_length(Length::Shrink, f32::INFINITY),
            MeasureSpec::Unspecified
        );
    }

    #[test]
    fn test_width_and_height_resolve_asymmetrically() {
        // Width grows to the bound, height shrinks to it
        assert_eq!(resolve_width(MeasureSpec::AtMost(400.0), 0.0, 10.0), 400.0);
        assert_eq!(resolve_height(MeasureSpec::AtMost(40.0), 144.0, 0.0), 40.0);
        assert_eq!(resolve_height(MeasureSpec::AtMost(400.0), 144.0, 4.0), 148.0);
        assert_eq!(resolve_width(MeasureSpec::Exactly(123.0), 0.0, 10.0), 123.0);
        assert_eq!(resolve_height(MeasureSpec::Unspecified, 144.0, 6.0), 150.0);
    }

    #[test]
    fn test_minimum_height() {
        assert_eq!(minimum_height(30.0, 30.0, 24.0), 144.0);
        assert_eq!(minimum_height(10.5, 0.0, 0.0), 70.0);
    }

    #[test]
    fn test_bar_rect() {
        let rect = bar_rect(
            Size::new(400.0, 100.0),
            Padding {
                top: 0.0,
                right: 50.0,
                bottom: 0.0,
                left: 8.0,
            },
            5.0,
            7.0,
            30.0,
        );
        assert_eq!(rect.x, 25.0);
        assert_eq!(rect.y, 35.0);
        // Right padding is not applied to the right edge
        assert_eq!(rect.x + rect.width, 381.0);
        assert_eq!(rect.y + rect.height, 65.0);
    }

    #[test]
    fn test_bar_rect_odd_height_snaps() {
        let rect = bar_rect(Size::new(200.0, 101.0), Padding::ZERO, 0.0, 0.0, 25.0);
        // floor(101 / 2) = 50, 50 - 12.5 truncates to 37
        assert_eq!(rect.y, 37.0);
        assert_eq!(rect.y + rect.height, 62.0);
    }

    #[test]
    fn test_corner_radius_clamped() {
        assert_eq!(corner_radius(bar(0.0, 200.0)), 15.0);
        assert_eq!(corner_radius(bar(0.0, 10.0)), 5.0);
    }

    #[test]
    fn test_gradient_stops_are_right_aligned() {
        let stops = gradient_stops(3);
        assert_eq!(stops.len(), 3);
        assert!((stops[0] - 1.0 / 3.0).abs() < 1e-6);
        assert!((stops[1] - 2.0 / 3.0).abs() < 1e-6);
        assert!((stops[2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_marker_rate() {
        assert_eq!(marker_rate(bar(10.0, 210.0), 0), None);
        assert_eq!(marker_rate(bar(10.0, 210.0), 1), None);
        assert_eq!(marker_rate(bar(10.0, 210.0), 5), Some(50.0));
        // 200 / 3 rounds down on the grid
        assert_eq!(marker_rate(bar(10.0, 210.0), 4), Some(66.0));
        assert_eq!(marker_rate(bar(10.0, 10.0), 4), None);
    }

    #[test]
    fn test_tick_scale() {
        assert_eq!(tick_scale(0, 3), (0.9, 1.1));
        assert_eq!(tick_scale(1, 3), (1.0, 1.0));
        assert_eq!(tick_scale(2, 3), (0.9, 1.1));
    }

    #[test]
    fn test_focus_x() {
        let rect = bar(10.0, 210.0);
        assert_eq!(focus_x(rect, 0, 0), None);
        let x = focus_x(rect, 50, 100).unwrap();
        assert!((x - (10.0 + 49.5 * 2.0)).abs() < 1e-4);
    }

    #[test]
    fn test_pointer_shape() {
        let [apex, left, right] = pointer(100.0, 65.0);
        assert_eq!(apex, Point::new(100.0, 60.0));
        assert_eq!(left, Point::new(85.0, 85.0));
        assert_eq!(right, Point::new(115.0, 85.0));
    }

    #[test]
    fn test_value_at() {
        let rect = bar(10.0, 210.0);
        assert_eq!(value_at(rect, 110.0, 100), Some(50));
        assert_eq!(value_at(rect, 10.0, 100), Some(0));
        assert_eq!(value_at(rect, 260.0, 100), Some(125));
        assert_eq!(value_at(rect, -40.0, 100), Some(-25));
        assert_eq!(value_at(bar(10.0, 10.0), 10.0, 100), None);
    }

    #[test]
    fn test_value_at_rounds_to_nearest() {
        let rect = bar(10.0, 210.0);
        // 99 * 100 / 200 = 49.5
        assert_eq!(value_at(rect, 109.0, 100), Some(50));
        // Fractional pixels are dropped before mapping
        assert_eq!(value_at(rect, 109.9, 100), Some(50));
        assert_eq!(value_at(rect, 108.0, 100), Some(49));
    }
}
