//! Seek indicator model
//!
//! A horizontal bar painted with a solid color or a multi-stop gradient, an
//! optional row of labelled markers below it and a pointer at the current
//! value. Tapping or dragging along the bar moves the value.
//!
//! The model is independent of the UI toolkit: the host measures it, assigns
//! bounds, hands it a [`Surface`] to paint on and feeds it pointer events.
//! Invalid input never errors. Out-of-range values are clamped and degenerate
//! geometry draws less.

pub mod geometry;
mod gesture;
mod metrics;
mod style;
mod surface;

use std::sync::Arc;

use iced::{Color, Point, Rectangle, Size};

pub use geometry::MeasureSpec;
pub use gesture::{Gesture, GestureDetector, PointerEvent, PointerKind};
pub use metrics::{EstimatedMetrics, FontMetrics, TextMetrics};
pub use style::Style;
pub use surface::{DisplayList, DrawOp, Fill, Label, Surface};

/// Toolkit-independent view contract
pub trait Indicator {
    /// Reports the size wanted under the given constraints
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Accepts the final size assigned by the host
    fn layout(&mut self, size: Size);

    /// Paints the current state
    fn paint(&self, surface: &mut dyn Surface);

    /// Feeds a pointer event; returns whether a redraw is needed
    fn on_pointer(&mut self, event: PointerEvent) -> bool;
}

/// Seek indicator state
#[derive(Clone)]
pub struct SeekIndicator {
    min: i32,
    max: i32,
    current: i32,
    bar_colors: Vec<Color>,
    marker_labels: Vec<String>,
    start_offset: f32,
    end_offset: f32,
    style: Style,
    /// Derived from the last laid out size and the label offsets
    bar_rect: Option<Rectangle>,
    laid_out: Option<Size>,
    gesture: GestureDetector,
    metrics: Arc<dyn TextMetrics>,
    revision: u64,
}

impl SeekIndicator {
    pub fn new(style: Style) -> Self {
        Self::with_metrics(style, Arc::new(EstimatedMetrics::default()))
    }

    pub fn with_metrics(style: Style, metrics: Arc<dyn TextMetrics>) -> Self {
        let mut indicator = Self {
            min: style.min_value,
            max: style.max_value,
            current: style.initial_value,
            bar_colors: style.bar_colors.clone(),
            marker_labels: Vec::new(),
            start_offset: 0.0,
            end_offset: 0.0,
            style,
            bar_rect: None,
            laid_out: None,
            gesture: GestureDetector::new(),
            metrics,
            revision: 0,
        };
        indicator.set_current_value(indicator.current);
        indicator
    }

    pub fn min_value(&self) -> i32 {
        self.min
    }

    /// Stores the lower bound as is; the current value is not reclamped
    pub fn set_min_value(&mut self, value: i32) {
        self.min = value;
        self.touch();
    }

    pub fn max_value(&self) -> i32 {
        self.max
    }

    /// Stores the upper bound as is; the current value is not reclamped
    pub fn set_max_value(&mut self, value: i32) {
        self.max = value;
        self.touch();
    }

    pub fn current_value(&self) -> i32 {
        self.current
    }

    /// Sets the current value, clamped into `[min, max]`
    pub fn set_current_value(&mut self, value: i32) {
        self.current = if value > self.max {
            self.max
        } else if value < self.min {
            self.min
        } else {
            value
        };
        self.touch();
    }

    /// Number of discrete positions, both ends included.
    ///
    /// Wraps around for ranges wider than `i32` can count.
    pub fn delta(&self) -> i32 {
        self.max.wrapping_sub(self.min).wrapping_add(1)
    }

    pub fn bar_colors(&self) -> &[Color] {
        &self.bar_colors
    }

    /// Replaces the bar palette. A single color is ignored; an empty palette
    /// is accepted and paints a transparent bar.
    pub fn set_bar_colors(&mut self, colors: &[Color]) {
        if colors.len() == 1 {
            tracing::debug!("ignoring single-color bar palette");
            return;
        }

        self.bar_colors = colors.to_vec();
        self.touch();
    }

    pub fn marker_labels(&self) -> &[String] {
        &self.marker_labels
    }

    /// Replaces the marker labels and reserves room for the outer ones.
    ///
    /// Fewer than two labels are ignored.
    pub fn set_marker_labels<S: AsRef<str>>(&mut self, labels: &[S]) {
        let (Some(first), Some(last)) = (labels.first(), labels.last()) else {
            tracing::debug!("ignoring empty marker labels");
            return;
        };
        if labels.len() < 2 {
            tracing::debug!("ignoring single marker label");
            return;
        }

        self.start_offset = self.label_offset(first.as_ref());
        self.end_offset = self.label_offset(last.as_ref());
        self.marker_labels = labels.iter().map(|l| l.as_ref().to_string()).collect();
        self.laid_out = None;
        self.touch();
    }

    /// Horizontal room reserved at the (start, end) of the bar
    pub fn offsets(&self) -> (f32, f32) {
        (self.start_offset, self.end_offset)
    }

    /// The bar rectangle from the last layout, if any
    pub fn bar_rect(&self) -> Option<Rectangle> {
        self.bar_rect
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Incremented by every accepted setter call
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether a pointer gesture is in progress
    pub fn is_tracking(&self) -> bool {
        self.gesture.is_active()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Value a tap at `x` would select, before clamping
    pub fn value_at(&self, x: f32) -> Option<i32> {
        self.bar_rect
            .and_then(|bar| geometry::value_at(bar, x, self.delta()))
    }

    /// Fill used for the bar
    pub fn bar_fill(&self, bar: Rectangle) -> Fill {
        match self.bar_colors.as_slice() {
            [] => Fill::Transparent,
            [color] => Fill::Solid(*color),
            colors => {
                let bottom = bar.y + bar.height;
                Fill::Linear {
                    start: Point::new(bar.x, bottom),
                    end: Point::new(bar.x + bar.width, bottom),
                    stops: geometry::gradient_stops(colors.len())
                        .into_iter()
                        .zip(colors.iter().copied())
                        .collect(),
                }
            }
        }
    }

    /// Takes over the host-facing state of `other`, keeping this instance's
    /// layout cache and gesture tracking.
    pub(crate) fn adopt(&mut self, other: &SeekIndicator) {
        if (self.start_offset, self.end_offset) != (other.start_offset, other.end_offset)
            || self.style != other.style
        {
            self.laid_out = None;
        }

        self.min = other.min;
        self.max = other.max;
        self.current = other.current;
        self.bar_colors.clone_from(&other.bar_colors);
        self.marker_labels.clone_from(&other.marker_labels);
        self.start_offset = other.start_offset;
        self.end_offset = other.end_offset;
        self.style.clone_from(&other.style);
        self.metrics = Arc::clone(&other.metrics);
        self.revision = other.revision;
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn label_offset(&self, label: &str) -> f32 {
        let bounds = self.metrics.bounds(label, self.style.marker_text_size);
        (bounds.width.trunc() / 2.0).floor()
    }

    fn paint_bar(&self, surface: &mut dyn Surface, bar: Rectangle) {
        if bar.width <= 0.0 || bar.height <= 0.0 {
            return;
        }

        surface.fill_rounded_rect(bar, geometry::corner_radius(bar), &self.bar_fill(bar));
    }

    fn paint_markers(&self, surface: &mut dyn Surface, bar: Rectangle) {
        let count = self.marker_labels.len();
        let Some(rate) = geometry::marker_rate(bar, count) else {
            return;
        };
        let bottom = bar.y + bar.height;

        for (i, label) in self.marker_labels.iter().enumerate() {
            let x = bar.x + i as f32 * rate;
            let (scale_top, scale_bottom) = geometry::tick_scale(i, count);

            surface.stroke_line(
                Point::new(x, bar.y * scale_top),
                Point::new(x, bottom * scale_bottom),
                self.style.marker_width,
                self.style.marker_color,
            );

            let bounds = self.metrics.bounds(label, self.style.marker_text_size);
            surface.fill_text(Label {
                content: label.clone(),
                position: Point::new(x, bottom + bounds.height + geometry::PADDING * 2.0),
                size: self.style.marker_text_size,
                color: self.style.marker_color,
            });
        }
    }

    fn paint_focus_marker(&self, surface: &mut dyn Surface, bar: Rectangle, x: f32) {
        let pointer = geometry::pointer(x, bar.y + bar.height);
        surface.fill_polygon(&pointer, self.style.focus_marker_color);
    }

    fn paint_focus_line(&self, surface: &mut dyn Surface, bar: Rectangle, x: f32) {
        let (scale_top, scale_bottom) = geometry::FOCUS_LINE_SCALE;
        surface.stroke_line(
            Point::new(x, bar.y * scale_top),
            Point::new(x, (bar.y + bar.height) * scale_bottom),
            self.style.focus_marker_width,
            self.style.focus_marker_color,
        );

        let content = format!("{} {}", self.current, self.style.focus_unit);
        // Placed using the marker metrics, drawn at the focus size
        let bounds = self.metrics.bounds(&content, self.style.marker_text_size);
        surface.fill_text(Label {
            content,
            position: Point::new(x, bar.y - bounds.height - geometry::PADDING),
            size: self.style.focus_marker_text_size,
            color: self.style.focus_marker_color,
        });
    }
}

impl Default for SeekIndicator {
    fn default() -> Self {
        Self::new(Style::default())
    }
}

impl std::fmt::Debug for SeekIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeekIndicator")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("current", &self.current)
            .field("bar_colors", &self.bar_colors)
            .field("marker_labels", &self.marker_labels)
            .field("offsets", &(self.start_offset, self.end_offset))
            .field("bar_rect", &self.bar_rect)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl Indicator for SeekIndicator {
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let style = &self.style;
        let minimum_height = geometry::minimum_height(
            style.bar_height,
            style.focus_marker_text_size,
            style.marker_text_size,
        );

        Size::new(
            geometry::resolve_width(
                width,
                style.min_width,
                style.padding.left + style.padding.right,
            ),
            geometry::resolve_height(
                height,
                minimum_height,
                style.padding.top + style.padding.bottom,
            ),
        )
    }

    fn layout(&mut self, size: Size) {
        if self.laid_out == Some(size) {
            return;
        }

        let bar = geometry::bar_rect(
            size,
            self.style.padding,
            self.start_offset,
            self.end_offset,
            self.style.bar_height,
        );
        tracing::trace!(?size, ?bar, "seek indicator laid out");

        self.bar_rect = Some(bar);
        self.laid_out = Some(size);
    }

    fn paint(&self, surface: &mut dyn Surface) {
        let Some(bar) = self.bar_rect else {
            return;
        };

        self.paint_bar(surface, bar);
        self.paint_markers(surface, bar);

        if let Some(x) = geometry::focus_x(bar, self.current, self.delta()) {
            self.paint_focus_marker(surface, bar, x);
            if self.style.show_focus_line {
                self.paint_focus_line(surface, bar, x);
            }
        }
    }

    fn on_pointer(&mut self, event: PointerEvent) -> bool {
        let Some(gesture) = self.gesture.handle(event) else {
            return false;
        };
        let (Gesture::Tap(x) | Gesture::Drag(x)) = gesture;

        match self.value_at(x) {
            Some(value) => {
                tracing::trace!(?gesture, value, "pointer mapped to value");
                self.set_current_value(value);
                true
            }
            None => false,
        }
    }
}
