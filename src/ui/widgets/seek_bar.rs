//! Seek bar widget
//!
//! Hosts a [`SeekIndicator`] inside iced: the widget measures and lays out the
//! indicator, paints it through a canvas frame and forwards mouse and touch
//! input to its gesture handling.
//!
//! The widget keeps its own copy of the indicator in the widget tree. Value
//! changes made by gestures live there, like a native control would keep them;
//! whenever the application's indicator changes (its revision moves) the copy
//! is refreshed from it. An optional `on_change` callback lets the application
//! mirror the value.

use std::time::Instant;

use iced::advanced::graphics::geometry::Renderer as _;
use iced::advanced::layout;
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::mouse;
use iced::touch;
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::{Color, Element, Event, Length, Point, Rectangle, Renderer, Size, Theme, Vector};

use super::seek_indicator::{
    Fill, Indicator, Label, MeasureSpec, PointerEvent, PointerKind, SeekIndicator, Surface,
};

/// Stops a single canvas gradient can carry
const MAX_GRADIENT_STOPS: usize = 8;

/// iced widget displaying a [`SeekIndicator`]
pub struct SeekBar<'a, Message> {
    indicator: &'a SeekIndicator,
    on_change: Option<Box<dyn Fn(i32) -> Message + 'a>>,
    width: Length,
    height: Length,
}

impl<'a, Message> SeekBar<'a, Message> {
    pub fn new(indicator: &'a SeekIndicator) -> Self {
        Self {
            indicator,
            on_change: None,
            width: Length::Fill,
            height: Length::Shrink,
        }
    }

    /// Publishes a message whenever a gesture changes the value
    pub fn on_change(mut self, on_change: impl Fn(i32) -> Message + 'a) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }
}

/// Widget tree state
struct State {
    indicator: SeekIndicator,
    synced_revision: u64,
}

impl State {
    fn new(indicator: &SeekIndicator) -> Self {
        Self {
            indicator: indicator.clone(),
            synced_revision: indicator.revision(),
        }
    }

    /// Refreshes the local copy when the application changed its indicator
    fn sync(&mut self, indicator: &SeekIndicator) {
        if self.synced_revision != indicator.revision() {
            self.indicator.adopt(indicator);
            self.synced_revision = indicator.revision();
        }
    }

    /// Feeds a pointer event to the local copy
    fn on_pointer(&mut self, event: PointerEvent) -> Outcome {
        let before = self.indicator.current_value();
        let redraw = self.indicator.on_pointer(event);
        let value = self.indicator.current_value();

        Outcome {
            redraw,
            changed: (redraw && value != before).then_some(value),
        }
    }
}

/// Result of feeding one pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Outcome {
    redraw: bool,
    /// The new value, when it moved
    changed: Option<i32>,
}

/// Maps an iced event onto pointer input.
///
/// Presses only count over the widget; moves and releases only while a
/// gesture is tracked.
fn pointer_kind(event: &Event, over: bool, tracking: bool) -> Option<PointerKind> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
        | Event::Touch(touch::Event::FingerPressed { .. }) => over.then_some(PointerKind::Down),
        Event::Mouse(mouse::Event::CursorMoved { .. })
        | Event::Touch(touch::Event::FingerMoved { .. }) => tracking.then_some(PointerKind::Move),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | Event::Touch(touch::Event::FingerLifted { .. }) => tracking.then_some(PointerKind::Up),
        Event::Touch(touch::Event::FingerLost { .. }) => tracking.then_some(PointerKind::Cancel),
        _ => None,
    }
}

impl<Message> Widget<Message, Theme, Renderer> for SeekBar<'_, Message> {
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::new(self.indicator))
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let state = tree.state.downcast_mut::<State>();
        state.sync(self.indicator);

        let max = limits.max();
        let size = state.indicator.measure(
            MeasureSpec::from_length(self.width, max.width),
            MeasureSpec::from_length(self.height, max.height),
        );
        state.indicator.layout(size);

        layout::Node::new(size)
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        let Some(kind) = pointer_kind(
            event,
            cursor.is_over(bounds),
            state.indicator.is_tracking(),
        ) else {
            return;
        };
        let Some(position) = cursor.land().position() else {
            return;
        };

        let local = Point::new(position.x - bounds.x, position.y - bounds.y);
        let outcome = state.on_pointer(PointerEvent::new(kind, local, Instant::now()));

        if let Some(value) = outcome.changed {
            if let Some(on_change) = &self.on_change {
                shell.publish(on_change(value));
            }
        }
        if outcome.redraw {
            shell.request_redraw();
        }

        shell.capture_event();
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();

        renderer.with_translation(Vector::new(bounds.x, bounds.y), |renderer| {
            let mut frame = Frame::new(renderer, bounds.size());
            state.indicator.paint(&mut frame);
            renderer.draw_geometry(frame.into_geometry());
        });
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.indicator.is_dragging() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message> From<SeekBar<'a, Message>> for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
{
    fn from(seek_bar: SeekBar<'a, Message>) -> Self {
        Element::new(seek_bar)
    }
}

/// Creates a new seek bar for the indicator
pub fn seek_bar<'a, Message>(indicator: &'a SeekIndicator) -> SeekBar<'a, Message> {
    SeekBar::new(indicator)
}

impl Surface for Frame {
    fn fill_rounded_rect(&mut self, rect: Rectangle, radius: f32, fill: &Fill) {
        let path = Path::rounded_rectangle(rect.position(), rect.size(), radius.into());
        fill_path(self, &path, rect, fill);
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color) {
        self.stroke(
            &Path::line(from, to),
            Stroke::default().with_width(width).with_color(color),
        );
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        let path = Path::new(|builder| {
            builder.move_to(*first);
            for point in rest {
                builder.line_to(*point);
            }
            builder.close();
        });
        self.fill(&path, color);
    }

    fn fill_text(&mut self, label: Label) {
        canvas::Frame::fill_text(self, canvas_text(label));
    }
}

/// Anchors the label at the bottom center of its line box
fn canvas_text(label: Label) -> canvas::Text {
    canvas::Text {
        content: label.content,
        position: label.position,
        color: label.color,
        size: iced::Pixels(label.size),
        align_x: iced::alignment::Horizontal::Center.into(),
        align_y: iced::alignment::Vertical::Bottom,
        ..canvas::Text::default()
    }
}

fn fill_path(frame: &mut Frame, path: &Path, rect: Rectangle, fill: &Fill) {
    match fill {
        Fill::Transparent => {}
        Fill::Solid(color) => frame.fill(path, *color),
        Fill::Linear { start, end, stops } if stops.len() <= MAX_GRADIENT_STOPS => {
            let gradient = stops.iter().fold(
                canvas::gradient::Linear::new(*start, *end),
                |gradient, &(offset, color)| gradient.add_stop(offset, color),
            );
            frame.fill(path, canvas::Gradient::Linear(gradient));
        }
        Fill::Linear { start, end, stops } => {
            for (clip, band) in gradient_bands(rect, *start, *end, stops) {
                frame.with_clip(clip, |frame| fill_path(frame, path, clip, &band));
            }
        }
    }
}

/// Splits a gradient with more stops than a canvas gradient holds into
/// horizontal bands, each a clip rectangle with the fill to paint inside it.
///
/// The first band covers the span before the first stop in its color; every
/// following band shades between one pair of neighboring stops.
fn gradient_bands(
    rect: Rectangle,
    start: Point,
    end: Point,
    stops: &[(f32, Color)],
) -> Vec<(Rectangle, Fill)> {
    let Some(&(first_offset, first_color)) = stops.first() else {
        return Vec::new();
    };

    let span = end.x - start.x;
    let at = |offset: f32| start.x + span * offset;
    let band = |from: f32, to: f32| Rectangle {
        x: from,
        y: rect.y,
        width: (to - from).max(0.0),
        height: rect.height,
    };

    let head = (band(rect.x, at(first_offset)), Fill::Solid(first_color));

    std::iter::once(head)
        .chain(stops.windows(2).map(|pair| {
            let ((a, from), (b, to)) = (pair[0], pair[1]);
            let (x0, x1) = (at(a), at(b));
            let fill = Fill::Linear {
                start: Point::new(x0, start.y),
                end: Point::new(x1, end.y),
                stops: vec![(0.0, from), (1.0, to)],
            };
            (band(x0, x1), fill)
        }))
        .collect()
}
