//! Tap vs. drag recognition
//!
//! A small state machine over raw pointer input, tuned with the usual mobile
//! toolkit defaults. It only classifies; turning positions into values is the
//! indicator's job.

use std::time::{Duration, Instant};

use iced::Point;

/// Distance a held pointer must travel before it counts as a drag
pub const TOUCH_SLOP: f32 = 8.0;
/// A press held longer than this without dragging becomes a long press,
/// which neither taps nor drags
pub const LONG_PRESS_TIMEOUT: Duration = Duration::from_millis(500);

/// Raw pointer input fed to the detector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// Position in widget-local coordinates
    pub position: Point,
    pub at: Instant,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, position: Point, at: Instant) -> Self {
        Self { kind, position, at }
    }

    pub fn down(position: Point, at: Instant) -> Self {
        Self::new(PointerKind::Down, position, at)
    }

    pub fn moved(position: Point, at: Instant) -> Self {
        Self::new(PointerKind::Move, position, at)
    }

    pub fn up(position: Point, at: Instant) -> Self {
        Self::new(PointerKind::Up, position, at)
    }

    pub fn cancel(position: Point, at: Instant) -> Self {
        Self::new(PointerKind::Cancel, position, at)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A recognized gesture, carrying the x coordinate to map
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Press and release without significant movement
    Tap(f32),
    /// Pointer moved past the slop while held; emitted on every move
    Drag(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Phase {
    #[default]
    Idle,
    Down {
        origin: Point,
        since: Instant,
    },
    Dragging,
    /// Held past the timeout; ignored until released
    LongPressed,
}

/// Recognizes taps and drags from a pointer event stream
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureDetector {
    phase: Phase,
}

impl GestureDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is being tracked
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging)
    }

    /// Feeds one event, returning the gesture it completes or continues
    pub fn handle(&mut self, event: PointerEvent) -> Option<Gesture> {
        match (event.kind, self.phase) {
            (PointerKind::Down, _) => {
                self.phase = Phase::Down {
                    origin: event.position,
                    since: event.at,
                };
                None
            }
            (PointerKind::Move, Phase::Down { origin, since }) => {
                if event.at.saturating_duration_since(since) >= LONG_PRESS_TIMEOUT {
                    tracing::trace!("press held past long-press timeout, not a drag");
                    self.phase = Phase::LongPressed;
                    None
                } else if origin.distance(event.position) > TOUCH_SLOP {
                    self.phase = Phase::Dragging;
                    Some(Gesture::Drag(event.position.x))
                } else {
                    None
                }
            }
            (PointerKind::Move, Phase::Dragging) => Some(Gesture::Drag(event.position.x)),
            (PointerKind::Up, Phase::Down { since, .. }) => {
                self.phase = Phase::Idle;
                if event.at.saturating_duration_since(since) < LONG_PRESS_TIMEOUT {
                    Some(Gesture::Tap(event.position.x))
                } else {
                    tracing::trace!("press held past long-press timeout, not a tap");
                    None
                }
            }
            (PointerKind::Up | PointerKind::Cancel, _) => {
                self.phase = Phase::Idle;
                None
            }
            (PointerKind::Move, Phase::Idle | Phase::LongPressed) => None,
        }
    }
}
