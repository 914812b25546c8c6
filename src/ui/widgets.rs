//! Reusable UI widgets - composable components without business logic
//!
//! Widgets must not depend on the demo application's message type; they take
//! generic messages or callbacks instead.

pub mod seek_bar;
pub mod seek_indicator;

pub use seek_bar::{SeekBar, seek_bar};
pub use seek_indicator::{Indicator, SeekIndicator};
