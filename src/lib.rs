//! Fancy seek bar - a custom-drawn, touchable seek indicator for iced
//!
//! The indicator lives in [`ui::widgets::seek_indicator`] and is toolkit
//! independent; [`ui::widgets::seek_bar`] hosts it as an iced widget.
//! [`features::settings`] loads its style from a JSON settings file.

pub mod features;
pub mod ui;

pub use ui::widgets::{Indicator, SeekBar, SeekIndicator, seek_bar};
