//! UI module for the seek indicator
//!
//! - **Widgets** (`widgets`): the indicator model and its iced widget
//! - **Theme** (`theme`): palette shared by the widget defaults and the demo

pub mod theme;
pub mod widgets;
