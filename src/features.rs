//! Feature modules - logic separated from the widgets themselves

pub mod settings;

pub use settings::{DemoSettings, IndicatorSettings, Settings, SettingsError};
