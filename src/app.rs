//! Demo application module

mod message;
mod view;

use std::sync::Arc;

use fancy_seekbar::SeekIndicator;
use fancy_seekbar::features::Settings;
use fancy_seekbar::ui::widgets::seek_indicator::{FontMetrics, Style};
use iced::{Task, Theme};

pub use message::Message;

/// Demo screen state
pub struct App {
    settings: Settings,
    indicator: SeekIndicator,
    /// Last value reported by the seek bar
    value: i32,
}

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();

        let style = settings.indicator.to_style().unwrap_or_else(|e| {
            tracing::warn!("Invalid indicator settings, using defaults: {}", e);
            Style::default()
        });

        let mut indicator = SeekIndicator::with_metrics(style, Arc::new(FontMetrics::load()));
        indicator.set_bar_colors(&settings.demo.palette());
        indicator.set_marker_labels(&settings.demo.labels);
        tracing::info!(
            min = indicator.min_value(),
            max = indicator.max_value(),
            labels = indicator.marker_labels().len(),
            "Seek indicator ready"
        );

        let value = indicator.current_value();
        let app = Self {
            settings,
            indicator,
            value,
        };

        (app, Task::none())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Seek(value) => {
                tracing::debug!("Seek to {}", value);
                self.indicator.set_current_value(value);
                self.value = self.indicator.current_value();
            }
            Message::Reset => {
                self.indicator.set_current_value(self.indicator.min_value());
                self.value = self.indicator.current_value();
            }
        }

        Task::none()
    }

    pub fn theme(&self) -> Theme {
        if self.settings.demo.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self) -> String {
        format!("Fancy Seek Bar - {}", self.value)
    }
}
