//! Demo screen view

use fancy_seekbar::seek_bar;
use fancy_seekbar::ui::theme;
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let title = text("Fancy Seek Bar").size(24);

        let status = row![
            text(format!(
                "Value: {}  ({} - {})",
                self.value,
                self.indicator.min_value(),
                self.indicator.max_value()
            ))
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
            button(text("Reset").size(14))
                .padding([6, 18])
                .style(theme::secondary_button)
                .on_press(Message::Reset),
        ]
        .spacing(16)
        .align_y(Alignment::Center);

        let content = column![
            title,
            seek_bar(&self.indicator).on_change(Message::Seek),
            status
        ]
        .spacing(24)
        .padding(32);

        container(content)
            .width(Fill)
            .height(Fill)
            .style(theme::main_content)
            .into()
    }
}
