use iced::widget::{button, row, text, text_input};
use iced::{Element, Length};

use crate::Message;

/// Search row: filters on every keystroke, and again on Enter or the button
pub fn search_bar(value: &str) -> Element<'_, Message> {
    row![
        text_input("Search...", value)
            .on_input(Message::SearchChanged)
            .on_submit(Message::SearchSubmitted)
            .padding(8)
            .width(Length::Fixed(260.0)),
        button(text("Search"))
            .on_press(Message::SearchSubmitted)
            .padding(8),
    ]
    .spacing(8)
    .into()
}
