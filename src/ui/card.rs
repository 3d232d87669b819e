use iced::widget::{column, container, image, mouse_area, row, text};
use iced::{Alignment, Border, Element, Length, Theme};

use crate::state::data::Person;
use crate::Message;

/// Fixed card width so the wrap grid lines up in columns
const CARD_WIDTH: f32 = 340.0;
/// Portrait edge length on the card
const PORTRAIT_SIZE: f32 = 72.0;

/// Summary card for the person at `index`.
/// Clicking anywhere on it opens the matching detail card.
pub fn card<'a>(
    index: usize,
    person: &'a Person,
    portrait: Option<&image::Handle>,
) -> Element<'a, Message> {
    // Name, email and location stacked beside the portrait
    let info = column![
        text(person.display_name()).size(18),
        text(person.email.as_str()).size(13),
        text(person.city_state()).size(13),
    ]
    .spacing(4);

    let body = row![portrait_or_placeholder(portrait, PORTRAIT_SIZE), info]
        .spacing(12)
        .align_y(Alignment::Center)
        .padding(12);

    // The whole card is the click target
    mouse_area(
        container(body)
            .width(Length::Fixed(CARD_WIDTH))
            .style(card_style),
    )
    .on_press(Message::OpenOverlay(index))
    .into()
}

/// Portrait image, or an empty framed square while it loads (or if it failed)
pub fn portrait_or_placeholder<'a>(
    portrait: Option<&image::Handle>,
    size: f32,
) -> Element<'a, Message> {
    match portrait {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into(),
        None => container(text("?").size(size / 3.0))
            .center_x(Length::Fixed(size))
            .center_y(Length::Fixed(size))
            .style(placeholder_style)
            .into(),
    }
}

fn card_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: 10.0.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..container::Style::default()
    }
}

fn placeholder_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.strong.color.into()),
        border: Border {
            radius: (PORTRAIT_SIZE / 2.0).into(),
            width: 0.0,
            color: palette.background.strong.color,
        },
        ..container::Style::default()
    }
}
