/// Detail card ("modal") for one person
///
/// The card body and its Prev/Next row take the accent picked when the
/// card was opened. Close, Prev and Next emit messages carrying the card's
/// own index; the application resolves neighbours through the gallery.

use iced::widget::{
    button, center, column, container, horizontal_rule, image, mouse_area, opaque, row, stack,
    text, Space,
};
use iced::{Alignment, Background, Border, Color, Element, Length, Theme};

use super::card::portrait_or_placeholder;
use crate::color::{Accent, PALETTE};
use crate::state::data::{capitalize_words, Person, PLACEHOLDER};
use crate::state::gallery::Overlay;
use crate::Message;

const MODAL_WIDTH: f32 = 420.0;
const PORTRAIT_SIZE: f32 = 150.0;

/// Build the detail card for `overlay`, bound to `person` by the same index
pub fn detail_card<'a>(
    overlay: &Overlay,
    person: &'a Person,
    portrait: Option<&image::Handle>,
) -> Element<'a, Message> {
    let index = overlay.index;
    let accent = overlay.accent.unwrap_or(PALETTE[0]);
    let body_color = accent.to_color();

    let close = button(text("X").size(14))
        .on_press(Message::CloseOverlay(index))
        .padding([4, 10])
        .style(move |theme: &Theme, status| accent_button(theme, status, accent.shade(0.6)));

    let birthday = person.birthday().unwrap_or_else(|| PLACEHOLDER.to_string());

    // Contact block, then a rule, then phone, address and birthday
    let info = column![
        portrait_or_placeholder(portrait, PORTRAIT_SIZE),
        text(person.display_name()).size(24),
        text(person.email.as_str()).size(14),
        text(capitalize_words(&person.location.city)).size(14),
        horizontal_rule(1),
        text(person.contact_phone()).size(14),
        text(person.address_line()).size(14),
        text(format!("Birthday: {}", birthday)).size(14),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    // Close button pinned to the top-right corner of the body
    let body = container(
        column![row![Space::with_width(Length::Fill), close], info].spacing(8),
    )
    .padding(20)
    .width(Length::Fixed(MODAL_WIDTH))
    .style(move |_theme: &Theme| container::Style {
        background: Some(body_color.into()),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 10.0.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..container::Style::default()
    });

    // Button row takes a darker shade of the same accent
    let row_color = accent.shade(0.7);
    let buttons = container(
        row![
            nav_button("Prev", Message::PreviousOverlay(index), accent),
            nav_button("Next", Message::NextOverlay(index), accent),
        ]
        .spacing(12),
    )
    .padding(12)
    .center_x(Length::Fixed(MODAL_WIDTH))
    .style(move |_theme: &Theme| container::Style {
        background: Some(row_color.into()),
        border: Border {
            radius: 10.0.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..container::Style::default()
    });

    column![body, buttons].spacing(6).into()
}

/// Lay `content` over `base` behind a dimmed backdrop.
/// Clicking the backdrop emits `on_blur`.
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            // Clicks on the backdrop close the card, clicks on the card do not
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

fn nav_button<'a>(label: &'a str, message: Message, accent: Accent) -> Element<'a, Message> {
    button(text(label).size(14))
        .on_press(message)
        .padding([6, 18])
        .style(move |theme: &Theme, status| accent_button(theme, status, accent.shade(0.45)))
        .into()
}

fn accent_button(theme: &Theme, status: button::Status, color: Color) -> button::Style {
    let mut style = button::primary(theme, status);
    style.background = Some(Background::Color(match status {
        button::Status::Hovered | button::Status::Pressed => Color { a: 0.8, ..color },
        _ => color,
    }));
    style.text_color = Color::WHITE;
    style
}
