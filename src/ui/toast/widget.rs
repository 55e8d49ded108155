// SPDX-License-Identifier: MPL-2.0
//! Overlay rendering for the toast notification.
//!
//! The toast is a small card anchored to the bottom center of the window,
//! stacked over the regular content. It emits no messages: it cannot be
//! dismissed by the user and disappears on its own.

use super::state::Toast;
use iced::widget::{container, text, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Fixed width of the toast card in logical pixels.
const TOAST_WIDTH: f32 = 280.0;

/// Outer padding between the toast and the window edge.
const OVERLAY_PADDING: f32 = 24.0;

/// Renders the toast overlay, or a zero-size element while hidden.
pub fn view_overlay<'a, M: 'a>(toast: &'a Toast) -> Element<'a, M> {
    if !toast.is_visible() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let message = Text::new(toast.message())
        .size(14)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let card = Container::new(message)
        .width(Length::Fixed(TOAST_WIDTH))
        .padding(12)
        .align_x(alignment::Horizontal::Center)
        .style(toast_container_style);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(OVERLAY_PADDING)
        .into()
}

/// Style function for the toast card.
fn toast_container_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(iced::Background::Color(palette.background.weak.color)),
        border: iced::Border {
            color: palette.primary.strong.color,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: iced::Shadow {
            color: iced::Color {
                a: 0.3,
                ..iced::Color::BLACK
            },
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn toast_card_style_has_background_and_border() {
        let style = toast_container_style(&Theme::Dark);
        assert!(style.background.is_some());
        assert!(style.border.width > 0.0);
    }

    #[test]
    fn overlay_renders_for_visible_and_hidden_states() {
        let mut toast = Toast::new();
        let _hidden: Element<'_, ()> = view_overlay(&toast);
        drop(_hidden);

        toast.show("Saved", "Done", Instant::now());
        let _shown: Element<'_, ()> = view_overlay(&toast);
    }
}
