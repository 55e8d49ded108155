// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! One screen: the active slide with navigation and action controls, or an
//! empty-state prompt when no deck is loaded. The toast overlay is stacked
//! on top in both cases.

use super::message::{Action, Message};
use crate::deck::SlideDeck;
use crate::i18n::fluent::I18n;
use crate::ui::toast::{self, Toast};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub deck: &'a SlideDeck,
    pub toast: &'a Toast,
    pub autoplay_running: bool,
}

/// Renders the whole window content.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = if ctx.deck.is_empty() {
        view_empty(ctx.i18n)
    } else {
        view_slideshow(&ctx)
    };

    Stack::new()
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toast::widget::view_overlay(ctx.toast))
        .into()
}

/// Prompt shown while no slides are loaded.
fn view_empty(i18n: &I18n) -> Element<'_, Message> {
    let column = Column::new()
        .spacing(12)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("empty-title")).size(24))
        .push(Text::new(i18n.tr("empty-hint")).size(14))
        .push(
            button(Text::new(i18n.tr("empty-open-folder")))
                .on_press(Message::OpenFolderDialog)
                .padding([8, 16]),
        );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// The active slide plus the control bar.
fn view_slideshow<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let slide: Element<'a, Message> = match ctx.deck.current() {
        Some(path) => Image::new(Handle::from_path(path))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Text::new("").into(),
    };

    let counter = match ctx.deck.current_index() {
        Some(index) => ctx.i18n.tr_with_args(
            "slide-counter",
            &[
                ("current", &(index + 1).to_string()),
                ("total", &ctx.deck.len().to_string()),
            ],
        ),
        None => String::new(),
    };

    let autoplay_label = if ctx.autoplay_running {
        ctx.i18n.tr("action-pause")
    } else {
        ctx.i18n.tr("action-resume")
    };

    let controls = Row::new()
        .spacing(8)
        .align_y(alignment::Vertical::Center)
        .push(
            button(Text::new("◀"))
                .on_press(Message::PrevSlide)
                .padding([6, 12]),
        )
        .push(
            button(Text::new("▶"))
                .on_press(Message::NextSlide)
                .padding([6, 12]),
        )
        .push(Text::new(counter).size(14))
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("action-copy-path")))
                .on_press(Message::Action(Action::CopyPath))
                .padding([6, 12]),
        )
        .push(
            button(Text::new(autoplay_label))
                .on_press(Message::Action(Action::ToggleAutoplay))
                .padding([6, 12]),
        );

    Column::new()
        .push(
            Container::new(slide)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(Container::new(controls).width(Length::Fill).padding(12))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
