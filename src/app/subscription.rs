// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two sources feed the update loop: a periodic tick (active only while a
//! deadline is pending, so an idle app schedules nothing) and native window
//! events for keyboard navigation and file drops.

use super::message::{Action, Message};
use crate::config::defaults::TICK_PERIOD_MS;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Creates the periodic tick subscription.
///
/// The tick carries the current `Instant`; autoplay and toast deadlines are
/// checked against it in `App::update`. While nothing is pending the
/// subscription is dropped entirely.
pub fn create_tick_subscription(ticking: bool) -> Subscription<Message> {
    if ticking {
        time::every(Duration::from_millis(TICK_PERIOD_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the native event subscription.
///
/// Routes file drops unconditionally, and keyboard navigation only when no
/// widget captured the event:
/// - Left / Right arrows: previous / next slide
/// - Space: pause or resume autoplay
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
            return Some(Message::FileDropped(path.clone()));
        }

        if let event::Status::Captured = status {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                ..
            }) => Some(Message::NextSlide),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                ..
            }) => Some(Message::PrevSlide),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Space),
                ..
            }) => Some(Message::Action(Action::ToggleAutoplay)),
            _ => None,
        }
    })
}
