// SPDX-License-Identifier: MPL-2.0
//! `carousel` is an auto-advancing image slideshow built with the Iced GUI
//! framework.
//!
//! It shows one slide at a time from a folder of images, advancing on a fixed
//! interval with manual stepping, and raises transient toast notifications
//! for user actions. The rotation and timing logic lives in plain state
//! structs ([`deck::SlideDeck`], [`autoplay::Autoplay`], [`ui::toast::Toast`])
//! that take `Instant` parameters, so the observable timing behavior is
//! testable without a rendering environment or a real clock.

pub mod app;
pub mod autoplay;
pub mod config;
pub mod deck;
pub mod error;
pub mod i18n;
pub mod ui;
