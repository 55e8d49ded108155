// SPDX-License-Identifier: MPL-2.0
//! Transient toast notification for user feedback.
//!
//! A single short-lived text notification that appears over the content and
//! hides itself after a fixed delay. Unlike queue-based notification centers,
//! this is deliberately one element with a text payload: showing it again
//! replaces the text in place.
//!
//! # Components
//!
//! - [`state`] - `Toast` lifecycle state (text, visibility, hide deadlines)
//! - [`widget`] - overlay rendering

pub mod state;
pub mod widget;

pub use state::Toast;
