// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use std::path::PathBuf;
use std::time::Instant;

/// Launch options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Forced UI language (`--lang`), overriding config and OS locale.
    pub lang: Option<String>,
    /// Optional slide source: a folder of images, or one image whose folder
    /// becomes the deck.
    pub path: Option<String>,
}

/// User actions wired to the toast-raising buttons.
///
/// Each action may carry an associated toast message key; an action without
/// one falls back to the localized default toast text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Copy the active slide's path to the clipboard. No message attribute:
    /// toasts the default text.
    CopyPath,
    /// Pause or resume the automatic slide advance.
    ToggleAutoplay,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic tick driving autoplay advances and toast auto-hide.
    Tick(Instant),
    /// Step to the next slide.
    NextSlide,
    /// Step to the previous slide.
    PrevSlide,
    /// A toast-raising action button was pressed.
    Action(Action),
    /// Trigger the folder picker from the empty state.
    OpenFolderDialog,
    /// Result from the folder picker.
    OpenFolderDialogResult(Option<PathBuf>),
    /// A file or folder was dropped on the window.
    FileDropped(PathBuf),
}
