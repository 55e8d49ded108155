// SPDX-License-Identifier: MPL-2.0
//! Update logic: translates messages into state changes and side effects.

use super::message::{Action, Message};
use super::App;
use crate::deck::SlideDeck;
use crate::i18n::fluent::I18n;
use iced::Task;
use std::path::Path;
use std::time::Instant;

/// Single update entrypoint called by the Iced runtime.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Tick(now) => {
            let steps = app.autoplay.poll(now);
            for _ in 0..steps {
                app.deck.next();
            }
            app.toast.tick(now);
            Task::none()
        }
        Message::NextSlide => {
            app.deck.next();
            Task::none()
        }
        Message::PrevSlide => {
            app.deck.prev();
            Task::none()
        }
        Message::Action(action) => handle_action(app, action),
        Message::OpenFolderDialog => open_folder_dialog(&app.i18n),
        Message::OpenFolderDialogResult(Some(path)) => {
            open_path(app, &path);
            Task::none()
        }
        Message::OpenFolderDialogResult(None) => Task::none(),
        Message::FileDropped(path) => {
            open_path(app, &path);
            Task::none()
        }
    }
}

/// Handles a toast-raising action button.
fn handle_action(app: &mut App, action: Action) -> Task<Message> {
    let now = Instant::now();
    match action {
        Action::CopyPath => {
            let Some(path) = app.deck.current() else {
                return Task::none();
            };
            let contents = path.display().to_string();
            // No message attribute on this action: toast the default text
            app.show_toast(None, now);
            iced::clipboard::write(contents)
        }
        Action::ToggleAutoplay => {
            if app.autoplay.is_running() {
                app.autoplay.pause();
                app.show_toast(Some("toast-paused"), now);
            } else {
                app.autoplay.resume(now);
                app.show_toast(Some("toast-resumed"), now);
            }
            Task::none()
        }
    }
}

/// Opens the async folder picker.
fn open_folder_dialog(i18n: &I18n) -> Task<Message> {
    let title = i18n.tr("dialog-open-folder-title");
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(&title)
                .pick_folder()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFolderDialogResult,
    )
}

/// Loads a deck from a dropped or selected path and starts the slideshow.
///
/// A directory becomes the deck starting at its first slide; a single image
/// file loads its parent directory with that file active. Failures degrade
/// to a warning toast, never an error screen.
pub(super) fn open_path(app: &mut App, path: &Path) {
    let now = Instant::now();
    let scanned = if path.is_dir() {
        SlideDeck::scan_directory(path)
    } else {
        SlideDeck::scan_from_file(path)
    };

    match scanned {
        Ok(deck) if deck.is_empty() => {
            app.show_toast(Some("warning-folder-empty"), now);
        }
        Ok(deck) => {
            let start = deck.current_index().unwrap_or(0) as i64;
            app.deck = deck;
            app.start_slideshow(now);
            // A dropped file keeps its own position instead of slide 0
            app.deck.show(start);
        }
        Err(_) => {
            app.show_toast(Some("warning-folder-unreadable"), now);
        }
    }
}
