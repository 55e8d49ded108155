// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the slideshow domain state (deck, autoplay schedule,
//! toast) together with localization and theme preferences, and translates
//! messages into state changes and side effects. The update loop is driven by
//! a periodic tick subscription; all deadline checks receive the tick's
//! `Instant`, keeping the domain state deterministic under test.

pub mod message;
mod subscription;
mod update;
mod view;

pub use message::{Action, Flags, Message};

use crate::autoplay::Autoplay;
use crate::config::{self, defaults};
use crate::deck::SlideDeck;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use crate::ui::toast::Toast;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    deck: SlideDeck,
    autoplay: Autoplay,
    toast: Toast,
    theme_mode: ThemeMode,
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            deck: SlideDeck::new(),
            autoplay: Autoplay::new(),
            toast: Toast::new(),
            theme_mode: ThemeMode::System,
        }
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(
            defaults::WINDOW_DEFAULT_WIDTH as f32,
            defaults::WINDOW_DEFAULT_HEIGHT as f32,
        ),
        min_size: Some(iced::Size::new(
            defaults::MIN_WINDOW_WIDTH as f32,
            defaults::MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from launcher `Flags`: loads config,
    /// resolves the locale, and starts the slideshow if a path was supplied.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        if let Some(path_str) = flags.path {
            let path = PathBuf::from(path_str);
            update::open_path(&mut app, &path);
        }

        if let Some(key) = config_warning {
            app.show_toast(Some(&key), Instant::now());
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            deck: &self.deck,
            toast: &self.toast,
            autoplay_running: self.autoplay.is_running(),
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(self.is_ticking()),
            subscription::create_event_subscription(),
        ])
    }

    /// Whether any deadline is pending and the tick subscription must run.
    fn is_ticking(&self) -> bool {
        self.autoplay.is_running() || self.toast.has_pending() || self.toast.is_visible()
    }

    /// Shows slide 0 and (re)arms the autoplay schedule. Safe to call
    /// repeatedly: the previous schedule is replaced, never duplicated.
    pub fn start_slideshow(&mut self, now: Instant) {
        self.deck.show(0);
        self.autoplay.restart(now);
    }

    /// Raises the toast with the translated message for `key`, or the
    /// localized default text when no key is given.
    pub fn show_toast(&mut self, key: Option<&str>, now: Instant) {
        let default = self.i18n.tr("toast-default");
        let message = key.map(|k| self.i18n.tr(k)).unwrap_or_default();
        self.toast.show(&message, &default, now);
    }
}
