// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the routed screens.
//!
//! The `App` struct owns the content cache, the image store and the state of
//! each screen, and translates messages into side effects such as fetches
//! and image downloads. Screen lifetimes are handled here: the Work navigator
//! and the Home selection only exist while their screen is shown.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::content_cache::{ContentCache, LoadState};
use crate::application::query::{HomeSelection, WorkNavigator};
use crate::domain::content::JournalEntry;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::infrastructure::content::{ContentClient, ContentSource};
use crate::ui::image_store::ImageStore;
use crate::ui::navbar;
use crate::ui::pages::{info, shop};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    source: ContentSource,
    /// `Err` when the HTTP client could not be built; every fetch then fails
    /// with that error.
    client: Result<ContentClient, Error>,
    cache: ContentCache,
    images: ImageStore,
    nav: navbar::State,
    window_width: f32,
    home_image_count: usize,
    /// Present only while the Home screen is shown and the pool is loaded.
    home: Option<HomeSelection>,
    /// Present only while the Work screen is shown.
    work: Option<WorkNavigator>,
    journal: LoadState<Vec<JournalEntry>>,
    shop: shop::State,
    info: info::State,
    /// i18n key of a startup warning (unreadable settings file).
    config_warning: Option<String>,
    rng: StdRng,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("source", &self.source)
            .field("work_active", &self.work.is_some())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
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
    /// Loads `settings.toml` and starts the application.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_deref().map(std::path::PathBuf::from));
        Self::with_config(flags, &config, config_warning)
    }

    /// Builds the application from an already loaded configuration and
    /// kicks off the work feed fetch and the initial screen.
    fn with_config(
        flags: Flags,
        config: &config::Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);
        let source =
            ContentSource::parse(flags.content.as_deref().unwrap_or(config.content_source()));
        let client = ContentClient::new(source.clone(), config.request_timeout())
            .inspect_err(|err| tracing::error!(error = %err, "failed to build content client"));
        let screen = Screen::from_path(flags.route.as_deref().unwrap_or("/"));
        tracing::info!(%source, %screen, locale = %i18n.current_locale(), "starting");

        let mut app = App {
            i18n,
            screen: Screen::Home,
            theme_mode: config.general.theme_mode,
            source,
            client,
            cache: ContentCache::new(),
            images: ImageStore::new(config::DEFAULT_IMAGE_CACHE_CAPACITY),
            nav: navbar::State::default(),
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            home_image_count: config.home_image_count(),
            home: None,
            work: None,
            journal: LoadState::Loading,
            shop: shop::State::default(),
            info: info::State::default(),
            config_warning,
            rng: StdRng::from_entropy(),
        };

        let mut ctx = app.update_context();
        let feed = update::start_feed_fetch(&mut ctx);
        let enter = update::enter_screen(&mut ctx, screen);
        (app, Task::batch([feed, enter]))
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            source: &self.source,
            client: &self.client,
            cache: &mut self.cache,
            images: &mut self.images,
            nav: &mut self.nav,
            window_width: &mut self.window_width,
            home_image_count: self.home_image_count,
            home: &mut self.home,
            work: &mut self.work,
            journal: &mut self.journal,
            shop: &mut self.shop,
            info: &mut self.info,
            rng: &mut self.rng,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let active_body = self
            .work
            .as_ref()
            .and_then(WorkNavigator::active_body)
            .map(|body| body.title.as_str());

        match active_body {
            Some(title) if self.screen.is_work() => format!("{title} - {app_name}"),
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_work_keyboard_subscription(&self.screen),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Navigate(target) => update::handle_navigate(&mut ctx, target),
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Home(home_message) => update::handle_home_message(&mut ctx, home_message),
            Message::Work(work_message) => update::handle_work_message(&mut ctx, work_message),
            Message::Shop(shop_message) => update::handle_shop_message(&mut ctx, shop_message),
            Message::Info(info_message) => update::handle_info_message(&mut ctx, info_message),
            Message::FeedLoaded { cycle, result } => {
                update::handle_feed_loaded(&mut ctx, cycle, result)
            }
            Message::ImageLoaded { location, result } => {
                ctx.images.complete(location, result);
                Task::none()
            }
            Message::ReloadContent => update::handle_reload(&mut ctx),
            Message::WindowResized(size) => {
                update::handle_window_resized(&mut ctx, size);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: &self.screen,
            nav: &self.nav,
            feed: self.cache.snapshot(),
            source: &self.source,
            images: &self.images,
            home: self.home.as_ref(),
            work: self.work.as_ref(),
            journal: &self.journal,
            shop: &self.shop,
            info: &self.info,
            compact: self.window_width < config::COMPACT_WIDTH_THRESHOLD,
            config_warning: self.config_warning.as_deref(),
        })
    }
}
