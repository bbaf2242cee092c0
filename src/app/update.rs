// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers receive an [`UpdateContext`] holding mutable references to the
//! parts of `App` they touch, and return the follow-up [`Task`].

use super::{config, Message, Screen};
use crate::application::content_cache::{ContentCache, FetchCycle, LoadState, WorkFeed};
use crate::application::query::{work_navigation, HomeSelection, WorkItem, WorkNavigator};
use crate::domain::content::{EntryKind, ImageRef, JournalEntry};
use crate::error::Error;
use crate::infrastructure::content::{ContentClient, ContentSource, ImageLocation};
use crate::ui::image_store::ImageStore;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::pages::{home, info, journal, shop, work};
use iced::widget::image::Handle;
use iced::{Size, Task};
use rand::rngs::StdRng;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub source: &'a ContentSource,
    pub client: &'a Result<ContentClient, Error>,
    pub cache: &'a mut ContentCache,
    pub images: &'a mut ImageStore,
    pub nav: &'a mut navbar::State,
    pub window_width: &'a mut f32,
    pub home_image_count: usize,
    pub home: &'a mut Option<HomeSelection>,
    pub work: &'a mut Option<WorkNavigator>,
    pub journal: &'a mut LoadState<Vec<JournalEntry>>,
    pub shop: &'a mut shop::State,
    pub info: &'a mut info::State,
    pub rng: &'a mut StdRng,
}

// =============================================================================
// Screens
// =============================================================================

/// Switches to `target`, tearing down the state of the screen being left.
pub fn handle_navigate(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen == target {
        return Task::none();
    }
    tracing::debug!(from = %ctx.screen, to = %target, "navigating");
    leave_screen(ctx, &target);
    enter_screen(ctx, target)
}

fn leave_screen(ctx: &mut UpdateContext<'_>, target: &Screen) {
    if ctx.screen.is_work() && !target.is_work() {
        // Unmounting Work also ends its keyboard subscription.
        *ctx.work = None;
    }
    if *ctx.screen == Screen::Home {
        *ctx.home = None;
    }
}

/// Makes `target` the current screen and starts whatever it needs.
pub fn enter_screen(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    *ctx.screen = target.clone();

    let fetch = match target {
        Screen::Home => {
            rebuild_home_selection(ctx);
            Task::none()
        }
        Screen::Work(route_param) => {
            let navigator = ctx.work.get_or_insert_with(WorkNavigator::new);
            navigator.resolve(ctx.cache.snapshot(), route_param.as_deref());
            Task::none()
        }
        Screen::Shop => start_shop_fetch(ctx),
        Screen::Info => start_info_fetch(ctx),
        Screen::Journal
        | Screen::About
        | Screen::Gallery
        | Screen::Contact
        | Screen::NotFound(_) => Task::none(),
    };

    Task::batch([fetch, request_visible_images(ctx)])
}

fn rebuild_home_selection(ctx: &mut UpdateContext<'_>) {
    *ctx.home = ctx
        .cache
        .image_pool()
        .map(|pool| HomeSelection::new(pool, ctx.home_image_count, &mut *ctx.rng));
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.nav) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(target) => handle_navigate(ctx, target),
    }
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    let (Some(selection), Some(pool)) = (ctx.home.as_mut(), ctx.cache.image_pool()) else {
        return Task::none();
    };
    match home::update(message, selection, pool, &mut *ctx.rng) {
        Some(_) => request_visible_images(ctx),
        None => Task::none(),
    }
}

pub fn handle_work_message(ctx: &mut UpdateContext<'_>, message: work::Message) -> Task<Message> {
    let Some(navigator) = ctx.work.as_mut() else {
        tracing::trace!(?message, "work screen not mounted, ignoring");
        return Task::none();
    };
    if work::update(message, navigator) {
        request_visible_images(ctx)
    } else {
        Task::none()
    }
}

pub fn handle_shop_message(ctx: &mut UpdateContext<'_>, message: shop::Message) -> Task<Message> {
    if shop::update(message, ctx.shop) {
        request_visible_images(ctx)
    } else {
        Task::none()
    }
}

pub fn handle_info_message(ctx: &mut UpdateContext<'_>, message: info::Message) -> Task<Message> {
    match info::update(message, ctx.info) {
        info::Event::None => Task::none(),
        info::Event::CopyToClipboard(address) => iced::clipboard::write(address),
    }
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) {
    *ctx.window_width = size.width;
    if size.width >= config::COMPACT_WIDTH_THRESHOLD {
        ctx.nav.mobile_menu_open = false;
    }
}

// =============================================================================
// Fetching
// =============================================================================

/// Starts a new work feed cycle. Every view derived from the feed goes back
/// to loading until the result arrives.
pub fn start_feed_fetch(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let cycle = ctx.cache.begin_cycle();
    refresh_from_feed(ctx);

    let client = match ctx.client {
        Ok(client) => client.clone(),
        Err(err) => {
            let result = Err(err.clone());
            return handle_feed_loaded(ctx, cycle, result);
        }
    };
    Task::perform(
        async move { client.load_work_feed().await },
        move |result| Message::FeedLoaded { cycle, result },
    )
}

pub fn handle_feed_loaded(
    ctx: &mut UpdateContext<'_>,
    cycle: FetchCycle,
    result: Result<WorkFeed, Error>,
) -> Task<Message> {
    if !ctx.cache.complete(cycle, result) {
        return Task::none();
    }
    refresh_from_feed(ctx);
    request_visible_images(ctx)
}

/// Re-derives every view of the feed after the cache changed.
fn refresh_from_feed(ctx: &mut UpdateContext<'_>) {
    let feed = ctx.cache.snapshot();
    *ctx.journal = journal::entries_from_feed(feed);

    if let Some(navigator) = ctx.work.as_mut() {
        navigator.resolve(feed, ctx.screen.work_param());
    }

    if *ctx.screen == Screen::Home {
        if ctx.cache.image_pool().is_none() {
            *ctx.home = None;
        } else if ctx.home.is_none() {
            rebuild_home_selection(ctx);
        }
    }
}

/// F5: fetch the feed again, plus the per-visit document of the current
/// screen.
pub fn handle_reload(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    tracing::info!(source = %ctx.source, "reloading content");
    let feed = start_feed_fetch(ctx);
    let visit = match ctx.screen.clone() {
        Screen::Shop => start_shop_fetch(ctx),
        Screen::Info => start_info_fetch(ctx),
        _ => Task::none(),
    };
    Task::batch([feed, visit])
}

fn start_shop_fetch(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let visit = ctx.shop.begin_visit();
    let client = match ctx.client {
        Ok(client) => client.clone(),
        Err(err) => {
            let result = Err(err.clone());
            shop::update(shop::Message::Loaded { visit, result }, ctx.shop);
            return Task::none();
        }
    };
    Task::perform(async move { client.load_shop().await }, move |result| {
        Message::Shop(shop::Message::Loaded { visit, result })
    })
}

fn start_info_fetch(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let visit = ctx.info.begin_visit();
    let client = match ctx.client {
        Ok(client) => client.clone(),
        Err(err) => {
            let result = Err(err.clone());
            info::update(info::Message::Loaded { visit, result }, ctx.info);
            return Task::none();
        }
    };
    Task::perform(async move { client.load_info().await }, move |result| {
        Message::Info(info::Message::Loaded { visit, result })
    })
}

// =============================================================================
// Images
// =============================================================================

/// Image references the current screen shows (or is about to show).
fn visible_images(ctx: &UpdateContext<'_>) -> Vec<ImageRef> {
    match ctx.screen {
        Screen::Home => ctx
            .home
            .as_ref()
            .map(|selection| selection.displayed().to_vec())
            .unwrap_or_default(),
        Screen::Work(_) => ctx.work.as_ref().map(work_images).unwrap_or_default(),
        Screen::Journal => ctx
            .journal
            .ready()
            .map(|entries| {
                entries
                    .iter()
                    .filter(|entry| matches!(entry.kind, EntryKind::Image))
                    .filter_map(|entry| entry.image.clone())
                    .collect()
            })
            .unwrap_or_default(),
        Screen::Shop => ctx
            .shop
            .catalog()
            .map(|catalog| {
                catalog
                    .open_edition
                    .iter()
                    .chain(&catalog.limited_edition)
                    .filter_map(|item| item.image.clone())
                    .collect()
            })
            .unwrap_or_default(),
        Screen::Info
        | Screen::About
        | Screen::Gallery
        | Screen::Contact
        | Screen::NotFound(_) => Vec::new(),
    }
}

/// The current image and the one after it, so advancing shows a ready image.
fn work_images(navigator: &WorkNavigator) -> Vec<ImageRef> {
    let Some(body) = navigator.active_body() else {
        return Vec::new();
    };
    let pool = navigator.image_pool();
    let total = navigator.total_items();
    [navigator.cursor(), (navigator.cursor() + 1) % total.max(1)]
        .into_iter()
        .filter_map(|index| match work_navigation::item_at(body, pool, index) {
            WorkItem::Image { reference, .. } => Some(reference.to_string()),
            WorkItem::Description { .. } | WorkItem::NoImages => None,
        })
        .collect()
}

/// Registers the visible images with the store and starts the downloads it
/// asks for.
pub fn request_visible_images(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Ok(client) = ctx.client else {
        return Task::none();
    };
    let downloads: Vec<Task<Message>> = visible_images(ctx)
        .iter()
        .map(|reference| ctx.source.resolve_image(reference))
        .filter(|location| ctx.images.request(location))
        .map(|location| download_image(client.clone(), location))
        .collect();
    Task::batch(downloads)
}

fn download_image(client: ContentClient, location: ImageLocation) -> Task<Message> {
    tracing::trace!(?location, "downloading image");
    Task::perform(
        async move {
            let result = client.fetch_image(&location).await.map(Handle::from_bytes);
            (location, result)
        },
        |(location, result)| Message::ImageLoaded { location, result },
    )
}
