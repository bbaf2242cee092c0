// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::content_cache::{FetchCycle, WorkFeed};
use crate::error::Error;
use crate::infrastructure::content::ImageLocation;
use crate::ui::navbar;
use crate::ui::pages::{home, info, shop, work};
use iced::widget::image::Handle;
use iced::Size;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
    Navbar(navbar::Message),
    Home(home::Message),
    Work(work::Message),
    Shop(shop::Message),
    Info(info::Message),
    /// Result of a work feed fetch cycle.
    FeedLoaded {
        cycle: FetchCycle,
        result: Result<WorkFeed, Error>,
    },
    /// Result of downloading one remote image.
    ImageLoaded {
        location: ImageLocation,
        result: Result<Handle, Error>,
    },
    /// Drop the cached feed and fetch it again (F5).
    ReloadContent,
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Initial route, e.g. `/work/b2`. Defaults to `/`.
    pub route: Option<String>,
    /// Content source override: a base URL or a local site directory.
    /// Takes precedence over `[content] source` in `settings.toml`.
    pub content: Option<String>,
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
