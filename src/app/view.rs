// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Wide windows show the navigation sidebar next to the current screen.
//! Compact windows show a top bar instead, or only the menu overlay while it
//! is open.

use super::{Message, Screen};
use crate::application::content_cache::{LoadState, WorkFeed};
use crate::application::query::{HomeSelection, WorkNavigator};
use crate::domain::content::JournalEntry;
use crate::i18n::fluent::I18n;
use crate::infrastructure::content::ContentSource;
use crate::ui::components::status;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::image_store::ImageStore;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::pages::placeholder::{self, Placeholder};
use crate::ui::pages::{home, info, journal, shop, work};
use crate::ui::styles;
use iced::{
    widget::{Column, Container, Row, Text},
    Element, Length,
};
use std::sync::Arc;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a Screen,
    pub nav: &'a navbar::State,
    pub feed: &'a LoadState<Arc<WorkFeed>>,
    pub source: &'a ContentSource,
    pub images: &'a ImageStore,
    pub home: Option<&'a HomeSelection>,
    pub work: Option<&'a WorkNavigator>,
    pub journal: &'a LoadState<Vec<JournalEntry>>,
    pub shop: &'a shop::State,
    pub info: &'a info::State,
    pub compact: bool,
    pub config_warning: Option<&'a str>,
}

/// Renders the navigation and the current screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_ctx = NavbarViewContext {
        i18n: ctx.i18n,
        state: ctx.nav,
        current: ctx.screen,
        feed: ctx.feed,
    };

    if ctx.compact && ctx.nav.mobile_menu_open {
        return navbar::view_overlay(navbar_ctx).map(Message::Navbar);
    }

    let mut content = Column::new().width(Length::Fill).height(Length::Fill);
    if let Some(key) = ctx.config_warning {
        content = content.push(
            Container::new(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::CAPTION)
                    .style(styles::text::error),
            )
            .padding([spacing::XS, spacing::LG]),
        );
    }
    let content = content.push(view_screen(&ctx));

    if ctx.compact {
        Column::new()
            .push(navbar::view_top_bar(navbar_ctx).map(Message::Navbar))
            .push(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        Row::new()
            .push(navbar::view_sidebar(navbar_ctx).map(Message::Navbar))
            .push(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn view_screen<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.screen {
        Screen::Home => home::view(home::ViewContext {
            i18n: ctx.i18n,
            selection: ctx.home,
            source: ctx.source,
            images: ctx.images,
        })
        .map(Message::Home),
        Screen::Work(_) => match ctx.work {
            Some(navigator) => work::view(work::ViewContext {
                i18n: ctx.i18n,
                navigator,
                source: ctx.source,
                images: ctx.images,
            })
            .map(Message::Work),
            None => status::message(ctx.i18n.tr("state-loading")),
        },
        Screen::Journal => journal::view(journal::ViewContext {
            i18n: ctx.i18n,
            entries: ctx.journal,
            source: ctx.source,
            images: ctx.images,
        }),
        Screen::Shop => shop::view(shop::ViewContext {
            i18n: ctx.i18n,
            state: ctx.shop,
            source: ctx.source,
            images: ctx.images,
        }),
        Screen::Info => info::view(info::ViewContext {
            i18n: ctx.i18n,
            state: ctx.info,
        })
        .map(Message::Info),
        Screen::About => placeholder::view(ctx.i18n, Placeholder::About),
        Screen::Gallery => placeholder::view(ctx.i18n, Placeholder::Gallery),
        Screen::Contact => placeholder::view(ctx.i18n, Placeholder::Contact),
        Screen::NotFound(_) => placeholder::view(ctx.i18n, Placeholder::NotFound),
    }
}
