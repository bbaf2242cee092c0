// SPDX-License-Identifier: MPL-2.0
//! Site navigation: Home, the Work submenu, Journal, Shop and Info.
//!
//! In the wide layout the links sit in a sidebar. Below the compact width
//! threshold they collapse behind a menu button and open as a full-window
//! overlay. Any link selection closes the overlay and folds the Work
//! submenu.

use crate::app::Screen;
use crate::application::content_cache::{LoadState, WorkFeed};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};
use std::sync::Arc;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub current: &'a Screen,
    pub feed: &'a LoadState<Arc<WorkFeed>>,
}

/// Open/closed flags of the menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    pub work_expanded: bool,
    pub mobile_menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleWorkMenu,
    ToggleMobileMenu,
    CloseMobileMenu,
    Navigate(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::ToggleWorkMenu => {
            state.work_expanded = !state.work_expanded;
            Event::None
        }
        Message::ToggleMobileMenu => {
            state.mobile_menu_open = !state.mobile_menu_open;
            Event::None
        }
        Message::CloseMobileMenu => {
            state.mobile_menu_open = false;
            Event::None
        }
        Message::Navigate(screen) => {
            state.mobile_menu_open = false;
            state.work_expanded = false;
            Event::Navigate(screen)
        }
    }
}

/// i18n key of the Work toggle label for the current feed status.
#[must_use]
pub fn work_label_key(feed: &LoadState<Arc<WorkFeed>>) -> &'static str {
    match feed {
        LoadState::Loading => "nav-work-loading",
        LoadState::Failed(_) => "nav-work-error",
        LoadState::Ready(_) => "nav-work",
    }
}

/// The Work toggle only works once bodies are available.
#[must_use]
pub fn work_toggle_enabled(feed: &LoadState<Arc<WorkFeed>>) -> bool {
    feed.ready()
        .is_some_and(|feed| !feed.work_bodies.is_empty())
}

/// Render the sidebar used in the wide layout.
pub fn view_sidebar<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);
    let links = build_links(&ctx);

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(title)
            .push(links),
    )
    .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
    .height(Length::Fill)
    .padding(spacing::LG)
    .into()
}

/// Render the top bar used in the compact layout.
pub fn view_top_bar<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);
    let toggle = button(Text::new("☰").size(typography::TITLE_MD))
        .on_press(Message::ToggleMobileMenu)
        .padding(spacing::XS)
        .style(styles::button::menu_toggle);

    Container::new(
        Row::new()
            .align_y(Vertical::Center)
            .push(title)
            .push(Space::new().width(Length::Fill))
            .push(toggle),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::TOP_BAR_HEIGHT))
    .padding([spacing::XXS, spacing::MD])
    .into()
}

/// Render the full-window menu overlay used in the compact layout.
pub fn view_overlay<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let close = button(Text::new("×").size(typography::TITLE_LG))
        .on_press(Message::CloseMobileMenu)
        .padding(spacing::XS)
        .style(styles::button::menu_toggle);

    let header = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(close);

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(header)
            .push(build_links(&ctx)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::menu_overlay)
    .into()
}

fn build_links<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(nav_link(ctx.i18n.tr("nav-home"), Screen::Home, ctx.current));

    let work_label = Text::new(ctx.i18n.tr(work_label_key(ctx.feed))).size(typography::BODY_LG);
    let mut work_toggle = button(work_label)
        .padding(0)
        .style(styles::button::nav_link(ctx.current.is_work()));
    if work_toggle_enabled(ctx.feed) {
        work_toggle = work_toggle.on_press(Message::ToggleWorkMenu);
    }
    column = column.push(work_toggle);

    if ctx.state.work_expanded {
        if let Some(feed) = ctx.feed.ready() {
            let submenu = feed.work_bodies.iter().fold(
                Column::new().spacing(spacing::XS).padding([0.0, spacing::MD]),
                |submenu, body| {
                    let target = Screen::Work(Some(body.id.clone()));
                    submenu.push(nav_link(body.title.clone(), target, ctx.current))
                },
            );
            column = column.push(submenu);
        }
    }

    column
        .push(nav_link(ctx.i18n.tr("nav-journal"), Screen::Journal, ctx.current))
        .push(nav_link(ctx.i18n.tr("nav-shop"), Screen::Shop, ctx.current))
        .push(nav_link(ctx.i18n.tr("nav-info"), Screen::Info, ctx.current))
        .into()
}

fn nav_link<'a>(label: String, target: Screen, current: &Screen) -> Element<'a, Message> {
    let active = *current == target;
    button(Text::new(label).size(typography::BODY_LG))
        .on_press(Message::Navigate(target))
        .padding(0)
        .style(styles::button::nav_link(active))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::WorkBody;

    fn ready(bodies: usize) -> LoadState<Arc<WorkFeed>> {
        LoadState::Ready(Arc::new(WorkFeed {
            work_bodies: (0..bodies)
                .map(|i| WorkBody {
                    id: format!("b{i}"),
                    title: format!("Body {i}"),
                    description: String::new(),
                })
                .collect(),
            ..WorkFeed::default()
        }))
    }

    #[test]
    fn navbar_views_render() {
        let i18n = I18n::default();
        let state = State {
            work_expanded: true,
            mobile_menu_open: true,
        };
        let feed = ready(2);
        let current = Screen::Work(Some("b1".into()));
        let ctx = || ViewContext {
            i18n: &i18n,
            state: &state,
            current: &current,
            feed: &feed,
        };
        let _sidebar = view_sidebar(ctx());
        let _top_bar = view_top_bar(ctx());
        let _overlay = view_overlay(ctx());
    }

    #[test]
    fn toggle_menus_change_state() {
        let mut state = State::default();
        assert_eq!(update(Message::ToggleWorkMenu, &mut state), Event::None);
        assert!(state.work_expanded);
        assert_eq!(update(Message::ToggleMobileMenu, &mut state), Event::None);
        assert!(state.mobile_menu_open);
        update(Message::CloseMobileMenu, &mut state);
        assert!(!state.mobile_menu_open);
        assert!(state.work_expanded);
    }

    #[test]
    fn navigation_closes_overlay_and_submenu() {
        let mut state = State {
            work_expanded: true,
            mobile_menu_open: true,
        };
        let event = update(Message::Navigate(Screen::Journal), &mut state);
        assert_eq!(event, Event::Navigate(Screen::Journal));
        assert_eq!(state, State::default());
    }

    #[test]
    fn work_label_reflects_feed_status() {
        assert_eq!(work_label_key(&LoadState::Loading), "nav-work-loading");
        assert_eq!(
            work_label_key(&LoadState::Failed("x".into())),
            "nav-work-error"
        );
        assert_eq!(work_label_key(&ready(1)), "nav-work");
    }

    #[test]
    fn work_toggle_requires_bodies() {
        assert!(!work_toggle_enabled(&LoadState::Loading));
        assert!(!work_toggle_enabled(&LoadState::Failed("x".into())));
        assert!(!work_toggle_enabled(&ready(0)));
        assert!(work_toggle_enabled(&ready(3)));
    }
}
