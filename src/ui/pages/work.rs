// SPDX-License-Identifier: MPL-2.0
//! Work screen: cycles through the active body's images and description.
//!
//! A click anywhere on the content advances. The arrow keys are routed here
//! by the Work keyboard subscription, which only exists while this screen
//! is shown.

use crate::application::query::{NavigatorStatus, WorkItem, WorkNavigator};
use crate::i18n::fluent::I18n;
use crate::infrastructure::content::ContentSource;
use crate::ui::components::{image_frame, status};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::image_store::ImageStore;
use crate::ui::styles;
use iced::widget::{mouse_area, Column, Container, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navigator: &'a WorkNavigator,
    pub source: &'a ContentSource,
    pub images: &'a ImageStore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Advance,
    Retreat,
}

/// Moves the cursor; returns `true` if the displayed item changed.
pub fn update(message: Message, navigator: &mut WorkNavigator) -> bool {
    let moved = match message {
        Message::Advance => navigator.advance(),
        Message::Retreat => navigator.retreat(),
    };
    if moved {
        tracing::trace!(cursor = navigator.cursor(), "work cursor moved");
    }
    moved
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    match ctx.navigator.status() {
        NavigatorStatus::Loading => return status::message(ctx.i18n.tr("state-loading")),
        NavigatorStatus::Failed(message) => {
            return status::error(
                ctx.i18n
                    .tr_with_args("work-error", &[("message", message.as_str())]),
            )
        }
        NavigatorStatus::NotFound => return status::message(ctx.i18n.tr("work-not-found")),
        NavigatorStatus::Active => {}
    }
    let (Some(body), Some(item)) = (ctx.navigator.active_body(), ctx.navigator.current_item())
    else {
        return status::message(ctx.i18n.tr("work-not-found"));
    };

    let content: Element<'a, Message> = match item {
        WorkItem::Image { reference, number } => {
            let number = number.to_string();
            let alt = ctx.i18n.tr_with_args(
                "work-image-alt",
                &[("title", body.title.as_str()), ("number", number.as_str())],
            );
            let slot = ctx.images.slot(&ctx.source.resolve_image(reference));
            image_frame::view(slot, alt, Length::Fill, Length::Fill)
        }
        WorkItem::Description { title, description } => Container::new(
            Column::new()
                .spacing(spacing::MD)
                .max_width(sizing::READING_WIDTH)
                .push(Text::new(title.to_string()).size(typography::TITLE_LG))
                .push(Text::new(description.to_string()).size(typography::BODY_LG)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::panel)
        .into(),
        WorkItem::NoImages => status::message(ctx.i18n.tr("work-no-images")),
    };

    let info = ctx.navigator.navigation_info();
    let current = (info.current_index + 1).to_string();
    let total = info.total_count.to_string();
    let position = Text::new(ctx.i18n.tr_with_args(
        "work-position",
        &[("current", current.as_str()), ("total", total.as_str())],
    ))
    .size(typography::CAPTION)
    .style(styles::text::muted);

    let column = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(position);

    mouse_area(
        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG),
    )
    .on_press(Message::Advance)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::content_cache::{LoadState, WorkFeed};
    use crate::domain::content::WorkBody;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn navigator(images: &[&str]) -> WorkNavigator {
        let feed = LoadState::Ready(Arc::new(WorkFeed {
            work_bodies: vec![WorkBody {
                id: "b1".into(),
                title: "Coast".into(),
                description: "Fog".into(),
            }],
            image_pool: images.iter().map(|s| (*s).to_string()).collect(),
            journal_entries: Vec::new(),
        }));
        let mut nav = WorkNavigator::new();
        nav.resolve(&feed, None);
        nav
    }

    #[test]
    fn update_moves_cursor_both_ways() {
        let mut nav = navigator(&["a", "b"]);
        assert!(update(Message::Advance, &mut nav));
        assert_eq!(nav.cursor(), 1);
        assert!(update(Message::Retreat, &mut nav));
        assert!(update(Message::Retreat, &mut nav));
        assert_eq!(nav.cursor(), 2);
    }

    #[test]
    fn update_without_images_reports_no_change() {
        let mut nav = navigator(&[]);
        assert!(!update(Message::Advance, &mut nav));
        assert!(!update(Message::Retreat, &mut nav));
    }

    #[test]
    fn work_view_renders_every_item_kind() {
        let i18n = I18n::default();
        let source = ContentSource::Directory(PathBuf::from("site"));
        let images = ImageStore::new(4);

        let mut nav = navigator(&["a"]);
        for _ in 0..nav.total_items() {
            drop(view(ViewContext {
                i18n: &i18n,
                navigator: &nav,
                source: &source,
                images: &images,
            }));
            nav.advance();
        }

        let empty = navigator(&[]);
        let loading = WorkNavigator::new();
        for nav in [&empty, &loading] {
            let _element = view(ViewContext {
                i18n: &i18n,
                navigator: nav,
                source: &source,
                images: &images,
            });
        }
    }
}
