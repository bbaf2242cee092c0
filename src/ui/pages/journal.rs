// SPDX-License-Identifier: MPL-2.0
//! Journal screen: entries from the shared feed, newest first.

use crate::application::content_cache::{LoadState, WorkFeed};
use crate::domain::content::{sort_newest_first, JournalEntry};
use crate::i18n::fluent::I18n;
use crate::infrastructure::content::ContentSource;
use crate::ui::components::journal_entry;
use crate::ui::components::status;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::image_store::ImageStore;
use crate::ui::styles;
use iced::widget::{scrollable, Column, Container, Space, Text};
use iced::{alignment, Element, Length};
use std::sync::Arc;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub entries: &'a LoadState<Vec<JournalEntry>>,
    pub source: &'a ContentSource,
    pub images: &'a ImageStore,
}

/// Derives the displayed entries from the feed.
#[must_use]
pub fn entries_from_feed(feed: &LoadState<Arc<WorkFeed>>) -> LoadState<Vec<JournalEntry>> {
    match feed {
        LoadState::Loading => LoadState::Loading,
        LoadState::Failed(message) => LoadState::Failed(message.clone()),
        LoadState::Ready(feed) => LoadState::Ready(sort_newest_first(&feed.journal_entries)),
    }
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let entries = match ctx.entries {
        LoadState::Loading => return status::message(ctx.i18n.tr("journal-loading")),
        LoadState::Failed(message) => {
            return status::error(
                ctx.i18n
                    .tr_with_args("journal-error", &[("message", message.as_str())]),
            )
        }
        LoadState::Ready(entries) if entries.is_empty() => {
            return status::message(ctx.i18n.tr("journal-empty"))
        }
        LoadState::Ready(entries) => entries,
    };

    let entry_ctx = journal_entry::ViewContext {
        i18n: ctx.i18n,
        source: ctx.source,
        images: ctx.images,
    };
    let mut column = Column::new()
        .max_width(sizing::READING_WIDTH)
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("journal-title")).size(typography::TITLE_LG));
    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            column = column.push(
                Container::new(Space::new())
                    .width(Length::Fill)
                    .height(1)
                    .style(styles::container::divider),
            );
        }
        column = column.push(journal_entry::view(&entry_ctx, entry));
    }

    scrollable(
        Container::new(column)
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center),
    )
    .height(Length::Fill)
    .into()
}
