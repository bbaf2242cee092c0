// SPDX-License-Identifier: MPL-2.0
//! A single journal entry card.

use crate::domain::content::{EntryKind, JournalEntry};
use crate::i18n::fluent::I18n;
use crate::infrastructure::content::ContentSource;
use crate::ui::components::image_frame;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::image_store::ImageStore;
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub source: &'a ContentSource,
    pub images: &'a ImageStore,
}

pub fn view<'a, Message: 'a>(ctx: &ViewContext<'_>, entry: &JournalEntry) -> Element<'a, Message> {
    let header = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(entry.title.clone()).size(typography::TITLE_SM))
        .push(
            Text::new(entry.display_date())
                .size(typography::CAPTION)
                .style(styles::text::muted),
        );

    let mut card = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(body(ctx, entry));

    if !entry.tags.is_empty() {
        let tags = entry.tags.iter().fold(
            Row::new()
                .spacing(spacing::XS)
                .push(Text::new(ctx.i18n.tr("journal-tags")).size(typography::CAPTION)),
            |row, tag| {
                row.push(
                    Container::new(Text::new(tag.clone()).size(typography::CAPTION))
                        .padding([spacing::XXS / 2.0, spacing::XS])
                        .style(styles::container::tag),
                )
            },
        );
        card = card.push(tags);
    }

    Container::new(card)
        .width(Length::Fill)
        .padding([spacing::MD, 0.0])
        .into()
}

fn body<'a, Message: 'a>(ctx: &ViewContext<'_>, entry: &JournalEntry) -> Element<'a, Message> {
    let text_content = entry.text_content.clone().unwrap_or_default();
    match &entry.kind {
        EntryKind::Text => Text::new(text_content).size(typography::BODY).into(),
        // Each line of a poem is kept as written.
        EntryKind::Poem => text_content
            .lines()
            .fold(Column::new(), |column, line| {
                column.push(Text::new(line.to_string()).size(typography::BODY))
            })
            .into(),
        EntryKind::Image => {
            let alt = if entry.title.is_empty() {
                ctx.i18n.tr("journal-image-alt")
            } else {
                entry.title.clone()
            };
            let slot = entry
                .image
                .as_deref()
                .and_then(|reference| ctx.images.slot(&ctx.source.resolve_image(reference)));
            let mut column = Column::new().spacing(spacing::XS).push(image_frame::view(
                slot,
                alt,
                Length::Fill,
                Length::Fixed(sizing::THUMBNAIL_HEIGHT * 1.5),
            ));
            if let Some(caption) = &entry.caption {
                column = column.push(
                    Text::new(caption.clone())
                        .size(typography::CAPTION)
                        .style(styles::text::muted),
                );
            }
            column.into()
        }
        EntryKind::Other(kind) => Text::new(
            ctx.i18n
                .tr_with_args("journal-unknown-type", &[("kind", kind.as_str())]),
        )
        .size(typography::BODY)
        .into(),
    }
}
