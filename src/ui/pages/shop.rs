// SPDX-License-Identifier: MPL-2.0
//! Shop screen: prints split into open and limited editions.
//!
//! The catalog is fetched again on every visit.

use crate::application::content_cache::{LoadState, VisitLoad};
use crate::domain::content::{Edition, ShopCatalog, ShopItem};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::infrastructure::content::ContentSource;
use crate::ui::components::{image_frame, status};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::image_store::ImageStore;
use crate::ui::styles;
use iced::widget::{scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Default)]
pub struct State {
    pub load: VisitLoad<ShopCatalog>,
}

impl State {
    /// Starts a visit; the returned number tags the fetch result.
    pub fn begin_visit(&mut self) -> u64 {
        self.load.begin()
    }

    #[must_use]
    pub fn catalog(&self) -> Option<&ShopCatalog> {
        self.load.state().ready()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded {
        visit: u64,
        result: Result<ShopCatalog, Error>,
    },
}

/// Stores a fetch result; returns `true` if it belonged to the current visit.
pub fn update(message: Message, state: &mut State) -> bool {
    match message {
        Message::Loaded { visit, result } => {
            if let Err(err) = &result {
                tracing::warn!(%err, "shop catalog failed to load");
            }
            state.load.complete(visit, result)
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub source: &'a ContentSource,
    pub images: &'a ImageStore,
}

pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let catalog = match ctx.state.load.state() {
        LoadState::Loading => return status::message(ctx.i18n.tr("shop-loading")),
        LoadState::Failed(message) => {
            return status::error(
                ctx.i18n
                    .tr_with_args("shop-error", &[("message", message.as_str())]),
            )
        }
        LoadState::Ready(catalog) => catalog,
    };

    let column = Column::new()
        .max_width(sizing::READING_WIDTH)
        .spacing(spacing::XL)
        .push(Text::new(ctx.i18n.tr("shop-title")).size(typography::TITLE_LG))
        .push(section(
            &ctx,
            "shop-open-heading",
            "shop-open-empty",
            &catalog.open_edition,
        ))
        .push(section(
            &ctx,
            "shop-limited-heading",
            "shop-limited-empty",
            &catalog.limited_edition,
        ));

    scrollable(
        Container::new(column)
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center),
    )
    .height(Length::Fill)
    .into()
}

fn section<'a, M: 'a>(
    ctx: &ViewContext<'a>,
    heading_key: &str,
    empty_key: &str,
    items: &'a [ShopItem],
) -> Element<'a, M> {
    let column = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(ctx.i18n.tr(heading_key)).size(typography::TITLE_MD));

    if items.is_empty() {
        return column
            .push(
                Text::new(ctx.i18n.tr(empty_key))
                    .size(typography::BODY)
                    .style(styles::text::muted),
            )
            .into();
    }

    items
        .iter()
        .fold(column, |column, item| column.push(item_card(ctx, item)))
        .into()
}

fn item_card<'a, M: 'a>(ctx: &ViewContext<'a>, item: &'a ShopItem) -> Element<'a, M> {
    let slot = item
        .image
        .as_deref()
        .and_then(|reference| ctx.images.slot(&ctx.source.resolve_image(reference)));
    let picture = image_frame::view(
        slot,
        item.title.clone(),
        Length::Fixed(sizing::THUMBNAIL_HEIGHT),
        Length::Fixed(sizing::THUMBNAIL_HEIGHT),
    );

    let availability = if item.is_available() {
        Text::new(ctx.i18n.tr("shop-available"))
            .size(typography::CAPTION)
            .style(styles::text::success)
    } else {
        Text::new(ctx.i18n.tr("shop-sold-out"))
            .size(typography::CAPTION)
            .style(styles::text::error)
    };

    let details = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(Text::new(item.title.as_str()).size(typography::TITLE_SM))
        .push(Text::new(item.description.as_str()).size(typography::BODY))
        .push(
            Text::new(edition_label(ctx.i18n, item))
                .size(typography::CAPTION)
                .style(styles::text::muted),
        )
        .push(Text::new(item.formatted_price()).size(typography::BODY_LG))
        .push(availability);

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(picture)
            .push(details),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::panel)
    .into()
}

/// "Open Edition", or "Limited Edition (available/total)".
///
/// A limited item without a declared total counts its available copies.
#[must_use]
pub fn edition_label(i18n: &I18n, item: &ShopItem) -> String {
    match &item.edition {
        Edition::Limited => {
            let available = item.available.to_string();
            let total = item.total.unwrap_or(item.available).to_string();
            i18n.tr_with_args(
                "shop-limited-edition",
                &[("available", available.as_str()), ("total", total.as_str())],
            )
        }
        Edition::Open => i18n.tr("shop-open-edition"),
        Edition::Other(edition) => edition.clone(),
    }
}
