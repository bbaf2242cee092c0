// SPDX-License-Identifier: MPL-2.0
//! Home screen: a few random images from the shared pool.
//!
//! Clicking an image swaps it for another one that is not on screen.

use crate::application::query::HomeSelection;
use crate::domain::content::ImageRef;
use crate::i18n::fluent::I18n;
use crate::infrastructure::content::ContentSource;
use crate::ui::components::{image_frame, status};
use crate::ui::design_tokens::spacing;
use crate::ui::image_store::ImageStore;
use crate::ui::styles;
use iced::widget::{button, Row};
use iced::{Element, Length};
use rand::Rng;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// `None` until the image pool is available.
    pub selection: Option<&'a HomeSelection>,
    pub source: &'a ContentSource,
    pub images: &'a ImageStore,
}

#[derive(Debug, Clone)]
pub enum Message {
    ImageClicked(ImageRef),
}

/// Applies a click; returns the replacement image, if any.
pub fn update<R: Rng + ?Sized>(
    message: Message,
    selection: &mut HomeSelection,
    pool: &[ImageRef],
    rng: &mut R,
) -> Option<ImageRef> {
    match message {
        Message::ImageClicked(clicked) => {
            tracing::debug!(image = %clicked, "replacing home image");
            selection.replace(&clicked, pool, rng)
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(selection) = ctx.selection else {
        return status::message(ctx.i18n.tr("home-loading"));
    };
    if selection.displayed().is_empty() {
        return status::message(ctx.i18n.tr("home-empty"));
    }

    let row = selection.displayed().iter().enumerate().fold(
        Row::new().spacing(spacing::MD),
        |row, (index, reference)| {
            let number = (index + 1).to_string();
            let alt = ctx
                .i18n
                .tr_with_args("home-image-alt", &[("number", number.as_str())]);
            let slot = ctx.images.slot(&ctx.source.resolve_image(reference));
            let frame = image_frame::view(slot, alt, Length::Fill, Length::Fill);
            row.push(
                button(frame)
                    .padding(0)
                    .width(Length::FillPortion(1))
                    .height(Length::Fill)
                    .style(styles::button::plain)
                    .on_press(Message::ImageClicked(reference.clone())),
            )
        },
    );

    iced::widget::Container::new(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .into()
}
