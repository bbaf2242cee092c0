// SPDX-License-Identifier: MPL-2.0
//! Renders an image slot from the [`ImageStore`](crate::ui::image_store::ImageStore).

use crate::ui::design_tokens::{palette, typography};
use crate::ui::image_store::ImageSlot;
use crate::ui::styles;
use iced::widget::{Container, Image, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Image scaled to fit its box, or a text placeholder while it is missing.
///
/// `alt` is shown in place of images that failed to load.
pub fn view<'a, Message: 'a>(
    slot: Option<&ImageSlot>,
    alt: String,
    width: Length,
    height: Length,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match slot {
        Some(ImageSlot::Ready(handle)) => Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(width)
            .height(height)
            .into(),
        Some(ImageSlot::Failed(_)) => Text::new(alt)
            .size(typography::CAPTION)
            .style(styles::text::error)
            .into(),
        Some(ImageSlot::Loading) | None => Text::new("…")
            .size(typography::TITLE_MD)
            .color(palette::GRAY_400)
            .into(),
    };

    Container::new(content)
        .width(width)
        .height(height)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
