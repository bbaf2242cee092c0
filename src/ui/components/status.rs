// SPDX-License-Identifier: MPL-2.0
//! Centered one-line messages for loading, error and empty states.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{Container, Text};
use iced::{alignment, Element, Length};

/// Neutral message (loading, empty lists, placeholders).
pub fn message<'a, Message: 'a>(content: String) -> Element<'a, Message> {
    centered(
        Text::new(content)
            .size(typography::BODY_LG)
            .color(palette::GRAY_400),
    )
}

/// Error message in the error color.
pub fn error<'a, Message: 'a>(content: String) -> Element<'a, Message> {
    centered(
        Text::new(content)
            .size(typography::BODY_LG)
            .style(styles::text::error),
    )
}

fn centered<'a, Message: 'a>(text: Text<'a>) -> Element<'a, Message> {
    Container::new(text)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
