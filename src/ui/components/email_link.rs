// SPDX-License-Identifier: MPL-2.0
//! Contact email link.
//!
//! The address is stored split in two and only assembled here, when the
//! link is drawn. Pressing it copies the address to the clipboard.

use crate::domain::content::EmailAddress;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::{alignment, Element};

pub fn view<'a, Message: Clone + 'a>(
    i18n: &I18n,
    email: Option<&EmailAddress>,
    copied: bool,
    on_press: impl Fn(String) -> Message,
) -> Element<'a, Message> {
    let Some(email) = email else {
        return Text::new(i18n.tr("info-email-unavailable"))
            .size(typography::BODY)
            .into();
    };

    let address = email.assemble();
    let link = button(Text::new(address.clone()).size(typography::BODY))
        .padding(0)
        .style(styles::button::link)
        .on_press(on_press(address));

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(link);
    if copied {
        row = row.push(
            Text::new(i18n.tr("info-email-copied"))
                .size(typography::CAPTION)
                .style(styles::text::success),
        );
    }
    row.into()
}
