// SPDX-License-Identifier: MPL-2.0
//! Routes without content of their own.

use crate::i18n::fluent::I18n;
use crate::ui::components::status;
use iced::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    About,
    Gallery,
    Contact,
    NotFound,
}

impl Placeholder {
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            Placeholder::About => "placeholder-about",
            Placeholder::Gallery => "placeholder-gallery",
            Placeholder::Contact => "placeholder-contact",
            Placeholder::NotFound => "state-not-found",
        }
    }
}

pub fn view<'a, Message: 'a>(i18n: &I18n, placeholder: Placeholder) -> Element<'a, Message> {
    status::message(i18n.tr(placeholder.message_key()))
}
