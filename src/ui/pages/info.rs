// SPDX-License-Identifier: MPL-2.0
//! Info screen: biography, CV and contact address.

use crate::application::content_cache::{LoadState, VisitLoad};
use crate::domain::content::{EmailAddress, Info};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::components::{email_link, html_text, status};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{scrollable, Column, Container, Text};
use iced::{alignment, Element, Length};

/// The info document prepared for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub biography: Vec<String>,
    pub cv: Vec<String>,
    pub email: Option<EmailAddress>,
}

impl Profile {
    #[must_use]
    pub fn from_info(info: &Info) -> Self {
        Self {
            biography: html_text::paragraphs(&info.bio),
            cv: html_text::paragraphs(&info.cv),
            email: EmailAddress::split(&info.email),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.biography.is_empty() && self.cv.is_empty() && self.email.is_none()
    }
}

#[derive(Debug, Default)]
pub struct State {
    pub load: VisitLoad<Profile>,
    /// Set once the address has been copied during this visit.
    pub copied: bool,
}

impl State {
    pub fn begin_visit(&mut self) -> u64 {
        self.copied = false;
        self.load.begin()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded {
        visit: u64,
        result: Result<Info, Error>,
    },
    CopyEmail(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    CopyToClipboard(String),
}

pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::Loaded { visit, result } => {
            if let Err(err) = &result {
                tracing::warn!(%err, "info document failed to load");
            }
            state
                .load
                .complete(visit, result.map(|info| Profile::from_info(&info)));
            Event::None
        }
        Message::CopyEmail(address) => {
            state.copied = true;
            Event::CopyToClipboard(address)
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let profile = match ctx.state.load.state() {
        LoadState::Loading => return status::message(ctx.i18n.tr("info-loading")),
        LoadState::Failed(message) => {
            return status::error(
                ctx.i18n
                    .tr_with_args("info-error", &[("message", message.as_str())]),
            )
        }
        LoadState::Ready(profile) if profile.is_empty() => {
            return status::message(ctx.i18n.tr("info-empty"))
        }
        LoadState::Ready(profile) => profile,
    };

    let contact = email_link::view(
        ctx.i18n,
        profile.email.as_ref(),
        ctx.state.copied,
        Message::CopyEmail,
    );

    let column = Column::new()
        .max_width(sizing::READING_WIDTH)
        .spacing(spacing::LG)
        .push(Text::new(ctx.i18n.tr("info-title")).size(typography::TITLE_LG))
        .push(section(ctx.i18n.tr("info-biography"), &profile.biography))
        .push(section(ctx.i18n.tr("info-cv"), &profile.cv))
        .push(
            Column::new()
                .spacing(spacing::SM)
                .push(Text::new(ctx.i18n.tr("info-contact")).size(typography::TITLE_MD))
                .push(contact),
        );

    scrollable(
        Container::new(column)
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center),
    )
    .height(Length::Fill)
    .into()
}

fn section<'a>(heading: String, paragraphs: &'a [String]) -> Element<'a, Message> {
    paragraphs
        .iter()
        .fold(
            Column::new()
                .spacing(spacing::SM)
                .push(Text::new(heading).size(typography::TITLE_MD)),
            |column, paragraph| column.push(Text::new(paragraph.as_str()).size(typography::BODY)),
        )
        .into()
}
