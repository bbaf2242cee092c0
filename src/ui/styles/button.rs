// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Text-only navigation link. The active route is drawn in the accent color.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base_text = theme.extended_palette().background.base.text;
        let text_color = match status {
            button::Status::Disabled => palette::GRAY_400,
            _ if active => palette::ACCENT_500,
            button::Status::Hovered | button::Status::Pressed => palette::ACCENT_400,
            button::Status::Active => base_text,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            snap: true,
            ..Default::default()
        }
    }
}

/// Borderless, transparent button wrapping an image or a whole panel.
pub fn plain(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        snap: true,
        ..Default::default()
    }
}

/// Underlined-looking inline link (email address).
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT_400,
        button::Status::Disabled => theme.extended_palette().background.weak.text,
        button::Status::Active => palette::ACCENT_500,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        snap: true,
        ..Default::default()
    }
}

/// Square icon-like button for the menu toggle and close controls.
pub fn menu_toggle(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(palette.background.strong.color.into()),
        _ => None,
    };
    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        snap: true,
        ..Default::default()
    }
}
