// SPDX-License-Identifier: MPL-2.0
//! Text color styles.

use crate::ui::design_tokens::palette;
use iced::widget::text;
use iced::Theme;

pub fn error(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::ERROR_500),
    }
}

pub fn success(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::SUCCESS_500),
    }
}

/// Secondary text such as dates, captions and counters.
pub fn muted(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::GRAY_400),
    }
}
