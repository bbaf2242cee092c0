// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resizes and the reload shortcut are listened to on every screen.
//! The arrow keys are only listened to while the Work screen is shown: the
//! subscription is not returned on any other screen, so leaving Work stops
//! the keyboard navigation.

use super::{Message, Screen};
use crate::ui::pages::work;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Event, Subscription};

/// Window size changes and `F5` (reload content).
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::F5),
            ..
        }) => Some(Message::ReloadContent),
        _ => None,
    })
}

/// Arrow-key navigation, present only while `screen` is Work.
pub fn create_work_keyboard_subscription(screen: &Screen) -> Subscription<Message> {
    if !screen.is_work() {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        if let event::Status::Captured = status {
            return None;
        }
        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => work_key(&key),
            _ => None,
        }
    })
}

fn work_key(key: &Key) -> Option<Message> {
    match key {
        Key::Named(Named::ArrowRight) => Some(Message::Work(work::Message::Advance)),
        Key::Named(Named::ArrowLeft) => Some(Message::Work(work::Message::Retreat)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::advanced::subscription::into_recipes;

    #[test]
    fn arrow_keys_map_to_work_messages() {
        assert!(matches!(
            work_key(&Key::Named(Named::ArrowRight)),
            Some(Message::Work(work::Message::Advance))
        ));
        assert!(matches!(
            work_key(&Key::Named(Named::ArrowLeft)),
            Some(Message::Work(work::Message::Retreat))
        ));
        assert!(work_key(&Key::Named(Named::ArrowUp)).is_none());
        assert!(work_key(&Key::Character("a".into())).is_none());
    }

    #[test]
    fn arrow_listener_exists_only_on_work() {
        for screen in [
            Screen::Home,
            Screen::Journal,
            Screen::Shop,
            Screen::Info,
            Screen::NotFound("/nowhere".to_string()),
        ] {
            assert!(
                into_recipes(create_work_keyboard_subscription(&screen)).is_empty(),
                "{screen:?} should not listen for arrow keys"
            );
        }

        for screen in [Screen::Work(None), Screen::Work(Some("b1".to_string()))] {
            assert_eq!(
                into_recipes(create_work_keyboard_subscription(&screen)).len(),
                1
            );
        }
    }
}
