// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard and touch listeners exist only while the lightbox is open.
//! Returning [`Subscription::none`] when it closes tears the listener down,
//! so no input reaches the gallery outside that interval.

use super::Message;
use crate::gallery::{self, LightboxInput, NavigationKey};
use iced::{event, keyboard, touch, Subscription};

/// Creates the lightbox input subscription.
pub fn create_lightbox_subscription(lightbox_open: bool) -> Subscription<Message> {
    if !lightbox_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        lightbox_input(&event, status)
            .map(|input| Message::Gallery(gallery::Message::Input(input)))
    })
}

/// Maps a native event to lightbox input.
///
/// Keys already captured by a widget are ignored. Touch events are always
/// forwarded because the arrow buttons capture finger presses that may start
/// a swipe.
pub fn lightbox_input(event: &iced::Event, status: event::Status) -> Option<LightboxInput> {
    match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if status == event::Status::Ignored =>
        {
            navigation_key(key).map(LightboxInput::Key)
        }
        iced::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(LightboxInput::TouchStart { x: position.x })
        }
        iced::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(LightboxInput::TouchMove { x: position.x })
        }
        iced::Event::Touch(touch::Event::FingerLifted { .. }) => Some(LightboxInput::TouchEnd),
        iced::Event::Touch(touch::Event::FingerLost { .. }) => Some(LightboxInput::TouchLost),
        _ => None,
    }
}

/// Keys the lightbox reacts to.
pub fn navigation_key(key: &keyboard::Key) -> Option<NavigationKey> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(NavigationKey::Escape),
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(NavigationKey::ArrowLeft),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(NavigationKey::ArrowRight),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::Named;
    use iced::keyboard::Key;
    use iced::Point;

    fn finger(event: fn(touch::Finger, Point) -> touch::Event, x: f32) -> iced::Event {
        iced::Event::Touch(event(touch::Finger(0), Point::new(x, 10.0)))
    }

    #[test]
    fn navigation_keys_map_to_input() {
        assert_eq!(
            navigation_key(&Key::Named(Named::Escape)),
            Some(NavigationKey::Escape)
        );
        assert_eq!(
            navigation_key(&Key::Named(Named::ArrowLeft)),
            Some(NavigationKey::ArrowLeft)
        );
        assert_eq!(
            navigation_key(&Key::Named(Named::ArrowRight)),
            Some(NavigationKey::ArrowRight)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(navigation_key(&Key::Named(Named::Enter)), None);
        assert_eq!(navigation_key(&Key::Character("a".into())), None);
    }

    #[test]
    fn window_events_are_ignored() {
        let event = iced::Event::Window(iced::window::Event::Focused);
        assert_eq!(lightbox_input(&event, event::Status::Ignored), None);
    }

    #[test]
    fn touch_events_map_to_swipe_input() {
        let pressed = finger(|id, position| touch::Event::FingerPressed { id, position }, 100.0);
        let moved = finger(|id, position| touch::Event::FingerMoved { id, position }, 20.0);
        let lifted = finger(|id, position| touch::Event::FingerLifted { id, position }, 20.0);
        let lost = finger(|id, position| touch::Event::FingerLost { id, position }, 20.0);

        assert_eq!(
            lightbox_input(&pressed, event::Status::Captured),
            Some(LightboxInput::TouchStart { x: 100.0 })
        );
        assert_eq!(
            lightbox_input(&moved, event::Status::Ignored),
            Some(LightboxInput::TouchMove { x: 20.0 })
        );
        assert_eq!(
            lightbox_input(&lifted, event::Status::Ignored),
            Some(LightboxInput::TouchEnd)
        );
        assert_eq!(
            lightbox_input(&lost, event::Status::Ignored),
            Some(LightboxInput::TouchLost)
        );
    }
}
