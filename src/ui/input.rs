/// Raw keyboard / mouse input for the browser screen
///
/// Device codes stop here; the rest of the app only sees `BrowseEvent`s.
use iced::event::{self, Event};
use iced::keyboard::{self, key::Named, Key};
use iced::mouse::{self, ScrollDelta};
use iced::window;

use super::browse::BrowseEvent;

/// Map a key press to a paging event
pub fn event_for_key(key: &Key) -> Option<BrowseEvent> {
    match key {
        Key::Named(Named::ArrowDown | Named::ArrowRight | Named::PageDown) => Some(BrowseEvent::Next),
        Key::Named(Named::ArrowUp | Named::ArrowLeft | Named::PageUp) => Some(BrowseEvent::Previous),
        _ => None,
    }
}

/// Map a wheel movement to a paging event (wheel down pages forward)
pub fn event_for_wheel(delta: ScrollDelta) -> Option<BrowseEvent> {
    let y = match delta {
        ScrollDelta::Lines { y, .. } => y,
        ScrollDelta::Pixels { y, .. } => y,
    };

    if y < 0.0 {
        Some(BrowseEvent::Next)
    } else if y > 0.0 {
        Some(BrowseEvent::Previous)
    } else {
        None
    }
}

/// Listener for `iced::event::listen_with`.
///
/// Events a widget already handled (e.g. scrolling the file list) are left alone.
pub fn browse_event(event: Event, status: event::Status, _window: window::Id) -> Option<BrowseEvent> {
    if matches!(status, event::Status::Captured) {
        return None;
    }

    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => event_for_key(&key),
        Event::Mouse(mouse::Event::WheelScrolled { delta }) => event_for_wheel(delta),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(event_for_key(&Key::Named(Named::ArrowDown)), Some(BrowseEvent::Next));
        assert_eq!(event_for_key(&Key::Named(Named::PageDown)), Some(BrowseEvent::Next));
        assert_eq!(event_for_key(&Key::Named(Named::ArrowUp)), Some(BrowseEvent::Previous));
        assert_eq!(event_for_key(&Key::Named(Named::PageUp)), Some(BrowseEvent::Previous));
        assert_eq!(event_for_key(&Key::Named(Named::Enter)), None);
        assert_eq!(event_for_key(&Key::Character("n".into())), None);
    }

    #[test]
    fn test_wheel() {
        assert_eq!(event_for_wheel(ScrollDelta::Lines { x: 0.0, y: -1.0 }), Some(BrowseEvent::Next));
        assert_eq!(event_for_wheel(ScrollDelta::Pixels { x: 0.0, y: 24.0 }), Some(BrowseEvent::Previous));
        assert_eq!(event_for_wheel(ScrollDelta::Lines { x: 3.0, y: 0.0 }), None);
    }

    #[test]
    fn test_captured_events_are_ignored() {
        let event = Event::Mouse(mouse::Event::WheelScrolled {
            delta: ScrollDelta::Lines { x: 0.0, y: -1.0 },
        });

        assert_eq!(browse_event(event.clone(), event::Status::Captured, window::Id::unique()), None);
        assert_eq!(
            browse_event(event, event::Status::Ignored, window::Id::unique()),
            Some(BrowseEvent::Next)
        );
    }
}
