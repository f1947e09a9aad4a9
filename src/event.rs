//! Host events consumed by the widget.
//!
//! The carousel only cares about viewport resizes; the bridge also surfaces a
//! quit signal so a demo loop can exit cleanly. Everything else the terminal
//! emits is dropped here.

use crossterm::event::{Event, EventStream, KeyCode, KeyModifiers};
use futures::StreamExt;

/// An event the carousel host reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The terminal viewport changed size.
    Resize { width: u16, height: u16 },
    /// The user asked to quit (`q` or ctrl-c).
    Quit,
}

/// Map a raw crossterm event to a [`HostEvent`], if it is one we care about.
pub fn map_event(event: &Event) -> Option<HostEvent> {
    match event {
        Event::Resize(width, height) => Some(HostEvent::Resize {
            width: *width,
            height: *height,
        }),
        Event::Key(key) => match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => Some(HostEvent::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(HostEvent::Quit)
            }
            _ => None,
        },
        _ => None,
    }
}

/// Async bridge from the crossterm event stream to [`HostEvent`]s.
pub struct EventBridge {
    stream: EventStream,
}

impl EventBridge {
    /// Create a bridge over the terminal's event stream.
    pub fn new() -> Self {
        Self {
            stream: EventStream::new(),
        }
    }

    /// The next relevant host event, skipping everything else.
    ///
    /// Returns `None` once the underlying stream ends.
    pub async fn next(&mut self) -> Option<HostEvent> {
        while let Some(event) = self.stream.next().await {
            let Ok(event) = event else { continue };
            if let Some(host_event) = map_event(&event) {
                return Some(host_event);
            }
        }
        None
    }
}

impl Default for EventBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn resize_maps_to_resize() {
        let event = Event::Resize(120, 40);
        assert_eq!(
            map_event(&event),
            Some(HostEvent::Resize {
                width: 120,
                height: 40
            })
        );
    }

    #[test]
    fn q_maps_to_quit() {
        let event = key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(map_event(&event), Some(HostEvent::Quit));
    }

    #[test]
    fn ctrl_c_maps_to_quit() {
        let event = key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_event(&event), Some(HostEvent::Quit));
    }

    #[test]
    fn unbound_key_is_dropped() {
        let event = key(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(map_event(&event), None);
    }

    #[test]
    fn focus_events_are_dropped() {
        assert_eq!(map_event(&Event::FocusGained), None);
        assert_eq!(map_event(&Event::FocusLost), None);
    }
}
