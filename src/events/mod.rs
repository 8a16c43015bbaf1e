//! Event and audio ports between the engine and the presentation layer.
//!
//! ## Listeners
//!
//! `EventListener`s registered on the engine receive every `GameEvent`
//! synchronously, in emission order, before the command returns.
//!
//! ## Audio
//!
//! `AudioPort` receives `SoundCue`s while sound is enabled.

pub mod audio;
pub mod event;

use std::cell::RefCell;
use std::rc::Rc;

pub use audio::{AudioPort, SilentAudio, SoundCue};
pub use event::GameEvent;

/// Receives engine events.
pub trait EventListener {
    fn on_event(&mut self, event: &GameEvent);
}

/// Listener that keeps every event it sees.
///
/// Clones share the same buffer, so one clone can be handed to the engine
/// while another is kept for inspection.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl EventListener for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_shares_buffer() {
        let log = EventLog::new();
        let mut handle = log.clone();

        handle.on_event(&GameEvent::SoundToggled { enabled: false });
        assert_eq!(log.len(), 1);

        assert_eq!(log.events(), vec![GameEvent::SoundToggled { enabled: false }]);
        assert!(!log.is_empty());
    }
}
