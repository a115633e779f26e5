use crossterm::event::{Event, KeyEvent, KeyEventKind};

/// Input the main loop feeds to `handle_event`.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Tick interval elapsed; re-collect and re-render.
    Tick,
}

impl AppEvent {
    /// Translates a terminal event. Only key presses matter; resizes are
    /// picked up by the next draw and key releases/repeats are dropped.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
            _ => None,
        }
    }
}

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Exit,
}

impl EventResult {
    pub fn should_exit(self) -> bool {
        matches!(self, EventResult::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn only_key_presses_become_app_events() {
        let press = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(
            AppEvent::from_terminal(Event::Key(press)),
            Some(AppEvent::Key(key)) if key.code == KeyCode::Char('q')
        ));

        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(AppEvent::from_terminal(Event::Key(release)).is_none());
        assert!(AppEvent::from_terminal(Event::Resize(80, 24)).is_none());
    }
}
