//! Key routing for the autocomplete widget.
//!
//! Routing is stateless: each keystroke maps to one [`KeyAction`], and the
//! widget turns the action's result into an [`EventOutcome`].

/// Keys the widget distinguishes. Everything else is [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    PageUp,
    PageDown,
    Enter,
    Other,
}

/// Whether a key went down or came back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    Down,
    Up,
}

/// What the host should do with the event after the widget saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The widget consumed the key; suppress the default behavior.
    Handled,
    /// Let the key through (caret movement, text insertion, form submit, ...).
    Propagate,
}

impl EventOutcome {
    pub fn from_handled(handled: bool) -> Self {
        if handled {
            Self::Handled
        } else {
            Self::Propagate
        }
    }

    pub fn is_handled(self) -> bool {
        self == Self::Handled
    }
}

/// Action a keystroke asks the widget to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    SelectPrevious,
    SelectNext,
    Confirm,
    /// Swallow the event with no state change.
    Suppress,
    /// Re-read the input text into the query.
    SyncQuery,
    Ignore,
}

pub fn route(phase: KeyPhase, key: Key) -> KeyAction {
    match (phase, key) {
        (KeyPhase::Down, Key::Up) => KeyAction::SelectPrevious,
        (KeyPhase::Down, Key::Down) => KeyAction::SelectNext,
        (KeyPhase::Down, Key::Enter) => KeyAction::Confirm,
        (KeyPhase::Down, _) => KeyAction::Ignore,
        // Enter keyup never reaches the form, selection or not.
        (KeyPhase::Up, Key::Enter) => KeyAction::Suppress,
        (KeyPhase::Up, _) => KeyAction::SyncQuery,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keydown_routes() {
        assert_eq!(route(KeyPhase::Down, Key::Up), KeyAction::SelectPrevious);
        assert_eq!(route(KeyPhase::Down, Key::Down), KeyAction::SelectNext);
        assert_eq!(route(KeyPhase::Down, Key::Enter), KeyAction::Confirm);
        assert_eq!(route(KeyPhase::Down, Key::PageUp), KeyAction::Ignore);
        assert_eq!(route(KeyPhase::Down, Key::Other), KeyAction::Ignore);
    }

    #[test]
    fn test_keyup_routes() {
        assert_eq!(route(KeyPhase::Up, Key::Enter), KeyAction::Suppress);
        assert_eq!(route(KeyPhase::Up, Key::Other), KeyAction::SyncQuery);
        // Arrow keyup still re-reads the text, like any non-Enter key.
        assert_eq!(route(KeyPhase::Up, Key::Down), KeyAction::SyncQuery);
        assert_eq!(route(KeyPhase::Up, Key::PageDown), KeyAction::SyncQuery);
    }

    #[test]
    fn test_outcome_from_handled() {
        assert!(EventOutcome::from_handled(true).is_handled());
        assert_eq!(EventOutcome::from_handled(false), EventOutcome::Propagate);
    }
}
