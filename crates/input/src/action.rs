use crate::event::{InputEvent, Key};

/// A high-level action produced from an input event.
///
/// The view state consumes actions, never raw input events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Leave the frame loop with a success status.
    Quit,
    /// Subdivide one level finer.
    IncreaseLevel,
    /// Subdivide one level coarser.
    DecreaseLevel,
    /// Tilt by a vertical pointer delta, in degrees.
    Pitch(f32),
    /// Event with no effect on the viewer.
    Noop,
}

impl Action {
    /// Map a raw event to the action it triggers.
    ///
    /// Horizontal pointer motion is ignored.
    pub fn from_event(event: &InputEvent) -> Self {
        match *event {
            InputEvent::Quit => Action::Quit,
            InputEvent::KeyDown(Key::Escape) => Action::Quit,
            InputEvent::KeyDown(Key::NumpadPlus) => Action::IncreaseLevel,
            InputEvent::KeyDown(Key::NumpadMinus) => Action::DecreaseLevel,
            InputEvent::KeyDown(Key::Other) => Action::Noop,
            InputEvent::MouseMotion { dy, .. } => Action::Pitch(dy),
            InputEvent::Other => Action::Noop,
        }
    }
}

impl From<InputEvent> for Action {
    fn from(event: InputEvent) -> Self {
        Self::from_event(&event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_sources() {
        assert_eq!(Action::from(InputEvent::Quit), Action::Quit);
        assert_eq!(Action::from(InputEvent::KeyDown(Key::Escape)), Action::Quit);
    }

    #[test]
    fn level_keys() {
        assert_eq!(
            Action::from(InputEvent::KeyDown(Key::NumpadPlus)),
            Action::IncreaseLevel
        );
        assert_eq!(
            Action::from(InputEvent::KeyDown(Key::NumpadMinus)),
            Action::DecreaseLevel
        );
    }

    #[test]
    fn motion_uses_vertical_delta_only() {
        let a = Action::from(InputEvent::MouseMotion { dx: 40.0, dy: -3.0 });
        assert_eq!(a, Action::Pitch(-3.0));
        let b = Action::from(InputEvent::MouseMotion { dx: 40.0, dy: 0.0 });
        assert_eq!(b, Action::Pitch(0.0));
    }

    #[test]
    fn unbound_events_are_noops() {
        assert_eq!(Action::from(InputEvent::KeyDown(Key::Other)), Action::Noop);
        assert_eq!(Action::from(InputEvent::Other), Action::Noop);
    }
}
