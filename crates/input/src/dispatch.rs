use octasphere_kernel::ViewState;

use crate::action::Action;
use crate::event::InputEvent;

/// Whether the frame loop keeps running after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Apply one action to the view state.
pub fn apply(action: Action, state: &mut ViewState) -> LoopControl {
    match action {
        Action::Quit => {
            tracing::debug!("quit requested");
            return LoopControl::Exit;
        }
        Action::IncreaseLevel => {
            state.increase_level();
        }
        Action::DecreaseLevel => {
            state.decrease_level();
        }
        Action::Pitch(dy) => state.apply_pitch_delta(dy),
        Action::Noop => {}
    }
    LoopControl::Continue
}

/// Apply every pending event in order.
///
/// Stops at the first event that ends the loop; events queued after it are
/// dropped, since the process is on its way out.
pub fn drain<I>(events: I, state: &mut ViewState) -> LoopControl
where
    I: IntoIterator<Item = InputEvent>,
{
    for event in events {
        if apply(Action::from_event(&event), state) == LoopControl::Exit {
            return LoopControl::Exit;
        }
    }
    LoopControl::Continue
}
