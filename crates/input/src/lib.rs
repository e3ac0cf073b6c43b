//! Input: platform-neutral events, the actions they map to, and the dispatcher
//! that applies actions to the view state.
//!
//! # Invariants
//! - Windowing backends translate their events into [`InputEvent`]; nothing
//!   downstream sees platform types.
//! - The only terminal transition is [`LoopControl::Exit`].

pub mod action;
pub mod dispatch;
pub mod event;

pub use action::Action;
pub use dispatch::{LoopControl, apply, drain};
pub use event::{InputEvent, Key, ParseEventError, parse_script};

pub fn crate_info() -> &'static str {
    "octasphere-input v0.1.0"
}
