//! View Kernel: the interactive state of the viewer and the frame-pacing policy.
//!
//! # Invariants
//! - Subdivision level is always within `[Level::MIN, Level::MAX]`.
//! - Pitch is always within `[-PITCH_LIMIT, PITCH_LIMIT]`.
//! - Yaw only ever grows, by `YAW_STEP` per rendered frame, and is never wrapped.
//! - All state mutations flow through explicit operations on `ViewState`.

pub mod clock;
pub mod view;

pub use clock::{FRAME_INTERVAL, FramePacer, FrameTimer};
pub use view::{INITIAL_YAW, Level, LevelError, PITCH_LIMIT, ViewState, YAW_STEP};

pub fn crate_info() -> &'static str {
    "octasphere-kernel v0.1.0"
}
