//! Rendering Adapter: renderer-agnostic frame interface.
//!
//! # Invariants
//! - Renderers read the view state; they never mutate it.
//! - The model transform is `T(0, 0, -distance) * Rx(pitch) * Ry(yaw)`.
//! - Yaw advances once per presented frame, in [`present_frame`], not inside
//!   any renderer.

mod renderer;

pub use renderer::{DebugTextRenderer, FrameGeometry, RenderView, Renderer, present_frame};

pub fn crate_info() -> &'static str {
    "octasphere-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
