//! wgpu render backend.
//!
//! Draws the subdivided polyhedron as one vertex-colored triangle list per
//! frame, depth tested against a 16-bit depth buffer, with no culling and no
//! lighting.
//!
//! # Invariants
//! - Renderer never mutates the view state.
//! - Any failure while bringing up the device is an [`InitError`]; after
//!   setup, a lost surface is reconfigured and the frame skipped.

mod context;
mod gpu;
mod shaders;

pub use context::{GpuContext, InitError};
pub use gpu::WgpuRenderer;
