//! Shared types for the octasphere workspace.

mod types;

pub use types::{ColoredVertex, Triangle};
