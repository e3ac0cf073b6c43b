//! Geometry: the fixed base octahedron and its recursive subdivision.
//!
//! Generation is a pure function that appends into a caller-owned buffer, so
//! it runs and is tested without any graphics context.
//!
//! # Invariants
//! - Subdividing one triangle at depth `d` emits exactly `4^d` triangles.
//! - Every emitted vertex is colored by its own position.
//! - Midpoints are never projected onto the unit sphere.

mod octahedron;
mod stats;
mod subdivide;

pub use octahedron::{FACES, VERTICES, base_triangles};
pub use stats::MeshStats;
pub use subdivide::{
    emit_polyhedron, polyhedron_triangle_count, polyhedron_vertex_count, subdivide,
    triangle_count, vertex_count,
};

pub fn crate_info() -> &'static str {
    "octasphere-geometry v0.1.0"
}
