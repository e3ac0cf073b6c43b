use glam::Vec3;
use octasphere_common::ColoredVertex;

use crate::octahedron::{FACES, base_triangles};

/// Append triangle `abc`, split `depth` times, to `out`.
///
/// Each level replaces a triangle with the three corner triangles formed by
/// its edge midpoints plus the central midpoint triangle, keeping the input
/// winding. Midpoints are plain averages; they are not pushed back out to the
/// sphere, so the surface stays flat within each base face.
///
/// Emits `3 * 4^depth` vertices, each colored by its own position.
pub fn subdivide(a: Vec3, b: Vec3, c: Vec3, depth: u32, out: &mut Vec<ColoredVertex>) {
    if depth == 0 {
        out.extend([a, b, c].map(ColoredVertex::from_position));
        return;
    }

    let ab = (a + b) * 0.5;
    let bc = (b + c) * 0.5;
    let ca = (c + a) * 0.5;

    let depth = depth - 1;
    subdivide(a, ab, ca, depth, out);
    subdivide(b, bc, ab, depth, out);
    subdivide(c, ca, bc, depth, out);
    subdivide(ab, bc, ca, depth, out);
}

/// Append the whole base octahedron, every face split `depth` times.
///
/// The output is one flat triangle list ready for a single draw call.
pub fn emit_polyhedron(depth: u32, out: &mut Vec<ColoredVertex>) {
    out.reserve(polyhedron_vertex_count(depth));
    for [a, b, c] in base_triangles() {
        subdivide(a, b, c, depth, out);
    }
}

/// Triangles produced by subdividing a single triangle `depth` times.
pub const fn triangle_count(depth: u32) -> usize {
    4usize.pow(depth)
}

/// Vertices emitted by subdividing a single triangle `depth` times.
pub const fn vertex_count(depth: u32) -> usize {
    3 * triangle_count(depth)
}

/// Triangles in the full polyhedron at `depth`.
pub const fn polyhedron_triangle_count(depth: u32) -> usize {
    FACES.len() * triangle_count(depth)
}

/// Vertices emitted for the full polyhedron at `depth`.
pub const fn polyhedron_vertex_count(depth: u32) -> usize {
    FACES.len() * vertex_count(depth)
}
