use glam::Vec3;
use octasphere_common::Triangle;

/// Octahedron corners: +X, -X, +Y, -Y, +Z, -Z.
pub const VERTICES: [Vec3; 6] = [
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(-1.0, 0.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, -1.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(0.0, 0.0, -1.0),
];

/// Faces as index triples into [`VERTICES`]: four around the top apex, four
/// around the bottom apex.
#[rustfmt::skip]
pub const FACES: [[usize; 3]; 8] = [
    [2, 4, 0], [2, 0, 5], [2, 5, 1], [2, 1, 4],
    [3, 0, 4], [3, 5, 0], [3, 1, 5], [3, 4, 1],
];

/// The eight base faces resolved to positions, in [`FACES`] order.
pub fn base_triangles() -> impl Iterator<Item = Triangle> {
    FACES
        .iter()
        .map(|&[a, b, c]| [VERTICES[a], VERTICES[b], VERTICES[c]])
}
