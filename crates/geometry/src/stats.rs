use glam::Vec3;
use octasphere_common::ColoredVertex;
use serde::Serialize;

/// Summary of an emitted triangle list.
///
/// `min_radius` and `max_radius` measure distance from the origin; for a true
/// sphere they would both be 1. Subdivided output keeps `max_radius` at 1
/// (the base corners) while `min_radius` drops toward the face centers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshStats {
    pub triangles: usize,
    pub vertices: usize,
    /// Positions after merging exact duplicates.
    pub distinct_positions: usize,
    pub min_radius: f32,
    pub max_radius: f32,
    pub bounds_min: [f32; 3],
    pub bounds_max: [f32; 3],
}

impl MeshStats {
    pub fn from_vertices(vertices: &[ColoredVertex]) -> Self {
        let mut min_radius = f32::INFINITY;
        let mut max_radius = 0.0_f32;
        let mut lo = Vec3::splat(f32::INFINITY);
        let mut hi = Vec3::splat(f32::NEG_INFINITY);

        let mut keys: Vec<[u32; 3]> = Vec::with_capacity(vertices.len());
        for v in vertices {
            let p = v.position();
            let r = p.length();
            min_radius = min_radius.min(r);
            max_radius = max_radius.max(r);
            lo = lo.min(p);
            hi = hi.max(p);
            // Normalize -0.0 so it merges with 0.0.
            keys.push(v.position.map(|c| (c + 0.0).to_bits()));
        }
        keys.sort_unstable();
        keys.dedup();

        if vertices.is_empty() {
            min_radius = 0.0;
            lo = Vec3::ZERO;
            hi = Vec3::ZERO;
        }

        Self {
            triangles: vertices.len() / 3,
            vertices: vertices.len(),
            distinct_positions: keys.len(),
            min_radius,
            max_radius,
            bounds_min: lo.to_array(),
            bounds_max: hi.to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit_polyhedron;

    #[test]
    fn empty_input() {
        let stats = MeshStats::from_vertices(&[]);
        assert_eq!(stats.triangles, 0);
        assert_eq!(stats.distinct_positions, 0);
        assert_eq!(stats.min_radius, 0.0);
        assert_eq!(stats.bounds_min, [0.0; 3]);
    }

    #[test]
    fn octahedron_stats() {
        let mut out = Vec::new();
        emit_polyhedron(0, &mut out);
        let stats = MeshStats::from_vertices(&out);
        assert_eq!(stats.triangles, 8);
        assert_eq!(stats.vertices, 24);
        assert_eq!(stats.distinct_positions, 6);
        assert_eq!(stats.min_radius, 1.0);
        assert_eq!(stats.max_radius, 1.0);
        assert_eq!(stats.bounds_min, [-1.0, -1.0, -1.0]);
        assert_eq!(stats.bounds_max, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn subdivided_surface_sinks_inside_the_sphere() {
        let mut out = Vec::new();
        emit_polyhedron(1, &mut out);
        let stats = MeshStats::from_vertices(&out);
        // 6 corners + 12 edge midpoints.
        assert_eq!(stats.distinct_positions, 18);
        assert!((stats.min_radius - 0.5_f32.sqrt()).abs() < 1e-6);
        assert_eq!(stats.max_radius, 1.0);
    }
}
