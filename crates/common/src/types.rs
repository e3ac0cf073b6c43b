use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Three corner positions of a triangle, in winding order.
pub type Triangle = [Vec3; 3];

/// A vertex as it is uploaded to the GPU: position plus RGB color.
///
/// Geometry emitted by the subdivision colors every vertex with its own
/// coordinates, so `color == position` for all vertices the engine produces.
/// Components outside `[0, 1]` are clamped by the shader, not here.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct ColoredVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl ColoredVertex {
    /// Vertex whose color is its own position.
    pub fn from_position(position: Vec3) -> Self {
        let p = position.to_array();
        Self {
            position: p,
            color: p,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_mirrors_position() {
        let v = ColoredVertex::from_position(Vec3::new(0.5, -1.0, 0.25));
        assert_eq!(v.position, [0.5, -1.0, 0.25]);
        assert_eq!(v.color, v.position);
        assert_eq!(v.position(), Vec3::new(0.5, -1.0, 0.25));
    }

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<ColoredVertex>(), 24);
        let v = ColoredVertex::from_position(Vec3::X);
        assert_eq!(bytemuck::bytes_of(&v).len(), 24);
    }
}
