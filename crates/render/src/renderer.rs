use glam::{Mat4, Vec3};
use octasphere_common::ColoredVertex;
use octasphere_geometry::{emit_polyhedron, polyhedron_vertex_count};
use octasphere_kernel::{Level, ViewState};

/// Surface and projection configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Surface size in pixels.
    pub width: u32,
    pub height: u32,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// How far the model sits in front of the eye, along -Z.
    pub distance: f32,
    /// Clear color, RGBA.
    pub clear_color: [f64; 4],
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 100.0,
            distance: 2.0,
            clear_color: [0.5, 0.5, 0.5, 1.0],
        }
    }
}

impl RenderView {
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect(),
            self.near,
            self.far,
        )
    }

    /// Model transform for the current rotation.
    ///
    /// Pitch is composed before yaw, so vertices are spun about Y first and
    /// then tilted about X.
    pub fn model_matrix(&self, state: &ViewState) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.distance))
            * Mat4::from_rotation_x(state.pitch().to_radians())
            * Mat4::from_rotation_y(state.yaw().to_radians())
    }

    pub fn model_view_projection(&self, state: &ViewState) -> Mat4 {
        self.projection_matrix() * self.model_matrix(state)
    }
}

/// Reusable per-frame vertex buffer.
///
/// Geometry is regenerated every frame from the current level into the same
/// allocation, sized once for the finest level.
#[derive(Debug)]
pub struct FrameGeometry {
    vertices: Vec<ColoredVertex>,
}

impl Default for FrameGeometry {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameGeometry {
    pub fn new() -> Self {
        Self {
            vertices: Vec::with_capacity(polyhedron_vertex_count(Level::MAX.depth())),
        }
    }

    /// Emit the polyhedron at `level`, replacing the previous frame.
    pub fn build(&mut self, level: Level) -> &[ColoredVertex] {
        self.vertices.clear();
        emit_polyhedron(level.depth(), &mut self.vertices);
        &self.vertices
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the view state and a view configuration, then produces
/// output. It never mutates the state. `&mut self` lets implementations keep
/// scratch buffers between frames.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given state and view.
    fn render(&mut self, state: &ViewState, view: &RenderView) -> Self::Output;
}

/// Render one frame, then take the per-frame auto-rotation step.
pub fn present_frame<R>(renderer: &mut R, state: &mut ViewState, view: &RenderView) -> R::Output
where
    R: Renderer + ?Sized,
{
    let output = renderer.render(state, view);
    state.advance_yaw();
    output
}

/// Headless renderer producing a text description of each frame.
///
/// Useful for CLI output, logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    geometry: FrameGeometry,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&mut self, state: &ViewState, view: &RenderView) -> String {
        let vertices = self.geometry.build(state.level());
        let mvp = view.model_view_projection(state);
        let origin = mvp.project_point3(Vec3::ZERO);

        let mut out = String::new();
        out.push_str(&format!(
            "=== Frame (yaw={:.2}, pitch={:.2}, level={}) ===\n",
            state.yaw(),
            state.pitch(),
            state.level()
        ));
        out.push_str(&format!("Triangles: {}\n", vertices.len() / 3));
        out.push_str(&format!("Vertices: {}\n", vertices.len()));
        out.push_str(&format!(
            "View: {}x{} fov={:.0} near={} far={} distance={}\n",
            view.width, view.height, view.fov_y_degrees, view.near, view.far, view.distance
        ));
        out.push_str(&format!(
            "Origin NDC: ({:.3}, {:.3}, {:.3})\n",
            origin.x, origin.y, origin.z
        ));
        out
    }
}
