use glam::Vec3;
use rebound_scene::{CameraNode, NodeKind, Scene};

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 5.0, -10.0),
            target: Vec3::ZERO,
            fov_degrees: 60.0,
        }
    }
}

impl From<&CameraNode> for RenderView {
    fn from(camera: &CameraNode) -> Self {
        Self {
            eye: camera.eye,
            target: camera.target,
            fov_degrees: camera.fov_degrees,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads scene state and a view configuration, then produces
/// output. It never mutates the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given scene and view.
    fn render(&self, scene: &Scene, view: &RenderView) -> Self::Output;
}

/// Text renderer for headless hosts.
///
/// Produces a human-readable string representation of the scene. Used for
/// CLI output, logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, view: &RenderView) -> String {
        let mut out = String::new();
        out.push_str(&format!("=== Scene ({} nodes) ===\n", scene.len()));
        out.push_str(&format!(
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}\n",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.fov_degrees
        ));

        for node in scene.nodes().values() {
            let p = node.transform.position;
            let kind = match &node.kind {
                NodeKind::Mesh { .. } => "mesh",
                NodeKind::Light(_) => "light",
                NodeKind::Camera(_) => "camera",
            };
            out.push_str(&format!(
                "  {:<8} {:<8} pos=({:.3}, {:.3}, {:.3})\n",
                node.name, kind, p.x, p.y, p.z
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rebound_scene::demo::bounce_scene;

    #[test]
    fn debug_renderer_empty_scene() {
        let scene = Scene::new();
        let renderer = DebugTextRenderer::new();
        let output = renderer.render(&scene, &RenderView::default());
        assert!(output.contains("0 nodes"));
    }

    #[test]
    fn debug_renderer_lists_demo_nodes() {
        let demo = bounce_scene();
        let renderer = DebugTextRenderer::new();
        let output = renderer.render(&demo.scene, &RenderView::default());

        assert!(output.contains("4 nodes"));
        assert!(output.contains("sphere"));
        assert!(output.contains("ground"));
        assert!(output.contains("light"));
    }

    #[test]
    fn render_view_from_scene_camera() {
        let demo = bounce_scene();
        let camera = demo.scene.first_camera().unwrap();
        let view = RenderView::from(camera);
        assert_eq!(view.eye, Vec3::new(0.0, 5.0, -10.0));
        assert_eq!(view.target, Vec3::ZERO);
        assert_eq!(view.fov_degrees, 60.0);
    }
}
