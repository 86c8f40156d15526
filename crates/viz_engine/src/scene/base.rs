//! Scene root
//!
//! A [`Scene`] is the root of a node tree: it owns the camera and the clear
//! color, advances the camera before its children, and renders by clearing,
//! loading the camera view, then propagating to the children. The engine's
//! scene stack drives the `on_push`/`on_pop` lifecycle hooks.

use crate::foundation::color::Color;
use crate::render::Painter;
use crate::scene::camera::SceneCamera;
use crate::scene::node::SceneNode;

/// Root node of a scene tree, owning the camera and clear color
pub struct Scene {
    camera: SceneCamera,
    clear_color: Color,
    children: Vec<Box<dyn SceneNode>>,
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("camera", &self.camera)
            .field("clear_color", &self.clear_color)
            .field("children", &self.children.len())
            .finish()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene with a default camera
    pub fn new() -> Self {
        Self {
            camera: SceneCamera::default(),
            clear_color: Color::BLACK,
            children: Vec::new(),
        }
    }

    /// The scene camera
    pub fn camera(&self) -> &SceneCamera {
        &self.camera
    }

    /// Mutable access to the scene camera
    pub fn camera_mut(&mut self) -> &mut SceneCamera {
        &mut self.camera
    }

    /// The clear color
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Set the clear color
    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    /// Update the viewport size on the camera (window resize)
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    /// Take ownership of a child node
    pub fn add_node(&mut self, node: Box<dyn SceneNode>) {
        self.children.push(node);
    }

    /// Number of direct children
    pub fn node_count(&self) -> usize {
        self.children.len()
    }

    /// Called by the engine when the scene becomes the active scene
    pub fn on_push(&mut self) {
        log::debug!("scene pushed ({} nodes)", self.children.len());
    }

    /// Called by the engine when the scene is removed from the stack
    pub fn on_pop(&mut self) {
        log::debug!("scene popped");
    }
}

impl SceneNode for Scene {
    fn children(&self) -> &[Box<dyn SceneNode>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn SceneNode>] {
        &mut self.children
    }

    fn advance(&mut self, dt_secs: f32) {
        self.camera.advance(dt_secs);
        for child in self.children_mut() {
            child.advance(dt_secs);
        }
    }

    fn render(&self, painter: &mut dyn Painter) {
        painter.clear(self.clear_color);
        painter.set_view(self.camera.view_matrix());
        for child in self.children() {
            child.render(painter);
        }
    }
}
