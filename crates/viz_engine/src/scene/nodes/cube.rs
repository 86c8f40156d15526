//! Axis-aligned cube with per-face colors

use crate::foundation::color::Color;
use crate::foundation::math::Vec3;
use crate::render::Painter;
use crate::scene::node::SceneNode;

/// Face colors used when a scene description doesn't provide any
///
/// Order: +X, -X, +Y, -Y, +Z, -Z.
pub const DEFAULT_FACE_COLORS: [Color; 6] = [
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::YELLOW,
    Color::CYAN,
    Color::MAGENTA,
];

/// Axis-aligned cube node that emits one colored quad per face
pub struct ColoredCube {
    center: Vec3,
    size: f32,
    face_colors: [Color; 6],
}

impl ColoredCube {
    /// Create a cube at `center` with edge length `size` and default colors
    pub fn new(center: Vec3, size: f32) -> Self {
        Self {
            center,
            size,
            face_colors: DEFAULT_FACE_COLORS,
        }
    }

    /// Replace the per-face colors (+X, -X, +Y, -Y, +Z, -Z order)
    #[must_use]
    pub fn with_face_colors(mut self, face_colors: [Color; 6]) -> Self {
        self.face_colors = face_colors;
        self
    }

    /// Cube center
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Edge length
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The eight corners, indexed by the sign bits (x, y, z)
    fn corner(&self, x: f32, y: f32, z: f32) -> Vec3 {
        let h = self.size * 0.5;
        self.center + Vec3::new(x * h, y * h, z * h)
    }
}

impl SceneNode for ColoredCube {
    fn render(&self, painter: &mut dyn Painter) {
        // Outward-facing quads, counter-clockwise seen from outside
        let faces = [
            // +X
            [
                self.corner(1.0, -1.0, -1.0),
                self.corner(1.0, 1.0, -1.0),
                self.corner(1.0, 1.0, 1.0),
                self.corner(1.0, -1.0, 1.0),
            ],
            // -X
            [
                self.corner(-1.0, -1.0, 1.0),
                self.corner(-1.0, 1.0, 1.0),
                self.corner(-1.0, 1.0, -1.0),
                self.corner(-1.0, -1.0, -1.0),
            ],
            // +Y
            [
                self.corner(-1.0, 1.0, -1.0),
                self.corner(-1.0, 1.0, 1.0),
                self.corner(1.0, 1.0, 1.0),
                self.corner(1.0, 1.0, -1.0),
            ],
            // -Y
            [
                self.corner(-1.0, -1.0, 1.0),
                self.corner(-1.0, -1.0, -1.0),
                self.corner(1.0, -1.0, -1.0),
                self.corner(1.0, -1.0, 1.0),
            ],
            // +Z
            [
                self.corner(-1.0, -1.0, 1.0),
                self.corner(1.0, -1.0, 1.0),
                self.corner(1.0, 1.0, 1.0),
                self.corner(-1.0, 1.0, 1.0),
            ],
            // -Z
            [
                self.corner(1.0, -1.0, -1.0),
                self.corner(-1.0, -1.0, -1.0),
                self.corner(-1.0, 1.0, -1.0),
                self.corner(1.0, 1.0, -1.0),
            ],
        ];

        for (quad, color) in faces.iter().zip(self.face_colors) {
            painter.draw_polygon(quad, color);
        }
    }
}
