//! Render seam between the scene tree and the windowing/graphics backend
//!
//! The actual rasterizer lives outside this crate. Scene nodes and the pie
//! chart emit their geometry through the [`Painter`] trait; a backend
//! implements it against its own surface. [`DebugPainter`] is the built-in
//! implementation used by the headless apps and the tests: it records every
//! draw call so frames can be inspected without a window.

use crate::foundation::color::Color;
use crate::foundation::math::{Mat4, Vec2, Vec3};

/// Draw-call sink implemented by the rendering backend
pub trait Painter {
    /// Clear the target to a solid color
    fn clear(&mut self, color: Color);

    /// Load the view matrix used for subsequent world-space geometry
    fn set_view(&mut self, view: Mat4);

    /// Draw a filled world-space polygon
    fn draw_polygon(&mut self, vertices: &[Vec3], color: Color);

    /// Draw a filled pie slice
    ///
    /// Angles are in degrees with 0° at three o'clock and positive angles
    /// running counter-clockwise; a negative sweep runs clockwise.
    fn draw_pie_slice(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        color: Color,
    );
}

/// A single recorded draw call
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Target cleared to a color
    Clear {
        /// Clear color
        color: Color,
    },

    /// View matrix loaded
    SetView {
        /// View matrix
        view: Mat4,
    },

    /// Filled polygon
    Polygon {
        /// World-space vertices
        vertices: Vec<Vec3>,
        /// Fill color
        color: Color,
    },

    /// Filled pie slice
    PieSlice {
        /// Circle center
        center: Vec2,
        /// Circle radius
        radius: f32,
        /// Start angle in degrees
        start_angle: f32,
        /// Sweep in degrees (negative = clockwise)
        sweep_angle: f32,
        /// Fill color
        color: Color,
    },
}

/// Recording painter for headless runs and tests
#[derive(Debug, Default)]
pub struct DebugPainter {
    commands: Vec<DrawCommand>,
}

impl DebugPainter {
    /// Create an empty recording painter
    pub fn new() -> Self {
        Self::default()
    }

    /// All draw calls recorded so far
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Discard recorded draw calls (typically once per frame)
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Number of recorded polygon draws
    pub fn polygon_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
            .count()
    }
}

impl Painter for DebugPainter {
    fn clear(&mut self, color: Color) {
        log::trace!("clear {color:?}");
        self.commands.push(DrawCommand::Clear { color });
    }

    fn set_view(&mut self, view: Mat4) {
        self.commands.push(DrawCommand::SetView { view });
    }

    fn draw_polygon(&mut self, vertices: &[Vec3], color: Color) {
        log::trace!("polygon {} vertices {color:?}", vertices.len());
        self.commands.push(DrawCommand::Polygon {
            vertices: vertices.to_vec(),
            color,
        });
    }

    fn draw_pie_slice(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        color: Color,
    ) {
        log::trace!("pie slice start {start_angle} sweep {sweep_angle} {color:?}");
        self.commands.push(DrawCommand::PieSlice {
            center,
            radius,
            start_angle,
            sweep_angle,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_painter_records_in_order() {
        let mut painter = DebugPainter::new();
        painter.clear(Color::BLACK);
        painter.draw_polygon(&[Vec3::zeros(), Vec3::x(), Vec3::y()], Color::RED);

        assert_eq!(painter.commands().len(), 2);
        assert!(matches!(painter.commands()[0], DrawCommand::Clear { .. }));
        assert_eq!(painter.polygon_count(), 1);

        painter.reset();
        assert!(painter.commands().is_empty());
    }
}
