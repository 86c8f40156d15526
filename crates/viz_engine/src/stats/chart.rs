//! Pie-chart geometry
//!
//! Maps the rows of a [`StatsKeyValueModel`] onto proportional arcs. Angles
//! follow the 2D painting convention: degrees, 0° at three o'clock, positive
//! counter-clockwise. The first slice starts at twelve o'clock (90°) and the
//! slices sweep clockwise, so every sweep is negative.

use crate::foundation::color::Color;
use crate::foundation::math::Vec2;
use crate::render::Painter;
use crate::stats::model::StatsKeyValueModel;

/// Start angle of the first slice, in degrees (twelve o'clock)
pub const PIE_START_ANGLE: f32 = 90.0;

/// Hue step between consecutive slices, in degrees
pub const SLICE_HUE_STEP: usize = 30;

const SLICE_SATURATION: u8 = 230;
const SLICE_VALUE: u8 = 240;

/// One pie slice: an arc plus its fill color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    /// Arc start angle in degrees
    pub start_angle: f32,
    /// Arc sweep in degrees; negative = clockwise
    pub sweep_angle: f32,
    /// Fill color
    pub color: Color,
}

/// Compute the pie slices for a model
///
/// Each row's sweep is `-(value / value_sum) * 360` and slice `i` takes hue
/// `(SLICE_HUE_STEP * i) % 360`. A model whose values sum to zero (including
/// the empty model) produces no slices at all, which also covers the
/// division-by-zero case.
pub fn pie_slices(model: &StatsKeyValueModel) -> Vec<PieSlice> {
    let sum = model.value_sum();
    if sum == 0 {
        return Vec::new();
    }

    let sum = sum as f32;
    let mut start_angle = PIE_START_ANGLE;
    let mut slices = Vec::with_capacity(model.len());
    for (index, row) in model.rows().iter().enumerate() {
        let sweep_angle = -(row.value as f32) / sum * 360.0;
        let hue = ((SLICE_HUE_STEP * index) % 360) as u16;
        slices.push(PieSlice {
            start_angle,
            sweep_angle,
            color: Color::from_hsv(hue, SLICE_SATURATION, SLICE_VALUE),
        });
        start_angle += sweep_angle;
    }
    slices
}

/// Draw the model's pie chart through the painter seam
pub fn draw_pie(painter: &mut dyn Painter, center: Vec2, radius: f32, model: &StatsKeyValueModel) {
    for slice in pie_slices(model) {
        painter.draw_pie_slice(
            center,
            radius,
            slice.start_angle,
            slice.sweep_angle,
            slice.color,
        );
    }
}
