//! Statistics viewer core: key/value rows, pie-chart geometry, documents

pub mod chart;
pub mod document;
pub mod model;

pub use chart::{draw_pie, pie_slices, PieSlice, PIE_START_ANGLE, SLICE_HUE_STEP};
pub use document::{DocumentError, StatsDocument};
pub use model::{StatsKeyValueModel, StatsRow};
