//! # Viz Engine
//!
//! A small visualization engine behind two coursework-sized viewers: a
//! statistics viewer that renders a pie chart from key/value rows, and a 3D
//! scene viewer with a camera and a cube, loadable from a JSON scene
//! description.
//!
//! ## Features
//!
//! - **Scene Graph**: A tree of nodes with propagating advance/render
//! - **Camera**: Eye/front/up state integrated by elapsed seconds
//! - **Scene Descriptions**: JSON camera settings and typed objects
//! - **Stats**: Key/value rows, pie-chart geometry, document lifecycle
//! - **Painter Seam**: Rendering backend stays an external collaborator
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use viz_engine::prelude::*;
//!
//! struct MyViewer;
//!
//! impl Application for MyViewer {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         engine.push_scene(viz_engine::scene::load_scene("scene.json")?);
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
//!         if engine.frame_count() > 100 {
//!             engine.quit();
//!         }
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut engine = Engine::new(&ViewerConfig::default())?;
//!     let mut painter = DebugPainter::new();
//!     engine.run(&mut MyViewer, &mut painter)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod input;
pub mod render;
pub mod scene;
pub mod stats;

mod application;
mod engine;

pub use application::{AppError, AppEvent, Application};
pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{ConfigFile, ViewerConfig},
        foundation::{
            color::Color,
            math::{Mat4, Vec2, Vec3},
            time::Timer,
        },
        input::{InputState, KeyCode, KeyboardCameraController, MouseButton, ViewerController},
        render::{DebugPainter, Painter},
        scene::{CameraSpeed, Scene, SceneCamera, SceneNode},
        stats::{draw_pie, pie_slices, StatsDocument, StatsKeyValueModel},
        AppError, AppEvent, Application, Engine, EngineError,
    };
}
