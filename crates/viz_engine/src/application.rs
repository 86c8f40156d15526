//! Application trait and lifecycle events

use crate::config::ConfigError;
use crate::engine::{Engine, EngineError};
use crate::input::{KeyCode, MouseButton};
use crate::scene::SceneLoadError;
use crate::stats::DocumentError;
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to build a viewer on top of the engine. The engine
/// owns the loop; the application owns scenes, controllers, and documents.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once before the first frame. Load scenes and push them onto
    /// the engine here.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every frame before the scene tree is advanced.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `delta_time` - Time since last frame in seconds
    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError>;

    /// Handle an application event
    ///
    /// The windowing collaborator calls this for every translated native
    /// event, after the engine has folded the event into its input state.
    fn handle_event(&mut self, engine: &mut Engine, event: &AppEvent) -> Result<(), AppError> {
        let _ = (engine, event);
        Ok(())
    }

    /// Cleanup the application
    ///
    /// Called once when the loop ends. Save state here.
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Scene loading error
    #[error("Scene error: {0}")]
    Scene(#[from] SceneLoadError),

    /// Stats document error
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),
}

/// Application events, translated from the windowing collaborator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// Window was resized
    WindowResized {
        /// New window width
        width: u32,
        /// New window height
        height: u32,
    },

    /// Window close requested
    WindowCloseRequested,

    /// Key state change
    KeyInput {
        /// The key that changed
        key: KeyCode,
        /// Whether the key was pressed (true) or released (false)
        pressed: bool,
    },

    /// Mouse button state change
    MouseButton {
        /// The button that changed
        button: MouseButton,
        /// Whether the button was pressed (true) or released (false)
        pressed: bool,
    },

    /// Mouse movement
    MouseMoved {
        /// New X coordinate in window pixels
        x: f64,
        /// New Y coordinate in window pixels
        y: f64,
    },

    /// Mouse wheel
    MouseWheel {
        /// Horizontal scroll delta
        delta_x: f64,
        /// Vertical scroll delta
        delta_y: f64,
    },
}
