//! Core engine implementation
//!
//! The engine owns a stack of scenes, the frame timer, and the folded input
//! state. Only the top of the stack is advanced and rendered; pushing and
//! popping fire the scene lifecycle hooks.

use crate::application::{AppError, AppEvent, Application};
use crate::config::ViewerConfig;
use crate::foundation::time::Timer;
use crate::input::InputState;
use crate::render::Painter;
use crate::scene::{Scene, SceneNode};
use thiserror::Error;

/// Main engine struct
pub struct Engine {
    scenes: Vec<Scene>,
    input: InputState,
    timer: Timer,
    viewport: (u32, u32),
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: &ViewerConfig) -> Result<Self, EngineError> {
        if config.width == 0 || config.height == 0 {
            return Err(EngineError::InitializationFailed(format!(
                "viewport must be non-empty, got {}x{}",
                config.width, config.height
            )));
        }

        log::info!(
            "initializing engine: \"{}\" {}x{}",
            config.title,
            config.width,
            config.height
        );
        Ok(Self {
            scenes: Vec::new(),
            input: InputState::new(),
            timer: Timer::new(),
            viewport: (config.width, config.height),
            running: true,
        })
    }

    /// Push a scene onto the stack, making it the active scene
    pub fn push_scene(&mut self, mut scene: Scene) {
        scene.set_viewport(self.viewport.0, self.viewport.1);
        scene.on_push();
        self.scenes.push(scene);
    }

    /// Pop the active scene, if any
    pub fn pop_scene(&mut self) -> Option<Scene> {
        let mut scene = self.scenes.pop()?;
        scene.on_pop();
        Some(scene)
    }

    /// The active scene (top of the stack)
    pub fn active_scene(&self) -> Option<&Scene> {
        self.scenes.last()
    }

    /// Mutable access to the active scene
    pub fn active_scene_mut(&mut self) -> Option<&mut Scene> {
        self.scenes.last_mut()
    }

    /// Fold an event into the engine state
    ///
    /// Updates the input state and reacts to window-level events (resize,
    /// close). Camera controllers receive events separately, from the
    /// application.
    pub fn process_event(&mut self, event: &AppEvent) {
        self.input.apply(event);
        match *event {
            AppEvent::WindowCloseRequested => {
                log::info!("window close requested");
                self.running = false;
            }
            AppEvent::WindowResized { width, height } => {
                self.viewport = (width, height);
                for scene in &mut self.scenes {
                    scene.set_viewport(width, height);
                }
            }
            _ => {}
        }
    }

    /// The folded input state
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Current viewport size
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Frames rendered so far
    pub fn frame_count(&self) -> u64 {
        self.timer.frame_count()
    }

    /// Advance the active scene by `dt_secs` seconds
    pub fn advance(&mut self, dt_secs: f32) {
        if let Some(scene) = self.scenes.last_mut() {
            scene.advance(dt_secs);
        }
    }

    /// Render the active scene through the painter
    pub fn render(&self, painter: &mut dyn Painter) {
        if let Some(scene) = self.scenes.last() {
            scene.render(painter);
        }
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("engine shutdown requested");
        self.running = false;
    }

    /// Whether the loop is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run the main loop with the given application
    ///
    /// Each frame: update the timer, let the application update, advance the
    /// active scene, render it. The loop ends when the application calls
    /// [`Engine::quit`] or a close event arrives.
    pub fn run<A: Application>(
        &mut self,
        app: &mut A,
        painter: &mut dyn Painter,
    ) -> Result<(), EngineError> {
        app.initialize(self)
            .map_err(|e| EngineError::Application(format!("initialization: {e}")))?;

        log::info!("starting main loop");
        while self.running {
            self.timer.update();
            let delta_time = self.timer.delta_time();

            app.update(self, delta_time)
                .map_err(|e| EngineError::Application(format!("update: {e}")))?;

            self.advance(delta_time);
            self.render(painter);
        }

        app.cleanup(self);
        log::info!("engine shutdown complete");
        Ok(())
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Initialization error
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// Application error surfaced from the loop
    #[error("Application error: {0}")]
    Application(String),
}
