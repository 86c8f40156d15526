//! 3D scene viewer
//!
//! Loads a JSON scene description (camera settings plus objects) and drives
//! it through the engine loop. There is no window here: the rendering
//! backend is an external collaborator, so the viewer runs headlessly
//! against the recording painter and feeds the camera controllers from a
//! scripted input track that exercises orbiting, zooming, and keyboard
//! movement.

use std::path::{Path, PathBuf};
use viz_engine::foundation::logging;
use viz_engine::prelude::*;
use viz_engine::scene::nodes::ColoredCube;
use viz_engine::scene::{self, Scene};

const DEFAULT_SCENE_PATH: &str = "viewer_app/resources/scene.json";
const DEMO_FRAMES: u64 = 240;
const MOVE_SPEED: f32 = 2.0;

struct ViewerApp {
    config: ViewerConfig,
    orbit: ViewerController,
    movement: KeyboardCameraController,
}

impl ViewerApp {
    fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            orbit: ViewerController::new(),
            movement: KeyboardCameraController::new(MOVE_SPEED),
        }
    }

    fn frame_limit(&self) -> u64 {
        self.config.frame_limit.unwrap_or(DEMO_FRAMES)
    }

    /// The scripted input track standing in for a real window's events
    fn scripted_events(frame: u64) -> Vec<AppEvent> {
        match frame {
            // Drag a quarter of the viewport width to the right
            10 => vec![
                AppEvent::MouseButton {
                    button: MouseButton::Left,
                    pressed: true,
                },
                AppEvent::MouseMoved { x: 400.0, y: 300.0 },
            ],
            11..=35 => vec![AppEvent::MouseMoved {
                x: 400.0 + 8.0 * (frame - 10) as f64,
                y: 300.0,
            }],
            36 => vec![AppEvent::MouseButton {
                button: MouseButton::Left,
                pressed: false,
            }],
            // Zoom in a little
            60 => vec![AppEvent::MouseWheel {
                delta_x: 0.0,
                delta_y: 1.0,
            }],
            // Fly forward for a second
            90 => vec![AppEvent::KeyInput {
                key: KeyCode::W,
                pressed: true,
            }],
            150 => vec![AppEvent::KeyInput {
                key: KeyCode::W,
                pressed: false,
            }],
            // Jump back to the saved pose
            200 => vec![AppEvent::KeyInput {
                key: KeyCode::R,
                pressed: true,
            }],
            201 => vec![AppEvent::KeyInput {
                key: KeyCode::R,
                pressed: false,
            }],
            _ => Vec::new(),
        }
    }
}

impl Application for ViewerApp {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        let path = self
            .config
            .scene_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCENE_PATH));

        let scene = match scene::load_scene(&path) {
            Ok(scene) => scene,
            Err(err) => {
                log::warn!(
                    "failed to load {}: {err}; using the built-in scene",
                    path.display()
                );
                demo_scene()
            }
        };

        self.orbit.save_camera(scene.camera());
        engine.push_scene(scene);
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
        for event in Self::scripted_events(engine.frame_count()) {
            engine.process_event(&event);
            self.handle_event(engine, &event)?;
        }

        let speed = self.movement.speed(engine.input());
        if let Some(scene) = engine.active_scene_mut() {
            scene.camera_mut().set_speed(speed);
        }

        if engine.frame_count() >= self.frame_limit() {
            engine.quit();
        }
        Ok(())
    }

    fn handle_event(&mut self, engine: &mut Engine, event: &AppEvent) -> Result<(), AppError> {
        let restore = matches!(
            *event,
            AppEvent::KeyInput {
                key: KeyCode::R,
                pressed: true,
            }
        );

        if let Some(scene) = engine.active_scene_mut() {
            let camera = scene.camera_mut();
            if restore {
                self.orbit.restore_camera(camera);
            } else {
                self.orbit.handle_event(event, camera);
            }
        }
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        if let Some(scene) = engine.active_scene() {
            log::info!(
                "final camera eye {:?}, front {:?}",
                scene.camera().eye(),
                scene.camera().front()
            );
        }
    }
}

/// Built-in fallback scene: one colored cube examined from (6, 3, 2)
fn demo_scene() -> Scene {
    let mut scene = Scene::new();
    scene
        .camera_mut()
        .look_at(Vec3::new(6.0, 3.0, 2.0), Vec3::zeros(), Vec3::z());
    scene.add_node(Box::new(ColoredCube::new(Vec3::zeros(), 2.0)));
    scene
}

fn run() -> Result<(), AppError> {
    let config = ViewerConfig::load_or_default(Path::new("viewer.toml"));
    let mut engine = Engine::new(&config)?;
    let mut app = ViewerApp::new(config);
    let mut painter = DebugPainter::new();

    engine.run(&mut app, &mut painter)?;
    log::info!(
        "rendered {} frame(s), {} draw command(s) recorded",
        engine.frame_count(),
        painter.commands().len()
    );
    Ok(())
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        log::error!("scene viewer exited with error: {err}");
        std::process::exit(1);
    }
}
