//! JSON scene descriptions
//!
//! A scene file carries the camera settings and a list of typed objects:
//!
//! ```json
//! {
//!   "camera": {
//!     "eye": [6.0, 3.0, 2.0],
//!     "target": [0.0, 0.0, 0.0],
//!     "up": [0.0, 0.0, 1.0]
//!   },
//!   "objects": [
//!     { "type": "cube", "center": [0.0, 0.0, 0.0], "size": 2.0 }
//!   ]
//! }
//! ```
//!
//! Parsing itself is serde's job; this module owns the mapping from a
//! description to a live [`Scene`] and the validation the mapping needs.

use crate::foundation::color::Color;
use crate::foundation::math::Vec3;
use crate::scene::base::Scene;
use crate::scene::camera::CameraSpeed;
use crate::scene::nodes::ColoredCube;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a scene description
#[derive(Error, Debug)]
pub enum SceneLoadError {
    /// IO error reading the scene file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed scene description
    #[error("Scene description error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Structurally valid description with unusable camera settings
    #[error("Invalid camera settings: {0}")]
    InvalidCamera(String),

    /// Structurally valid description with an unusable object
    #[error("Invalid object {index}: {reason}")]
    InvalidObject {
        /// Index into the `objects` array
        index: usize,
        /// What was wrong with it
        reason: String,
    },
}

/// Top-level scene description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Camera settings applied to the scene camera
    pub camera: CameraSettings,

    /// Objects instantiated as scene nodes
    #[serde(default)]
    pub objects: Vec<ObjectDescription>,

    /// Optional clear color
    #[serde(default)]
    pub clear_color: Option<Color>,
}

/// Camera block of a scene description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraSettings {
    /// Eye position
    pub eye: [f32; 3],
    /// Look-at target
    pub target: [f32; 3],
    /// Up vector
    pub up: [f32; 3],
    /// Initial speed (forward, lateral, vertical), defaults to rest
    #[serde(default)]
    pub speed: [f32; 3],
}

/// A typed object entry in a scene description
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectDescription {
    /// Axis-aligned colored cube
    Cube {
        /// Cube center
        center: [f32; 3],
        /// Edge length, must be positive
        size: f32,
        /// Optional per-face colors (+X, -X, +Y, -Y, +Z, -Z)
        #[serde(default)]
        face_colors: Option<[Color; 6]>,
    },
}

fn vec3(components: [f32; 3]) -> Vec3 {
    Vec3::new(components[0], components[1], components[2])
}

/// Build a [`Scene`] from an already-parsed description
pub fn build_scene(description: &SceneDescription) -> Result<Scene, SceneLoadError> {
    let camera = &description.camera;
    let eye = vec3(camera.eye);
    let target = vec3(camera.target);
    let up = vec3(camera.up);

    if (target - eye).norm() <= f32::EPSILON {
        return Err(SceneLoadError::InvalidCamera(
            "target coincides with eye".into(),
        ));
    }
    if up.norm() <= f32::EPSILON {
        return Err(SceneLoadError::InvalidCamera("up vector is zero".into()));
    }

    let mut scene = Scene::new();
    scene.camera_mut().look_at(eye, target, up);
    scene
        .camera_mut()
        .set_speed(CameraSpeed::new(camera.speed[0], camera.speed[1], camera.speed[2]));
    if let Some(color) = description.clear_color {
        scene.set_clear_color(color);
    }

    for (index, object) in description.objects.iter().enumerate() {
        match *object {
            ObjectDescription::Cube {
                center,
                size,
                face_colors,
            } => {
                if size <= 0.0 {
                    return Err(SceneLoadError::InvalidObject {
                        index,
                        reason: format!("cube size must be positive, got {size}"),
                    });
                }
                let mut cube = ColoredCube::new(vec3(center), size);
                if let Some(colors) = face_colors {
                    cube = cube.with_face_colors(colors);
                }
                scene.add_node(Box::new(cube));
            }
        }
    }

    log::info!(
        "built scene with {} object(s), camera at {:?}",
        scene.node_count(),
        scene.camera().eye()
    );
    Ok(scene)
}

/// Parse a JSON scene description and build the scene
pub fn parse_scene(json: &str) -> Result<Scene, SceneLoadError> {
    let description: SceneDescription = serde_json::from_str(json)?;
    build_scene(&description)
}

/// Load a scene from a JSON file
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene, SceneLoadError> {
    let path = path.as_ref();
    log::info!("loading scene from {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    parse_scene(&contents)
}
