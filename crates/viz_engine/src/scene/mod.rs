//! Scene graph
//!
//! A scene is a tree of nodes rooted at [`Scene`], which owns the
//! [`SceneCamera`]. Every frame the engine advances the active scene by the
//! elapsed seconds and renders it through the painter seam:
//!
//! ```text
//! Engine tick
//!      ↓ advance(dt)
//! Scene (camera + children)
//!      ↓ render(painter)
//! Painter (external backend)
//! ```
//!
//! Scenes can be built in code or loaded from a JSON description via
//! [`json::load_scene`].

mod base;
pub mod camera;
pub mod json;
pub mod node;
pub mod nodes;

pub use base::Scene;
pub use camera::{CameraSpeed, SceneCamera};
pub use json::{load_scene, parse_scene, SceneLoadError};
pub use node::{NodeGroup, SceneNode};
