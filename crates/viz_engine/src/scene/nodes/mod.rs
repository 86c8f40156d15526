//! Built-in renderable nodes

mod cube;

pub use cube::ColoredCube;
