//! Scene camera
//!
//! The camera holds an eye position, a unit front direction, and an up
//! vector, plus a linear speed that [`SceneCamera::advance`] integrates along
//! the current basis vectors each tick. The renderer seam reads the camera to
//! build its view matrix.

use crate::foundation::math::{Mat4, Mat4Ext, Vec3};

/// Linear camera speed, in world units per second
///
/// Components are expressed in the camera's own basis: `forward` along the
/// front vector, `lateral` along the left vector (`up × front`), `vertical`
/// along the up vector.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraSpeed {
    /// Speed along the front vector
    pub forward: f32,
    /// Speed along the left vector
    pub lateral: f32,
    /// Speed along the up vector
    pub vertical: f32,
}

impl CameraSpeed {
    /// Create a speed from forward/lateral/vertical components
    pub const fn new(forward: f32, lateral: f32, vertical: f32) -> Self {
        Self {
            forward,
            lateral,
            vertical,
        }
    }
}

/// Camera with position/orientation state advanced by a time delta
#[derive(Debug, Clone)]
pub struct SceneCamera {
    eye: Vec3,
    front: Vec3,
    up: Vec3,
    speed: CameraSpeed,
    viewport: (u32, u32),
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::zeros(),
            front: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            speed: CameraSpeed::default(),
            viewport: (0, 0),
        }
    }
}

impl SceneCamera {
    /// Create a camera with the given viewport size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: (width, height),
            ..Self::default()
        }
    }

    /// Orient the camera to look from `eye` towards `target`
    ///
    /// The front vector is re-normalized after every look-at assignment. A
    /// degenerate call with `target == eye` keeps the previous front so the
    /// camera never holds a NaN orientation.
    pub fn look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.eye = eye;
        self.up = up;
        match (target - eye).try_normalize(f32::EPSILON) {
            Some(front) => self.front = front,
            None => log::warn!("degenerate look-at (target == eye); keeping previous front"),
        }
        log::trace!("camera look_at eye {eye:?} target {target:?}");
    }

    /// Integrate the speed vector over `dt_secs` seconds
    ///
    /// Moves the eye along the current basis:
    /// `eye += front * dFront + left * dLateral + up * dVertical`, where
    /// `left = up × front` and each delta is the speed component scaled by
    /// the elapsed seconds.
    pub fn advance(&mut self, dt_secs: f32) {
        let left = self.up.cross(&self.front);
        let d_front = self.speed.forward * dt_secs;
        let d_lateral = self.speed.lateral * dt_secs;
        let d_vertical = self.speed.vertical * dt_secs;
        self.eye += self.front * d_front + left * d_lateral + self.up * d_vertical;
    }

    /// Eye position in world space
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Unit front direction
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// The point one unit in front of the eye
    pub fn target(&self) -> Vec3 {
        self.eye + self.front
    }

    /// Up vector
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Current speed
    pub fn speed(&self) -> CameraSpeed {
        self.speed
    }

    /// Set the speed integrated by [`SceneCamera::advance`]
    pub fn set_speed(&mut self, speed: CameraSpeed) {
        self.speed = speed;
    }

    /// Viewport size in pixels
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Update the viewport size (window resize)
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    /// Viewport aspect ratio (width / height), 1.0 for an empty viewport
    pub fn aspect_ratio(&self) -> f32 {
        if self.viewport.1 == 0 {
            1.0
        } else {
            self.viewport.0 as f32 / self.viewport.1 as f32
        }
    }

    /// Build the world-to-camera view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.eye, self.target(), self.up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-5);
    }

    #[test]
    fn test_look_at_normalizes_front() {
        let mut camera = SceneCamera::new(800, 600);
        camera.look_at(
            Vec3::new(6.0, 3.0, 2.0),
            Vec3::zeros(),
            Vec3::new(0.0, 0.0, 1.0),
        );

        assert_relative_eq!(camera.front().norm(), 1.0, epsilon = 1e-6);
        assert_vec3_eq(camera.front(), -Vec3::new(6.0, 3.0, 2.0).normalize());
    }

    #[test]
    fn test_degenerate_look_at_keeps_front() {
        let mut camera = SceneCamera::default();
        let front = camera.front();
        camera.look_at(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 3.0), camera.up());
        assert_vec3_eq(camera.front(), front);
        assert_vec3_eq(camera.eye(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_advance_moves_along_front() {
        let mut camera = SceneCamera::default();
        camera.look_at(Vec3::zeros(), Vec3::new(0.0, 0.0, -10.0), Vec3::y());
        camera.set_speed(CameraSpeed::new(2.0, 0.0, 0.0));

        camera.advance(0.5);
        assert_vec3_eq(camera.eye(), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_advance_moves_along_left_and_up() {
        // Looking down -Z with +Y up: left = up × front = -X
        let mut camera = SceneCamera::default();
        camera.set_speed(CameraSpeed::new(0.0, 3.0, 4.0));

        camera.advance(1.0);
        assert_vec3_eq(camera.eye(), Vec3::new(-3.0, 4.0, 0.0));
    }

    #[test]
    fn test_advance_scales_with_elapsed_seconds() {
        let mut camera = SceneCamera::default();
        camera.set_speed(CameraSpeed::new(1.0, 0.0, 0.0));

        camera.advance(0.0);
        assert_vec3_eq(camera.eye(), Vec3::zeros());

        camera.advance(0.25);
        camera.advance(0.75);
        assert_vec3_eq(camera.eye(), camera.front());
    }

    #[test]
    fn test_negative_speed_moves_backwards() {
        let mut camera = SceneCamera::default();
        camera.set_speed(CameraSpeed::new(-1.0, 0.0, 0.0));
        camera.advance(2.0);
        assert_vec3_eq(camera.eye(), Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_target_is_one_unit_in_front() {
        let mut camera = SceneCamera::default();
        camera.look_at(Vec3::new(5.0, 0.0, 0.0), Vec3::zeros(), Vec3::z());
        assert_vec3_eq(camera.target(), Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_aspect_ratio_guards_empty_viewport() {
        assert_relative_eq!(SceneCamera::new(800, 600).aspect_ratio(), 800.0 / 600.0);
        assert_relative_eq!(SceneCamera::default().aspect_ratio(), 1.0);
    }
}
