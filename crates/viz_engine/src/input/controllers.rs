//! Camera controllers
//!
//! [`ViewerController`] reproduces the classic examine-style viewer controls:
//! dragging with the left button orbits the camera around its target, the
//! wheel moves the eye along the front vector, and the current camera pose
//! can be saved and restored. [`KeyboardCameraController`] maps held keys to
//! the camera's speed components, leaving the integration itself to
//! [`SceneCamera::advance`].

use crate::application::AppEvent;
use crate::foundation::math::{deg_to_rad, Mat4, Unit, Vec3};
use crate::input::{InputState, KeyCode, MouseButton};
use crate::scene::camera::{CameraSpeed, SceneCamera};

/// Minimum eye-to-target distance the wheel zoom will not cross
const MIN_ZOOM_DISTANCE: f32 = 0.1;

/// Saved camera pose
#[derive(Debug, Clone, Copy)]
struct CameraSnapshot {
    eye: Vec3,
    target: Vec3,
    up: Vec3,
}

/// Examine-style mouse controller: orbit, zoom, save/restore
pub struct ViewerController {
    target: Vec3,
    dragging: bool,
    drag_anchor: Option<(f64, f64)>,
    saved: Option<CameraSnapshot>,
    zoom_step: f32,
}

impl Default for ViewerController {
    fn default() -> Self {
        Self {
            target: Vec3::zeros(),
            dragging: false,
            drag_anchor: None,
            saved: None,
            zoom_step: 0.5,
        }
    }
}

impl ViewerController {
    /// Create a controller orbiting the world origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the orbit/zoom target point
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// The current orbit/zoom target
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Feed one application event, possibly moving the camera
    pub fn handle_event(&mut self, event: &AppEvent, camera: &mut SceneCamera) {
        match *event {
            AppEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => {
                self.dragging = pressed;
                if !pressed {
                    self.drag_anchor = None;
                }
            }
            AppEvent::MouseMoved { x, y } => {
                if self.dragging {
                    if let Some((ax, ay)) = self.drag_anchor {
                        self.turn_around((x - ax) as f32, (y - ay) as f32, camera);
                    }
                    self.drag_anchor = Some((x, y));
                }
            }
            AppEvent::MouseWheel { delta_y, .. } => {
                self.change_distance(delta_y as f32, camera);
            }
            _ => {}
        }
    }

    /// Remember the current camera pose
    pub fn save_camera(&mut self, camera: &SceneCamera) {
        self.saved = Some(CameraSnapshot {
            eye: camera.eye(),
            target: self.target,
            up: camera.up(),
        });
        log::debug!("camera pose saved");
    }

    /// Restore the last saved camera pose, if any
    pub fn restore_camera(&mut self, camera: &mut SceneCamera) {
        if let Some(snapshot) = self.saved {
            self.target = snapshot.target;
            camera.look_at(snapshot.eye, snapshot.target, snapshot.up);
            log::debug!("camera pose restored");
        }
    }

    /// Orbit the eye around the target by a mouse drag
    ///
    /// A drag across the full viewport width sweeps 180° of yaw; the full
    /// height sweeps 180° of pitch.
    fn turn_around(&self, dx: f32, dy: f32, camera: &mut SceneCamera) {
        let (width, height) = camera.viewport();
        if width == 0 || height == 0 {
            return;
        }

        let yaw = deg_to_rad(180.0 * dx / width as f32);
        let pitch = deg_to_rad(180.0 * dy / height as f32);

        let up = camera.up();
        let mut offset = camera.eye() - self.target;

        if let Some(axis) = Unit::try_new(up, f32::EPSILON) {
            offset = Mat4::from_axis_angle(&axis, -yaw).transform_vector(&offset);
        }
        let left = up.cross(&camera.front());
        if let Some(axis) = Unit::try_new(left, f32::EPSILON) {
            offset = Mat4::from_axis_angle(&axis, -pitch).transform_vector(&offset);
        }

        camera.look_at(self.target + offset, self.target, up);
    }

    /// Move the eye along the front vector (wheel zoom)
    ///
    /// Positive deltas zoom in; the eye never crosses the target.
    fn change_distance(&self, delta: f32, camera: &mut SceneCamera) {
        let offset = camera.eye() - self.target;
        let distance = offset.norm();
        if distance <= f32::EPSILON {
            return;
        }

        let new_distance = (distance - delta * self.zoom_step).max(MIN_ZOOM_DISTANCE);
        let eye = self.target + offset * (new_distance / distance);
        camera.look_at(eye, self.target, camera.up());
    }
}

/// Maps held keys onto the camera speed vector
///
/// W/S drive the forward component, A/D the lateral component, Q/E the
/// vertical component. The camera itself integrates the speed on advance.
pub struct KeyboardCameraController {
    move_speed: f32,
}

impl KeyboardCameraController {
    /// Create a controller moving at `move_speed` world units per second
    pub fn new(move_speed: f32) -> Self {
        Self { move_speed }
    }

    /// Compute the camera speed for the currently held keys
    pub fn speed(&self, input: &InputState) -> CameraSpeed {
        let axis = |positive: KeyCode, negative: KeyCode| {
            let mut value = 0.0;
            if input.is_key_down(positive) {
                value += 1.0;
            }
            if input.is_key_down(negative) {
                value -= 1.0;
            }
            value
        };

        CameraSpeed::new(
            axis(KeyCode::W, KeyCode::S) * self.move_speed,
            axis(KeyCode::A, KeyCode::D) * self.move_speed,
            axis(KeyCode::Q, KeyCode::E) * self.move_speed,
        )
    }

    /// Update the camera speed from the currently held keys
    pub fn update(&self, input: &InputState, camera: &mut SceneCamera) {
        camera.set_speed(self.speed(input));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn examine_camera() -> SceneCamera {
        let mut camera = SceneCamera::new(800, 600);
        camera.look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::zeros(), Vec3::y());
        camera
    }

    fn drag(controller: &mut ViewerController, camera: &mut SceneCamera, from: (f64, f64), to: (f64, f64)) {
        controller.handle_event(
            &AppEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            },
            camera,
        );
        controller.handle_event(&AppEvent::MouseMoved { x: from.0, y: from.1 }, camera);
        controller.handle_event(&AppEvent::MouseMoved { x: to.0, y: to.1 }, camera);
        controller.handle_event(
            &AppEvent::MouseButton {
                button: MouseButton::Left,
                pressed: false,
            },
            camera,
        );
    }

    #[test]
    fn test_orbit_preserves_distance_and_target() {
        let mut camera = examine_camera();
        let mut controller = ViewerController::new();

        drag(&mut controller, &mut camera, (400.0, 300.0), (600.0, 300.0));

        assert_relative_eq!(camera.eye().norm(), 5.0, epsilon = 1e-4);
        // Still looking at the origin
        let expected_front = (-camera.eye()).normalize();
        assert_relative_eq!(camera.front().x, expected_front.x, epsilon = 1e-4);
        assert_relative_eq!(camera.front().y, expected_front.y, epsilon = 1e-4);
        assert_relative_eq!(camera.front().z, expected_front.z, epsilon = 1e-4);
        // And the eye actually moved
        assert!((camera.eye() - Vec3::new(0.0, 0.0, 5.0)).norm() > 1.0);
    }

    #[test]
    fn test_half_width_drag_yaws_ninety_degrees() {
        let mut camera = examine_camera();
        let mut controller = ViewerController::new();

        drag(&mut controller, &mut camera, (200.0, 300.0), (600.0, 300.0));

        // 400 px of an 800 px viewport = 90° around +Y
        assert_relative_eq!(camera.eye().x, -5.0, epsilon = 1e-3);
        assert_relative_eq!(camera.eye().z, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_move_without_drag_does_nothing() {
        let mut camera = examine_camera();
        let eye = camera.eye();
        let mut controller = ViewerController::new();

        controller.handle_event(&AppEvent::MouseMoved { x: 10.0, y: 10.0 }, &mut camera);
        assert_eq!(camera.eye(), eye);
    }

    #[test]
    fn test_wheel_zooms_in_without_crossing_target() {
        let mut camera = examine_camera();
        let mut controller = ViewerController::new();

        controller.handle_event(
            &AppEvent::MouseWheel {
                delta_x: 0.0,
                delta_y: 2.0,
            },
            &mut camera,
        );
        assert_relative_eq!(camera.eye().norm(), 4.0, epsilon = 1e-5);

        // A huge zoom-in stops at the minimum distance instead of flipping
        controller.handle_event(
            &AppEvent::MouseWheel {
                delta_x: 0.0,
                delta_y: 1000.0,
            },
            &mut camera,
        );
        assert_relative_eq!(camera.eye().norm(), MIN_ZOOM_DISTANCE, epsilon = 1e-5);
    }

    #[test]
    fn test_save_and_restore_camera() {
        let mut camera = examine_camera();
        let mut controller = ViewerController::new();
        controller.save_camera(&camera);

        drag(&mut controller, &mut camera, (400.0, 300.0), (500.0, 400.0));
        controller.handle_event(
            &AppEvent::MouseWheel {
                delta_x: 0.0,
                delta_y: 3.0,
            },
            &mut camera,
        );

        controller.restore_camera(&mut camera);
        assert_relative_eq!(camera.eye().z, 5.0, epsilon = 1e-5);
        assert_relative_eq!(camera.eye().x, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_keyboard_controller_maps_held_keys() {
        let mut camera = SceneCamera::default();
        let mut input = InputState::new();
        let controller = KeyboardCameraController::new(2.0);

        controller.update(&input, &mut camera);
        assert_eq!(camera.speed(), CameraSpeed::default());

        input.apply(&AppEvent::KeyInput {
            key: KeyCode::W,
            pressed: true,
        });
        input.apply(&AppEvent::KeyInput {
            key: KeyCode::E,
            pressed: true,
        });
        controller.update(&input, &mut camera);
        assert_eq!(camera.speed(), CameraSpeed::new(2.0, 0.0, -2.0));

        input.apply(&AppEvent::KeyInput {
            key: KeyCode::W,
            pressed: false,
        });
        input.apply(&AppEvent::KeyInput {
            key: KeyCode::S,
            pressed: true,
        });
        controller.update(&input, &mut camera);
        assert_eq!(camera.speed(), CameraSpeed::new(-2.0, 0.0, -2.0));
    }
}
