use glam::{Mat4, Vec3};

use crate::camera::{MovementDirection, OrientationCamera};
use crate::config::{Controls, Settings};
use crate::core::input_tracker::InputTracker;

/// Near clip plane of the scene projection
pub const Z_NEAR: f32 = 0.1;
/// Far clip plane of the scene projection
pub const Z_FAR: f32 = 100.0;

/// Per-viewer state owned by the main loop and handed to each update step
#[derive(Debug, Clone)]
pub struct SceneState {
    pub camera: OrientationCamera,
    pub light_position: Vec3,
    pub controls: Controls,
}

impl SceneState {
    pub fn new(camera: OrientationCamera, light_position: Vec3, controls: Controls) -> Self {
        Self {
            camera,
            light_position,
            controls,
        }
    }

    /// Build the scene described by `settings`
    pub fn from_settings(settings: &Settings) -> Self {
        let camera =
            OrientationCamera::from_settings(settings.start_position(), Vec3::Y, &settings.camera);
        Self::new(camera, settings.light_position(), settings.controls)
    }

    /// Apply one frame of input to the camera.
    ///
    /// Pops the tracker's cursor and scroll deltas, so call this once per frame.
    pub fn update(&mut self, input: &mut InputTracker, dt: f32) {
        let bindings = self.controls.bindings;
        let moves = [
            (bindings.forward, MovementDirection::Forward),
            (bindings.backward, MovementDirection::Backward),
            (bindings.left, MovementDirection::Left),
            (bindings.right, MovementDirection::Right),
        ];

        for (key, direction) in moves {
            if !input.is_pressed(key) {
                continue;
            }
            if self.controls.ground_locked {
                self.camera.process_movement_grounded(direction, dt);
            } else {
                self.camera.process_movement(direction, dt);
            }
        }

        let (dx, dy) = input.poll_cursor_delta();
        if dx != 0.0 || dy != 0.0 {
            self.camera.process_look(dx, dy, self.controls.constrain_pitch);
        }

        let (_, scroll) = input.poll_scroll_delta();
        if scroll != 0.0 {
            self.camera.process_zoom(scroll);
        }
    }

    /// Perspective projection using the camera zoom as vertical field of view
    pub fn projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.camera.zoom().to_radians(), aspect_ratio, Z_NEAR, Z_FAR)
    }

    /// Projection times view, ready for a vertex shader
    pub fn view_projection(&self, aspect_ratio: f32) -> Mat4 {
        self.projection(aspect_ratio) * self.camera.view_matrix()
    }

    /// Light position relative to the viewer, as lighting shaders use it
    pub fn light_offset(&self) -> Vec3 {
        self.light_position - self.camera.position()
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::controller::{InputHandler, Key, KeyAction};

    #[test]
    fn test_idle_frame_leaves_camera_untouched() {
        let mut scene = SceneState::default();
        let before = scene.camera;
        let mut input = InputTracker::new();

        scene.update(&mut input, 0.016);

        assert_eq!(scene.camera, before);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut scene = SceneState::default();
        let start = scene.camera.position();
        let mut input = InputTracker::new();
        input.on_key(Key::W.code(), KeyAction::Press);
        input.on_key(Key::S.code(), KeyAction::Press);

        scene.update(&mut input, 1.0);

        assert!(scene.camera.position().abs_diff_eq(start, 1e-5));
    }

    #[test]
    fn test_projection_uses_zoom() {
        let mut scene = SceneState::default();
        let wide = scene.projection(1.0);
        scene.camera.process_zoom(10.0);
        let narrow = scene.projection(1.0);

        // Narrower field of view scales x and y up
        assert!(narrow.x_axis.x > wide.x_axis.x);
        assert!(narrow.y_axis.y > wide.y_axis.y);
    }

    #[test]
    fn test_light_offset() {
        let scene = SceneState::default();
        assert!(scene
            .light_offset()
            .abs_diff_eq(Vec3::new(1.2, 1.0, -1.0), 1e-5));
    }
}
