use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::traits::camera::ViewSource;

/// Squared length of `front x world_up` below which the basis is singular
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// Tuning constants for an [`OrientationCamera`].
///
/// Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub yaw: f32,
    pub pitch: f32,
    pub pitch_limit: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub scroll_strength: f32,
    pub zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            yaw: -90.0,
            pitch: 0.0,
            pitch_limit: 89.0,
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
            scroll_strength: 2.0,
            zoom: 45.0,
            min_zoom: 1.0,
            max_zoom: 45.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementDirection {
    Forward,
    Backward,
    Left,
    Right,
}

/// First-person camera driven by yaw/pitch angles.
///
/// `front`, `right` and `up` always form a right-handed orthonormal basis
/// derived from yaw, pitch and the fixed world up vector, except when
/// `front` is parallel to world up (see [`OrientationCamera::is_degenerate`]).
/// With the default yaw of -90 degrees the camera looks down -Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationCamera {
    position: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,
    degenerate: bool,

    yaw: f32,
    pitch: f32,
    pitch_limit: f32,

    movement_speed: f32,
    mouse_sensitivity: f32,
    scroll_strength: f32,
    zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
}

impl OrientationCamera {
    /// Camera at `position` with +Y as world up and default orientation
    pub fn new(position: Vec3) -> Self {
        Self::from_settings(position, Vec3::Y, &CameraSettings::default())
    }

    /// Camera with an explicit world up vector and starting angles
    pub fn with_orientation(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let settings = CameraSettings {
            yaw,
            pitch,
            ..CameraSettings::default()
        };
        Self::from_settings(position, world_up, &settings)
    }

    /// Camera with every tuning constant taken from `settings`
    pub fn from_settings(position: Vec3, world_up: Vec3, settings: &CameraSettings) -> Self {
        assert!(
            settings.min_zoom <= settings.max_zoom,
            "min_zoom {} exceeds max_zoom {}",
            settings.min_zoom,
            settings.max_zoom
        );

        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: world_up,
            world_up,
            degenerate: false,
            yaw: settings.yaw,
            pitch: settings.pitch,
            pitch_limit: settings.pitch_limit.abs(),
            movement_speed: settings.movement_speed,
            mouse_sensitivity: settings.mouse_sensitivity,
            scroll_strength: settings.scroll_strength,
            zoom: settings.zoom.clamp(settings.min_zoom, settings.max_zoom),
            min_zoom: settings.min_zoom,
            max_zoom: settings.max_zoom,
        };
        camera.update_vectors();
        camera
    }

    /// Translate along `front` or `right` by `movement_speed * dt`
    pub fn process_movement(&mut self, direction: MovementDirection, dt: f32) {
        let velocity = self.movement_speed * dt;
        match direction {
            MovementDirection::Forward => self.position += self.front * velocity,
            MovementDirection::Backward => self.position -= self.front * velocity,
            MovementDirection::Right => self.position += self.right * velocity,
            MovementDirection::Left => self.position -= self.right * velocity,
        }
    }

    /// Same as [`process_movement`](Self::process_movement), but the camera
    /// stays on the horizontal plane it started the move on.
    ///
    /// The height is kept rather than reset to `y = 0`, so a camera placed at
    /// eye height walks at eye height. Both agree for a camera on the ground.
    pub fn process_movement_grounded(&mut self, direction: MovementDirection, dt: f32) {
        let ground = self.position.y;
        self.process_movement(direction, dt);
        self.position.y = ground;
    }

    /// Turn the camera by cursor offsets.
    ///
    /// Without `constrain_pitch` the pitch is unbounded and the basis becomes
    /// singular whenever it reaches +-90 degrees.
    pub fn process_look(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch += dy * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.max(-self.pitch_limit).min(self.pitch_limit);
        }

        self.update_vectors();
    }

    /// Narrow (positive `dy`) or widen the field of view.
    ///
    /// A step that would make the zoom NaN is ignored.
    pub fn process_zoom(&mut self, dy: f32) {
        let zoom = self.zoom - dy * self.scroll_strength;
        if zoom.is_nan() {
            return;
        }
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Right-handed look-at transform from `position` towards `front`
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Vertical field of view in degrees
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// True when `front` is (nearly) parallel to world up.
    ///
    /// `right` and `up` are then arbitrary or NaN.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed;
    }

    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity;
    }

    pub fn set_scroll_strength(&mut self, strength: f32) {
        self.scroll_strength = strength;
    }

    /// Limit applied to pitch by constrained look calls, in degrees
    pub fn set_pitch_limit(&mut self, limit: f32) {
        self.pitch_limit = limit.abs();
    }

    /// Change the zoom range and pull the current zoom into it.
    ///
    /// # Panics
    ///
    /// If `min > max`.
    pub fn set_zoom_limits(&mut self, min: f32, max: f32) {
        assert!(min <= max, "min_zoom {} exceeds max_zoom {}", min, max);
        self.min_zoom = min;
        self.max_zoom = max;
        self.zoom = self.zoom.clamp(min, max);
    }

    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();

        let side = self.front.cross(self.world_up);
        self.degenerate = side.length_squared() < DEGENERATE_EPSILON;
        self.right = side.normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for OrientationCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl ViewSource for OrientationCamera {
    fn view_matrix(&self) -> Mat4 {
        OrientationCamera::view_matrix(self)
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn field_of_view(&self) -> f32 {
        self.zoom
    }
}
