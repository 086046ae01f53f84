use glam::{Mat4, Vec3};

/// Source of view parameters for a renderer
pub trait ViewSource {
    /// Get the view matrix for rendering
    fn view_matrix(&self) -> Mat4;

    /// Get the camera position in world space
    fn position(&self) -> Vec3;

    /// Get the vertical field of view in degrees
    fn field_of_view(&self) -> f32;
}
