pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod scene;
pub mod traits;
pub mod window;

pub use crate::camera::{CameraSettings, MovementDirection, OrientationCamera};
pub use crate::core::input_tracker::{InputTracker, KeyState};
pub use crate::scene::SceneState;
