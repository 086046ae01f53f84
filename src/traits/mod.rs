pub mod camera;
pub mod controller;
pub mod window;

pub use camera::*;
pub use controller::*;
pub use window::*;
