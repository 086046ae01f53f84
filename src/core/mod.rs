pub mod clock;
pub mod input_adapter;
pub mod input_tracker;
pub mod timer;
pub mod window;
