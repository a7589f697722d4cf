//! Systems driving the runner control loop.

pub mod camera;
pub mod input;
pub mod movement;
pub mod voice;

pub use camera::*;
pub use input::*;
pub use movement::*;
pub use voice::*;
