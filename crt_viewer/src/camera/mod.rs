//! Camera pose and matrix computation

pub mod pose;
pub mod camera;

pub use pose::*;
pub use camera::*;
