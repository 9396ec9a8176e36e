//! Scene trait and render-call destinations

pub mod scene;
#[cfg(test)]
pub mod mock_scene;

pub use scene::*;
#[cfg(test)]
pub use mock_scene::*;
