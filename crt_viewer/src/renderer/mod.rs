//! Device-facing rendering types and traits
//!
//! The viewer core never talks to a GPU API directly; it allocates
//! offscreen targets through the `GraphicsDevice` trait and hands them to
//! the scene for rendering. Backend implementations live out of tree;
//! `HeadlessDevice` provides a CPU-only implementation for tests and
//! headless runs.

pub mod texture;
pub mod render_target;
pub mod device;
pub mod headless;

pub use texture::*;
pub use render_target::*;
pub use device::*;
pub use headless::*;
