//! First-person navigation and collision probing

pub mod collision;
pub mod navigator;

pub use collision::*;
pub use navigator::*;
