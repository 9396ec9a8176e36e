//! Frame target pool: reusable capture targets for the delay compositor

pub mod frame_target;
pub mod target_pool;

pub use frame_target::*;
pub use target_pool::*;
