//! Temporal delay compositor

pub mod delay_queue;
pub mod compositor;

pub use delay_queue::*;
pub use compositor::*;
