//! Recursive feedback chain

pub mod chain;

pub use chain::*;
