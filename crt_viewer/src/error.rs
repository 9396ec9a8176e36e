//! Error types for the CRT viewer
//!
//! This module defines the error types used throughout the viewer,
//! covering setup, configuration, and render-path failures.

use std::fmt;

/// Result type for CRT viewer operations
pub type Result<T> = std::result::Result<T, Error>;

/// CRT viewer errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (GPU device, scene renderer, etc.)
    BackendError(String),

    /// Out of GPU memory or target-pool capacity. Fatal: the caller of
    /// setup must not retry, and a tick that hits this should stop the loop.
    OutOfMemory,

    /// Rejected configuration (recursion depth 0, frame delay 0, inverted
    /// FOV bounds, ...). Raised at setup time, before the render loop starts.
    InvalidConfiguration(String),

    /// Initialization failed (device, targets, subsystems)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error and produce an `Error::BackendError` value
///
/// # Example
///
/// ```ignore
/// return Err(viewer_err!("crt::TargetPool", "device lock poisoned"));
/// ```
#[macro_export]
macro_rules! viewer_err {
    ($source:expr, $($arg:tt)*) => {{
        let msg = format!($($arg)*);
        $crate::viewer_error!($source, "{}", msg);
        $crate::crt::Error::BackendError(msg)
    }};
}

/// Log an error and return early with an `Error::BackendError`
///
/// # Example
///
/// ```ignore
/// viewer_bail!("crt::TargetPool", "target pool exhausted ({} slots)", cap);
/// ```
#[macro_export]
macro_rules! viewer_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::viewer_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
