/*!
# CRT Viewer

Core library for an interactive 3D scene containing a simulated CRT
television whose screen displays a time-delayed, recursively
self-referential feedback image of the scene it sits in.

The crate is built around a small number of cooperating parts:

- **GraphicsDevice**: factory trait for offscreen render targets; real GPU
  backends implement it out of tree, `HeadlessDevice` backs tests and
  headless runs
- **Scene**: capability trait for the external world (geometry, lights, the
  screen mesh); the viewer only asks it to render from a camera with an
  explicit screen-texture binding
- **RecursionChain**: renders the scene deepest-first into a chain of
  targets, producing the bounded "TV inside a TV" image
- **DelayCompositor**: captures the composited frame each tick into a
  bounded queue and exposes a delayed frame for the screen, producing the
  ghosting effect
- **FirstPersonNavigator** / **CameraShake**: integrate control input into a
  camera pose, with optional stochastic perturbation

All per-frame state lives in one explicit `CrtViewer` value owned by the
caller; there are no ambient singletons besides the logger.
*/

// Internal modules
mod error;
mod config;
mod viewer;
pub mod log;
pub mod input;
pub mod renderer;
pub mod scene;
pub mod camera;
pub mod navigate;
pub mod shake;
pub mod target;
pub mod feedback;
pub mod compositor;

// Main crt namespace module
pub mod crt {
    // Error types
    pub use crate::error::{Error, Result};

    // Configuration
    pub use crate::config::ViewerConfig;

    // Tick driver
    pub use crate::viewer::{CrtViewer, ViewerStats};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Render sub-module with the device-facing types
    pub mod render {
        pub use crate::renderer::*;
    }

    // Scene capability sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }
}

// Re-export math library at crate root
pub use glam;
