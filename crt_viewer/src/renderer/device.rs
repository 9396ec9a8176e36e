//! GraphicsDevice trait - resource allocation seam between the viewer core
//! and a rendering backend

use std::sync::Arc;

use crate::error::Result;
use crate::renderer::{RenderTarget, Texture, TextureDesc};

/// Graphics device trait
///
/// The viewer allocates all its offscreen resources through this trait and
/// never frees them explicitly; textures and render targets are released by
/// dropping the last `Arc` reference. Backends are shared as
/// `Arc<Mutex<dyn GraphicsDevice>>` so the viewer, the scene, and the demo
/// harness can all allocate from the same device.
pub trait GraphicsDevice: Send + Sync {
    /// Create a texture matching `desc`
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfMemory` if the backend cannot allocate the
    /// texture, or `Error::BackendError` for other backend failures.
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>>;

    /// Create a render target attachment over `texture`
    ///
    /// The texture must have been created with a usage that permits render
    /// target attachment.
    ///
    /// # Errors
    ///
    /// Returns `Error::BackendError` if the texture usage does not allow
    /// attachment or the backend fails to create the view.
    fn create_render_target(&mut self, texture: &Arc<dyn Texture>) -> Result<Arc<dyn RenderTarget>>;
}
