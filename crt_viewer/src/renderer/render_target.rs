//! RenderTarget trait - an offscreen surface the scene can be drawn into

use crate::renderer::TextureFormat;

/// Render target trait
///
/// Represents an attachment view over a texture that a scene render can be
/// directed at. Recursion-chain and delay-capture targets are color-only;
/// depth for the root scene render is the backend's concern.
pub trait RenderTarget: Send + Sync {
    /// Get the width of the render target in pixels
    fn width(&self) -> u32;

    /// Get the height of the render target in pixels
    fn height(&self) -> u32;

    /// Get the pixel format of the render target
    fn format(&self) -> TextureFormat;
}
