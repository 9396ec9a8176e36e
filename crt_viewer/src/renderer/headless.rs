//! Headless (CPU-only) graphics device
//!
//! Allocates no GPU memory; textures and render targets are bookkeeping
//! objects that validate usage and track lifetimes. Used by the test suite
//! and by headless demo runs where presentation is a no-op.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::renderer::{
    GraphicsDevice, RenderTarget, Texture, TextureDesc, TextureFormat, TextureInfo, TextureUsage,
};
use crate::viewer_bail;

/// Headless texture: carries only its descriptor and a liveness token
pub struct HeadlessTexture {
    info: TextureInfo,
    alive: Arc<AtomicUsize>,
}

impl Texture for HeadlessTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

impl Drop for HeadlessTexture {
    fn drop(&mut self) {
        self.alive.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Headless render target attachment
pub struct HeadlessRenderTarget {
    width: u32,
    height: u32,
    format: TextureFormat,
}

impl RenderTarget for HeadlessRenderTarget {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn format(&self) -> TextureFormat {
        self.format
    }
}

/// Headless graphics device
///
/// Tracks how many textures have been created in total and how many are
/// still alive, so tests can assert pool reuse and leak-freedom. An
/// optional allocation budget turns the Nth creation into
/// `Error::OutOfMemory` for failure-path testing.
pub struct HeadlessDevice {
    created: usize,
    alive: Arc<AtomicUsize>,
    fail_after: Option<usize>,
}

impl HeadlessDevice {
    /// Create a headless device with no allocation budget
    pub fn new() -> Self {
        Self {
            created: 0,
            alive: Arc::new(AtomicUsize::new(0)),
            fail_after: None,
        }
    }

    /// Fail texture creation with `Error::OutOfMemory` once `budget`
    /// textures have been created
    pub fn with_budget(budget: usize) -> Self {
        Self {
            fail_after: Some(budget),
            ..Self::new()
        }
    }

    /// Total number of textures ever created by this device
    pub fn textures_created(&self) -> usize {
        self.created
    }

    /// Number of textures currently alive (created and not yet dropped)
    pub fn textures_alive(&self) -> usize {
        self.alive.load(Ordering::Relaxed)
    }
}

impl Default for HeadlessDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsDevice for HeadlessDevice {
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        if desc.width == 0 || desc.height == 0 {
            viewer_bail!(
                "crt::HeadlessDevice",
                "texture dimensions must be non-zero (got {}x{})",
                desc.width,
                desc.height
            );
        }
        if let Some(budget) = self.fail_after {
            if self.created >= budget {
                return Err(Error::OutOfMemory);
            }
        }
        self.created += 1;
        self.alive.fetch_add(1, Ordering::Relaxed);
        Ok(Arc::new(HeadlessTexture {
            info: TextureInfo {
                width: desc.width,
                height: desc.height,
                format: desc.format,
                usage: desc.usage,
            },
            alive: Arc::clone(&self.alive),
        }))
    }

    fn create_render_target(&mut self, texture: &Arc<dyn Texture>) -> Result<Arc<dyn RenderTarget>> {
        let info = texture.info();
        match info.usage {
            TextureUsage::RenderTarget | TextureUsage::SampledAndRenderTarget => {}
            TextureUsage::Sampled => {
                viewer_bail!(
                    "crt::HeadlessDevice",
                    "texture usage does not permit render target attachment"
                );
            }
        }
        Ok(Arc::new(HeadlessRenderTarget {
            width: info.width,
            height: info.height,
            format: info.format,
        }))
    }
}

#[cfg(test)]
#[path = "headless_tests.rs"]
mod tests;
