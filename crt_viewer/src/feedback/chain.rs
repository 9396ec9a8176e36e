//! Recursive feedback chain
//!
//! A render target cannot be sampled while it is being drawn into, so the
//! infinite TV-in-TV regress is approximated by a fixed chain of targets
//! rendered deepest-first. Level `L-1` renders with the persistent screen
//! texture; every shallower level renders with the next deeper level's
//! texture bound as the screen, so level 0 ends up holding `L` nested
//! reflections.

use std::sync::{Arc, Mutex};

use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::renderer::{
    GraphicsDevice, RenderTarget, Texture, TextureDesc, TextureFormat, TextureUsage,
};
use crate::scene::{RenderDestination, Scene, ScreenBinding};
use crate::{viewer_debug, viewer_err};

struct ChainLevel {
    texture: Arc<dyn Texture>,
    attachment: Arc<dyn RenderTarget>,
}

/// Fixed-depth chain of feedback render targets
pub struct RecursionChain {
    levels: Vec<ChainLevel>,
}

impl RecursionChain {
    /// Allocate `levels` feedback targets of `size` x `size` pixels
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` if `levels` is 0, or the
    /// device error if target allocation fails.
    pub fn new(
        device: Arc<Mutex<dyn GraphicsDevice>>,
        levels: usize,
        size: u32,
        format: TextureFormat,
    ) -> Result<Self> {
        if levels == 0 {
            return Err(Error::InvalidConfiguration(
                "recursion chain needs at least one level".to_string(),
            ));
        }

        let mut device = device
            .lock()
            .map_err(|_| viewer_err!("crt::RecursionChain", "graphics device lock poisoned"))?;
        let mut chain = Vec::with_capacity(levels);
        for _ in 0..levels {
            let texture = device.create_texture(TextureDesc {
                width: size,
                height: size,
                format,
                usage: TextureUsage::SampledAndRenderTarget,
            })?;
            let attachment = device.create_render_target(&texture)?;
            chain.push(ChainLevel {
                texture,
                attachment,
            });
        }
        viewer_debug!(
            "crt::RecursionChain",
            "allocated {} feedback levels at {}x{}",
            levels,
            size,
            size
        );
        Ok(Self { levels: chain })
    }

    /// Render every level, deepest first
    ///
    /// Level `L-1` binds the scene's persistent screen texture; level `i`
    /// for `i < L-1` binds level `i+1`'s texture. After this returns,
    /// `front_texture()` holds the fully nested reflection for the tick.
    ///
    /// # Errors
    ///
    /// Propagates the first failed scene render; shallower levels are not
    /// rendered after a failure.
    pub fn render(&self, scene: &mut dyn Scene, camera: &Camera) -> Result<()> {
        let deepest = self.levels.len() - 1;
        for i in (0..self.levels.len()).rev() {
            let binding = if i == deepest {
                ScreenBinding::Persistent
            } else {
                ScreenBinding::Override(&self.levels[i + 1].texture)
            };
            scene.render(
                camera,
                binding,
                RenderDestination::Target(&self.levels[i].attachment),
            )?;
        }
        Ok(())
    }

    /// Texture of level 0, the most deeply nested reflection
    pub fn front_texture(&self) -> &Arc<dyn Texture> {
        &self.levels[0].texture
    }

    /// Number of recursion levels
    pub fn depth(&self) -> usize {
        self.levels.len()
    }
}

#[cfg(test)]
impl RecursionChain {
    pub(crate) fn level_texture(&self, level: usize) -> &Arc<dyn Texture> {
        &self.levels[level].texture
    }

    pub(crate) fn level_attachment(&self, level: usize) -> &Arc<dyn RenderTarget> {
        &self.levels[level].attachment
    }
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod tests;
