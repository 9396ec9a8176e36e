//! Temporal delay compositor
//!
//! Captures the live scene into a pooled target every tick and keeps the
//! last `frame_delay` captures queued. The displayed texture is always the
//! oldest queued capture, so the screen at tick `t` shows the capture from
//! tick `t - frame_delay`. Until the queue fills for the first time, a
//! placeholder texture is displayed instead.

use std::sync::{Arc, Mutex};

use crate::camera::Camera;
use crate::compositor::DelayQueue;
use crate::error::Result;
use crate::renderer::{GraphicsDevice, Texture, TextureDesc, TextureFormat, TextureUsage};
use crate::scene::{RenderDestination, Scene, ScreenBinding};
use crate::target::{FrameTarget, TargetPool};
use crate::{viewer_debug, viewer_err};

/// Delay compositor: capture queue plus its target pool
pub struct DelayCompositor {
    pool: TargetPool,
    queue: DelayQueue<FrameTarget>,
    initial_texture: Arc<dyn Texture>,
    captures: u64,
    evictions: u64,
}

impl DelayCompositor {
    /// Create a compositor with a `frame_delay`-deep queue
    ///
    /// The pool capacity is `frame_delay + 1`: the queued captures plus the
    /// one being rendered this tick. `initial_texture` is displayed during
    /// cold start, before the first delayed capture is old enough.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` if `frame_delay` is 0, or the
    /// device error if the placeholder texture cannot be created.
    pub fn new(
        device: Arc<Mutex<dyn GraphicsDevice>>,
        frame_delay: usize,
        target_size: u32,
        format: TextureFormat,
    ) -> Result<Self> {
        let queue = DelayQueue::new(frame_delay)?;
        let initial_texture = {
            let mut locked = device.lock().map_err(|_| {
                viewer_err!("crt::DelayCompositor", "graphics device lock poisoned")
            })?;
            locked.create_texture(TextureDesc {
                width: target_size,
                height: target_size,
                format,
                usage: TextureUsage::Sampled,
            })?
        };
        let pool = TargetPool::new(device, target_size, target_size, format, frame_delay + 1)?;
        viewer_debug!(
            "crt::DelayCompositor",
            "delay queue depth {} ({}x{} captures)",
            frame_delay,
            target_size,
            target_size
        );
        Ok(Self {
            pool,
            queue,
            initial_texture,
            captures: 0,
            evictions: 0,
        })
    }

    /// Capture the live scene for this tick
    ///
    /// Renders the scene (with its persistent screen binding) into a fresh
    /// pooled target, queues the capture, and recycles the capture that
    /// aged out. Call `display_texture()` afterwards for the texture the
    /// screen should show next tick.
    ///
    /// # Errors
    ///
    /// Propagates pool exhaustion or a failed scene render; on a failed
    /// render the acquired target is returned to the pool and the queue is
    /// left unchanged.
    pub fn submit(&mut self, scene: &mut dyn Scene, camera: &Camera) -> Result<()> {
        let target = self.pool.acquire()?;
        if let Err(err) = scene.render(
            camera,
            ScreenBinding::Persistent,
            RenderDestination::Target(target.attachment()),
        ) {
            self.pool.release(target);
            return Err(err);
        }

        self.captures += 1;
        if let Some(evicted) = self.queue.push(target) {
            self.evictions += 1;
            self.pool.release(evicted);
        }
        Ok(())
    }

    /// The texture the screen should display
    ///
    /// The oldest queued capture once the queue has filled, the placeholder
    /// texture before that.
    pub fn display_texture(&self) -> &Arc<dyn Texture> {
        if self.queue.is_full() {
            match self.queue.front() {
                Some(front) => front.texture(),
                None => &self.initial_texture,
            }
        } else {
            &self.initial_texture
        }
    }

    /// Whether the delay pipeline has warmed up past the cold start
    pub fn warmed_up(&self) -> bool {
        self.queue.is_full()
    }

    /// Total captures submitted
    pub fn captures(&self) -> u64 {
        self.captures
    }

    /// Total captures recycled after aging out
    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    /// Number of captures currently queued
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Targets the pool has allocated so far
    pub fn targets_allocated(&self) -> usize {
        self.pool.allocated()
    }

    /// Return every queued capture to the pool and drop the pool's targets
    pub fn clear(&mut self) {
        let drained: Vec<FrameTarget> = self.queue.drain().collect();
        for target in drained {
            self.pool.release(target);
        }
        self.pool.clear();
    }
}

#[cfg(test)]
impl DelayCompositor {
    pub(crate) fn front_target(&self) -> Option<&FrameTarget> {
        self.queue.front()
    }
}

#[cfg(test)]
#[path = "compositor_tests.rs"]
mod tests;
