//! Bounded pool of reusable frame targets
//!
//! In steady state the delay compositor cycles through `frame_delay + 1`
//! targets; the pool creates each one once and recycles it forever after.
//! The capacity bound turns a recycling bug into a loud `OutOfMemory`
//! instead of an unbounded allocation creep.

use std::sync::{Arc, Mutex};

use slotmap::SlotMap;

use crate::error::{Error, Result};
use crate::renderer::{GraphicsDevice, TextureDesc, TextureFormat, TextureUsage};
use crate::target::{FrameTarget, TargetKey};
use crate::{viewer_err, viewer_trace, viewer_warn};

struct SlotState {
    in_use: bool,
}

/// Pool of fixed-size capture targets
pub struct TargetPool {
    device: Arc<Mutex<dyn GraphicsDevice>>,
    width: u32,
    height: u32,
    format: TextureFormat,
    capacity: usize,
    slots: SlotMap<TargetKey, SlotState>,
    free: Vec<FrameTarget>,
}

impl TargetPool {
    /// Create an empty pool; targets are allocated lazily on acquire
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` if `capacity` is 0.
    pub fn new(
        device: Arc<Mutex<dyn GraphicsDevice>>,
        width: u32,
        height: u32,
        format: TextureFormat,
        capacity: usize,
    ) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidConfiguration(
                "target pool capacity must be >= 1".to_string(),
            ));
        }
        Ok(Self {
            device,
            width,
            height,
            format,
            capacity,
            slots: SlotMap::with_key(),
            free: Vec::new(),
        })
    }

    /// Check a target out of the pool, reusing a free one if available
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfMemory` when the pool is at capacity with no
    /// free target, or propagates the device error if allocation fails.
    pub fn acquire(&mut self) -> Result<FrameTarget> {
        if let Some(target) = self.free.pop() {
            self.slots[target.key()].in_use = true;
            return Ok(target);
        }

        if self.slots.len() >= self.capacity {
            viewer_warn!(
                "crt::TargetPool",
                "pool exhausted: {} targets allocated, none free",
                self.capacity
            );
            return Err(Error::OutOfMemory);
        }

        let mut device = self
            .device
            .lock()
            .map_err(|_| viewer_err!("crt::TargetPool", "graphics device lock poisoned"))?;
        let texture = device.create_texture(TextureDesc {
            width: self.width,
            height: self.height,
            format: self.format,
            usage: TextureUsage::SampledAndRenderTarget,
        })?;
        let attachment = device.create_render_target(&texture)?;
        drop(device);

        let key = self.slots.insert(SlotState { in_use: true });
        viewer_trace!(
            "crt::TargetPool",
            "allocated target {}/{} ({}x{})",
            self.slots.len(),
            self.capacity,
            self.width,
            self.height
        );
        Ok(FrameTarget::new(key, texture, attachment))
    }

    /// Return a target to the pool for reuse
    ///
    /// Releasing a target the pool does not recognize is logged and
    /// ignored; the target's resources are still freed by dropping it.
    pub fn release(&mut self, target: FrameTarget) {
        match self.slots.get_mut(target.key()) {
            Some(slot) if slot.in_use => {
                slot.in_use = false;
                self.free.push(target);
            }
            Some(_) => {
                viewer_warn!("crt::TargetPool", "target released twice, dropping it");
            }
            None => {
                viewer_warn!("crt::TargetPool", "released target from another pool");
            }
        }
    }

    /// Number of targets currently checked out
    pub fn outstanding(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Number of free targets ready for reuse
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Total number of targets the pool has allocated
    pub fn allocated(&self) -> usize {
        self.slots.len()
    }

    /// Drop every free target and forget outstanding ones
    ///
    /// Used at shutdown after the compositor has drained its queue.
    pub fn clear(&mut self) {
        self.free.clear();
        self.slots.clear();
    }
}

#[cfg(test)]
#[path = "target_pool_tests.rs"]
mod tests;
