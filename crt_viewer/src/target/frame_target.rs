//! A pooled capture target: one texture plus its attachment view

use std::sync::Arc;

use slotmap::new_key_type;

use crate::renderer::{RenderTarget, Texture};

new_key_type! {
    /// Key identifying a pool slot
    pub struct TargetKey;
}

/// One capture target owned by the pool or checked out by a caller
///
/// Acquire and release move the whole value, so a target can never be
/// held by two owners or released twice without the pool noticing.
pub struct FrameTarget {
    key: TargetKey,
    texture: Arc<dyn Texture>,
    attachment: Arc<dyn RenderTarget>,
}

impl FrameTarget {
    pub(crate) fn new(
        key: TargetKey,
        texture: Arc<dyn Texture>,
        attachment: Arc<dyn RenderTarget>,
    ) -> Self {
        Self {
            key,
            texture,
            attachment,
        }
    }

    pub(crate) fn key(&self) -> TargetKey {
        self.key
    }

    /// The texture a scene's screen material can sample
    pub fn texture(&self) -> &Arc<dyn Texture> {
        &self.texture
    }

    /// The attachment a scene render can draw into
    pub fn attachment(&self) -> &Arc<dyn RenderTarget> {
        &self.attachment
    }
}
