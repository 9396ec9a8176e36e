//! Recording scene for tests

use std::sync::Arc;

use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::navigate::Collider;
use crate::renderer::{RenderTarget, Texture};
use crate::scene::{RenderDestination, Scene, ScreenBinding};

/// Owned copy of a screen binding, recorded per render call
pub enum RecordedBinding {
    Persistent,
    Override(Arc<dyn Texture>),
}

/// Owned copy of a render destination, recorded per render call
pub enum RecordedDestination {
    Surface,
    Target(Arc<dyn RenderTarget>),
}

/// One recorded render call
pub struct RenderCall {
    pub binding: RecordedBinding,
    pub destination: RecordedDestination,
    /// The persistently installed screen texture at the time of the call
    pub installed_screen: Option<Arc<dyn Texture>>,
}

/// Scene that records every render call instead of drawing
pub struct RecordingScene {
    calls: Vec<RenderCall>,
    installed_screen: Option<Arc<dyn Texture>>,
    colliders: Vec<Collider>,
    fail_on_call: Option<usize>,
}

impl RecordingScene {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            installed_screen: None,
            colliders: Vec::new(),
            fail_on_call: None,
        }
    }

    pub fn with_colliders(colliders: Vec<Collider>) -> Self {
        Self {
            colliders,
            ..Self::new()
        }
    }

    /// Make the `index`-th render call (0-based, counted across the
    /// scene's lifetime) fail with a backend error
    pub fn fail_on_call(&mut self, index: usize) {
        self.fail_on_call = Some(index);
    }

    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    pub fn installed_screen(&self) -> Option<&Arc<dyn Texture>> {
        self.installed_screen.as_ref()
    }
}

impl Default for RecordingScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for RecordingScene {
    fn render(
        &mut self,
        _camera: &Camera,
        screen: ScreenBinding<'_>,
        destination: RenderDestination<'_>,
    ) -> Result<()> {
        let index = self.calls.len();
        self.calls.push(RenderCall {
            binding: match screen {
                ScreenBinding::Persistent => RecordedBinding::Persistent,
                ScreenBinding::Override(texture) => RecordedBinding::Override(Arc::clone(texture)),
            },
            destination: match destination {
                RenderDestination::Surface => RecordedDestination::Surface,
                RenderDestination::Target(target) => {
                    RecordedDestination::Target(Arc::clone(target))
                }
            },
            installed_screen: self.installed_screen.clone(),
        });
        if self.fail_on_call == Some(index) {
            return Err(Error::BackendError("injected render failure".to_string()));
        }
        Ok(())
    }

    fn set_screen_texture(&mut self, texture: Arc<dyn Texture>) {
        self.installed_screen = Some(texture);
    }

    fn colliders(&self) -> &[Collider] {
        &self.colliders
    }
}
