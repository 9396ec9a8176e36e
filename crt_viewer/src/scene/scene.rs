//! Scene trait
//!
//! The scene owns the world geometry, including the TV whose screen
//! material samples a texture the viewer controls. Each render call states
//! explicitly which texture the screen shows and where the output goes;
//! the scene holds no per-call rendering state of its own between calls.

use std::sync::Arc;

use crate::camera::Camera;
use crate::error::Result;
use crate::navigate::Collider;
use crate::renderer::{RenderTarget, Texture};

/// Which texture the TV screen material samples for one render call
///
/// The binding lives for the duration of the call only. Chain renders
/// override the screen per level; the final presentation render uses the
/// persistent texture installed via `Scene::set_screen_texture`.
#[derive(Clone, Copy)]
pub enum ScreenBinding<'a> {
    /// Sample the persistently installed screen texture
    Persistent,
    /// Sample `texture` for this call only
    Override(&'a Arc<dyn Texture>),
}

/// Where a render call draws to
#[derive(Clone, Copy)]
pub enum RenderDestination<'a> {
    /// The presentation surface (window or headless sink)
    Surface,
    /// An offscreen render target
    Target(&'a Arc<dyn RenderTarget>),
}

/// Scene trait
///
/// Implemented by the embedding application. The viewer drives it with
/// one camera, one screen binding, and one destination per render call.
pub trait Scene {
    /// Render the scene
    ///
    /// # Errors
    ///
    /// Returns `Error::BackendError` if the underlying renderer fails; the
    /// viewer treats a failed chain or capture render as a skipped tick.
    fn render(
        &mut self,
        camera: &Camera,
        screen: ScreenBinding<'_>,
        destination: RenderDestination<'_>,
    ) -> Result<()>;

    /// Install the texture the TV screen shows whenever a render call
    /// passes `ScreenBinding::Persistent`
    ///
    /// Called by the viewer at the end of every tick with the delayed
    /// frame (or the placeholder during cold start).
    fn set_screen_texture(&mut self, texture: Arc<dyn Texture>);

    /// Static collision geometry the navigator probes against
    fn colliders(&self) -> &[Collider];
}
