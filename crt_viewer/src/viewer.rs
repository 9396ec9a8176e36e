//! The viewer: one value owning every per-frame subsystem
//!
//! `CrtViewer` wires the navigator, shake, recursion chain, and delay
//! compositor into a single `tick()` the embedding application calls once
//! per frame. Tick order matters: the screen texture installed at the end
//! of tick `t` is what every render during tick `t + 1` sees, which is
//! what makes the delay exact.

use std::sync::{Arc, Mutex};

use crate::camera::{Camera, CameraPose};
use crate::compositor::DelayCompositor;
use crate::config::ViewerConfig;
use crate::error::Result;
use crate::feedback::RecursionChain;
use crate::input::ControlState;
use crate::navigate::FirstPersonNavigator;
use crate::renderer::GraphicsDevice;
use crate::scene::{RenderDestination, Scene, ScreenBinding};
use crate::shake::CameraShake;
use crate::{viewer_error, viewer_info, viewer_warn};

/// Counters exposed for diagnostics overlays and tests
#[derive(Debug, Clone, Copy)]
pub struct ViewerStats {
    /// Ticks completed successfully
    pub ticks: u64,
    /// Frames captured by the delay compositor
    pub captures: u64,
    /// Captures recycled after aging out of the delay queue
    pub evictions: u64,
    /// Captures currently waiting in the delay queue
    pub queued_frames: usize,
    /// Capture targets allocated so far
    pub targets_allocated: usize,
    /// Whether the delayed image has replaced the cold-start placeholder
    pub warmed_up: bool,
}

/// CRT feedback viewer
pub struct CrtViewer {
    config: ViewerConfig,
    scene: Box<dyn Scene>,
    navigator: FirstPersonNavigator,
    shake: CameraShake,
    chain: RecursionChain,
    compositor: DelayCompositor,
    aspect: f32,
    ticks: u64,
}

impl CrtViewer {
    /// Create a viewer over a scene and a graphics device
    ///
    /// Validates the configuration, allocates the recursion chain and the
    /// delay compositor's placeholder, and installs the placeholder as the
    /// scene's screen texture so the very first tick has something to show.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` for a rejected configuration,
    /// or the device error if target allocation fails.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let device = Arc::new(Mutex::new(HeadlessDevice::new()));
    /// let mut viewer = CrtViewer::new(device, Box::new(scene), ViewerConfig::default())?;
    /// loop {
    ///     viewer.tick(&controls.sample(), dt)?;
    /// }
    /// ```
    pub fn new(
        device: Arc<Mutex<dyn GraphicsDevice>>,
        mut scene: Box<dyn Scene>,
        config: ViewerConfig,
    ) -> Result<Self> {
        config.validate()?;

        let chain = RecursionChain::new(
            Arc::clone(&device),
            config.recursion_levels,
            config.target_size,
            config.target_format,
        )?;
        let compositor = DelayCompositor::new(
            device,
            config.frame_delay,
            config.target_size,
            config.target_format,
        )?;
        scene.set_screen_texture(Arc::clone(compositor.display_texture()));

        let navigator = FirstPersonNavigator::new(&config);
        let shake = CameraShake::new(config.shake.clone());

        viewer_info!(
            "crt::CrtViewer",
            "viewer ready: {} recursion levels, {} tick delay, {}x{} targets",
            config.recursion_levels,
            config.frame_delay,
            config.target_size,
            config.target_size
        );

        Ok(Self {
            aspect: config.initial_aspect,
            config,
            scene,
            navigator,
            shake,
            chain,
            compositor,
            ticks: 0,
        })
    }

    /// Advance the viewer by one tick
    ///
    /// Integrates input into the camera pose, applies shake, renders the
    /// recursion chain deepest-first, captures the delayed frame, presents
    /// to the surface, and finally installs the delayed texture for the
    /// next tick's renders. `dt` is the tick duration in seconds.
    ///
    /// # Errors
    ///
    /// Propagates the first render or allocation failure. The pose update
    /// has already happened by then; target bookkeeping stays balanced, so
    /// calling `tick()` again simply retries the frame.
    pub fn tick(&mut self, control: &ControlState, dt: f32) -> Result<()> {
        let pose = {
            let colliders = self.scene.colliders();
            self.navigator.step(control, dt, colliders)
        };
        let render_pose = if self.shake.is_enabled() {
            self.shake
                .apply(&pose, self.config.min_fov, self.config.max_fov)
        } else {
            pose
        };
        let camera = Camera::from_pose(
            &render_pose,
            self.aspect,
            self.config.near_plane,
            self.config.far_plane,
        );

        self.chain.render(self.scene.as_mut(), &camera)?;
        self.compositor.submit(self.scene.as_mut(), &camera)?;
        self.scene
            .render(&camera, ScreenBinding::Persistent, RenderDestination::Surface)?;

        self.scene
            .set_screen_texture(Arc::clone(self.compositor.display_texture()));
        self.ticks += 1;
        Ok(())
    }

    /// Tick, logging any error instead of propagating it
    ///
    /// Render loops that should survive transient backend failures call
    /// this instead of `tick()`. Returns whether the tick succeeded.
    pub fn tick_guarded(&mut self, control: &ControlState, dt: f32) -> bool {
        match self.tick(control, dt) {
            Ok(()) => true,
            Err(err) => {
                viewer_error!("crt::CrtViewer", "tick {} failed: {}", self.ticks, err);
                false
            }
        }
    }

    /// Update the presentation aspect ratio after a surface resize
    ///
    /// Zero-sized surfaces (minimized windows) are ignored; the offscreen
    /// targets keep their configured size either way.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            viewer_warn!(
                "crt::CrtViewer",
                "ignoring resize to {}x{}",
                width,
                height
            );
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    /// The stored camera pose (never includes shake)
    pub fn pose(&self) -> &CameraPose {
        self.navigator.pose()
    }

    /// Teleport the camera, keeping orientation and FOV
    pub fn set_position(&mut self, position: glam::Vec3) {
        self.navigator.set_position(position);
    }

    /// Enable or disable camera shake at runtime
    pub fn set_shake_enabled(&mut self, enabled: bool) {
        self.shake.set_enabled(enabled);
    }

    /// Whether camera shake is currently applied
    pub fn shake_enabled(&self) -> bool {
        self.shake.is_enabled()
    }

    /// Current diagnostic counters
    pub fn stats(&self) -> ViewerStats {
        ViewerStats {
            ticks: self.ticks,
            captures: self.compositor.captures(),
            evictions: self.compositor.evictions(),
            queued_frames: self.compositor.queued(),
            targets_allocated: self.compositor.targets_allocated(),
            warmed_up: self.compositor.warmed_up(),
        }
    }

    /// Release every pooled capture target
    ///
    /// Called automatically on drop; explicit shutdown lets the caller
    /// release GPU memory before tearing down the device.
    pub fn shutdown(&mut self) {
        self.compositor.clear();
        viewer_info!("crt::CrtViewer", "viewer shut down after {} ticks", self.ticks);
    }
}

impl Drop for CrtViewer {
    fn drop(&mut self) {
        self.compositor.clear();
    }
}

#[cfg(test)]
#[path = "viewer_tests.rs"]
mod tests;
