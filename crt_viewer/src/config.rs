//! Viewer configuration
//!
//! All externally settable constants for the viewer: recursion depth,
//! frame delay, camera movement/look/zoom tuning, collision radius, and
//! the camera shake parameters. Validated once at setup time, before the
//! render loop starts.

use crate::error::{Error, Result};
use crate::renderer::TextureFormat;
use crate::shake::ShakeConfig;

/// Viewer configuration
///
/// Defaults match the tuning of the reference scene: a 4:3 camera in a
/// small room, 8 recursion levels, and a 5-frame screen delay.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Number of recursion levels `L` in the feedback chain (must be >= 1).
    /// Level `L-1` is the deepest (rendered first), level 0 is what the
    /// viewer ultimately sees through the TV screen.
    pub recursion_levels: usize,

    /// Number of ticks the screen image lags behind the live scene
    /// (must be >= 1). This is the perceptual ghost length.
    pub frame_delay: usize,

    /// Resolution of the recursion chain and delay capture targets, in
    /// pixels per side. Fixed regardless of the presentation surface size.
    pub target_size: u32,

    /// Pixel format of all offscreen targets
    pub target_format: TextureFormat,

    /// Camera eye height above the floor; re-pinned every tick
    pub eye_height: f32,

    /// Movement speed in world units per second
    pub move_speed: f32,

    /// Look sensitivity in radians per normalized look-delta unit
    pub look_sensitivity: f32,

    /// FOV change in degrees per normalized zoom-delta unit
    pub zoom_speed: f32,

    /// Minimum vertical FOV in degrees (maximum zoom in)
    pub min_fov: f32,

    /// Maximum vertical FOV in degrees (maximum zoom out)
    pub max_fov: f32,

    /// Initial vertical FOV in degrees; clamped into [min_fov, max_fov]
    pub initial_fov: f32,

    /// Collision probe radius around the camera, in world units
    pub collision_radius: f32,

    /// Movement-axis dead zone: deflections with |value| <= dead_zone are
    /// ignored (joystick drift suppression)
    pub dead_zone: f32,

    /// Near clip plane distance
    pub near_plane: f32,

    /// Far clip plane distance
    pub far_plane: f32,

    /// Initial presentation aspect ratio (width / height)
    pub initial_aspect: f32,

    /// Camera shake parameters
    pub shake: ShakeConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            recursion_levels: 8,
            frame_delay: 5,
            target_size: 512,
            target_format: TextureFormat::R8G8B8A8_UNORM,
            eye_height: 1.7,
            move_speed: 6.0,
            look_sensitivity: 0.0008,
            zoom_speed: 2.0,
            min_fov: 20.0,
            max_fov: 30.0,
            initial_fov: 25.0,
            collision_radius: 0.5,
            dead_zone: 10.0,
            near_plane: 0.1,
            far_plane: 1000.0,
            initial_aspect: 4.0 / 3.0,
            shake: ShakeConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Validate the configuration
    ///
    /// Called once by `CrtViewer::new()` before any GPU resources are
    /// allocated. Rejecting here keeps the per-tick path free of
    /// configuration checks.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` describing the first rejected
    /// field.
    pub fn validate(&self) -> Result<()> {
        if self.recursion_levels == 0 {
            return Err(Error::InvalidConfiguration(
                "recursion_levels must be >= 1".to_string(),
            ));
        }
        if self.frame_delay == 0 {
            return Err(Error::InvalidConfiguration(
                "frame_delay must be >= 1".to_string(),
            ));
        }
        if self.target_size == 0 {
            return Err(Error::InvalidConfiguration(
                "target_size must be > 0".to_string(),
            ));
        }
        if !(self.min_fov > 0.0 && self.min_fov < self.max_fov) {
            return Err(Error::InvalidConfiguration(format!(
                "FOV bounds must satisfy 0 < min < max (got {}..{})",
                self.min_fov, self.max_fov
            )));
        }
        if self.initial_fov < self.min_fov || self.initial_fov > self.max_fov {
            return Err(Error::InvalidConfiguration(format!(
                "initial_fov {} outside [{}, {}]",
                self.initial_fov, self.min_fov, self.max_fov
            )));
        }
        if self.collision_radius < 0.0 {
            return Err(Error::InvalidConfiguration(
                "collision_radius must be >= 0".to_string(),
            ));
        }
        if !(self.near_plane > 0.0 && self.near_plane < self.far_plane) {
            return Err(Error::InvalidConfiguration(format!(
                "clip planes must satisfy 0 < near < far (got {}..{})",
                self.near_plane, self.far_plane
            )));
        }
        if self.initial_aspect <= 0.0 {
            return Err(Error::InvalidConfiguration(
                "initial_aspect must be > 0".to_string(),
            ));
        }
        self.shake.validate()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
