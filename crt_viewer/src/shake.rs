//! Camera shake modulator
//!
//! Applies a small stochastic perturbation to the camera pose and FOV each
//! tick, with geometric decay and a per-axis floor that re-seeds the
//! intensity so the shake never fully extinguishes. The perturbed pose is
//! returned to the caller and discarded after the tick; the stored pose is
//! never mutated, so shake cannot accumulate into camera drift.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::camera::CameraPose;
use crate::error::{Error, Result};

/// Camera shake parameters
///
/// Intensity units: position in world units, rotation in radians, FOV in
/// degrees. Each sample is uniform in `[-intensity/2, +intensity/2]`.
#[derive(Debug, Clone)]
pub struct ShakeConfig {
    /// Master enable flag
    pub enabled: bool,

    /// Initial position shake intensity (world units)
    pub position_intensity: f32,
    /// Initial rotation shake intensity (radians)
    pub rotation_intensity: f32,
    /// Initial FOV shake intensity (degrees)
    pub fov_intensity: f32,

    /// Multiplicative decay applied to every intensity each tick
    pub decay: f32,

    /// Intensity floors: dropping below re-seeds the axis
    pub position_floor: f32,
    pub rotation_floor: f32,
    pub fov_floor: f32,

    /// Re-seed values applied when an intensity crosses its floor
    pub position_reseed: f32,
    pub rotation_reseed: f32,
    pub fov_reseed: f32,

    /// FOV after shake is clamped to [min_fov - margin, max_fov + margin]
    pub fov_margin: f32,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            position_intensity: 0.01,
            rotation_intensity: 0.000005,
            fov_intensity: 0.5,
            decay: 0.65,
            position_floor: 0.0005,
            rotation_floor: 0.00002,
            fov_floor: 0.05,
            position_reseed: 0.001,
            rotation_reseed: 0.00005,
            fov_reseed: 0.15,
            fov_margin: 0.2,
        }
    }
}

impl ShakeConfig {
    /// Validate the shake parameters
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` if the decay factor is outside
    /// (0, 1) or any intensity, floor, or re-seed value is negative.
    pub fn validate(&self) -> Result<()> {
        if !(self.decay > 0.0 && self.decay < 1.0) {
            return Err(Error::InvalidConfiguration(format!(
                "shake decay must be in (0, 1) (got {})",
                self.decay
            )));
        }
        let non_negative = [
            self.position_intensity,
            self.rotation_intensity,
            self.fov_intensity,
            self.position_floor,
            self.rotation_floor,
            self.fov_floor,
            self.position_reseed,
            self.rotation_reseed,
            self.fov_reseed,
            self.fov_margin,
        ];
        if non_negative.iter().any(|v| *v < 0.0) {
            return Err(Error::InvalidConfiguration(
                "shake intensities, floors, re-seeds and margin must be >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Camera shake state: current per-axis intensities plus the RNG
///
/// `apply()` is the only mutator; it perturbs a pose, decays the
/// intensities, and re-seeds any axis that crossed its floor.
pub struct CameraShake {
    config: ShakeConfig,
    enabled: bool,
    position_intensity: f32,
    rotation_intensity: f32,
    fov_intensity: f32,
    rng: StdRng,
}

impl CameraShake {
    /// Create a new shake state with an entropy-seeded RNG
    pub fn new(config: ShakeConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a new shake state from a fixed seed (deterministic)
    pub fn from_seed(config: ShakeConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: ShakeConfig, rng: StdRng) -> Self {
        Self {
            enabled: config.enabled,
            position_intensity: config.position_intensity,
            rotation_intensity: config.rotation_intensity,
            fov_intensity: config.fov_intensity,
            config,
            rng,
        }
    }

    /// Whether shake is currently applied by the viewer
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable shake at runtime
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Current (position, rotation, fov) intensities
    pub fn intensities(&self) -> (f32, f32, f32) {
        (
            self.position_intensity,
            self.rotation_intensity,
            self.fov_intensity,
        )
    }

    /// Perturb a pose with the current shake intensities
    ///
    /// Draws 3 position samples, 3 rotation samples (yaw, pitch, roll) and
    /// 1 FOV sample, adds them to a copy of `pose`, then decays every
    /// intensity and re-seeds any axis that fell below its floor. The FOV
    /// of the returned pose is clamped to
    /// `[min_fov - fov_margin, max_fov + fov_margin]`.
    ///
    /// The stored pose is not modified; the perturbation is valid for one
    /// tick only.
    pub fn apply(&mut self, pose: &CameraPose, min_fov: f32, max_fov: f32) -> CameraPose {
        let mut shaken = *pose;

        shaken.position.x += self.sample(self.position_intensity);
        shaken.position.y += self.sample(self.position_intensity);
        shaken.position.z += self.sample(self.position_intensity);

        shaken.yaw += self.sample(self.rotation_intensity);
        shaken.pitch += self.sample(self.rotation_intensity);
        shaken.roll += self.sample(self.rotation_intensity);

        let margin = self.config.fov_margin;
        shaken.fov = (shaken.fov + self.sample(self.fov_intensity))
            .clamp(min_fov - margin, max_fov + margin);

        self.decay();
        shaken
    }

    /// Uniform sample in [-intensity/2, +intensity/2]
    fn sample(&mut self, intensity: f32) -> f32 {
        (self.rng.gen::<f32>() - 0.5) * intensity
    }

    /// Decay all intensities, re-seeding any axis below its floor
    ///
    /// The re-seed keeps the shake alive indefinitely at low amplitude
    /// instead of decaying to zero.
    fn decay(&mut self) {
        self.position_intensity *= self.config.decay;
        self.rotation_intensity *= self.config.decay;
        self.fov_intensity *= self.config.decay;

        if self.position_intensity < self.config.position_floor {
            self.position_intensity = self.config.position_reseed;
        }
        if self.rotation_intensity < self.config.rotation_floor {
            self.rotation_intensity = self.config.rotation_reseed;
        }
        if self.fov_intensity < self.config.fov_floor {
            self.fov_intensity = self.config.fov_reseed;
        }
    }
}

#[cfg(test)]
#[path = "shake_tests.rs"]
mod tests;
