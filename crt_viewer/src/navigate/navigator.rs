//! First-person navigator
//!
//! Integrates look, movement, and zoom input into the stored camera pose
//! once per tick. Movement is horizontal-only: the forward vector is
//! derived from yaw alone and the eye height is re-pinned every tick, so
//! looking up or down never lifts the camera off the floor.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::camera::CameraPose;
use crate::config::ViewerConfig;
use crate::input::ControlState;
use crate::navigate::{position_blocked, Collider};

/// First-person navigator owning the authoritative camera pose
pub struct FirstPersonNavigator {
    pose: CameraPose,
    eye_height: f32,
    move_speed: f32,
    look_sensitivity: f32,
    zoom_speed: f32,
    min_fov: f32,
    max_fov: f32,
    collision_radius: f32,
    dead_zone: f32,
}

impl FirstPersonNavigator {
    /// Create a navigator at the default spawn point, facing -Z
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            pose: CameraPose::new(
                Vec3::new(0.0, config.eye_height, 5.0),
                config.initial_fov.clamp(config.min_fov, config.max_fov),
            ),
            eye_height: config.eye_height,
            move_speed: config.move_speed,
            look_sensitivity: config.look_sensitivity,
            zoom_speed: config.zoom_speed,
            min_fov: config.min_fov,
            max_fov: config.max_fov,
            collision_radius: config.collision_radius,
            dead_zone: config.dead_zone,
        }
    }

    /// The stored pose (never includes shake)
    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// Teleport the camera, keeping the current orientation and FOV
    ///
    /// The position is accepted without a collision probe; the Y component
    /// is replaced with the configured eye height.
    pub fn set_position(&mut self, position: Vec3) {
        self.pose.position = Vec3::new(position.x, self.eye_height, position.z);
    }

    /// Advance the pose by one tick of input
    ///
    /// Applies look, then movement with collision probing, then zoom, and
    /// returns a copy of the updated pose. A blocked move leaves the
    /// position unchanged for the tick (no sliding along the obstacle).
    pub fn step(
        &mut self,
        control: &ControlState,
        dt: f32,
        colliders: &[Collider],
    ) -> CameraPose {
        self.pose.yaw -= control.look_delta_x * self.look_sensitivity;
        self.pose.pitch = (self.pose.pitch - control.look_delta_y * self.look_sensitivity)
            .clamp(-FRAC_PI_2, FRAC_PI_2);

        let forward = self.pose.horizontal_forward();
        let right = self.pose.horizontal_right();

        let axis = |value: f32| {
            if value.abs() <= self.dead_zone {
                0.0
            } else {
                value.signum()
            }
        };
        let step = (forward * axis(control.move_forward) + right * axis(control.move_right))
            * self.move_speed
            * dt;

        if step != Vec3::ZERO {
            let mut candidate = self.pose.position + step;
            candidate.y = self.eye_height;
            if !position_blocked(candidate, colliders, self.collision_radius) {
                self.pose.position = candidate;
            }
        }
        self.pose.position.y = self.eye_height;

        self.pose.fov = (self.pose.fov + control.zoom_delta * self.zoom_speed)
            .clamp(self.min_fov, self.max_fov);

        self.pose
    }
}

#[cfg(test)]
#[path = "navigator_tests.rs"]
mod tests;
