//! Camera pose: position, orientation angles, and field of view

use glam::{Mat4, Quat, Vec3};

/// Camera pose
///
/// Orientation is yaw (around world Y), pitch (around local X) and roll
/// (around local Z), applied in YXZ order. Navigation only ever produces
/// zero roll; the roll axis exists for the transient shake perturbation.
/// `fov` is the vertical field of view in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space
    pub position: Vec3,
    /// Rotation around world Y in radians
    pub yaw: f32,
    /// Rotation around local X in radians, clamped to [-PI/2, PI/2]
    pub pitch: f32,
    /// Rotation around local Z in radians
    pub roll: f32,
    /// Vertical field of view in degrees
    pub fov: f32,
}

impl CameraPose {
    /// Create a level pose looking down -Z
    pub fn new(position: Vec3, fov: f32) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            fov,
        }
    }

    /// World-space forward direction on the horizontal plane
    ///
    /// Derived from yaw only; pitch does not tilt movement off the floor.
    pub fn horizontal_forward(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// World-space right direction on the horizontal plane
    pub fn horizontal_right(&self) -> Vec3 {
        self.horizontal_forward().cross(Vec3::Y)
    }

    /// Compute the view matrix for this pose
    pub fn view_matrix(&self) -> Mat4 {
        let orientation = Quat::from_euler(glam::EulerRot::YXZ, self.yaw, self.pitch, self.roll);
        Mat4::from_rotation_translation(orientation, self.position).inverse()
    }

    /// Compute a right-handed perspective projection matrix for this pose
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), aspect, near, far)
    }
}

#[cfg(test)]
#[path = "pose_tests.rs"]
mod tests;
