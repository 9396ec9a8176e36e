//! Camera with precomputed view and projection matrices

use glam::Mat4;

use crate::camera::CameraPose;

/// Camera snapshot handed to the scene for rendering
///
/// Built from a pose once per tick; the scene receives matrices only and
/// cannot mutate the pose it was derived from.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Camera {
    /// Build a camera from a pose and projection parameters
    pub fn from_pose(pose: &CameraPose, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            view_matrix: pose.view_matrix(),
            projection_matrix: pose.projection_matrix(aspect, near, far),
        }
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    /// Get the combined view-projection matrix
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
