/// Camera: low-level passive data container.
///
/// Carries what frustum culling needs from the active camera: view
/// matrix, projection matrix and world-space position. The caller
/// computes and sets all of them every frame; the Camera computes
/// nothing beyond their product.

use glam::{Mat4, Vec3};

/// Low-level camera. A passive data container.
///
/// When the view matrix is rotation-only (camera-relative rendering),
/// `position` is what `ViewFrustum::intersects_aabb` subtracts from
/// world-space corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
    position: Vec3,
}

impl Camera {
    pub fn new(view: Mat4, projection: Mat4, position: Vec3) -> Self {
        Self {
            view_matrix: view,
            projection_matrix: projection,
            position,
        }
    }

    // ===== GETTERS =====

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix (perspective or orthographic, OpenGL clip depth).
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// World-space position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    // ===== SETTERS =====

    pub fn set_view(&mut self, matrix: Mat4) {
        self.view_matrix = matrix;
    }

    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
