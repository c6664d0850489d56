/// ViewFrustum: six clipping planes for visibility culling.
///
/// Each plane is `a·x + b·y + c·z + d` with an inward-pointing normal.
/// A point is inside the frustum when every plane evaluates strictly
/// positive; a point on a boundary plane is outside.
///
/// The frustum is updated in place once per frame from the camera's
/// projection and view matrices, then queried many times. Queries take
/// `&self` and the update takes `&mut self`, so the borrow checker
/// rules out reading a half-updated set of planes. For a parallel
/// culling pass, update first and share `&ViewFrustum` afterwards.

use glam::{Mat4, Vec3};
use crate::error::{Error, Result};
use crate::volume::BoundingVolume;
use super::camera::Camera;
use super::plane::Plane;

const LOG_SOURCE: &str = "galaxy3d::ViewFrustum";

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Plane names, indexed by the PLANE_* constants.
pub const PLANE_NAMES: [&str; 6] = ["left", "right", "bottom", "top", "near", "far"];

/// Lifecycle of a ViewFrustum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumState {
    /// Constructed, never updated. All planes are zero and every query fails.
    Uninitialized,
    /// Planes reflect the most recent `update`.
    Current,
}

/// Result of a 3-way frustum/volume classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// Every corner is on the non-positive side of one plane
    Outside,
    /// Every corner is strictly inside every plane
    Inside,
    /// Neither of the above. Includes boxes that are really outside
    /// near a frustum edge or corner.
    Partial,
}

/// View frustum: left, right, bottom, top, near, far.
#[derive(Debug, Clone, Copy)]
pub struct ViewFrustum {
    planes: [Plane; 6],
    /// Scratch: projection * view from the last update
    clip: Mat4,
    state: FrustumState,
}

impl Default for ViewFrustum {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewFrustum {
    /// Uninitialized frustum (all planes zero).
    pub fn new() -> Self {
        Self {
            planes: [Plane::ZERO; 6],
            clip: Mat4::ZERO,
            state: FrustumState::Uninitialized,
        }
    }

    /// Construct and update in one step.
    pub fn from_matrices(projection: &Mat4, view: &Mat4) -> Self {
        let mut frustum = Self::new();
        frustum.update(projection, view);
        frustum
    }

    /// Re-extract all six planes from the camera matrices.
    ///
    /// Matrices follow glam's column-vector convention with OpenGL clip
    /// depth (-w..w), e.g. `Mat4::perspective_rh_gl`. The clip matrix is
    /// `projection * view`. Planes are Gribb & Hartmann: `row3 ± row_i`,
    /// plus for left/bottom/near, minus for right/top/far.
    ///
    /// Never fails. A plane with a degenerate normal is logged and kept
    /// unnormalized; the other planes are unaffected.
    pub fn update(&mut self, projection: &Mat4, view: &Mat4) {
        let clip = *projection * *view;
        let w_row = clip.row(3);

        let mut planes = [Plane::ZERO; 6];
        for axis in 0..3 {
            let row = clip.row(axis);
            planes[axis * 2] = Plane::from_vec4(w_row + row);
            planes[axis * 2 + 1] = Plane::from_vec4(w_row - row);
        }

        for (index, plane) in planes.iter_mut().enumerate() {
            if !plane.normalize() {
                crate::engine_warn!(
                    LOG_SOURCE,
                    "Degenerate {} plane (normal length {}), left unnormalized",
                    PLANE_NAMES[index],
                    plane.normal().length()
                );
            }
        }

        // Single commit of all six planes
        self.planes = planes;
        self.clip = clip;
        self.state = FrustumState::Current;
    }

    /// `update` using the camera's projection and view matrices.
    pub fn update_from_camera(&mut self, camera: &Camera) {
        self.update(camera.projection_matrix(), camera.view_matrix());
    }

    // ===== QUERIES =====

    /// `true` iff the point is strictly inside all six planes.
    pub fn intersects_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|plane| plane.evaluate(point) > 0.0)
    }

    pub fn intersects_xyz(&self, x: f32, y: f32, z: f32) -> bool {
        self.intersects_point(Vec3::new(x, y, z))
    }

    /// Camera-relative box test.
    ///
    /// Corners are shifted by `-camera_position` before evaluation, to
    /// match a frustum extracted from a rotation-only view matrix. Pass
    /// `Vec3::ZERO` when the view matrix already contains the camera
    /// translation.
    ///
    /// Culls (returns `false`) as soon as one plane has all 8 corners on
    /// its non-positive side. Conservative: a box outside the frustum
    /// only across an edge or corner can still return `true`.
    pub fn intersects_aabb<V: BoundingVolume + ?Sized>(&self, volume: &V, camera_position: Vec3) -> bool {
        let corners = volume.vertices().map(|v| v - camera_position);
        self.planes
            .iter()
            .all(|plane| corners.iter().any(|&corner| plane.evaluate(corner) > 0.0))
    }

    /// Camera-relative 3-way classification.
    ///
    /// `Outside` under exactly the rule `intersects_aabb` uses, so
    /// `intersects_aabb(v, p) == (classify_aabb(v, p) != Outside)`.
    pub fn classify_aabb<V: BoundingVolume + ?Sized>(&self, volume: &V, camera_position: Vec3) -> FrustumTest {
        let corners = volume.vertices().map(|v| v - camera_position);
        let mut all_inside = true;

        for plane in &self.planes {
            let positive = corners.iter().filter(|&&corner| plane.evaluate(corner) > 0.0).count();
            if positive == 0 {
                return FrustumTest::Outside;
            }
            if positive < corners.len() {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }

    // ===== ACCESSORS =====

    /// Planes in PLANE_* order.
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    pub fn plane(&self, index: usize) -> Result<&Plane> {
        self.planes.get(index).ok_or(Error::InvalidPlaneIndex(index))
    }

    /// Clip matrix (projection * view) from the last update.
    /// `Mat4::ZERO` while uninitialized.
    pub fn clip_matrix(&self) -> &Mat4 {
        &self.clip
    }

    pub fn state(&self) -> FrustumState {
        self.state
    }

    pub fn is_current(&self) -> bool {
        self.state == FrustumState::Current
    }

    /// Planes as 24 packed `f32` (a, b, c, d per plane) for GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.planes[..])
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
