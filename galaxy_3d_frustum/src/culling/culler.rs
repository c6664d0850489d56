/// Camera culling strategies.
///
/// A CameraCuller decides which volumes of a VolumeSet are visible from
/// the camera this frame. The frustum is passed in already updated so
/// several cullers (or a parallel pass) can share one extraction.

use crate::camera::{Camera, ViewFrustum};
use super::visible_set::VisibleSet;
use super::volume_set::{VolumeKey, VolumeSet};

/// Strategy for determining visible volumes.
///
/// Called once per frame after `ViewFrustum::update`. `&mut self`
/// allows stateful implementations to keep data across frames.
pub trait CameraCuller: Send + Sync {
    fn cull(&mut self, frustum: &ViewFrustum, camera: &Camera, volumes: &VolumeSet) -> VisibleSet;
}

/// Brute-force culler: everything is visible.
///
/// Baseline for comparisons and debugging culling artifacts.
#[derive(Debug, Default)]
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl CameraCuller for BruteForceCuller {
    fn cull(&mut self, _frustum: &ViewFrustum, camera: &Camera, volumes: &VolumeSet) -> VisibleSet {
        let visible: Vec<VolumeKey> = volumes.keys().collect();
        let tested = visible.len();
        VisibleSet::new(*camera, visible, tested)
    }
}

/// Frustum culler: camera-relative `intersects_aabb` on every volume.
///
/// Inherits the per-plane test's false positives near frustum edges;
/// it never drops a volume that a single plane does not separate.
#[derive(Debug, Default)]
pub struct FrustumCuller;

impl FrustumCuller {
    const LOG_SOURCE: &'static str = "galaxy3d::FrustumCuller";

    pub fn new() -> Self {
        Self
    }
}

impl CameraCuller for FrustumCuller {
    fn cull(&mut self, frustum: &ViewFrustum, camera: &Camera, volumes: &VolumeSet) -> VisibleSet {
        if !frustum.is_current() {
            crate::engine_warn!(
                Self::LOG_SOURCE,
                "Culling with an uninitialized frustum, all {} volumes culled",
                volumes.len()
            );
        }

        let camera_position = camera.position();
        let visible: Vec<VolumeKey> = volumes
            .iter()
            .filter(|(_, volume)| frustum.intersects_aabb(*volume, camera_position))
            .map(|(key, _)| key)
            .collect();

        let result = VisibleSet::new(*camera, visible, volumes.len());
        let stats = result.stats();
        crate::engine_trace!(
            Self::LOG_SOURCE,
            "Culled {}/{} volumes ({} visible)",
            stats.culled,
            stats.tested,
            stats.visible
        );
        result
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
