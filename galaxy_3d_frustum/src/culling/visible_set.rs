/// VisibleSet: result of one culling pass.
///
/// Holds a snapshot of the camera used for the pass, the keys of the
/// volumes that survived, and counters. Lives for one frame.

use crate::camera::Camera;
use super::volume_set::VolumeKey;

/// Per-pass counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CullingStats {
    /// Volumes tested
    pub tested: usize,
    /// Volumes reported visible
    pub visible: usize,
    /// Volumes culled
    pub culled: usize,
}

/// Visible volumes for one frame.
#[derive(Debug, Clone)]
pub struct VisibleSet {
    camera: Camera,
    visible: Vec<VolumeKey>,
    stats: CullingStats,
}

impl VisibleSet {
    /// Crate-internal: only cullers create these.
    pub(crate) fn new(camera: Camera, visible: Vec<VolumeKey>, tested: usize) -> Self {
        let stats = CullingStats {
            tested,
            visible: visible.len(),
            culled: tested - visible.len(),
        };
        Self { camera, visible, stats }
    }

    /// Camera snapshot at the time of culling.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn visible(&self) -> &[VolumeKey] {
        &self.visible
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn contains(&self, key: VolumeKey) -> bool {
        self.visible.contains(&key)
    }

    pub fn stats(&self) -> CullingStats {
        self.stats
    }
}
