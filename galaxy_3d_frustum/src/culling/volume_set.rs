/// VolumeSet: the bounding volumes considered for culling.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. Volumes are
/// stored contiguously for cache-friendly iteration during culling.

use slotmap::{new_key_type, SlotMap};
use crate::error::{Error, Result};
use crate::volume::AABB;

const LOG_SOURCE: &str = "galaxy3d::VolumeSet";

new_key_type! {
    /// Stable handle to a volume in a VolumeSet
    pub struct VolumeKey;
}

/// World-space AABBs keyed by VolumeKey.
///
/// Keys stay valid when other volumes are removed.
#[derive(Debug, Clone, Default)]
pub struct VolumeSet {
    volumes: SlotMap<VolumeKey, AABB>,
}

impl VolumeSet {
    pub fn new() -> Self {
        Self { volumes: SlotMap::with_key() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { volumes: SlotMap::with_capacity_and_key(capacity) }
    }

    pub fn insert(&mut self, volume: AABB) -> VolumeKey {
        self.volumes.insert(volume)
    }

    /// Remove a volume, returning it.
    ///
    /// # Errors
    ///
    /// `Error::VolumeNotFound` if the key was never inserted or is already removed.
    pub fn remove(&mut self, key: VolumeKey) -> Result<AABB> {
        self.volumes.remove(key).ok_or_else(|| {
            crate::engine_error!(LOG_SOURCE, "Remove of unknown volume {:?}", key);
            Error::VolumeNotFound
        })
    }

    /// Replace the bounds of an existing volume (e.g. after it moved).
    pub fn update(&mut self, key: VolumeKey, volume: AABB) -> Result<()> {
        let slot = self.volumes.get_mut(key).ok_or_else(|| {
            crate::engine_error!(LOG_SOURCE, "Update of unknown volume {:?}", key);
            Error::VolumeNotFound
        })?;
        *slot = volume;
        Ok(())
    }

    pub fn get(&self, key: VolumeKey) -> Option<&AABB> {
        self.volumes.get(key)
    }

    pub fn contains_key(&self, key: VolumeKey) -> bool {
        self.volumes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = VolumeKey> + '_ {
        self.volumes.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VolumeKey, &AABB)> + '_ {
        self.volumes.iter()
    }

    /// Remove every volume. Outstanding keys become invalid.
    pub fn clear(&mut self) {
        crate::engine_debug!(LOG_SOURCE, "Clearing {} volumes", self.volumes.len());
        self.volumes.clear();
    }
}

#[cfg(test)]
#[path = "volume_set_tests.rs"]
mod tests;
