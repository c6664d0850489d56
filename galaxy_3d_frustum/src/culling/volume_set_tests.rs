//! Unit tests for VolumeSet
//!
//! Covers insert/remove/update through SlotMap keys, including stale keys.

use glam::Vec3;
use crate::error::Error;
use super::*;

fn create_test_aabb(center: f32) -> AABB {
    AABB::from_center_extents(Vec3::splat(center), Vec3::ONE)
}

#[test]
fn test_new_volume_set_is_empty() {
    let set = VolumeSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert!(VolumeSet::with_capacity(64).is_empty());
}

#[test]
fn test_insert_and_get() {
    let mut set = VolumeSet::new();
    let key = set.insert(create_test_aabb(2.0));

    assert_eq!(set.len(), 1);
    assert!(set.contains_key(key));
    assert_eq!(set.get(key), Some(&create_test_aabb(2.0)));
}

#[test]
fn test_remove_returns_volume() {
    let mut set = VolumeSet::new();
    let key = set.insert(create_test_aabb(3.0));

    assert_eq!(set.remove(key), Ok(create_test_aabb(3.0)));
    assert!(set.is_empty());
    assert!(set.get(key).is_none());
}

#[test]
fn test_remove_stale_key_fails() {
    let mut set = VolumeSet::new();
    let key = set.insert(create_test_aabb(0.0));
    set.remove(key).unwrap();

    assert_eq!(set.remove(key), Err(Error::VolumeNotFound));
}

#[test]
fn test_keys_stay_valid_after_other_removals() {
    let mut set = VolumeSet::new();
    let keys: Vec<VolumeKey> = (0..10).map(|i| set.insert(create_test_aabb(i as f32))).collect();

    for key in keys.iter().step_by(2) {
        set.remove(*key).unwrap();
    }

    assert_eq!(set.len(), 5);
    for (i, key) in keys.iter().enumerate().skip(1).step_by(2) {
        assert_eq!(set.get(*key), Some(&create_test_aabb(i as f32)));
    }
}

#[test]
fn test_update_replaces_bounds() {
    let mut set = VolumeSet::new();
    let key = set.insert(create_test_aabb(0.0));

    set.update(key, create_test_aabb(5.0)).unwrap();
    assert_eq!(set.get(key), Some(&create_test_aabb(5.0)));
}

#[test]
fn test_update_stale_key_fails() {
    let mut set = VolumeSet::new();
    let key = set.insert(create_test_aabb(0.0));
    set.remove(key).unwrap();

    assert_eq!(set.update(key, create_test_aabb(1.0)), Err(Error::VolumeNotFound));
}

#[test]
fn test_iter_and_clear() {
    let mut set = VolumeSet::new();
    set.insert(create_test_aabb(1.0));
    set.insert(create_test_aabb(2.0));

    assert_eq!(set.iter().count(), 2);
    assert_eq!(set.keys().count(), 2);

    set.clear();
    assert!(set.is_empty());
}
