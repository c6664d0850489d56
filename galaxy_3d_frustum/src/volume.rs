/// Bounding volumes tested against the view frustum.
///
/// The frustum only needs the 8 world-space corners of a volume, so
/// callers can plug their own box types in through `BoundingVolume`.
/// `AABB` is the stock implementation.

use glam::{Mat4, Vec3};
use crate::error::{Error, Result};

/// Anything that can hand out its 8 world-space corner vertices.
pub trait BoundingVolume {
    fn vertices(&self) -> [Vec3; 8];
}

// ===== AABB =====

/// Axis-Aligned Bounding Box in world space
///
/// Corner `i` takes max on an axis when the matching bit of `i` is set:
/// bit 0 → x, bit 1 → y, bit 2 → z. Corner 0 is `min`, corner 7 is `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Validated constructor. Rejects non-finite coordinates and min > max.
    pub fn new(min: Vec3, max: Vec3) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::InvalidVolume(format!(
                "non-finite bounds min={} max={}", min, max
            )));
        }
        if min.cmpgt(max).any() {
            return Err(Error::InvalidVolume(format!(
                "min {} exceeds max {}", min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Box centered on `center` spanning `half_extents` on each side.
    /// Negative extents are taken by absolute value.
    pub fn from_center_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self { min: center - half, max: center + half }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half size on each axis.
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    pub fn translated(&self, offset: Vec3) -> AABB {
        AABB { min: self.min + offset, max: self.max + offset }
    }

    /// Transform this AABB by a matrix, returning the enclosing AABB.
    ///
    /// Arvo's method: accumulate each matrix axis scaled by the box
    /// extents instead of transforming all 8 corners.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        AABB { min: new_min, max: new_max }
    }

    /// `true` if `other` lies entirely within `self`.
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.cmple(other.min).all() && self.max.cmpge(other.max).all()
    }

    /// `true` if the boxes overlap or touch.
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }
}

impl BoundingVolume for AABB {
    fn vertices(&self) -> [Vec3; 8] {
        std::array::from_fn(|i| {
            Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        })
    }
}

#[cfg(test)]
#[path = "volume_tests.rs"]
mod tests;
