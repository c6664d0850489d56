/// Plane: one clipping half-space of a view frustum.
///
/// Stored as the coefficients of `a·x + b·y + c·z + d`, with (a, b, c)
/// kept as a `Vec3` normal. A point is inside the half-space when the
/// equation is strictly positive.

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};
use crate::error::{Error, Result};

/// Normal lengths at or below this are treated as degenerate.
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// Half-space `a·x + b·y + c·z + d > 0`.
///
/// `#[repr(C)]` with no padding: six planes upload as 24 contiguous floats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Plane {
    normal: Vec3,
    d: f32,
}

impl Plane {
    /// All-zero plane. Every point evaluates to 0, i.e. outside.
    pub const ZERO: Self = Self { normal: Vec3::ZERO, d: 0.0 };

    pub fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self { normal: Vec3::new(a, b, c), d }
    }

    /// Build from `(a, b, c, d)` packed in a Vec4.
    pub fn from_vec4(v: Vec4) -> Self {
        Self { normal: v.truncate(), d: v.w }
    }

    /// Overwrite all four coefficients. No validation.
    pub fn set(&mut self, a: f32, b: f32, c: f32, d: f32) {
        self.normal = Vec3::new(a, b, c);
        self.d = d;
    }

    /// Scale the plane so its normal has unit length.
    ///
    /// Returns `false` and leaves the coefficients untouched when the
    /// normal is degenerate (length <= `DEGENERATE_EPSILON`).
    pub fn normalize(&mut self) -> bool {
        let magnitude = self.normal.length();
        if !(magnitude > DEGENERATE_EPSILON) {
            return false;
        }
        self.normal /= magnitude;
        self.d /= magnitude;
        true
    }

    /// Like `normalize`, but reports a degenerate normal as an error.
    pub fn try_normalize(&mut self) -> Result<()> {
        if self.normalize() {
            Ok(())
        } else {
            Err(Error::DegeneratePlane(format!(
                "normal length {} (a={}, b={}, c={}, d={})",
                self.normal.length(), self.normal.x, self.normal.y, self.normal.z, self.d
            )))
        }
    }

    /// `a·x + b·y + c·z + d`. Signed distance once normalized.
    #[inline]
    pub fn evaluate(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }

    #[inline]
    pub fn evaluate_xyz(&self, x: f32, y: f32, z: f32) -> f32 {
        self.evaluate(Vec3::new(x, y, z))
    }

    // ===== GETTERS =====

    pub fn a(&self) -> f32 {
        self.normal.x
    }

    pub fn b(&self) -> f32 {
        self.normal.y
    }

    pub fn c(&self) -> f32 {
        self.normal.z
    }

    pub fn d(&self) -> f32 {
        self.d
    }

    /// Normal (a, b, c). Points toward the inside of the half-space.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn as_vec4(&self) -> Vec4 {
        self.normal.extend(self.d)
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
