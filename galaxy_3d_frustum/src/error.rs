//! Error types for the Galaxy3D frustum culling crate
//!
//! Culling is closed-form arithmetic, so the taxonomy is narrow:
//! degenerate planes, bad plane indices, malformed volumes and
//! stale volume keys.

use std::fmt;

/// Result type for frustum culling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Frustum culling errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Plane normal has (near) zero length and cannot be normalized
    DegeneratePlane(String),

    /// Plane index outside 0..6
    InvalidPlaneIndex(usize),

    /// Bounding volume with min > max or non-finite coordinates
    InvalidVolume(String),

    /// Volume key not present in the VolumeSet
    VolumeNotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegeneratePlane(msg) => write!(f, "Degenerate plane: {}", msg),
            Error::InvalidPlaneIndex(index) => write!(f, "Invalid plane index: {} (expected 0..6)", index),
            Error::InvalidVolume(msg) => write!(f, "Invalid volume: {}", msg),
            Error::VolumeNotFound => write!(f, "Volume not found"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
