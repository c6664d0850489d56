//! Camera module: camera data, clipping planes and the view frustum.
//!
//! The camera is a passive container owned and driven by the caller.
//! The frustum is re-extracted from it once per frame and then queried
//! for every candidate volume.

mod camera;
mod frustum;
mod plane;

pub use camera::Camera;
pub use frustum::{
    ViewFrustum, FrustumState, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR, PLANE_NAMES,
};
pub use plane::{Plane, DEGENERATE_EPSILON};
