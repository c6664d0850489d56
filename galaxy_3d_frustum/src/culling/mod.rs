//! Culling module
//!
//! Keyed storage for the volumes to test, culling strategies, and the
//! per-frame visible set they produce.

mod culler;
mod visible_set;
mod volume_set;

pub use culler::{CameraCuller, BruteForceCuller, FrustumCuller};
pub use visible_set::{VisibleSet, CullingStats};
pub use volume_set::{VolumeSet, VolumeKey};
