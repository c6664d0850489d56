/*!
# Galaxy 3D Frustum

View-frustum culling for the Galaxy 3D rendering engine.

Once per frame the caller hands the active camera's projection and view
matrices to a `ViewFrustum`, which extracts six clipping planes. Points
and bounding boxes are then tested against those planes so the renderer
can skip geometry that cannot be seen.

## Architecture

- **Plane**: half-space `a·x + b·y + c·z + d > 0`
- **ViewFrustum**: six planes, per-frame update, point/box queries
- **Camera**: passive projection/view/position container
- **AABB / BoundingVolume**: what gets tested
- **CameraCuller**: culls a whole `VolumeSet` into a `VisibleSet`

## Example

```
use galaxy_3d_frustum::galaxy3d::{ViewFrustum, AABB};
use galaxy_3d_frustum::glam::{Mat4, Vec3};

let projection = Mat4::perspective_rh_gl(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 100.0);
let mut frustum = ViewFrustum::new();
frustum.update(&projection, &Mat4::IDENTITY);

assert!(frustum.intersects_xyz(0.0, 0.0, -50.0));

let crate_box = AABB::from_center_extents(Vec3::new(0.0, 0.0, -20.0), Vec3::ONE);
assert!(frustum.intersects_aabb(&crate_box, Vec3::ZERO));
```
*/

// Internal modules
mod error;
pub mod log;
pub mod camera;
pub mod culling;
pub mod volume;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Frustum and camera
    pub use crate::camera::*;

    // Bounding volumes
    pub use crate::volume::{AABB, BoundingVolume};

    // Culling strategies
    pub use crate::culling::*;

    // Logging sub-module (types and sink control, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger, set_logger, reset_logger,
        };
    }
}

// Re-export math library at crate root
pub use glam;
