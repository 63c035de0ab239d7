/*!
# LGL Sandbox

Core types for the LGL rendering sandbox: the parts of a "learn OpenGL" style
demo loop that are worth owning in Rust.

The crate never opens a window or touches the GPU. It provides the math and
data that a render loop consumes every frame.

## Architecture

- **Transform / TransformHierarchy**: quaternion TRS with a parent/child arena
- **Spatial**: Euler-angle orientation with an orthonormal basis
- **Camera / PerspectiveCamera**: cached view/projection matrices
- **Frustum / Aabb**: six-plane visibility tests
- **CameraController**: first-person and orbital input handling
- **CameraSystem**: camera + controller + frame clock, fed by input events
- **ImageReader / ImageData**: texture decoding ready for upload
*/

// Internal modules
mod error;
mod utils;
pub mod bounds;
pub mod camera;
pub mod camera_system;
pub mod config;
pub mod controller;
pub mod image;
pub mod input;
pub mod log;
pub mod spatial;
pub mod time;
pub mod transform;

// Main lgl namespace module
pub mod lgl {
    // Error types
    pub use crate::error::{Error, Result};

    // Configuration
    pub use crate::config::{CameraSettings, ControllerSettings, SandboxConfig};

    // Frame driver
    pub use crate::camera_system::{CameraSystem, CursorMode};
    pub use crate::time::FrameClock;

    // Text file helper
    pub use crate::utils::read_text_file;

    // Logging sub-module (types and registry, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger,
        };
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
        pub use crate::bounds::Aabb;
    }

    // Orientation sub-module
    pub mod spatial {
        pub use crate::spatial::*;
        pub use crate::transform::*;
    }

    // Input and controllers
    pub mod input {
        pub use crate::input::*;
        pub use crate::controller::*;
    }

    // Image loading
    pub mod image {
        pub use crate::image::*;
    }
}

// Re-export math library at crate root
pub use glam;
