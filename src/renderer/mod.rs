//! Rendering side table
//!
//! The simulation never holds rendering handles. A renderer rebuilds these
//! GPU-ready instance records from a `Snapshot` each frame and maps them to
//! meshes by index (rock `i` in the snapshot is instance `i`).

pub mod instance;

pub use instance::{FlyerInstance, FrameInstances, ObstacleInstance, colors};
