//! Platform abstraction layer
//!
//! Handles the pieces between a host loop and the simulation:
//! - Time: monotonic frame deltas
//! - Input: key events reduced to one intent snapshot per tick

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{Control, InputState};
