//! Platform abstraction layer
//!
//! Handles the edges between the simulation and the outside world:
//! - Time/ticks (cancelable fixed-interval tick source)
//! - Input events and geometry reports from the presentation layer

pub mod input;
pub mod timer;

pub use input::Command;
pub use timer::TickSource;
