//! Platform abstraction layer
//!
//! Input collaborators that feed the run loop:
//! - Keyboard state (held keys plus just-pressed edges)
//! - Autopilot (plan-following demo driver)

pub mod autopilot;
pub mod input;

pub use autopilot::Autopilot;
pub use input::{Commands, InputSource, Key, KeyboardState};
