//! Steering commands returned to the simulation loop.
//!
//! The stepper applies the command to the rocket heading at its fixed
//! per-tick turn rate; this library only decides the direction.

use serde::{Deserialize, Serialize};

/// Discrete turn command, the terminal output of the steering decision.
///
/// `Left` corresponds to a positive signed angle from the effective heading
/// to the target bearing, `Right` to a negative one, in the screen
/// coordinate convention (y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnCommand {
    /// Hold the current heading.
    #[default]
    None,
    /// Rotate the heading toward positive angles this tick.
    Left,
    /// Rotate the heading toward negative angles this tick.
    Right,
}
