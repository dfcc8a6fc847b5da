//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when recording a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    /// The roll would push an open frame past 10 pins.
    #[error("a frame's rolls cannot exceed 10 pins")]
    FramePinsExceeded,
    /// A bonus roll was attempted on an open tenth frame.
    #[error("cannot throw a bonus roll on an open tenth frame")]
    ExtraRollOnOpenFrame,
    /// A fourth roll was attempted on the tenth frame.
    #[error("cannot add more than three rolls to the tenth frame")]
    TooManyRolls,
}
