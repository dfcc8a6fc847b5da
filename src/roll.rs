//! Roll value type and game constants.

/// A single ball's pinfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Roll {
    /// Pins knocked down by this ball (0 to 10).
    pub pins: u8,
}

impl Roll {
    /// Creates a new roll.
    ///
    /// Note: This function does not validate the pin count. Range legality
    /// is enforced by the frame that accepts the roll, not by the value
    /// type itself.
    #[must_use]
    pub const fn new(pins: u8) -> Self {
        Self { pins }
    }
}

/// Number of pins standing at the start of a frame.
pub const MAX_PINS: u8 = 10;

/// Number of frames in a game.
pub const FRAME_COUNT: usize = 10;
