//! Game state machine over the fixed ten-frame chain.

use crate::error::RollError;
use crate::frame::Frame;
use crate::roll::FRAME_COUNT;

/// A bowling game that routes rolls to frames and aggregates the score.
///
/// The game owns a fixed chain of ten frames (nine normal, one tenth) and
/// tracks which frame currently accepts rolls. [`Game::score`] may be called
/// at any point; bonuses whose rolls have not been thrown yet count as 0, so
/// mid-game the result is a running total rather than a final one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// The ten frames, in play order.
    frames: [Frame; FRAME_COUNT],
    /// Rolls accepted so far. Rejected rolls are not counted.
    roll_count: u32,
    /// Progress units consumed so far. A frame is worth two units: a normal
    /// roll is one unit and a strike is two, so that a strike completes its
    /// frame with a single ball.
    frame_units: u32,
}

impl Game {
    /// Creates a new game with ten empty frames.
    ///
    /// # Example
    ///
    /// ```
    /// use tenpin::Game;
    ///
    /// let mut game = Game::new();
    /// game.roll(10)?;
    /// game.roll(3)?;
    /// game.roll(4)?;
    /// assert_eq!(game.score(), 24);
    /// # Ok::<(), tenpin::RollError>(())
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames: Self::build_frames(),
            roll_count: 0,
            frame_units: 0,
        }
    }

    /// Builds the fixed chain of nine normal frames plus the tenth.
    fn build_frames() -> [Frame; FRAME_COUNT] {
        core::array::from_fn(|i| {
            if i == FRAME_COUNT - 1 {
                Frame::tenth()
            } else {
                Frame::normal()
            }
        })
    }

    /// Discards all recorded rolls and starts over with empty frames.
    pub fn restart(&mut self) {
        self.frames = Self::build_frames();
        self.roll_count = 0;
        self.frame_units = 0;
    }

    /// Returns the 0-based index of the frame currently accepting rolls.
    ///
    /// Clamped at the tenth frame: bonus rolls there do not advance the
    /// index further.
    #[must_use]
    pub fn current_frame_index(&self) -> usize {
        usize::min(self.frame_units as usize / 2, FRAME_COUNT - 1)
    }

    /// Returns the frame currently accepting rolls.
    #[must_use]
    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.current_frame_index()]
    }

    /// Records one ball's pinfall in the active frame.
    ///
    /// # Errors
    ///
    /// Propagates the active frame's rejection unchanged: pin overflow on an
    /// open frame, a bonus roll on an open tenth frame, or a fourth roll in
    /// the tenth frame. A rejected roll leaves the game exactly as it was.
    pub fn roll(&mut self, pins: u8) -> Result<(), RollError> {
        let index = self.current_frame_index();
        self.frames[index].add_roll(pins)?;

        self.roll_count += 1;
        self.frame_units += if self.frames[index].is_strike() { 2 } else { 1 };

        Ok(())
    }

    /// Returns the total score over all ten frames.
    ///
    /// Valid at any time. Each frame resolves its own strike or spare bonus
    /// by reading the one or two frames after it; unresolved bonuses count
    /// as 0 until the rolls backing them exist.
    #[must_use]
    pub fn score(&self) -> u32 {
        (0..FRAME_COUNT)
            .map(|i| self.frames[i].score(self.frames.get(i + 1), self.frames.get(i + 2)))
            .sum()
    }

    /// Returns whether all ten frames have received their full complement
    /// of rolls.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.frames.iter().all(Frame::is_complete)
    }

    /// Returns the number of rolls accepted so far.
    #[must_use]
    pub const fn roll_count(&self) -> u32 {
        self.roll_count
    }

    /// Returns the ten frames, in play order, for display collaborators.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
