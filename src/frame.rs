//! Frame representation and per-frame scoring.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::error::RollError;
use crate::roll::{MAX_PINS, Roll};

/// Frame variant: the first nine frames share one shape, the tenth adds a
/// conditional bonus roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Normal,
    Tenth { extra_roll: Option<Roll> },
}

/// One of the ten scoring units of a game.
///
/// A frame owns its recorded rolls and knows how to score itself given read
/// access to the frames that follow it. Strike and spare bonuses are resolved
/// by lookahead into those frames; while the bonus rolls have not been thrown
/// yet, the bonus contributes nothing and [`Frame::score`] reports a partial
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Recorded rolls, at most two (the tenth frame's third ball is stored
    /// separately as its bonus roll).
    rolls: Vec<Roll>,
    /// Which variant this frame is.
    kind: Kind,
}

impl Frame {
    /// Creates an empty frame for positions 1 through 9.
    #[must_use]
    pub const fn normal() -> Self {
        Self {
            rolls: Vec::new(),
            kind: Kind::Normal,
        }
    }

    /// Creates an empty tenth frame.
    #[must_use]
    pub const fn tenth() -> Self {
        Self {
            rolls: Vec::new(),
            kind: Kind::Tenth { extra_roll: None },
        }
    }

    /// Returns the recorded rolls, in order.
    #[must_use]
    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    /// Returns the tenth frame's bonus roll, if one has been recorded.
    ///
    /// Always `None` for a normal frame.
    #[must_use]
    pub const fn extra_roll(&self) -> Option<Roll> {
        match self.kind {
            Kind::Normal => None,
            Kind::Tenth { extra_roll } => extra_roll,
        }
    }

    /// Returns whether this is the tenth frame.
    #[must_use]
    pub const fn is_tenth(&self) -> bool {
        matches!(self.kind, Kind::Tenth { .. })
    }

    /// Sum of the recorded rolls' pins (the tenth frame's bonus roll is not
    /// included).
    #[must_use]
    pub fn total_pins(&self) -> u32 {
        self.rolls.iter().map(|roll| u32::from(roll.pins)).sum()
    }

    /// Returns whether the first roll knocked down all ten pins.
    #[must_use]
    pub fn is_strike(&self) -> bool {
        self.rolls.first().is_some_and(|roll| roll.pins == MAX_PINS)
    }

    /// Returns whether two rolls together knocked down all ten pins.
    #[must_use]
    pub fn is_spare(&self) -> bool {
        self.rolls.len() == 2 && self.total_pins() == u32::from(MAX_PINS)
    }

    /// Returns whether the frame will accept no further rolls.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        match self.kind {
            Kind::Normal => self.is_strike() || self.rolls.len() == 2,
            Kind::Tenth { extra_roll } => {
                if self.is_strike() || self.is_spare() {
                    extra_roll.is_some()
                } else {
                    self.rolls.len() == 2
                }
            }
        }
    }

    /// Records a roll in this frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the roll would push an open frame past 10 pins,
    /// if a bonus roll is attempted on an open tenth frame, or if the tenth
    /// frame already holds its full three rolls.
    pub fn add_roll(&mut self, pins: u8) -> Result<(), RollError> {
        match self.kind {
            Kind::Normal => self.add_normal_roll(pins),
            Kind::Tenth { extra_roll } => self.add_tenth_roll(pins, extra_roll),
        }
    }

    fn add_normal_roll(&mut self, pins: u8) -> Result<(), RollError> {
        if u32::from(pins) + self.total_pins() > u32::from(MAX_PINS) {
            return Err(RollError::FramePinsExceeded);
        }

        // A strike ends the frame after one ball; a full frame ignores
        // further append attempts (the game never routes rolls here again).
        if self.rolls.len() < 2 && !self.is_strike() {
            self.rolls.push(Roll::new(pins));
        }

        Ok(())
    }

    fn add_tenth_roll(&mut self, pins: u8, extra_roll: Option<Roll>) -> Result<(), RollError> {
        // Once the frame is a strike or spare the pin deck is reset, so the
        // overflow check only applies while the frame is still open.
        if !self.is_strike()
            && !self.is_spare()
            && u32::from(pins) + self.total_pins() > u32::from(MAX_PINS)
        {
            return Err(RollError::FramePinsExceeded);
        }

        if self.rolls.len() < 2 {
            self.rolls.push(Roll::new(pins));
        } else if extra_roll.is_none() {
            if self.is_strike() || self.is_spare() {
                self.kind = Kind::Tenth {
                    extra_roll: Some(Roll::new(pins)),
                };
            } else {
                return Err(RollError::ExtraRollOnOpenFrame);
            }
        } else {
            return Err(RollError::TooManyRolls);
        }

        Ok(())
    }

    /// Computes this frame's contribution to the game total.
    ///
    /// `next` and `after_next` are the one and two frames that follow this
    /// one in the chain, when they exist. Strike and spare bonuses are read
    /// from them; a bonus whose rolls have not been thrown yet contributes 0,
    /// so mid-game the result is a running under-estimate.
    #[must_use]
    pub fn score(&self, next: Option<&Self>, after_next: Option<&Self>) -> u32 {
        match self.kind {
            Kind::Normal => self.score_with_lookahead(next, after_next),
            Kind::Tenth { extra_roll } => {
                let points = self.total_pins();
                if self.is_strike() || self.is_spare() {
                    points + extra_roll.map_or(0, |roll| u32::from(roll.pins))
                } else {
                    points
                }
            }
        }
    }

    fn score_with_lookahead(&self, next: Option<&Self>, after_next: Option<&Self>) -> u32 {
        let mut points = self.total_pins();

        if self.is_strike() {
            let Some(next) = next else {
                return points;
            };
            match next.rolls.as_slice() {
                [] => {}
                [first] => {
                    points += u32::from(first.pins);
                    // The second bonus ball is the first roll of the frame
                    // after next, or the tenth frame's own bonus ball when
                    // the chain ends there.
                    if let Some(after_next) = after_next {
                        if let Some(roll) = after_next.rolls.first() {
                            points += u32::from(roll.pins);
                        }
                    } else if let Some(extra) = next.extra_roll() {
                        points += u32::from(extra.pins);
                    }
                }
                _ => points += next.total_pins(),
            }
        } else if self.is_spare() {
            if let Some(roll) = next.and_then(|frame| frame.rolls.first()) {
                points += u32::from(roll.pins);
            }
        }

        points
    }
}

impl fmt::Display for Frame {
    /// Renders the reference scoreboard token: `X` for a strike,
    /// `<n> | /` for a spare, `<n> | <m>` for an open frame, and an empty
    /// string while no rolls have been recorded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_strike() {
            return f.write_str("X");
        }

        match self.rolls.as_slice() {
            [] => Ok(()),
            [first] => write!(f, "{} | ", first.pins),
            [first, second, ..] => {
                if self.is_spare() {
                    write!(f, "{} | /", first.pins)
                } else {
                    write!(f, "{} | {}", first.pins, second.pins)
                }
            }
        }
    }
}
