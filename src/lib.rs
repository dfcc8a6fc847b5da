//! A ten-pin bowling scoring engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that accepts pin counts one roll at a
//! time, enforces frame legality, and reports a running score at any point,
//! including mid-game.
//!
//! # Example
//!
//! ```
//! use tenpin::Game;
//!
//! let mut game = Game::new();
//! game.roll(5)?;
//! game.roll(5)?;
//! game.roll(3)?;
//! assert_eq!(game.score(), 16);
//! # Ok::<(), tenpin::RollError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod error;
pub mod frame;
pub mod game;
pub mod roll;

// Re-export main types
pub use error::RollError;
pub use frame::Frame;
pub use game::Game;
pub use roll::{FRAME_COUNT, MAX_PINS, Roll};
