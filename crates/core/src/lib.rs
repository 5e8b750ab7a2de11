//! Core scoring logic - pure, deterministic, and testable
//!
//! This crate contains the ten-pin bowling rules: how a frame absorbs balls,
//! how strikes and spares collect bonus points from later balls, and how the
//! tenth frame decides whether the bonus slots are played. It has **no
//! dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: the score is a pure function of the recorded balls
//! - **Testable**: every rule is covered by unit tests
//! - **Allocation-free**: frames store their balls inline
//!
//! # Module Structure
//!
//! - [`frame`]: one frame of up to two balls
//! - [`game`]: twelve frame slots, roll routing, game lifecycle
//! - [`scoring`]: lookahead bonus rules and running totals
//! - [`snapshot`]: serializable copies for rendering and logging
//! - [`error`]: why a roll was rejected
//!
//! # Example
//!
//! ```
//! use tui_bowling_core::{Game, RollError};
//!
//! let mut game = Game::new();
//! game.roll(10).unwrap(); // strike
//! game.roll(3).unwrap();
//! game.roll(4).unwrap();
//! assert_eq!(game.score(), 17 + 7);
//!
//! // A second ball can't knock down more pins than are standing.
//! game.roll(8).unwrap();
//! assert!(matches!(game.roll(5), Err(RollError::InvalidRoll(_))));
//! ```

pub mod error;
pub mod frame;
pub mod game;
pub mod scoring;
pub mod snapshot;

pub use tui_bowling_types as types;

// Re-export commonly used types for convenience
pub use error::{InvalidRoll, RollError};
pub use frame::Frame;
pub use game::{Game, RollOutcome};
pub use scoring::{frame_bonus, frame_score, running_totals, total_score};
pub use snapshot::{FrameSnapshot, GameSnapshot};
