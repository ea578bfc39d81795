//! Ten-pin bowling scoring engine.
//!
//! Feed rolls into a [`Game`] one at a time and ask it for the score at any
//! point. Strike and spare bonuses are resolved by reading forward into the
//! frames that follow, so a frame's score firms up as later rolls arrive.
//!
//! ```
//! use bowling::Game;
//!
//! let mut game = Game::new();
//! for pins in [10, 5, 2] {
//!     game.roll(pins)?;
//! }
//! assert_eq!(game.score(), 24);
//! # Ok::<(), bowling::BowlingError>(())
//! ```

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;

pub use domain::{
    derive_game_transitions, BowlingError, Frame, FrameSnapshot, Game, GameConfig, GameProgress,
    GameSnapshot, GameTransition, Mark, PinValidation,
};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    bowling_test_support::logging::init();
}
