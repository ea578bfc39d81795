//! Domain layer: pure scoring logic for a single bowling game.

pub mod config;
pub mod errors;
pub mod frame;
pub mod game;
pub mod game_transition;
pub mod rules;
pub mod scoring;
pub mod snapshot;

#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use config::{GameConfig, PinValidation};
pub use errors::BowlingError;
pub use frame::Frame;
pub use game::Game;
pub use game_transition::{derive_game_transitions, GameProgress, GameTransition};
pub use rules::{FrameNumber, FRAMES, MAX_SCORE, PINS};
pub use snapshot::{FrameSnapshot, GameSnapshot, Mark};
