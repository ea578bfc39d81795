//! Errors surfaced by [`Game::roll`](crate::domain::Game::roll).

use thiserror::Error;

use crate::domain::rules::FrameNumber;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BowlingError {
    /// The tenth frame has consumed every roll it is entitled to.
    #[error("too many rolls: the game is over")]
    TooManyRolls,

    /// Only raised under [`PinValidation::Strict`](crate::domain::PinValidation::Strict).
    #[error("invalid roll in frame {frame}: knocked down {pins} pins but only {standing} standing")]
    InvalidPins {
        frame: FrameNumber,
        pins: u8,
        standing: u8,
    },
}
