use tracing::{debug, trace, warn};

use crate::domain::config::GameConfig;
use crate::domain::errors::BowlingError;
use crate::domain::frame::Frame;
use crate::domain::game_transition::GameProgress;
use crate::domain::rules::{FrameNumber, FRAMES};
use crate::domain::scoring;
use crate::domain::snapshot::GameSnapshot;

/// A single player's game: ten frames fed one roll at a time.
///
/// The game is the sole owner of its frames. The sequence always holds at
/// least frame 1, only grows at the end, and its last frame is the current
/// one. Scores are derived on every call and never cached.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    frames: Vec<Frame>,
    /// Flat roll history, in the order rolls were accepted.
    rolls: Vec<u8>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        let mut frames = Vec::with_capacity(usize::from(FRAMES));
        frames.push(Frame::new(1));
        Self {
            config,
            frames,
            rolls: Vec::new(),
        }
    }

    /// Replay a roll sequence into a fresh game, stopping at the first
    /// rejected roll.
    pub fn from_rolls(
        config: GameConfig,
        rolls: impl IntoIterator<Item = u8>,
    ) -> Result<Self, BowlingError> {
        let mut game = Self::with_config(config);
        for pins in rolls {
            game.roll(pins)?;
        }
        Ok(game)
    }

    /// Record one roll into the current frame, advancing to the next frame
    /// when it completes.
    ///
    /// A rejected roll leaves the game untouched.
    pub fn roll(&mut self, pins: u8) -> Result<(), BowlingError> {
        if self.is_game_over() {
            warn!(pins, "roll rejected: game is over");
            return Err(BowlingError::TooManyRolls);
        }

        let idx = self.current_index();
        if self.config.is_strict() {
            let frame = &self.frames[idx];
            let standing = frame.pins_standing();
            if pins > standing {
                warn!(
                    frame = frame.number(),
                    pins, standing, "roll rejected: more pins than standing"
                );
                return Err(BowlingError::InvalidPins {
                    frame: frame.number(),
                    pins,
                    standing,
                });
            }
        }

        let current = &mut self.frames[idx];
        current.roll(pins);
        self.rolls.push(pins);
        trace!(
            frame = current.number(),
            roll = current.roll_count(),
            pins,
            "roll recorded"
        );

        if current.is_completed() {
            match current.next_index() {
                Some(_) => {
                    let next = Frame::new(current.number() + 1);
                    debug!(frame = next.number(), "frame started");
                    self.frames.push(next);
                }
                None => debug!(score = self.score(), "game over"),
            }
        }
        Ok(())
    }

    /// Cumulative score of every frame played so far.
    ///
    /// Mid-game, a strike or spare whose bonus rolls have not happened yet
    /// counts only its own pins.
    pub fn score(&self) -> u32 {
        scoring::total_score(&self.frames)
    }

    pub fn is_game_over(&self) -> bool {
        let current = self.current_frame();
        current.is_tenth() && current.is_completed()
    }

    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.current_index()]
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frame by 1-based number, if the game has reached it.
    pub fn frame(&self, number: FrameNumber) -> Option<&Frame> {
        usize::from(number)
            .checked_sub(1)
            .and_then(|idx| self.frames.get(idx))
    }

    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn frame_scores(&self) -> Vec<u32> {
        scoring::frame_scores(&self.frames)
    }

    pub fn running_totals(&self) -> Vec<u32> {
        scoring::running_totals(&self.frames)
    }

    pub fn progress(&self) -> GameProgress {
        GameProgress {
            current_frame: self.current_frame().number(),
            game_over: self.is_game_over(),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::build(&self.frames, &self.rolls, self.is_game_over())
    }

    // `frames` is never empty: frame 1 is created with the game.
    fn current_index(&self) -> usize {
        self.frames.len() - 1
    }
}
