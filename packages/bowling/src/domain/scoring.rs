//! Frame scoring with bonus lookahead.
//!
//! A strike or spare frame borrows pins from later frames, so every method
//! here takes the whole frame sequence and reads forward through
//! [`Frame::next_index`]. A frame that has not been created yet contributes
//! nothing: mid-game scores undercount pending bonuses rather than guess.

use crate::domain::frame::Frame;

impl Frame {
    /// The frame after this one, if the game has reached it.
    fn next_in<'a>(&self, frames: &'a [Frame]) -> Option<&'a Frame> {
        self.next_index().and_then(|idx| frames.get(idx))
    }

    /// This frame's contribution to the game total.
    pub fn score(&self, frames: &[Frame]) -> u32 {
        let pins = u32::from(self.pins_total());
        if self.is_tenth() {
            return pins;
        }
        pins + self.spare_bonus(frames) + self.strike_bonus(frames)
    }

    /// First roll of the next frame, for a spare.
    pub fn spare_bonus(&self, frames: &[Frame]) -> u32 {
        if !self.is_spare() {
            return 0;
        }
        self.next_in(frames)
            .map_or(0, |next| u32::from(next.first_roll()))
    }

    /// Next two rolls, for a strike.
    ///
    /// When the next frame is itself a strike its second roll lives in the
    /// frame after it, unless the next frame is the tenth which keeps all its
    /// rolls to itself.
    pub fn strike_bonus(&self, frames: &[Frame]) -> u32 {
        if !self.is_strike() {
            return 0;
        }
        let Some(next) = self.next_in(frames) else {
            return 0;
        };

        let first = u32::from(next.first_roll());
        if next.is_strike() {
            let second = if next.is_tenth() {
                0
            } else {
                next.next_in(frames)
                    .map_or(0, |after| u32::from(after.first_roll()))
            };
            first + second
        } else {
            first + u32::from(next.second_roll())
        }
    }
}

/// Per-frame scores, in frame order.
pub fn frame_scores(frames: &[Frame]) -> Vec<u32> {
    frames.iter().map(|frame| frame.score(frames)).collect()
}

/// Cumulative score after each frame, in frame order.
pub fn running_totals(frames: &[Frame]) -> Vec<u32> {
    frames
        .iter()
        .scan(0u32, |total, frame| {
            *total += frame.score(frames);
            Some(*total)
        })
        .collect()
}

pub fn total_score(frames: &[Frame]) -> u32 {
    frames.iter().map(|frame| frame.score(frames)).sum()
}
