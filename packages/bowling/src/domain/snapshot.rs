//! Public snapshot API for observing a game without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::frame::Frame;
use crate::domain::rules::{FrameNumber, PINS};

/// How a frame cleared the rack, if it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Strike,
    Spare,
}

impl Mark {
    /// Mark for a frame's opening rolls. The tenth frame is marked by how
    /// it opened, even after its fill ball.
    pub fn for_frame(frame: &Frame) -> Option<Mark> {
        let first = frame.first_roll();
        if frame.roll_count() >= 1 && first == PINS {
            Some(Mark::Strike)
        } else if frame.roll_count() >= 2
            && u16::from(first) + u16::from(frame.second_roll()) == u16::from(PINS)
        {
            Some(Mark::Spare)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub number: FrameNumber,
    /// Every roll recorded into the frame, fill ball included.
    pub rolls: Vec<u8>,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark: Option<Mark>,
    pub score: u32,
    pub running_total: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub current_frame: FrameNumber,
    pub game_over: bool,
    pub score: u32,
    pub frames: Vec<FrameSnapshot>,
}

impl GameSnapshot {
    /// Build from a frame sequence and the flat roll history that filled it.
    pub(crate) fn build(frames: &[Frame], rolls: &[u8], game_over: bool) -> Self {
        let mut remaining = rolls;
        let mut running_total = 0u32;
        let mut snapshots = Vec::with_capacity(frames.len());

        for frame in frames {
            let taken = usize::from(frame.roll_count()).min(remaining.len());
            let (own, rest) = remaining.split_at(taken);
            remaining = rest;

            let score = frame.score(frames);
            running_total += score;
            snapshots.push(FrameSnapshot {
                number: frame.number(),
                rolls: own.to_vec(),
                completed: frame.is_completed(),
                mark: Mark::for_frame(frame),
                score,
                running_total,
            });
        }

        Self {
            current_frame: frames.last().map_or(1, Frame::number),
            game_over,
            score: running_total,
            frames: snapshots,
        }
    }
}
