/// Frames in a game.
pub const FRAMES: u8 = 10;
/// Pins racked at the start of a frame (and after each strike/spare in the tenth).
pub const PINS: u8 = 10;
/// Highest possible score (twelve strikes).
pub const MAX_SCORE: u32 = 300;

pub type FrameNumber = u8; // 1..=10

/// Maximum number of rolls a frame may record.
///
/// Frames 1..=9 allow two, the tenth allows a third (fill ball) after a
/// strike or spare.
pub fn max_rolls(frame: FrameNumber) -> u8 {
    if frame == FRAMES {
        3
    } else {
        2
    }
}
