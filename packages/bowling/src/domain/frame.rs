use crate::domain::rules::{max_rolls, FrameNumber, FRAMES, PINS};

/// One frame's worth of rolls.
///
/// A frame knows nothing about its neighbours beyond its own number: the
/// frame that follows frame `n` lives at index `n` of the owning game's frame
/// sequence (see [`Frame::next_index`]). Bonus lookahead is in
/// [`scoring`](crate::domain::scoring).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    number: FrameNumber,
    roll_count: u8,
    pins_total: u16,
    first_roll: Option<u8>,
    second_roll: Option<u8>,
}

impl Frame {
    pub fn new(number: FrameNumber) -> Self {
        debug_assert!((1..=FRAMES).contains(&number), "frame number is 1-based");
        Self {
            number,
            roll_count: 0,
            pins_total: 0,
            first_roll: None,
            second_roll: None,
        }
    }

    /// Record a roll. The caller guarantees the frame is not completed.
    pub fn roll(&mut self, pins: u8) {
        match self.roll_count {
            0 => self.first_roll = Some(pins),
            1 => self.second_roll = Some(pins),
            _ => {}
        }
        self.pins_total += u16::from(pins);
        self.roll_count += 1;
    }

    pub fn number(&self) -> FrameNumber {
        self.number
    }

    pub fn roll_count(&self) -> u8 {
        self.roll_count
    }

    pub fn pins_total(&self) -> u16 {
        self.pins_total
    }

    /// Pins from the first roll; 0 until it happens.
    pub fn first_roll(&self) -> u8 {
        self.first_roll.unwrap_or(0)
    }

    /// Pins from the second roll; 0 until it happens, and for a strike in
    /// frames 1..=9 which never gets one.
    pub fn second_roll(&self) -> u8 {
        self.second_roll.unwrap_or(0)
    }

    pub fn is_tenth(&self) -> bool {
        self.number == FRAMES
    }

    pub fn is_strike(&self) -> bool {
        self.roll_count == 1 && self.pins_total == u16::from(PINS)
    }

    pub fn is_spare(&self) -> bool {
        self.roll_count == 2 && self.pins_total == u16::from(PINS)
    }

    /// No further rolls may be recorded into this frame.
    ///
    /// The tenth frame ends after two rolls that leave pins standing, or
    /// after three rolls whatever they knocked down.
    pub fn is_completed(&self) -> bool {
        let out_of_rolls = self.roll_count == max_rolls(self.number);
        if self.is_tenth() {
            return out_of_rolls || (self.roll_count == 2 && self.pins_total < u16::from(PINS));
        }
        self.pins_total == u16::from(PINS) || out_of_rolls
    }

    /// Index of the following frame in the game's frame sequence.
    pub fn next_index(&self) -> Option<usize> {
        if self.is_tenth() {
            None
        } else {
            Some(usize::from(self.number))
        }
    }

    /// Pins standing for the next roll into this frame.
    ///
    /// In the tenth frame the rack is reset after a strike or a spare, so
    /// this can go back up to [`PINS`] after the first or second roll.
    pub fn pins_standing(&self) -> u8 {
        if self.is_completed() {
            return 0;
        }
        let first = self.first_roll();
        let second = self.second_roll();
        match self.roll_count {
            0 => PINS,
            1 if first >= PINS => PINS,
            1 => PINS - first,
            // Only the tenth frame reaches a third roll.
            2 if first >= PINS && second >= PINS => PINS,
            2 if first >= PINS => PINS.saturating_sub(second),
            2 if first.saturating_add(second) == PINS => PINS,
            _ => PINS.saturating_sub(first.saturating_add(second)),
        }
    }
}
