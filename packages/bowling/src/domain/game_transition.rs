use crate::domain::rules::FrameNumber;

/// Comparable view of where a game stands, sampled before and after rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameProgress {
    pub current_frame: FrameNumber,
    pub game_over: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: a new frame became current.
    FrameStarted { frame: FrameNumber },

    /// Edge-triggered: the tenth frame completed.
    GameEnded,
}

/// Derive state-machine transitions from before/after progress.
///
/// `after` may be several rolls ahead of `before`; every frame started in
/// between is reported, in order.
pub fn derive_game_transitions(
    before: &GameProgress,
    after: &GameProgress,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    if after.current_frame > before.current_frame {
        transitions.extend(
            (before.current_frame + 1..=after.current_frame)
                .map(|frame| GameTransition::FrameStarted { frame }),
        );
    }

    if !before.game_over && after.game_over {
        transitions.push(GameTransition::GameEnded);
    }

    transitions
}
