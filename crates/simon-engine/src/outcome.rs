use serde::{Deserialize, Serialize};

use crate::signal::Signal;

/// A milestone unlocked when the level reaches a multiple of the
/// configured stride.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// The level at which this milestone was unlocked.
    pub level: u32,
    pub message: String,
}

impl Achievement {
    pub fn for_level(level: u32) -> Self {
        Self {
            level,
            message: format!("Reached level {level}!"),
        }
    }
}

/// What a single submitted signal did to the game.
///
/// A wrong signal is a modeled outcome, not an error: the front end decides
/// how to notify the player.
#[derive(Debug, Clone, PartialEq)]
pub enum InputOutcome {
    /// Input arrived outside the player's turn and was dropped.
    Ignored,
    /// Correct signal; the round is not finished yet.
    Matched { position: usize },
    /// Correct signal completed the round. By the time this is returned the
    /// engine has already grown the sequence and replayed it.
    RoundComplete {
        level: u32,
        achievement: Option<Achievement>,
        new_high_score: bool,
    },
    /// Wrong signal — game over. The engine has already reset itself; the
    /// front end should notify the player before rendering the reset state.
    Mismatch { expected: Signal, got: Signal },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achievement_message_cites_level() {
        let achievement = Achievement::for_level(5);
        assert_eq!(achievement.level, 5);
        assert!(achievement.message.contains('5'));
    }
}
