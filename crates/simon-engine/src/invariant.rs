use crate::config::GameConfig;
use crate::engine::{GameSnapshot, TurnState};

/// A violation found while checking engine state.
#[derive(Debug, Clone)]
pub struct Violation {
    pub property: &'static str,
    pub message: String,
}

/// Check the structural invariants of a state snapshot.
///
/// Returns a list of violations (empty if all invariants hold). The engine
/// asserts a clean check after every mutating operation in debug builds;
/// tests call it directly.
pub fn check(snapshot: &GameSnapshot, config: &GameConfig) -> Vec<Violation> {
    let mut violations = Vec::new();

    if snapshot.player_input.len() > snapshot.sequence.len() {
        violations.push(Violation {
            property: "input_within_sequence",
            message: format!(
                "player input ({}) longer than sequence ({})",
                snapshot.player_input.len(),
                snapshot.sequence.len()
            ),
        });
    } else if !snapshot.sequence.starts_with(&snapshot.player_input) {
        violations.push(Violation {
            property: "input_is_prefix",
            message: format!(
                "player input {:?} is not a prefix of sequence {:?}",
                snapshot.player_input, snapshot.sequence
            ),
        });
    }

    match snapshot.turn {
        TurnState::Idle => {
            // Reset clears everything except the high score.
            if !snapshot.sequence.is_empty()
                || !snapshot.player_input.is_empty()
                || !snapshot.achievements.is_empty()
                || snapshot.level != 0
            {
                violations.push(Violation {
                    property: "idle_is_empty",
                    message: format!(
                        "idle engine holds sequence of {}, input of {}, \
                         {} achievements at level {}",
                        snapshot.sequence.len(),
                        snapshot.player_input.len(),
                        snapshot.achievements.len(),
                        snapshot.level
                    ),
                });
            }
        }
        // One pending signal per round: the sequence already contains the
        // next round's growth.
        TurnState::Playing | TurnState::AwaitingInput => {
            if snapshot.sequence.len() as u64 != u64::from(snapshot.level) + 1 {
                violations.push(Violation {
                    property: "sequence_tracks_level",
                    message: format!(
                        "sequence of {} does not equal level {} + 1",
                        snapshot.sequence.len(),
                        snapshot.level
                    ),
                });
            }
        }
    }

    if config.achievement_stride > 0 {
        let expected = snapshot.level / config.achievement_stride;
        if snapshot.achievements.len() as u32 != expected {
            violations.push(Violation {
                property: "achievements_track_level",
                message: format!(
                    "{} achievements at level {}, expected {}",
                    snapshot.achievements.len(),
                    snapshot.level,
                    expected
                ),
            });
        }
    }

    if snapshot.high_score < snapshot.level {
        violations.push(Violation {
            property: "high_score_covers_level",
            message: format!(
                "high score {} below current level {}",
                snapshot.high_score, snapshot.level
            ),
        });
    }

    violations
}
