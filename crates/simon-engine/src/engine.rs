use std::time::Duration;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::config::GameConfig;
use crate::invariant;
use crate::outcome::{Achievement, InputOutcome};
use crate::signal::Signal;

/// Error a score store reports when the backing medium cannot be used.
///
/// The engine never propagates this during play: a failed load starts the
/// session at 0, a failed save is logged and skipped.
#[derive(Debug, Clone, thiserror::Error)]
#[error("score store unavailable: {reason}")]
pub struct StoreUnavailable {
    pub reason: String,
}

/// Renders one signal to the player. Fire and forget — the engine consumes
/// no result beyond "the player will see it".
pub trait SignalDisplay {
    fn highlight(&mut self, signal: Signal);
}

/// Persists the best level across sessions under a single logical key.
pub trait ScoreStore {
    fn load(&mut self) -> Result<Option<u32>, StoreUnavailable>;
    fn save(&mut self, high_score: u32) -> Result<(), StoreUnavailable>;
}

/// The engine's only suspension point.
///
/// Abstracted behind a trait so tests can substitute a pacer that returns
/// immediately and records the requested intervals.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TurnState {
    /// No game in progress; only `start` is accepted.
    Idle,
    /// The engine is presenting the sequence; all input is dropped.
    Playing,
    /// The player may submit signals.
    AwaitingInput,
}

/// Read-only view of engine state for presentation layers and invariant
/// checks. Front ends read snapshots and call engine methods; they never
/// mutate state directly.
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub turn: TurnState,
    pub sequence: Vec<Signal>,
    pub player_input: Vec<Signal>,
    pub level: u32,
    pub high_score: u32,
    pub achievements: Vec<Achievement>,
}

/// The turn-taking game core.
///
/// Owns the sequence, the player's partial input, level/achievement
/// progress, and the session high score. Collaborators are injected:
/// a display to highlight signals, a store for the persisted best level,
/// and a pacer for the fixed playback intervals.
///
/// Single logical thread of control: playback runs to completion inside
/// `start`/`submit_input`, so `Playing` is never observable from outside
/// between calls.
pub struct GameEngine<D, S, P> {
    display: D,
    store: S,
    pacer: P,
    config: GameConfig,
    rng: ChaCha8Rng,
    sequence: Vec<Signal>,
    player_input: Vec<Signal>,
    level: u32,
    high_score: u32,
    achievements: Vec<Achievement>,
    turn: TurnState,
}

impl<D, S, P> GameEngine<D, S, P>
where
    D: SignalDisplay,
    S: ScoreStore,
    P: Pacer,
{
    /// Create an engine, mirroring the persisted high score.
    ///
    /// An unavailable store degrades to a session high score of 0; it never
    /// fails construction.
    pub fn new(display: D, mut store: S, pacer: P, config: GameConfig, rng: ChaCha8Rng) -> Self {
        let high_score = match store.load() {
            Ok(Some(score)) => score,
            Ok(None) => 0,
            Err(e) => {
                log::warn!("high score unavailable, starting from 0: {e}");
                0
            }
        };

        Self {
            display,
            store,
            pacer,
            config,
            rng,
            sequence: Vec::new(),
            player_input: Vec::new(),
            level: 0,
            high_score,
            achievements: Vec::new(),
            turn: TurnState::Idle,
        }
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn sequence(&self) -> &[Signal] {
        &self.sequence
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            turn: self.turn,
            sequence: self.sequence.clone(),
            player_input: self.player_input.clone(),
            level: self.level,
            high_score: self.high_score,
            achievements: self.achievements.clone(),
        }
    }

    /// Begin a game: seed the sequence with one signal and play it back.
    ///
    /// Guarded — a start while a game is running is a no-op returning
    /// `false`, so a stray second start cannot corrupt the sequence.
    pub fn start(&mut self) -> bool {
        if self.turn != TurnState::Idle {
            log::debug!("start ignored: game already running");
            return false;
        }

        self.append_signal();
        self.play_back();
        self.debug_check();
        true
    }

    /// Validate one player signal against the next expected position.
    ///
    /// Input outside `AwaitingInput` is dropped. A full match advances the
    /// level, unlocks any milestone, raises the persisted high score, then
    /// grows the sequence by one and replays it before returning.
    pub fn submit_input(&mut self, signal: Signal) -> InputOutcome {
        if self.turn != TurnState::AwaitingInput {
            return InputOutcome::Ignored;
        }

        let position = self.player_input.len();
        let expected = self.sequence[position];

        if signal != expected {
            log::debug!("mismatch at position {position}: expected {expected}, got {signal}");
            self.reset();
            return InputOutcome::Mismatch { expected, got: signal };
        }

        self.player_input.push(signal);
        if self.player_input.len() < self.sequence.len() {
            self.debug_check();
            return InputOutcome::Matched { position };
        }

        self.complete_round()
    }

    /// Clear everything except the persisted high score.
    pub fn reset(&mut self) {
        self.sequence.clear();
        self.player_input.clear();
        self.level = 0;
        self.achievements.clear();
        self.turn = TurnState::Idle;
        self.debug_check();
    }

    fn complete_round(&mut self) -> InputOutcome {
        self.player_input.clear();
        self.level += 1;
        log::debug!("round complete, level {}", self.level);

        // Milestone check is on the post-increment level. A zero stride
        // disables milestones rather than dividing by zero.
        let achievement = if self.config.achievement_stride > 0
            && self.level % self.config.achievement_stride == 0
        {
            let unlocked = Achievement::for_level(self.level);
            self.achievements.push(unlocked.clone());
            Some(unlocked)
        } else {
            None
        };

        let new_high_score = self.level > self.high_score;
        if new_high_score {
            self.high_score = self.level;
            if let Err(e) = self.store.save(self.high_score) {
                log::warn!("high score {} not persisted: {e}", self.high_score);
            }
        }

        self.pacer.pause(self.config.next_round_delay());
        self.append_signal();
        self.play_back();
        self.debug_check();

        InputOutcome::RoundComplete {
            level: self.level,
            achievement,
            new_high_score,
        }
    }

    /// Append one signal, uniform over the alphabet and independent of
    /// earlier appends. Repeats are allowed.
    fn append_signal(&mut self) {
        let index = self.rng.gen_range(0..Signal::ALL.len());
        self.sequence.push(Signal::ALL[index]);
    }

    /// Present the whole sequence in order, one fixed pause per signal,
    /// then hand the turn to the player.
    fn play_back(&mut self) {
        self.turn = TurnState::Playing;
        for &signal in &self.sequence {
            self.display.highlight(signal);
            self.pacer.pause(self.config.playback_gap());
        }
        self.turn = TurnState::AwaitingInput;
    }

    fn debug_check(&self) {
        if cfg!(debug_assertions) {
            let violations = invariant::check(&self.snapshot(), &self.config);
            assert!(violations.is_empty(), "invariant violated: {violations:?}");
        }
    }
}
