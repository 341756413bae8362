/// Game pacing and milestone configuration.
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing and milestone knobs for a game.
///
/// Defaults match the classic cadence: 800 ms between playback signals,
/// 1000 ms before the next round starts, a 500 ms highlight hold, and an
/// achievement every 5 levels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Gap between highlighted signals during playback.
    pub playback_gap_ms: u64,
    /// Delay between a completed round and the next playback.
    pub next_round_delay_ms: u64,
    /// How long a display should hold a highlight before returning to baseline.
    pub highlight_ms: u64,
    /// An achievement unlocks every this many levels. 0 disables milestones.
    pub achievement_stride: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playback_gap_ms: 800,
            next_round_delay_ms: 1000,
            highlight_ms: 500,
            achievement_stride: 5,
        }
    }
}

impl GameConfig {
    pub fn playback_gap(&self) -> Duration {
        Duration::from_millis(self.playback_gap_ms)
    }

    pub fn next_round_delay(&self) -> Duration {
        Duration::from_millis(self.next_round_delay_ms)
    }

    pub fn highlight(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }
}
