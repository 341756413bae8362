use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One colored pad in the fixed four-signal alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Green,
    Red,
    Blue,
    Yellow,
}

impl Signal {
    /// The full alphabet, in pad order. Fixed at compile time.
    pub const ALL: [Signal; 4] = [Signal::Green, Signal::Red, Signal::Blue, Signal::Yellow];

    /// Stable string identifier, matching the persisted/parsed form.
    pub fn id(&self) -> &'static str {
        match self {
            Signal::Green => "green",
            Signal::Red => "red",
            Signal::Blue => "blue",
            Signal::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown signal '{0}'")]
pub struct ParseSignalError(String);

impl FromStr for Signal {
    type Err = ParseSignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" | "g" => Ok(Signal::Green),
            "red" | "r" => Ok(Signal::Red),
            "blue" | "b" => Ok(Signal::Blue),
            "yellow" | "y" => Ok(Signal::Yellow),
            other => Err(ParseSignalError(other.to_string())),
        }
    }
}
