pub mod config;
pub mod engine;
pub mod invariant;
pub mod outcome;
pub mod signal;

pub use config::GameConfig;
pub use engine::{
    GameEngine, GameSnapshot, Pacer, ScoreStore, SignalDisplay, StoreUnavailable, TurnState,
};
pub use outcome::{Achievement, InputOutcome};
pub use signal::Signal;
