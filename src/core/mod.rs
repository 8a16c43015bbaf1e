//! Core engine types: moves, outcomes, RNG, configuration.

pub mod moves;
pub mod rng;
pub mod config;

pub use moves::{resolve, Move, RoundOutcome};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use config::EngineConfig;
