//! # rps-engine
//!
//! A rock-paper-scissors game engine: difficulty-driven computer moves,
//! round and series scoring, and a persisted top-5 leaderboard.
//!
//! ## Design Principles
//!
//! 1. **Ports, Not Globals**: Persistence (`KeyValueStore`), randomness
//!    (`RandomSource`) and audio (`AudioPort`) are injected at construction.
//!
//! 2. **Events Over UI Calls**: The engine emits `GameEvent`s; the
//!    presentation layer decides how to announce them.
//!
//! 3. **Single Owner**: `GameEngine` owns all mutable state and every
//!    command takes `&mut self`.
//!
//! ## Modules
//!
//! - `core`: Moves, outcomes, RNG, configuration
//! - `strategy`: Difficulty levels and computer move selection
//! - `series`: Round records and series progression
//! - `leaderboard`: Ranking and persistence
//! - `events`: Domain events and the audio port
//! - `engine`: The command surface tying it together
//!
//! ```
//! use rps_engine::{Difficulty, EngineConfig, GameEngine, MemoryStore, Move, RoundOutcome};
//!
//! let config = EngineConfig::default().with_difficulty(Difficulty::Hard);
//! let mut engine = GameEngine::new(config, MemoryStore::new()).unwrap();
//!
//! let report = engine.play_round(Move::Rock);
//! assert_eq!(report.record.computer_move, Move::Paper);
//! assert_eq!(report.record.outcome, RoundOutcome::Lose);
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod events;
pub mod leaderboard;
pub mod series;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{resolve, EngineConfig, GameRng, Move, RandomSource, RoundOutcome, ScriptedRng};

pub use crate::engine::{GameEngine, RoundReport, SeriesResult};

pub use crate::error::{AudioError, EngineError, Result, StoreError};

pub use crate::events::{AudioPort, EventListener, EventLog, GameEvent, SilentAudio, SoundCue};

pub use crate::leaderboard::{
    FileStore, KeyValueStore, Leaderboard, LeaderboardEntry, LeaderboardRepository, MemoryStore,
    LEADERBOARD_KEY, MAX_ENTRIES,
};

pub use crate::series::{RoundRecord, SeriesPhase, SeriesState, Winner};

pub use crate::strategy::{choose_computer_move, counter_move, Difficulty};
