//! Domain events emitted by the engine.
//!
//! The presentation layer subscribes to these instead of the engine
//! calling UI primitives directly.

use serde::{Deserialize, Serialize};

use crate::core::Move;
use crate::series::{RoundRecord, Winner};
use crate::strategy::Difficulty;

/// Something that happened inside the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A valid move was accepted.
    MoveSubmitted { player_move: Move },

    /// A round was resolved and recorded.
    RoundResolved {
        record: RoundRecord,
        player_score: u32,
        computer_score: u32,
    },

    /// The last round of a series was played.
    SeriesComplete {
        winner: Winner,
        player_score: u32,
        computer_score: u32,
    },

    DifficultyChanged { difficulty: Difficulty },

    SoundToggled { enabled: bool },
}

impl GameEvent {
    /// Blocking announcement text for terminal events.
    #[must_use]
    pub fn announcement(&self) -> Option<String> {
        match self {
            GameEvent::SeriesComplete { winner, .. } => Some(format!("Game Over! {winner} wins!")),
            _ => None,
        }
    }

    /// Check if this event ends a series.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::SeriesComplete { .. })
    }
}
