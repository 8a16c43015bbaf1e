//! Series state: scores, round counter, and round history.
//!
//! ## SeriesState
//!
//! Observable by the presentation layer:
//! - Player and computer scores
//! - Current round and total rounds
//! - Round history in chronological order
//!
//! History uses `im::Vector` so snapshots are O(1) clones.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Move, RoundOutcome};

/// One resolved round. Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number within the series.
    pub round_number: u32,
    pub player_move: Move,
    pub computer_move: Move,
    pub outcome: RoundOutcome,
}

impl std::fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Round {}: Player chose {}, Computer chose {} - {}",
            self.round_number, self.player_move, self.computer_move, self.outcome
        )
    }
}

/// Lifecycle of a series.
///
/// `SeriesComplete` is transient: the engine resets to a fresh
/// `InProgress` series in the same command that completes one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesPhase {
    #[default]
    InProgress,
    SeriesComplete,
}

/// Declared winner of a completed series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Player,
    Computer,
}

impl Winner {
    /// Strict comparison: a tied series goes to the computer.
    #[must_use]
    pub fn decide(player_score: u32, computer_score: u32) -> Self {
        if player_score > computer_score {
            Winner::Player
        } else {
            Winner::Computer
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Winner::Player => "Player",
            Winner::Computer => "Computer",
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Scores, round counter, and history for the series in play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesState {
    pub player_score: u32,
    pub computer_score: u32,

    /// Round about to be played (starts at 1).
    pub current_round: u32,

    total_rounds: u32,

    /// Resolved rounds, oldest first.
    pub history: Vector<RoundRecord>,
}

impl SeriesState {
    /// Create a fresh series.
    #[must_use]
    pub fn new(total_rounds: u32) -> Self {
        assert!(total_rounds > 0, "A series needs at least 1 round");

        Self {
            player_score: 0,
            computer_score: 0,
            current_round: 1,
            total_rounds,
            history: Vector::new(),
        }
    }

    /// Fixed number of rounds in this series.
    #[must_use]
    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    /// Number of drawn rounds so far.
    #[must_use]
    pub fn draws(&self) -> u32 {
        self.history
            .iter()
            .filter(|r| r.outcome == RoundOutcome::Draw)
            .count() as u32
    }

    /// Check if every round of the series has been played.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_round > self.total_rounds
    }

    #[must_use]
    pub fn phase(&self) -> SeriesPhase {
        if self.is_complete() {
            SeriesPhase::SeriesComplete
        } else {
            SeriesPhase::InProgress
        }
    }

    /// Record a resolved round and advance the counter.
    ///
    /// Returns the stored record.
    pub fn record(&mut self, player_move: Move, computer_move: Move, outcome: RoundOutcome) -> RoundRecord {
        let record = RoundRecord {
            round_number: self.current_round,
            player_move,
            computer_move,
            outcome,
        };
        self.history.push_back(record);

        match outcome {
            RoundOutcome::Win => self.player_score += 1,
            RoundOutcome::Lose => self.computer_score += 1,
            RoundOutcome::Draw => {}
        }

        self.current_round += 1;
        record
    }

    /// Winner by current scores.
    #[must_use]
    pub fn winner(&self) -> Winner {
        Winner::decide(self.player_score, self.computer_score)
    }

    /// Clear scores and history, keeping `total_rounds`.
    pub fn reset(&mut self) {
        *self = Self::new(self.total_rounds);
    }
}
