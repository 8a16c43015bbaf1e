//! Moves, round outcomes, and the comparison rule between them.
//!
//! ## Cyclic Order
//!
//! Each move beats exactly one other move:
//! - ROCK beats SCISSORS
//! - SCISSORS beats PAPER
//! - PAPER beats ROCK
//!
//! `resolve` is pure and total over all nine pairs.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EngineError;

/// One of the three hand shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves in the fixed order used for indexing: [ROCK, PAPER, SCISSORS].
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Position of this move in `Move::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    /// Move at `index` in `Move::ALL`, wrapping around.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 3]
    }

    /// The move this one defeats.
    #[must_use]
    pub const fn victim(self) -> Self {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// Check if this move defeats `other`.
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        self.victim() == other
    }

    /// Upper-case display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "ROCK",
            Move::Paper => "PAPER",
            Move::Scissors => "SCISSORS",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Move::Rock),
            "paper" | "p" => Ok(Move::Paper),
            "scissors" | "s" => Ok(Move::Scissors),
            _ => Err(EngineError::InvalidMove(s.to_string())),
        }
    }
}

/// Result of a round from the player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    Win,
    Lose,
    Draw,
}

impl RoundOutcome {
    /// Display label: "Win", "Lose" or "Draw".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            RoundOutcome::Win => "Win",
            RoundOutcome::Lose => "Lose",
            RoundOutcome::Draw => "Draw",
        }
    }
}

impl std::ops::Neg for RoundOutcome {
    type Output = RoundOutcome;

    /// The same round seen from the other side of the table.
    fn neg(self) -> Self::Output {
        match self {
            RoundOutcome::Win => RoundOutcome::Lose,
            RoundOutcome::Lose => RoundOutcome::Win,
            RoundOutcome::Draw => RoundOutcome::Draw,
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolve a round between the player's move and the computer's move.
#[must_use]
pub fn resolve(player: Move, computer: Move) -> RoundOutcome {
    if player == computer {
        RoundOutcome::Draw
    } else if player.beats(computer) {
        RoundOutcome::Win
    } else {
        RoundOutcome::Lose
    }
}
