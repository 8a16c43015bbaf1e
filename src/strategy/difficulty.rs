//! Difficulty levels and computer move selection.
//!
//! - `Easy`: uniform random move, independent of the player
//! - `Medium`: the player's move shifted one place along `Move::ALL`
//! - `Hard`: the move that defeats the player's move
//!
//! `Medium` is defined by its formula, not by a target win rate. Under the
//! comparison rule the successor of the player's move is exactly the move
//! that beats it, so in practice it plays the same as `Hard`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{Move, RandomSource};
use crate::error::EngineError;

/// Named strategy governing computer move selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(EngineError::InvalidDifficulty(s.to_string())),
        }
    }
}

/// Pick the computer's move for this round.
///
/// Only `Easy` consumes randomness.
pub fn choose_computer_move<R: RandomSource + ?Sized>(
    player: Move,
    difficulty: Difficulty,
    rng: &mut R,
) -> Move {
    match difficulty {
        Difficulty::Easy => random_move(rng),
        Difficulty::Medium => successor(player),
        Difficulty::Hard => counter_move(player),
    }
}

/// Cyclic successor in `Move::ALL`: index + 1 mod 3.
#[must_use]
pub const fn successor(player: Move) -> Move {
    Move::from_index(player.index() + 1)
}

/// Fixed counter lookup that always defeats `player`.
#[must_use]
pub const fn counter_move(player: Move) -> Move {
    match player {
        Move::Rock => Move::Paper,
        Move::Paper => Move::Scissors,
        Move::Scissors => Move::Rock,
    }
}

/// Counter for raw player input, falling back to a random move when the
/// input does not name a move.
pub fn counter_for_input<R: RandomSource + ?Sized>(input: &str, rng: &mut R) -> Move {
    match input.parse::<Move>() {
        Ok(player) => counter_move(player),
        Err(_) => random_move(rng),
    }
}

fn random_move<R: RandomSource + ?Sized>(rng: &mut R) -> Move {
    Move::from_index(rng.next_index(Move::ALL.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{resolve, GameRng, RoundOutcome, ScriptedRng};

    #[test]
    fn test_hard_always_wins() {
        let mut rng = GameRng::new(42);
        for player in Move::ALL {
            let computer = choose_computer_move(player, Difficulty::Hard, &mut rng);
            assert_eq!(computer, counter_move(player));
            assert_eq!(resolve(player, computer), RoundOutcome::Lose);
        }
    }

    #[test]
    fn test_medium_formula() {
        let mut rng = ScriptedRng::new(Vec::new());
        assert_eq!(choose_computer_move(Move::Rock, Difficulty::Medium, &mut rng), Move::Paper);
        assert_eq!(choose_computer_move(Move::Paper, Difficulty::Medium, &mut rng), Move::Scissors);
        assert_eq!(choose_computer_move(Move::Scissors, Difficulty::Medium, &mut rng), Move::Rock);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_medium_is_pure() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(999);
        for player in Move::ALL {
            let first = choose_computer_move(player, Difficulty::Medium, &mut rng1);
            for _ in 0..10 {
                assert_eq!(choose_computer_move(player, Difficulty::Medium, &mut rng2), first);
            }
        }
    }

    #[test]
    fn test_easy_follows_source() {
        let mut rng = ScriptedRng::new(vec![2, 0, 1]);
        let picks: Vec<_> = (0..3)
            .map(|_| choose_computer_move(Move::Rock, Difficulty::Easy, &mut rng))
            .collect();
        assert_eq!(picks, vec![Move::Scissors, Move::Rock, Move::Paper]);
    }

    #[test]
    fn test_easy_ignores_player_move() {
        for player in Move::ALL {
            let mut rng = ScriptedRng::new(vec![1]);
            assert_eq!(choose_computer_move(player, Difficulty::Easy, &mut rng), Move::Paper);
        }
    }

    #[test]
    fn test_counter_for_input_fallback() {
        let mut rng = ScriptedRng::new(vec![2]);
        assert_eq!(counter_for_input("rock", &mut rng), Move::Paper);
        assert_eq!(rng.draws(), 0);

        assert_eq!(counter_for_input("lizard", &mut rng), Move::Scissors);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn test_parse_difficulty() {
        for d in Difficulty::ALL {
            assert_eq!(d.to_string().parse::<Difficulty>().unwrap(), d);
        }
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("impossible".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
