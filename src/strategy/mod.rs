//! Computer move selection strategies.

pub mod difficulty;

pub use difficulty::{choose_computer_move, counter_for_input, counter_move, successor, Difficulty};
