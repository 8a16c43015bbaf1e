//! Round and series progression.

pub mod state;

pub use state::{RoundRecord, SeriesPhase, SeriesState, Winner};
