//! Top-score leaderboard and its persistence.
//!
//! - `entry`: entries and ranking
//! - `store`: key-value storage port and implementations
//! - `repository`: typed load/save of the leaderboard record

pub mod entry;
pub mod repository;
pub mod store;

pub use entry::{Leaderboard, LeaderboardEntry, MAX_ENTRIES};
pub use repository::{LeaderboardRepository, LEADERBOARD_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
