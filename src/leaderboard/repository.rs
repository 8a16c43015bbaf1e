//! Typed leaderboard persistence over a `KeyValueStore`.

use crate::error::StoreError;

use super::entry::{Leaderboard, LeaderboardEntry};
use super::store::KeyValueStore;

/// Key the leaderboard is stored under.
pub const LEADERBOARD_KEY: &str = "leaderboard";

/// Loads and saves the leaderboard as a JSON array of entries.
#[derive(Debug)]
pub struct LeaderboardRepository<S> {
    store: S,
}

impl<S: KeyValueStore> LeaderboardRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted leaderboard.
    ///
    /// Missing, unreadable, or malformed data yields an empty leaderboard.
    /// Within a well-formed array, entries that fail to parse are skipped
    /// and the rest are kept.
    pub fn load(&self) -> Leaderboard {
        let raw = match self.store.get(LEADERBOARD_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Leaderboard::new(),
            Err(e) => {
                tracing::warn!("Failed to read leaderboard, starting empty: {}", e);
                return Leaderboard::new();
            }
        };

        let values = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!("Malformed leaderboard data, starting empty: {}", e);
                return Leaderboard::new();
            }
        };

        let entries = values.into_iter().filter_map(|value| {
            serde_json::from_value::<LeaderboardEntry>(value)
                .map_err(|e| tracing::warn!("Skipping malformed leaderboard entry: {}", e))
                .ok()
        });
        let board = Leaderboard::from_entries(entries);
        tracing::debug!("Loaded leaderboard with {} entries", board.len());
        board
    }

    /// Rewrite the full leaderboard.
    pub fn save(&mut self, board: &Leaderboard) -> Result<(), StoreError> {
        let json = serde_json::to_string(board)?;
        self.store.set(LEADERBOARD_KEY, &json)
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::MemoryStore;
    use chrono::Local;

    #[test]
    fn test_absent_is_empty() {
        let repo = LeaderboardRepository::new(MemoryStore::new());
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_malformed_is_empty() {
        for raw in ["not json", "{\"name\": 1}", "[{\"score\": \"x\"}]", ""] {
            let repo = LeaderboardRepository::new(MemoryStore::with_value(LEADERBOARD_KEY, raw));
            assert!(repo.load().is_empty(), "{raw:?}");
        }
    }

    #[test]
    fn test_save_then_load() {
        let mut repo = LeaderboardRepository::new(MemoryStore::new());
        let mut board = Leaderboard::new();
        board.insert(LeaderboardEntry::new("Player", 4, Local::now()));
        board.insert(LeaderboardEntry::new("Player", 2, Local::now()));

        repo.save(&board).unwrap();
        assert_eq!(repo.load(), board);
    }

    #[test]
    fn test_load_locale_dates() {
        let raw = r#"[{"name":"Player","score":4,"date":"10/17/2026, 4:07:00 AM"}]"#;
        let repo = LeaderboardRepository::new(MemoryStore::with_value(LEADERBOARD_KEY, raw));
        let board = repo.load();

        assert_eq!(board.scores(), vec![4]);
        assert_eq!(board.entries()[0].name, "Player");
        assert_eq!(board.entries()[0].timestamp.format("%Y-%m-%d %H:%M").to_string(), "2026-10-17 04:07");
    }

    #[test]
    fn test_bad_entry_skipped_rest_kept() {
        let raw = r#"[
            {"name": "a", "score": 2, "date": "not a date"},
            {"name": "b", "score": 5, "date": "2024-01-01T11:00:00+00:00"},
            {"name": "c", "score": 3, "date": "1/2/2024, 3:04:05 PM"}
        ]"#;
        let repo = LeaderboardRepository::new(MemoryStore::with_value(LEADERBOARD_KEY, raw));
        let names: Vec<_> = repo.load().iter().map(|e| e.name.clone()).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[test]
    fn test_locale_record_survives_update() {
        let raw = r#"[{"name":"Player","score":4,"date":"10/17/2026, 4:07:00 AM"}]"#;
        let mut repo = LeaderboardRepository::new(MemoryStore::with_value(LEADERBOARD_KEY, raw));
        let mut board = repo.load();
        board.insert(LeaderboardEntry::new("Player", 1, Local::now()));
        repo.save(&board).unwrap();

        assert_eq!(repo.load().scores(), vec![4, 1]);
    }

    #[test]
    fn test_load_reranks_stored_entries() {
        let raw = r#"[
            {"name": "a", "score": 1, "date": "2024-01-01T10:00:00+00:00"},
            {"name": "b", "score": 4, "date": "2024-01-01T11:00:00+00:00"}
        ]"#;
        let repo = LeaderboardRepository::new(MemoryStore::with_value(LEADERBOARD_KEY, raw));
        let board = repo.load();
        assert_eq!(board.scores(), vec![4, 1]);
    }
}
