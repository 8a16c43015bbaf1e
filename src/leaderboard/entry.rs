//! Leaderboard entries and ranking.
//!
//! The leaderboard keeps the best `MAX_ENTRIES` scores, highest first.
//! Equal scores keep insertion order, so an older entry outranks a newer
//! one with the same score.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

/// Maximum number of entries retained.
pub const MAX_ENTRIES: usize = 5;

/// A finished series' score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    #[serde(rename = "date", deserialize_with = "deserialize_date")]
    pub timestamp: DateTime<Local>,
}

/// Locale-style date written by older leaderboards, e.g. `10/17/2026, 4:07:00 AM`.
const LOCALE_DATE_FORMAT: &str = "%m/%d/%Y, %I:%M:%S %p";

/// Parse a stored date: RFC 3339 first, then the locale-style format.
pub fn parse_date(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }
    // some locales put a narrow no-break space before AM/PM
    let normalized = raw.trim().replace('\u{202f}', " ");
    let naive = NaiveDateTime::parse_from_str(&normalized, LOCALE_DATE_FORMAT).ok()?;
    Local.from_local_datetime(&naive).earliest()
}

fn deserialize_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Local>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("unrecognised date {raw:?}")))
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, score: u32, timestamp: DateTime<Local>) -> Self {
        Self {
            name: name.into(),
            score,
            timestamp,
        }
    }
}

impl std::fmt::Display for LeaderboardEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - Score: {} (Date: {})",
            self.name,
            self.score,
            self.timestamp.format("%-m/%-d/%Y, %-I:%M:%S %p")
        )
    }
}

/// Top scores, sorted descending by score.
///
/// One slot beyond `MAX_ENTRIES` is inline so an insertion never spills
/// to the heap before truncation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: SmallVec<[LeaderboardEntry; MAX_ENTRIES + 1]>,
}

impl Leaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary entries, restoring ordering and the size bound.
    pub fn from_entries(entries: impl IntoIterator<Item = LeaderboardEntry>) -> Self {
        let mut board = Self::new();
        for entry in entries {
            board.insert(entry);
        }
        board
    }

    /// Insert an entry, re-rank, and drop anything past `MAX_ENTRIES`.
    pub fn insert(&mut self, entry: LeaderboardEntry) {
        self.entries.push(entry);
        // stable: ties keep insertion order
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
    }

    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &LeaderboardEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scores in rank order.
    #[must_use]
    pub fn scores(&self) -> Vec<u32> {
        self.entries.iter().map(|e| e.score).collect()
    }

    /// Check the ordering and size invariants.
    #[must_use]
    pub fn is_ranked(&self) -> bool {
        self.entries.len() <= MAX_ENTRIES
            && self.entries.windows(2).all(|w| w[0].score >= w[1].score)
    }
}
