//! The game engine: command handling and series progression.
//!
//! `GameEngine` owns all mutable game state. The presentation layer reads
//! snapshots through accessors and issues commands:
//! - `submit_move` / `play_round`
//! - `set_difficulty`
//! - `toggle_sound`
//!
//! Each command runs to completion before returning, including event
//! delivery, sound cues, and the leaderboard write at series end.

use chrono::Local;
use im::Vector;

use crate::core::{resolve, EngineConfig, GameRng, Move, RandomSource};
use crate::error::Result;
use crate::events::{AudioPort, EventListener, GameEvent, SilentAudio, SoundCue};
use crate::leaderboard::{KeyValueStore, Leaderboard, LeaderboardEntry, LeaderboardRepository};
use crate::series::{RoundRecord, SeriesPhase, SeriesState, Winner};
use crate::strategy::{choose_computer_move, Difficulty};

/// Summary of a completed series.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesResult {
    pub winner: Winner,
    pub player_score: u32,
    pub computer_score: u32,
    /// Every round of the finished series, oldest first.
    pub rounds: Vector<RoundRecord>,
    /// Leaderboard after this series' score was recorded.
    pub leaderboard: Leaderboard,
}

impl SeriesResult {
    /// "Game Over! <winner> wins!"
    #[must_use]
    pub fn announcement(&self) -> String {
        format!("Game Over! {} wins!", self.winner)
    }
}

/// Result of one `play_round` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    pub record: RoundRecord,
    /// Scores right after this round, before any series reset.
    pub player_score: u32,
    pub computer_score: u32,
    /// Set when this round finished the series.
    pub series: Option<SeriesResult>,
}

/// Rock-paper-scissors engine.
pub struct GameEngine<S: KeyValueStore> {
    config: EngineConfig,
    series: SeriesState,
    leaderboard: Leaderboard,
    repository: LeaderboardRepository<S>,
    difficulty: Difficulty,
    sound_enabled: bool,
    rng: Box<dyn RandomSource>,
    audio: Box<dyn AudioPort>,
    audio_ready: bool,
    listeners: Vec<Box<dyn EventListener>>,
}

impl<S: KeyValueStore> GameEngine<S> {
    /// Create an engine, loading the leaderboard from `store`.
    ///
    /// Uses a seeded `GameRng` when `config.seed` is set, otherwise an
    /// entropy-seeded one, and `SilentAudio` until `with_audio` is called.
    pub fn new(config: EngineConfig, store: S) -> Result<Self> {
        config.validate()?;

        let repository = LeaderboardRepository::new(store);
        let leaderboard = repository.load();
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        tracing::info!(
            "Engine ready: {} rounds, {} difficulty, {} leaderboard entries",
            config.total_rounds,
            config.difficulty,
            leaderboard.len()
        );

        Ok(Self {
            series: SeriesState::new(config.total_rounds),
            difficulty: config.difficulty,
            sound_enabled: config.sound_enabled,
            config,
            leaderboard,
            repository,
            rng: Box::new(rng),
            audio: Box::new(SilentAudio),
            audio_ready: false,
            listeners: Vec::new(),
        })
    }

    /// Replace the random source.
    #[must_use]
    pub fn with_rng(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Replace the audio port.
    #[must_use]
    pub fn with_audio(mut self, audio: impl AudioPort + 'static) -> Self {
        self.audio = Box::new(audio);
        self.audio_ready = false;
        self
    }

    /// Register a listener for all subsequent events.
    pub fn subscribe(&mut self, listener: impl EventListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // === Commands ===

    /// Parse `input` as a move and play a round with it.
    ///
    /// Unrecognised input is rejected without touching any state.
    pub fn submit_move(&mut self, input: &str) -> Result<RoundReport> {
        let player_move = input.parse::<Move>().map_err(|e| {
            tracing::debug!("Rejected move input {:?}", input);
            e
        })?;
        Ok(self.play_round(player_move))
    }

    /// Play one round against the computer.
    pub fn play_round(&mut self, player_move: Move) -> RoundReport {
        self.play_cue(SoundCue::MoveSubmitted);
        self.emit(GameEvent::MoveSubmitted { player_move });

        let computer_move = choose_computer_move(player_move, self.difficulty, &mut *self.rng);
        let outcome = resolve(player_move, computer_move);
        let record = self.series.record(player_move, computer_move, outcome);

        tracing::debug!("{} ({} difficulty)", record, self.difficulty);

        self.emit(GameEvent::RoundResolved {
            record,
            player_score: self.series.player_score,
            computer_score: self.series.computer_score,
        });
        if let Some(cue) = SoundCue::for_outcome(outcome) {
            self.play_cue(cue);
        }

        let mut report = RoundReport {
            record,
            player_score: self.series.player_score,
            computer_score: self.series.computer_score,
            series: None,
        };

        if self.series.is_complete() {
            report.series = Some(self.complete_series());
        }

        report
    }

    /// Change the computer strategy. Takes effect from the next round.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty != difficulty {
            tracing::debug!("Difficulty {} -> {}", self.difficulty, difficulty);
        }
        self.difficulty = difficulty;
        self.emit(GameEvent::DifficultyChanged { difficulty });
    }

    /// Flip the sound setting and return the new value.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.emit(GameEvent::SoundToggled {
            enabled: self.sound_enabled,
        });
        self.sound_enabled
    }

    /// Record `player_score` on the leaderboard and persist it.
    ///
    /// A failed write is logged; the in-memory leaderboard is still updated.
    pub fn update_leaderboard(&mut self, player_score: u32) -> Leaderboard {
        let entry = LeaderboardEntry::new(self.config.player_name.clone(), player_score, Local::now());
        self.leaderboard.insert(entry);

        match self.repository.save(&self.leaderboard) {
            Ok(()) => tracing::info!(
                "Leaderboard saved with {} entries (top score {})",
                self.leaderboard.len(),
                self.leaderboard.scores().first().copied().unwrap_or_default()
            ),
            Err(e) => tracing::error!("Failed to persist leaderboard: {}", e),
        }

        self.leaderboard.clone()
    }

    // === Accessors ===

    #[must_use]
    pub fn series(&self) -> &SeriesState {
        &self.series
    }

    #[must_use]
    pub fn phase(&self) -> SeriesPhase {
        self.series.phase()
    }

    #[must_use]
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Backing store of the leaderboard.
    #[must_use]
    pub fn store(&self) -> &S {
        self.repository.store()
    }

    // === Internals ===

    fn complete_series(&mut self) -> SeriesResult {
        let winner = self.series.winner();
        let player_score = self.series.player_score;
        let computer_score = self.series.computer_score;

        tracing::info!(
            "Series complete: {} wins {}-{}",
            winner,
            player_score,
            computer_score
        );

        self.emit(GameEvent::SeriesComplete {
            winner,
            player_score,
            computer_score,
        });

        let leaderboard = self.update_leaderboard(player_score);
        let rounds = self.series.history.clone();
        self.series.reset();

        SeriesResult {
            winner,
            player_score,
            computer_score,
            rounds,
            leaderboard,
        }
    }

    fn emit(&mut self, event: GameEvent) {
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
    }

    fn play_cue(&mut self, cue: SoundCue) {
        if !self.sound_enabled {
            return;
        }

        if !self.audio_ready {
            if let Err(e) = self.audio.init() {
                tracing::warn!("Audio init failed, skipping {:?}: {}", cue, e);
                return;
            }
            self.audio_ready = true;
        }

        if let Err(e) = self.audio.play(cue) {
            tracing::warn!("Failed to play {:?}: {}", cue, e);
        }
    }
}

impl<S: KeyValueStore> std::fmt::Debug for GameEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("config", &self.config)
            .field("series", &self.series)
            .field("leaderboard", &self.leaderboard)
            .field("difficulty", &self.difficulty)
            .field("sound_enabled", &self.sound_enabled)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RoundOutcome, ScriptedRng};
    use crate::error::EngineError;
    use crate::events::EventLog;
    use crate::leaderboard::{MemoryStore, LEADERBOARD_KEY};

    fn engine(config: EngineConfig) -> GameEngine<MemoryStore> {
        GameEngine::new(config, MemoryStore::new())
            .unwrap()
            .with_rng(ScriptedRng::new(vec![0]))
    }

    #[test]
    fn test_initial_state() {
        let engine = engine(EngineConfig::default());
        assert_eq!(engine.series().current_round, 1);
        assert_eq!(engine.phase(), SeriesPhase::InProgress);
        assert_eq!(engine.difficulty(), Difficulty::Medium);
        assert!(engine.sound_enabled());
        assert!(engine.leaderboard().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = GameEngine::new(EngineConfig::default().with_total_rounds(0), MemoryStore::new());
        assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_hard_round() {
        let mut engine = engine(EngineConfig::default().with_difficulty(Difficulty::Hard));
        let report = engine.play_round(Move::Rock);

        assert_eq!(report.record.computer_move, Move::Paper);
        assert_eq!(report.record.outcome, RoundOutcome::Lose);
        assert_eq!(engine.series().computer_score, 1);
        assert_eq!(engine.series().history.len(), 1);
        assert_eq!(engine.series().history[0].outcome.label(), "Lose");
    }

    #[test]
    fn test_invalid_submission_leaves_state() {
        let mut engine = engine(EngineConfig::default());
        let log = EventLog::new();
        engine.subscribe(log.clone());

        let before = engine.series().clone();
        let err = engine.submit_move("spock").unwrap_err();

        assert!(matches!(err, EngineError::InvalidMove(_)));
        assert_eq!(engine.series(), &before);
        assert!(log.is_empty());
    }

    #[test]
    fn test_series_completion_resets() {
        // easy strategy with scripted index 2 plays SCISSORS every round
        let mut engine = engine(EngineConfig::default().with_difficulty(Difficulty::Easy))
            .with_rng(ScriptedRng::new(vec![2]));

        for _ in 0..4 {
            assert!(engine.play_round(Move::Rock).series.is_none());
        }
        let report = engine.play_round(Move::Rock);
        let result = report.series.unwrap();

        assert_eq!(report.player_score, 5);
        assert_eq!(result.winner, Winner::Player);
        assert_eq!(result.rounds.len(), 5);
        assert_eq!(result.announcement(), "Game Over! Player wins!");
        assert_eq!(engine.series(), &SeriesState::new(5));
        assert_eq!(engine.leaderboard().scores(), vec![5]);
        assert!(engine.store().get(LEADERBOARD_KEY).unwrap().is_some());
    }

    #[test]
    fn test_toggle_sound() {
        let mut engine = engine(EngineConfig::default());
        assert!(!engine.toggle_sound());
        assert!(!engine.sound_enabled());
        assert!(engine.toggle_sound());
    }

    #[test]
    fn test_player_name_on_entries() {
        let mut engine = engine(EngineConfig::default().with_player_name("Ada"));
        let board = engine.update_leaderboard(2);
        assert_eq!(board.entries()[0].name, "Ada");
    }
}
