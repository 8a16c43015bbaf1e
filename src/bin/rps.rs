//! Terminal front-end for the rock-paper-scissors engine.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use rps_engine::{
    AudioError, AudioPort, Difficulty, EngineConfig, EventListener, FileStore, GameEngine, GameEvent,
    SoundCue,
};

/// Play rock-paper-scissors against the computer.
#[derive(Parser)]
#[command(name = "rps")]
#[command(about = "Rock-paper-scissors with difficulty levels and a leaderboard", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON engine configuration; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting difficulty: easy, medium or hard
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Rounds per series
    #[arg(short, long)]
    rounds: Option<u32>,

    /// Seed for the easy strategy
    #[arg(long)]
    seed: Option<u64>,

    /// Start with sound muted
    #[arg(long)]
    mute: bool,

    /// Directory holding the leaderboard
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

impl Cli {
    fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&json)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => EngineConfig::default(),
        };

        if let Some(difficulty) = self.difficulty {
            config = config.with_difficulty(difficulty);
        }
        if let Some(rounds) = self.rounds {
            config = config.with_total_rounds(rounds);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.mute {
            config = config.with_sound(false);
        }
        Ok(config)
    }

    fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        directories::ProjectDirs::from("", "", "rps")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .context("no home directory to store the leaderboard in")
    }
}

/// Rings the terminal bell for round results.
struct BellAudio;

impl AudioPort for BellAudio {
    fn play(&mut self, cue: SoundCue) -> Result<(), AudioError> {
        if cue == SoundCue::MoveSubmitted {
            return Ok(());
        }
        let mut stderr = io::stderr();
        stderr
            .write_all(b"\x07")
            .and_then(|()| stderr.flush())
            .map_err(|e| AudioError::Blocked(e.to_string()))
    }
}

/// Prints events as they happen.
struct Announcer;

impl EventListener for Announcer {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::RoundResolved { record, player_score, computer_score } => {
                println!("{record}");
                println!("Player: {player_score}  Computer: {computer_score}");
            }
            GameEvent::DifficultyChanged { difficulty } => println!("Difficulty: {difficulty}"),
            GameEvent::SoundToggled { enabled } => {
                println!("{}", if *enabled { "Sounds enabled" } else { "Sounds muted" });
            }
            _ => {
                if let Some(text) = event.announcement() {
                    println!("\n*** {text} ***\n");
                }
            }
        }
    }
}

fn print_leaderboard<S: rps_engine::KeyValueStore>(engine: &GameEngine<S>) {
    println!("Leaderboard");
    if engine.leaderboard().is_empty() {
        println!("  (no games yet)");
    }
    for entry in engine.leaderboard().iter() {
        println!("  {entry}");
    }
}

/// `RUST_LOG` directives when set and valid, otherwise `warn`.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn print_help() {
    println!("Commands: rock | paper | scissors (r/p/s), difficulty <easy|medium|hard>, sound, board, quit");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.engine_config()?;
    let store = FileStore::new(cli.data_dir()?)?;

    let mut engine = GameEngine::new(config, store)?.with_audio(BellAudio);
    engine.subscribe(Announcer);

    println!("Rock, Paper, Scissors ({} difficulty)", engine.difficulty());
    print_help();

    let stdin = io::stdin();
    loop {
        let series = engine.series();
        print!("Round {} of {}> ", series.current_round, series.total_rounds());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (None, _) => continue,
            (Some("quit" | "exit" | "q"), _) => break,
            (Some("help" | "?"), _) => print_help(),
            (Some("board"), _) => print_leaderboard(&engine),
            (Some("sound"), _) => {
                engine.toggle_sound();
            }
            (Some("difficulty"), Some(level)) => match level.parse::<Difficulty>() {
                Ok(difficulty) => engine.set_difficulty(difficulty),
                Err(e) => println!("{e}"),
            },
            (Some("difficulty"), None) => println!("Difficulty: {}", engine.difficulty()),
            (Some(input), _) => match engine.submit_move(input) {
                Ok(report) => {
                    if report.series.is_some() {
                        print_leaderboard(&engine);
                    }
                }
                Err(e) => println!("{e}"),
            },
        }
    }

    Ok(())
}
