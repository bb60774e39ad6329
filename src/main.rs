//! Ptero Run entry point
//!
//! Headless driver for the simulation: runs sessions with the autopilot (or
//! idle controls), prints results and maintains a local leaderboard.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};

use ptero_run::consts::SIM_DT;
use ptero_run::platform::FrameClock;
use ptero_run::sim::{GameSession, Intents, SimEvent, autopilot};
use ptero_run::{DifficultyPreset, HighScores, Tuning};

#[derive(Parser)]
#[command(name = "ptero-run", about = "Pterodactyl rock-dodging simulation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a run headlessly
    Run {
        /// Random seed for rock placement
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Maximum simulated seconds before stopping
        #[arg(long, default_value_t = 300.0)]
        seconds: f32,

        /// Simulation rate in ticks per second
        #[arg(long, default_value_t = 60)]
        fps: u32,

        /// Let the autopilot fly (otherwise the flyer just glides)
        #[arg(long)]
        autopilot: bool,

        /// Pace ticks with the wall clock instead of a fixed step
        #[arg(long)]
        realtime: bool,

        /// Difficulty preset (easy, normal, hard)
        #[arg(long, default_value = "normal")]
        preset: String,

        /// JSON tuning file (overrides the preset)
        #[arg(long)]
        tuning: Option<PathBuf>,

        /// Write the final snapshot as JSON
        #[arg(long)]
        output: Option<PathBuf>,

        /// Leaderboard file to record the run in
        #[arg(long)]
        scores: Option<PathBuf>,
    },

    /// Print a leaderboard file
    Scores {
        path: PathBuf,
    },

    /// Print the stock tuning as JSON
    Tuning {
        /// Difficulty preset (easy, normal, hard)
        #[arg(long, default_value = "normal")]
        preset: String,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run {
            seed,
            seconds,
            fps,
            autopilot,
            realtime,
            preset,
            tuning,
            output,
            scores,
        } => load_tuning(&preset, tuning.as_deref()).and_then(|tuning| {
            run(RunOptions {
                seed,
                seconds,
                fps,
                autopilot,
                realtime,
                tuning,
                output,
                scores,
            })
        }),
        Commands::Scores { path } => show_scores(&path),
        Commands::Tuning { preset } => parse_preset(&preset).and_then(|preset| {
            let json = Tuning::from_preset(preset)
                .to_json()
                .map_err(|e| e.to_string())?;
            println!("{}", json);
            Ok(())
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct RunOptions {
    seed: u64,
    seconds: f32,
    fps: u32,
    autopilot: bool,
    realtime: bool,
    tuning: Tuning,
    output: Option<PathBuf>,
    scores: Option<PathBuf>,
}

fn parse_preset(name: &str) -> Result<DifficultyPreset, String> {
    DifficultyPreset::from_str(name).ok_or_else(|| format!("Unknown preset: {}", name))
}

fn load_tuning(preset: &str, path: Option<&Path>) -> Result<Tuning, String> {
    let preset = parse_preset(preset)?;
    let Some(path) = path else {
        return Ok(Tuning::from_preset(preset));
    };

    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    match Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path.display());
            Ok(tuning)
        }
        Err(e) => {
            log::warn!("{} rejected ({}), using {} preset", path.display(), e, preset.as_str());
            Ok(Tuning::from_preset(preset))
        }
    }
}

fn run(opts: RunOptions) -> Result<(), String> {
    let fixed_dt = if opts.fps == 0 { SIM_DT } else { 1.0 / opts.fps as f32 };
    let mut session = GameSession::with_tuning(&opts.tuning, opts.seed);
    let mut clock = FrameClock::new();

    log::info!(
        "Run starting: seed {}, {} Hz, autopilot {}",
        opts.seed,
        opts.fps,
        opts.autopilot
    );

    let mut spawned = 0usize;
    while !session.is_game_over() && session.elapsed() < f64::from(opts.seconds) {
        let intents = if opts.autopilot {
            autopilot(&session)
        } else {
            Intents::default()
        };
        let dt = if opts.realtime {
            std::thread::sleep(std::time::Duration::from_secs_f32(fixed_dt));
            clock.delta()
        } else {
            fixed_dt
        };
        session.tick(&intents, dt);

        for event in session.drain_events() {
            match event {
                SimEvent::ObstacleSpawned { size } => {
                    spawned += 1;
                    log::debug!("Rock {} spawned (size {:.2})", spawned, size);
                }
                SimEvent::ScoreIncreased { score } if score % 30 == 0 => {
                    log::info!("Score {}", score);
                }
                _ => {}
            }
        }
    }

    let snapshot = session.snapshot();
    println!(
        "{} after {:.1}s: score {}, {} rocks spawned, {} live",
        if session.is_game_over() { "Crashed" } else { "Survived" },
        snapshot.elapsed,
        snapshot.score,
        spawned,
        snapshot.obstacles.len()
    );

    if let Some(path) = &opts.output {
        let json = serde_json::to_string_pretty(&snapshot).map_err(|e| e.to_string())?;
        std::fs::write(path, json)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        log::info!("Snapshot written to {}", path.display());
    }

    if let Some(path) = &opts.scores {
        let mut scores = HighScores::load(path).map_err(|e| e.to_string())?;
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0);
        match scores.add_score(snapshot.score, snapshot.elapsed, now_ms) {
            Some(rank) => {
                println!("New high score! Rank #{}", rank);
                scores.save(path).map_err(|e| e.to_string())?;
            }
            None => println!("No high score this time"),
        }
    }

    Ok(())
}

fn show_scores(path: &Path) -> Result<(), String> {
    let scores = HighScores::load(path).map_err(|e| e.to_string())?;
    if scores.is_empty() {
        println!("No high scores yet");
        return Ok(());
    }
    for (i, entry) in scores.entries.iter().enumerate() {
        println!("{:>2}. {:>6}  ({:.1}s)", i + 1, entry.score, entry.survived_secs);
    }
    Ok(())
}
