use std::path::PathBuf;

use clap::{Parser, Subcommand};
use oxcade_engine::GameSeed;
use ratatui_runtime::{Runtime, Screen, ScreenStack};
use tracing::level_filters::LevelFilter;

use crate::screens::{BlocksScreen, GameOptions, HighScores, MenuScreen, SnakeScreen};

mod logging;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Write logs to this file (the terminal is used by the game)
    #[clap(long, global = true)]
    log_file: Option<PathBuf>,
    /// Maximum level of the written logs
    #[clap(long, global = true, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,
    /// Game to start; opens the game menu when omitted
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play the falling-block game
    Blocks(#[clap(flatten)] GameArg),
    /// Play the snake game
    Snake(#[clap(flatten)] GameArg),
}

#[derive(Debug, Clone, clap::Args)]
struct GameArg {
    /// Seed of the random source, as 32 hex digits
    #[clap(long)]
    seed: Option<GameSeed>,
    /// Frames per second of the game loop
    #[clap(long, default_value_t = GameOptions::DEFAULT_FPS, value_parser = parse_fps)]
    fps: f64,
}

impl GameArg {
    fn options(&self) -> GameOptions {
        GameOptions {
            seed: self.seed,
            fps: self.fps,
        }
    }
}

fn parse_fps(s: &str) -> Result<f64, String> {
    let fps = s.parse::<f64>().map_err(|e| e.to_string())?;
    if !fps.is_finite() || fps <= 0.0 {
        return Err(format!("expected a positive frame rate, got {s}"));
    }
    Ok(fps)
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    logging::init(args.log_file.as_deref(), args.log_level)?;

    let high_scores = HighScores::default();
    let initial: Box<dyn Screen> = match &args.mode {
        None => Box::new(MenuScreen::new(GameOptions::default(), high_scores)),
        Some(Mode::Blocks(arg)) => Box::new(BlocksScreen::new(&arg.options(), high_scores)),
        Some(Mode::Snake(arg)) => Box::new(SnakeScreen::new(&arg.options(), high_scores)),
    };
    tracing::info!(mode = ?args.mode, "starting");

    let mut app = ScreenStack::new(initial);
    Runtime::new().run(&mut app)?;

    tracing::info!("exiting");
    Ok(())
}
