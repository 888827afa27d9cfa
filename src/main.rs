use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use grid_snake::config::{FoodPlacement, GameConfig, GridSize};
use grid_snake::error::AppError;
use grid_snake::game::{GameState, TickOutcome};
use grid_snake::input::InputHandler;
use grid_snake::terminal_runtime::TerminalSession;
use log::{LevelFilter, debug, info};
use simplelog::WriteLogger;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file with game settings; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Simulation ticks per second.
    #[arg(long = "tick-rate")]
    tick_rate: Option<u32>,

    /// Seed for reproducible food and spawn positions.
    #[arg(long)]
    seed: Option<u64>,

    /// Where new food may appear.
    #[arg(long = "food-placement", value_enum)]
    food_placement: Option<FoodPlacement>,

    /// Allow turning straight back into the snake's own neck.
    #[arg(long = "no-reversal-guard")]
    no_reversal_guard: bool,

    /// Write debug logs to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig, AppError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        config.grid = GridSize {
            width: self.width.unwrap_or(config.grid.width),
            height: self.height.unwrap_or(config.grid.height),
        };
        if let Some(tick_rate) = self.tick_rate {
            config.tick_rate_hz = tick_rate;
        }
        if let Some(food_placement) = self.food_placement {
            config.food_placement = food_placement;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.no_reversal_guard {
            config.reversal_guard = false;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), File::create(path)?)?;
    }

    let config = cli.game_config()?;
    info!("starting with {config:?}");

    let state = GameState::new(config)?;
    let mut session = TerminalSession::enter()?;
    run(&mut session, state)
}

fn run(session: &mut TerminalSession, mut state: GameState) -> Result<(), AppError> {
    let mut input = InputHandler::new();
    let interval = state.config().tick_interval();
    let mut next_tick = Instant::now() + interval;

    loop {
        session.draw(&state)?;

        if input.collect_until(next_tick)? {
            info!("quit requested at score {}", state.score());
            return Ok(());
        }

        let snapshot = input.take_snapshot();
        // Hold the simulation while part of the board would be off screen.
        if !session.fits(&state)? {
            next_tick = Instant::now() + interval;
            continue;
        }

        match state.advance(&snapshot) {
            TickOutcome::Idle | TickOutcome::Moved | TickOutcome::Waiting => {}
            outcome => debug!("tick {}: {outcome:?}", state.tick_count),
        }

        // Skip missed ticks rather than bursting to catch up.
        next_tick += interval;
        let now = Instant::now();
        if next_tick < now {
            next_tick = now + interval;
        }
    }
}
