use std::fs;
use std::path::Path;
use std::time::Duration;

use clap::ValueEnum;
use ratatui::style::Color;
use ratatui::symbols::border;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ConfigError};

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 32;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 32;

/// Largest accepted grid side, in cells.
pub const MAX_GRID_SIDE: u16 = 512;

/// Default simulation rate.
pub const DEFAULT_TICK_RATE_HZ: u32 = 10;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Rejects empty grids and grids beyond [`MAX_GRID_SIDE`].
    pub fn check(self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.width > MAX_GRID_SIDE || self.height > MAX_GRID_SIDE {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_GRID_SIDE,
            });
        }
        Ok(())
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

/// Where replacement food is allowed to appear.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FoodPlacement {
    /// Only cells not covered by the snake.
    #[default]
    AvoidSnake,
    /// Any cell of the grid, including ones under the body.
    Anywhere,
}

/// Immutable settings for one game session.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid: GridSize,
    pub tick_rate_hz: u32,
    pub food_placement: FoodPlacement,
    /// Ignore a same-tick 180° turn.
    pub reversal_guard: bool,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            food_placement: FoodPlacement::default(),
            reversal_guard: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads settings from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|source| AppError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks that the settings describe a playable session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.check()?;
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }

    /// Wall-clock time between two simulation ticks.
    ///
    /// # Panics
    ///
    /// Panics on a zero tick rate; call [`GameConfig::validate`] first.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz
    }
}

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Palette {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_title: Color,
    pub hud_score: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

pub const PALETTE: Palette = Palette {
    snake_head: Color::White,
    snake_body: Color::Gray,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::DarkGray,
    hud_title: Color::Green,
    hud_score: Color::White,
    menu_title: Color::Red,
    menu_footer: Color::DarkGray,
};

/// Terminal columns used to draw one grid cell, so cells look square.
pub const CELL_COLUMNS: u16 = 2;

/// Glyph for one painted grid cell.
pub const GLYPH_CELL: &str = "██";

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};
