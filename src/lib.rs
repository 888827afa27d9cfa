//! Classic grid Snake: a pure tick-driven simulation core plus a thin
//! ratatui/crossterm front end.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
