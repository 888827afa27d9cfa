use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{FoodPlacement, GameConfig, GridSize};
use crate::error::ConfigError;
use crate::food::Food;
use crate::grid::{Cell, GridWorld};
use crate::input::InputSnapshot;
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Why the last round ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell, so no food can be placed.
    BoardFilled,
}

/// What a single call to [`GameState::advance`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// Playing, but the snake has not been given a direction yet.
    Idle,
    Moved,
    Ate,
    Ended(EndReason),
    /// Game over, restart not requested.
    Waiting,
    Restarted,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub status: GameStatus,
    pub end_reason: Option<EndReason>,
    pub tick_count: u64,
    world: GridWorld,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Starts a session. The RNG is seeded once, from `config.seed` or OS entropy.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let world = GridWorld::new(config.grid)?;
        let (snake, food) = fresh_round(&mut rng, &world, config.food_placement);

        Ok(Self {
            snake,
            food,
            status: GameStatus::Playing,
            end_reason: None,
            tick_count: 0,
            world,
            config,
            rng,
        })
    }

    /// Advances the simulation by one tick using the inputs held during it.
    pub fn advance(&mut self, input: &InputSnapshot) -> TickOutcome {
        match self.status {
            GameStatus::Playing => self.play(input),
            GameStatus::GameOver if input.confirm() => {
                self.reset();
                TickOutcome::Restarted
            }
            GameStatus::GameOver => TickOutcome::Waiting,
        }
    }

    /// Replaces snake and food with a fresh round and resumes play.
    pub fn reset(&mut self) {
        let (snake, food) = fresh_round(&mut self.rng, &self.world, self.config.food_placement);
        info!(
            "new round: snake at ({}, {}), food at ({}, {})",
            snake.head().x,
            snake.head().y,
            food.cell.x,
            food.cell.y
        );

        self.snake = snake;
        self.food = food;
        self.status = GameStatus::Playing;
        self.end_reason = None;
        self.tick_count = 0;
    }

    fn play(&mut self, input: &InputSnapshot) -> TickOutcome {
        self.tick_count += 1;
        self.snake.steer(input, self.config.reversal_guard);

        let Some(new_head) = self.snake.next_head() else {
            return TickOutcome::Idle;
        };
        let grow = new_head == self.food.cell;

        // A fatal move is not committed: body, score and food stay as they were.
        if !self.world.contains(new_head) {
            return self.end(EndReason::WallCollision);
        }
        if self.snake.would_bite(new_head, grow) {
            return self.end(EndReason::SelfCollision);
        }

        self.snake.advance(new_head, grow);
        debug_assert!(!self.snake.head_overlaps_body());

        if !grow {
            return TickOutcome::Moved;
        }

        debug!(
            "food eaten at ({}, {}), score {}",
            new_head.x,
            new_head.y,
            self.snake.score()
        );

        match Food::spawn(
            &mut self.rng,
            &self.world,
            &self.snake,
            self.config.food_placement,
        ) {
            Some(food) => {
                debug!("food relocated to ({}, {})", food.cell.x, food.cell.y);
                self.food = food;
                TickOutcome::Ate
            }
            None => self.end(EndReason::BoardFilled),
        }
    }

    fn end(&mut self, reason: EndReason) -> TickOutcome {
        info!(
            "game over after {} ticks: {reason:?}, score {}, length {}",
            self.tick_count,
            self.snake.score(),
            self.snake.len()
        );
        self.status = GameStatus::GameOver;
        self.end_reason = Some(reason);
        TickOutcome::Ended(reason)
    }

    /// Body cells from head to tail.
    pub fn body(&self) -> impl Iterator<Item = Cell> + '_ {
        self.snake.segments().copied()
    }

    #[must_use]
    pub fn food_cell(&self) -> Cell {
        self.food.cell
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.snake.score()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.world.size()
    }

    #[must_use]
    pub fn world(&self) -> &GridWorld {
        &self.world
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

/// A one-cell snake at a random cell plus food. On a board too small to hold
/// both, the food shares the snake's cell.
fn fresh_round(rng: &mut StdRng, world: &GridWorld, placement: FoodPlacement) -> (Snake, Food) {
    let snake = Snake::new(world.random_cell(rng));
    let food = Food::spawn(rng, world, &snake, placement).unwrap_or(Food::new(snake.head()));
    (snake, food)
}
