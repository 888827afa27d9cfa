use grid_snake::config::{GameConfig, GridSize};
use grid_snake::food::Food;
use grid_snake::game::{EndReason, GameState, GameStatus, TickOutcome};
use grid_snake::grid::Cell;
use grid_snake::input::{Direction, InputSnapshot, LogicalInput};
use grid_snake::snake::Snake;

fn press(direction: Direction) -> InputSnapshot {
    InputSnapshot::empty().with(LogicalInput::Direction(direction))
}

fn small_config() -> GameConfig {
    GameConfig {
        grid: GridSize {
            width: 6,
            height: 4,
        },
        ..GameConfig::default()
    }
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut state = GameState::new_with_seed(small_config(), 42).expect("valid config");

    state.snake = Snake::new(Cell::new(1, 1));
    state.food = Food::new(Cell::new(2, 1));

    // Motionless until the first direction arrives.
    assert_eq!(state.advance(&InputSnapshot::empty()), TickOutcome::Idle);
    assert_eq!(state.snake.head(), Cell::new(1, 1));

    assert_eq!(state.advance(&press(Direction::Right)), TickOutcome::Ate);
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.score(), 1);
    assert_eq!(state.snake.len(), 2);
    assert_eq!(state.snake.head(), Cell::new(2, 1));

    state.food = Food::new(Cell::new(5, 3));
    assert_eq!(state.advance(&press(Direction::Up)), TickOutcome::Moved);
    assert_eq!(state.snake.head(), Cell::new(2, 0));
    assert_eq!(state.snake.tail(), Cell::new(2, 1));

    let outcome = state.advance(&InputSnapshot::empty());
    assert_eq!(outcome, TickOutcome::Ended(EndReason::WallCollision));
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.score(), 1);
    assert_eq!(state.snake.head(), Cell::new(2, 0));
}

#[test]
fn same_seed_replays_the_same_game() {
    let inputs = [
        press(Direction::Right),
        InputSnapshot::empty(),
        press(Direction::Down),
        InputSnapshot::empty(),
        press(Direction::Left),
        InputSnapshot::empty().with(LogicalInput::Confirm),
        press(Direction::Up),
    ];

    let play = |seed| {
        let mut state = GameState::new_with_seed(small_config(), seed).expect("valid config");
        let mut trace = vec![(state.body().collect::<Vec<_>>(), state.food_cell())];
        for _ in 0..5 {
            for input in &inputs {
                state.advance(input);
                trace.push((state.body().collect(), state.food_cell()));
            }
        }
        trace
    };

    assert_eq!(play(99), play(99));
}

#[test]
fn restart_starts_a_fresh_round_inside_the_grid() {
    let mut state = GameState::new_with_seed(small_config(), 5).expect("valid config");
    state.snake = Snake::from_segments(
        vec![Cell::new(0, 2), Cell::new(1, 2), Cell::new(2, 2)],
        Some(Direction::Left),
    );
    state.food = Food::new(Cell::new(5, 0));

    state.advance(&InputSnapshot::empty());
    assert!(state.is_game_over());

    assert_eq!(state.advance(&InputSnapshot::empty()), TickOutcome::Waiting);
    assert_eq!(
        state.advance(&InputSnapshot::empty().with(LogicalInput::Confirm)),
        TickOutcome::Restarted
    );

    assert!(!state.is_game_over());
    assert_eq!(state.snake.len(), 1);
    assert_eq!(state.score(), 0);
    assert!(state.world().contains(state.snake.head()));
    assert!(state.world().contains(state.food_cell()));
}
