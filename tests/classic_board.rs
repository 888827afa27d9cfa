use grid_snake::config::GameConfig;
use grid_snake::food::Food;
use grid_snake::game::{EndReason, GameState, GameStatus, TickOutcome};
use grid_snake::grid::Cell;
use grid_snake::input::{Direction, InputSnapshot, LogicalInput};
use grid_snake::snake::Snake;

fn classic(seed: u64) -> GameState {
    GameState::new_with_seed(GameConfig::default(), seed).expect("default config is valid")
}

#[test]
fn eating_next_to_the_head_grows_and_relocates_food() {
    let mut state = classic(1);
    state.snake = Snake::from_segments(vec![Cell::new(5, 5)], Some(Direction::Right));
    state.food = Food::new(Cell::new(6, 5));

    assert_eq!(state.advance(&InputSnapshot::empty()), TickOutcome::Ate);

    assert_eq!(
        state.body().collect::<Vec<_>>(),
        vec![Cell::new(6, 5), Cell::new(5, 5)]
    );
    assert_eq!(state.score(), 1);
    assert_ne!(state.food_cell(), Cell::new(6, 5));
    assert!(state.world().contains(state.food_cell()));
}

#[test]
fn leaving_the_left_edge_ends_the_game_without_committing_the_move() {
    let mut state = classic(2);
    state.snake = Snake::from_segments(
        vec![Cell::new(0, 0), Cell::new(1, 0)],
        Some(Direction::Left),
    );
    state.food = Food::new(Cell::new(10, 10));

    let outcome = state.advance(&InputSnapshot::empty());

    assert_eq!(outcome, TickOutcome::Ended(EndReason::WallCollision));
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(
        state.body().collect::<Vec<_>>(),
        vec![Cell::new(0, 0), Cell::new(1, 0)]
    );
    assert_eq!(state.score(), 0);
    assert_eq!(state.food_cell(), Cell::new(10, 10));
}

#[test]
fn reversal_request_keeps_heading_right() {
    let mut state = classic(3);
    state.snake = Snake::from_segments(vec![Cell::new(5, 5)], Some(Direction::Right));
    state.food = Food::new(Cell::new(20, 20));

    state.advance(&InputSnapshot::empty().with(LogicalInput::Direction(Direction::Left)));

    assert_eq!(state.snake.direction(), Some(Direction::Right));
    assert_eq!(state.snake.head(), Cell::new(6, 5));
}

#[test]
fn turning_into_the_body_is_fatal() {
    let mut state = classic(4);
    // Hook shape: moving Up from (2,2) lands on (2,1), a body segment.
    state.snake = Snake::from_segments(
        vec![
            Cell::new(2, 2),
            Cell::new(3, 2),
            Cell::new(3, 1),
            Cell::new(2, 1),
            Cell::new(1, 1),
        ],
        Some(Direction::Left),
    );
    state.food = Food::new(Cell::new(20, 20));

    let outcome =
        state.advance(&InputSnapshot::empty().with(LogicalInput::Direction(Direction::Up)));

    assert_eq!(outcome, TickOutcome::Ended(EndReason::SelfCollision));
    assert_eq!(state.score(), 0);
}
