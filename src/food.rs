use rand::Rng;

use crate::config::FoodPlacement;
use crate::grid::{Cell, GridWorld};
use crate::snake::Snake;

/// The single food item on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub cell: Cell,
}

impl Food {
    #[must_use]
    pub fn new(cell: Cell) -> Self {
        Self { cell }
    }

    /// Spawns food according to `placement`.
    ///
    /// Returns `None` only for [`FoodPlacement::AvoidSnake`] when the snake covers every cell.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        world: &GridWorld,
        snake: &Snake,
        placement: FoodPlacement,
    ) -> Option<Self> {
        let cell = match placement {
            FoodPlacement::Anywhere => world.random_cell(rng),
            FoodPlacement::AvoidSnake => free_cell(rng, world, snake)?,
        };
        Some(Self::new(cell))
    }
}

/// Random draws tried before falling back to a full scan of free cells.
const SAMPLE_ATTEMPTS: usize = 32;

/// Picks a uniformly random cell not currently occupied by the snake.
///
/// Sparse boards are served by rejection sampling; a nearly full board, or a
/// run of unlucky draws, scans the grid instead.
#[must_use]
pub fn free_cell<R: Rng + ?Sized>(rng: &mut R, world: &GridWorld, snake: &Snake) -> Option<Cell> {
    let total = world.size().total_cells();
    if snake.len() >= total {
        return None;
    }

    if snake.len() * 2 <= total {
        for _ in 0..SAMPLE_ATTEMPTS {
            let cell = world.random_cell(rng);
            if !snake.occupies(cell) {
                return Some(cell);
            }
        }
    }

    let candidates: Vec<Cell> = world.cells().filter(|cell| !snake.occupies(*cell)).collect();

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{Food, free_cell};
    use crate::config::{FoodPlacement, GridSize, MAX_GRID_SIDE};
    use crate::grid::{Cell, GridWorld};
    use crate::input::Direction;
    use crate::snake::Snake;

    fn world(width: u16, height: u16) -> GridWorld {
        GridWorld::new(GridSize { width, height }).expect("test grid should be valid")
    }

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let world = world(8, 6);
        let snake = Snake::from_segments(
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)],
            Some(Direction::Left),
        );

        for _ in 0..100 {
            let food = Food::spawn(&mut rng, &world, &snake, FoodPlacement::AvoidSnake)
                .expect("board has free cells");
            assert!(!snake.occupies(food.cell));
            assert!(world.contains(food.cell));
        }
    }

    #[test]
    fn free_cell_finds_the_last_gap() {
        let mut rng = StdRng::seed_from_u64(1);
        let world = world(2, 2);
        let snake = Snake::from_segments(
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)],
            Some(Direction::Left),
        );

        assert_eq!(free_cell(&mut rng, &world, &snake), Some(Cell::new(0, 1)));
    }

    #[test]
    fn largest_board_spawns_without_scanning_every_cell() {
        let mut rng = StdRng::seed_from_u64(21);
        let world = world(MAX_GRID_SIDE, MAX_GRID_SIDE);
        let snake = Snake::from_segments(
            vec![Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)],
            Some(Direction::Right),
        );

        for _ in 0..1_000 {
            let cell = free_cell(&mut rng, &world, &snake).expect("board is mostly empty");
            assert!(world.contains(cell));
            assert!(!snake.occupies(cell));
        }
    }

    #[test]
    fn nearly_full_board_still_finds_the_gap() {
        let mut rng = StdRng::seed_from_u64(2);
        let world = world(3, 3);
        let gap = Cell::new(1, 1);
        let body: Vec<Cell> = world.cells().filter(|cell| *cell != gap).collect();
        let snake = Snake::from_segments(body, None);

        for _ in 0..20 {
            assert_eq!(free_cell(&mut rng, &world, &snake), Some(gap));
        }
    }

    #[test]
    fn full_board_has_no_free_cell() {
        let mut rng = StdRng::seed_from_u64(1);
        let world = world(2, 1);
        let snake = Snake::from_segments(vec![Cell::new(0, 0), Cell::new(1, 0)], None);

        assert_eq!(
            Food::spawn(&mut rng, &world, &snake, FoodPlacement::AvoidSnake),
            None
        );
        assert!(Food::spawn(&mut rng, &world, &snake, FoodPlacement::Anywhere).is_some());
    }

    #[test]
    fn anywhere_placement_can_land_on_the_body() {
        let mut rng = StdRng::seed_from_u64(5);
        let world = world(2, 1);
        let snake = Snake::new(Cell::new(0, 0));

        let landed_on_body = (0..200).any(|_| {
            Food::spawn(&mut rng, &world, &snake, FoodPlacement::Anywhere)
                .is_some_and(|food| snake.occupies(food.cell))
        });

        assert!(landed_on_body);
    }
}
