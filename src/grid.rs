use rand::Rng;

use crate::config::GridSize;
use crate::error::ConfigError;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The bounded playing field.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridWorld {
    size: GridSize,
}

impl GridWorld {
    /// Creates a world of `size` cells; see [`GridSize::check`] for the accepted range.
    pub fn new(size: GridSize) -> Result<Self, ConfigError> {
        size.check()?;
        Ok(Self { size })
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        i32::from(self.size.width)
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        i32::from(self.size.height)
    }

    /// Returns true when `cell` lies inside the grid.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width() && cell.y < self.height()
    }

    /// Draws a uniformly distributed cell. Occupancy is not considered.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell {
            x: rng.gen_range(0..self.width()),
            y: rng.gen_range(0..self.height()),
        }
    }

    /// Iterates every cell row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let (width, height) = (self.width(), self.height());
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell { x, y }))
    }
}
