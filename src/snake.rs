use std::collections::VecDeque;

use crate::grid::Cell;
use crate::input::{Direction, InputSnapshot, direction_change_is_valid};

/// Snake body, heading and score.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Option<Direction>,
    score: u32,
}

impl Snake {
    /// Creates a motionless one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Cell) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            direction: None,
            score: 0,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Option<Direction>) -> Self {
        assert!(
            !segments.is_empty(),
            "snake body must always contain at least one segment"
        );

        Self {
            body: VecDeque::from(segments),
            direction,
            score: 0,
        }
    }

    /// Picks the first pressed direction in priority order that the guard allows.
    ///
    /// With `reversal_guard` off, a pressed opposite direction is taken like any other.
    pub fn steer(&mut self, input: &InputSnapshot, reversal_guard: bool) {
        let current = self.direction;
        let next = input
            .directions()
            .find(|next| !reversal_guard || direction_change_is_valid(current, *next));

        if let Some(next) = next {
            self.direction = Some(next);
        }
    }

    /// Returns the head position for the next movement tick, if the snake is moving.
    #[must_use]
    pub fn next_head(&self) -> Option<Cell> {
        self.direction.map(|direction| self.head().step(direction))
    }

    /// Returns true when moving the head onto `cell` would hit the body.
    ///
    /// The tail only counts when it stays in place, i.e. when growing.
    #[must_use]
    pub fn would_bite(&self, cell: Cell, grow: bool) -> bool {
        let kept = if grow {
            self.body.len()
        } else {
            self.body.len() - 1
        };
        self.body.iter().take(kept).any(|segment| *segment == cell)
    }

    /// Pushes `head` to the front; the tail is dropped unless `grow` is set.
    pub fn advance(&mut self, head: Cell, grow: bool) {
        self.body.push_front(head);
        if grow {
            self.score += 1;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Cell {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction, `None` before the first turn.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
