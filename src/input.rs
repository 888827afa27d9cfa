use std::io;
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Order in which simultaneously pressed directions are considered.
    pub const PRIORITY: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit `(dx, dy)` step, with y growing downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Option<Direction>, next: Direction) -> bool {
    current.is_none_or(|current| next != current.opposite())
}

/// Logical inputs the simulation understands.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum LogicalInput {
    Direction(Direction),
    Confirm,
}

/// Inputs held during one tick. Pressing the same input twice is the same as once.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct InputSnapshot {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    confirm: bool,
}

impl InputSnapshot {
    /// Snapshot with nothing pressed.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a copy with `input` also pressed.
    #[must_use]
    pub fn with(mut self, input: LogicalInput) -> Self {
        self.press(input);
        self
    }

    pub fn press(&mut self, input: LogicalInput) {
        *self.slot_mut(input) = true;
    }

    #[must_use]
    pub fn is_pressed(&self, input: LogicalInput) -> bool {
        match input {
            LogicalInput::Direction(Direction::Up) => self.up,
            LogicalInput::Direction(Direction::Down) => self.down,
            LogicalInput::Direction(Direction::Left) => self.left,
            LogicalInput::Direction(Direction::Right) => self.right,
            LogicalInput::Confirm => self.confirm,
        }
    }

    #[must_use]
    pub fn confirm(&self) -> bool {
        self.confirm
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Pressed directions in priority order.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::PRIORITY
            .into_iter()
            .filter(|direction| self.is_pressed(LogicalInput::Direction(*direction)))
    }

    fn slot_mut(&mut self, input: LogicalInput) -> &mut bool {
        match input {
            LogicalInput::Direction(Direction::Up) => &mut self.up,
            LogicalInput::Direction(Direction::Down) => &mut self.down,
            LogicalInput::Direction(Direction::Left) => &mut self.left,
            LogicalInput::Direction(Direction::Right) => &mut self.right,
            LogicalInput::Confirm => &mut self.confirm,
        }
    }
}

/// Keyboard intent decoded from a terminal key event.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KeyAction {
    Press(LogicalInput),
    Quit,
}

/// Maps one key event to a game action, ignoring unbound keys and releases.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyAction::Quit);
    }

    let direction = |direction| Some(KeyAction::Press(LogicalInput::Direction(direction)));
    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => direction(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyAction::Press(LogicalInput::Confirm)),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(KeyAction::Quit),
        _ => None,
    }
}

/// Collects terminal key presses between ticks into one snapshot.
#[derive(Debug, Default)]
pub struct InputHandler {
    pending: InputSnapshot,
}

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads key events until `deadline`. Returns `Ok(true)` when quit was requested.
    pub fn collect_until(&mut self, deadline: Instant) -> io::Result<bool> {
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                return Ok(false);
            }

            let Event::Key(key) = event::read()? else {
                continue;
            };

            match map_key(key) {
                Some(KeyAction::Quit) => return Ok(true),
                Some(KeyAction::Press(input)) => self.pending.press(input),
                None => {}
            }
        }
    }

    /// Hands out the inputs gathered since the previous call and starts a fresh snapshot.
    pub fn take_snapshot(&mut self) -> InputSnapshot {
        std::mem::take(&mut self.pending)
    }
}
