use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Whether the cell lies on a square board of the given size
    pub fn is_on_board(&self, board_size: usize) -> bool {
        let size = board_size as i32;
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
}

impl Snake {
    /// A one-cell snake
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    #[cfg(test)]
    pub fn from_body(body: Vec<Position>) -> Self {
        assert!(!body.is_empty(), "snake needs at least one segment");
        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Prepend `new_head`; the tail stays in place only on a growth step
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Whether ticks are currently being applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayState {
    #[default]
    Paused,
    Running,
}

/// Mutable state of the game in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    /// Direction the next tick will use
    pub direction: Direction,
    /// Direction the most recent tick used
    pub last_direction: Direction,
    pub score: u32,
    pub speed_ms: u64,
    pub play_state: PlayState,
}

impl GameState {
    /// Create a new paused game state heading right
    pub fn new(snake: Snake, food: Position, speed_ms: u64) -> Self {
        Self {
            snake,
            food,
            direction: Direction::Right,
            last_direction: Direction::Right,
            score: 0,
            speed_ms,
            play_state: PlayState::Paused,
        }
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.contains(pos)
    }
}

/// Read-only copy of everything the render layer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub snake: Vec<Position>,
    pub food: Position,
    pub direction: Direction,
    pub score: u32,
    pub best_score: u32,
    pub speed_ms: u64,
    pub play_state: PlayState,
    pub board_size: usize,
}

impl GameSnapshot {
    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn is_running(&self) -> bool {
        self.play_state == PlayState::Running
    }
}
