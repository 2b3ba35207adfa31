use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use super::action::KeyLayout;
use super::state::Position;

/// Side length of the square board
pub const BOARD_SIZE: usize = 30;

/// Where new food may be sampled from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FoodRange {
    /// Any cell on the board
    #[default]
    FullBoard,
    /// Only the `n`×`n` corner starting at (0, 0)
    Legacy(usize),
}

impl FoodRange {
    /// The classic 20×20 corner
    pub const LEGACY_SIZE: usize = 20;

    /// Side length of the sampling square on a board of `board_size`
    pub fn side(&self, board_size: usize) -> usize {
        match self {
            FoodRange::FullBoard => board_size,
            FoodRange::Legacy(n) => *n,
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board
    pub board_size: usize,
    /// Where the one-cell snake starts
    pub initial_head: Position,
    /// Food cell of a fresh process
    pub initial_food: Position,

    // Speed ramp
    /// Milliseconds per tick at the start of a game
    pub initial_speed_ms: u64,
    /// How much faster each threshold makes the game
    pub speed_step_ms: u64,
    /// Fastest allowed tick
    pub min_speed_ms: u64,
    /// Speed up whenever the score is a positive multiple of this
    pub speed_up_every: u32,

    /// Points per food eaten
    pub food_points: u32,
    pub food_range: FoodRange,
    pub key_layout: KeyLayout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            initial_head: Position::new(10, 10),
            initial_food: Position::new(3, 3),
            initial_speed_ms: 100,
            speed_step_ms: 10,
            min_speed_ms: 50,
            speed_up_every: 50,
            food_points: 10,
            food_range: FoodRange::FullBoard,
            key_layout: KeyLayout::Wasd,
        }
    }
}

impl GameConfig {
    /// Speed after a score change to `score`
    pub fn speed_after_score(&self, current_ms: u64, score: u32) -> u64 {
        if score > 0 && score % self.speed_up_every == 0 {
            current_ms
                .saturating_sub(self.speed_step_ms)
                .max(self.min_speed_ms)
        } else {
            current_ms
        }
    }

    /// Check that the configuration can produce a playable game
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            bail!("board_size must be at least 1");
        }

        if !self.initial_head.is_on_board(self.board_size) {
            bail!(
                "initial_head {:?} is outside a {}x{} board",
                self.initial_head,
                self.board_size,
                self.board_size
            );
        }

        if !self.initial_food.is_on_board(self.board_size) {
            bail!(
                "initial_food {:?} is outside a {}x{} board",
                self.initial_food,
                self.board_size,
                self.board_size
            );
        }

        if self.initial_food == self.initial_head {
            bail!("initial_food cannot start under the snake");
        }

        if self.min_speed_ms == 0 {
            bail!("min_speed_ms must be positive");
        }

        if self.min_speed_ms > self.initial_speed_ms {
            bail!(
                "min_speed_ms ({}) cannot exceed initial_speed_ms ({})",
                self.min_speed_ms,
                self.initial_speed_ms
            );
        }

        if self.speed_up_every == 0 {
            bail!("speed_up_every must be at least 1");
        }

        if self.food_points == 0 {
            bail!("food_points must be at least 1");
        }

        let side = self.food_range.side(self.board_size);
        if side == 0 || side > self.board_size {
            bail!(
                "food range {} must be between 1 and the board size {}",
                side,
                self.board_size
            );
        }

        Ok(())
    }
}
