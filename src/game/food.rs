use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use super::config::FoodRange;
use super::state::{Position, Snake};

/// Random draws before giving up and scanning for free cells
pub const MAX_RANDOM_ATTEMPTS: usize = 256;

/// Picks food cells that are never under the snake
pub struct FoodPlacer {
    rng: StdRng,
    board_size: usize,
    range: FoodRange,
}

impl FoodPlacer {
    pub fn new(board_size: usize, range: FoodRange) -> Self {
        Self::with_rng(board_size, range, StdRng::from_entropy())
    }

    /// Deterministic placement, for replays and tests
    pub fn with_seed(board_size: usize, range: FoodRange, seed: u64) -> Self {
        Self::with_rng(board_size, range, StdRng::seed_from_u64(seed))
    }

    fn with_rng(board_size: usize, range: FoodRange, rng: StdRng) -> Self {
        Self {
            rng,
            board_size,
            range,
        }
    }

    /// Pick a free cell inside the sampling range.
    ///
    /// Falls back to a scan once random draws are exhausted, first within the
    /// range and then over the whole board. Returns `None` only when the snake
    /// covers every cell.
    pub fn place_food(&mut self, snake: &Snake) -> Option<Position> {
        let side = self.range.side(self.board_size).min(self.board_size) as i32;

        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let pos = Position::new(self.rng.gen_range(0..side), self.rng.gen_range(0..side));
            if !snake.contains(pos) {
                return Some(pos);
            }
        }

        tracing::debug!(len = snake.len(), "random food draws exhausted, scanning");

        self.pick_free(snake, side)
            .or_else(|| self.pick_free(snake, self.board_size as i32))
    }

    fn pick_free(&mut self, snake: &Snake, side: i32) -> Option<Position> {
        let free: Vec<Position> = (0..side)
            .flat_map(|y| (0..side).map(move |x| Position::new(x, y)))
            .filter(|pos| !snake.contains(*pos))
            .collect();

        free.choose(&mut self.rng).copied()
    }
}
