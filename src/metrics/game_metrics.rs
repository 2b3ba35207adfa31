use std::time::{Duration, Instant};

use crate::game::{CollisionType, StepResult};

/// How the previous game ended, kept for the game-over banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverSummary {
    pub collision: CollisionType,
    pub score: u32,
    pub new_record: bool,
}

/// Per-session numbers shown next to the board
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub games_played: u32,
    pub food_eaten: u32,
    pub last_game: Option<GameOverSummary>,
    running: bool,
    in_game: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            games_played: 0,
            food_eaten: 0,
            last_game: None,
            running: false,
            in_game: false,
        }
    }

    /// Refresh the clock; it stands still between games
    pub fn update(&mut self) {
        if self.running {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.in_game = true;
        self.last_game = None;
        // resuming from a pause keeps the time already played
        let now = Instant::now();
        self.start_time = now.checked_sub(self.elapsed_time).unwrap_or(now);
    }

    pub fn on_pause(&mut self) {
        self.update();
        self.running = false;
    }

    pub fn on_step(&mut self, result: &StepResult) {
        if result.ate_food {
            self.food_eaten += 1;
        }

        if let Some(collision) = result.collision {
            self.on_game_over(GameOverSummary {
                collision,
                score: result.score,
                new_record: result.new_record,
            });
        }
    }

    fn on_game_over(&mut self, summary: GameOverSummary) {
        self.games_played += 1;
        self.last_game = Some(summary);
        self.running = false;
        self.in_game = false;
        self.elapsed_time = Duration::ZERO;
        self.food_eaten = 0;
    }

    /// A game has been started and has not ended yet, paused or not
    pub fn is_game_in_progress(&self) -> bool {
        self.in_game
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
