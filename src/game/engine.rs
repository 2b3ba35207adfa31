use anyhow::{Context, Result};
use std::time::Duration;

use super::{
    action::{DirectionController, RawInput},
    collision::detect_collision,
    config::GameConfig,
    food::FoodPlacer,
    state::{CollisionType, GameSnapshot, GameState, PlayState, Snake},
};
use crate::store::ScoreStore;

/// Result of a single tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionType>,
    /// Score at the end of the tick, before any game-over reset
    pub score: u32,
    /// Whether a collision this tick set a new best score
    pub new_record: bool,
}

impl StepResult {
    pub fn is_game_over(&self) -> bool {
        self.collision.is_some()
    }
}

/// The game state machine.
///
/// Owns the game in progress, the best score and where it is persisted. The
/// front end only calls [`start`](Self::start), [`pause`](Self::pause),
/// [`set_direction`](Self::set_direction) and [`tick`](Self::tick), and reads
/// back a [`GameSnapshot`].
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    best_score: u32,
    food: FoodPlacer,
    controller: DirectionController,
    store: Box<dyn ScoreStore>,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    ///
    /// Fails if the configuration does not pass [`GameConfig::validate`].
    pub fn new(config: GameConfig, store: Box<dyn ScoreStore>) -> Result<Self> {
        config.validate().context("Invalid game configuration")?;
        let food = FoodPlacer::new(config.board_size, config.food_range);
        Ok(Self::with_food_placer(config, store, food))
    }

    /// Same as [`new`](Self::new) but with reproducible food placement
    pub fn with_seed(config: GameConfig, store: Box<dyn ScoreStore>, seed: u64) -> Result<Self> {
        config.validate().context("Invalid game configuration")?;
        let food = FoodPlacer::with_seed(config.board_size, config.food_range, seed);
        Ok(Self::with_food_placer(config, store, food))
    }

    fn with_food_placer(config: GameConfig, store: Box<dyn ScoreStore>, food: FoodPlacer) -> Self {
        let best_score = store.load();
        let state = GameState::new(
            Snake::new(config.initial_head),
            config.initial_food,
            config.initial_speed_ms,
        );

        tracing::debug!(best_score, "engine ready");

        Self {
            controller: DirectionController::new(config.key_layout),
            config,
            state,
            best_score,
            food,
            store,
        }
    }

    /// Leave the paused state. Does nothing if already running.
    pub fn start(&mut self) {
        if self.state.play_state == PlayState::Paused {
            self.state.play_state = PlayState::Running;
            tracing::info!(score = self.state.score, "game running");
        }
    }

    /// Stop applying ticks without resetting anything
    pub fn pause(&mut self) {
        if self.state.play_state == PlayState::Running {
            self.state.play_state = PlayState::Paused;
            tracing::info!(score = self.state.score, "game paused");
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.state.play_state {
            PlayState::Paused => self.start(),
            PlayState::Running => self.pause(),
        }
    }

    /// Queue a direction change for the next tick.
    ///
    /// Later calls before the tick overwrite earlier ones. Reversals of the
    /// direction the last tick used, and unmapped input, are ignored.
    pub fn set_direction(&mut self, input: RawInput) {
        let next = self.controller.propose_direction(
            input,
            self.state.direction,
            self.state.last_direction,
        );

        if next != self.state.direction {
            tracing::debug!(from = ?self.state.direction, to = ?next, "direction queued");
            self.state.direction = next;
        }
    }

    /// Advance the game by one cell.
    ///
    /// Returns `None` while paused.
    pub fn tick(&mut self) -> Option<StepResult> {
        if self.state.play_state != PlayState::Running {
            return None;
        }

        let direction = self.state.direction;
        let new_head = self.state.snake.head().moved_in_direction(direction);
        self.state.last_direction = direction;

        let ate_food = new_head == self.state.food;
        self.state.snake.advance(new_head, ate_food);

        if ate_food {
            self.state.score += self.config.food_points;
            self.replace_food();
            self.state.speed_ms = self
                .config
                .speed_after_score(self.state.speed_ms, self.state.score);

            tracing::debug!(
                score = self.state.score,
                length = self.state.snake.len(),
                speed_ms = self.state.speed_ms,
                "food eaten"
            );
        }

        let score = self.state.score;

        if let Some(kind) = detect_collision(new_head, &self.state.snake.body, self.config.board_size)
        {
            let new_record = self.game_over(kind);
            return Some(StepResult {
                ate_food,
                collision: Some(kind),
                score,
                new_record,
            });
        }

        Some(StepResult {
            ate_food,
            collision: None,
            score,
            new_record: false,
        })
    }

    /// Record the result, persist a new best and put a fresh paused game in place.
    ///
    /// Returns whether the finished game set a new best score.
    fn game_over(&mut self, kind: CollisionType) -> bool {
        let score = self.state.score;
        let new_record = score > self.best_score;

        if new_record {
            self.best_score = score;
            self.store.save(score);
        }

        tracing::info!(
            ?kind,
            score,
            best_score = self.best_score,
            new_record,
            "game over"
        );

        self.reset();
        new_record
    }

    /// Fresh paused game; the best score is kept
    pub fn reset(&mut self) {
        let snake = Snake::new(self.config.initial_head);
        let food = self
            .food
            .place_food(&snake)
            .unwrap_or(self.config.initial_food);

        self.state = GameState::new(snake, food, self.config.initial_speed_ms);
    }

    fn replace_food(&mut self) {
        match self.food.place_food(&self.state.snake) {
            Some(food) => self.state.food = food,
            None => tracing::warn!(
                length = self.state.snake.len(),
                "no free cell left for food"
            ),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            snake: self.state.snake.body.clone(),
            food: self.state.food,
            direction: self.state.direction,
            score: self.state.score,
            best_score: self.best_score,
            speed_ms: self.state.speed_ms,
            play_state: self.state.play_state,
            board_size: self.config.board_size,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn play_state(&self) -> PlayState {
        self.state.play_state
    }

    /// Current time between ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.state.speed_ms)
    }
}
