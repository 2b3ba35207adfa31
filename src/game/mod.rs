//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The front end drives it through [`GameEngine`] and reads back [`GameSnapshot`]s.

pub mod action;
pub mod collision;
pub mod config;
pub mod engine;
pub mod food;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, DirectionController, KeyLayout, RawInput};
pub use collision::detect_collision;
pub use config::{BOARD_SIZE, FoodRange, GameConfig};
pub use engine::{GameEngine, StepResult};
pub use food::FoodPlacer;
pub use state::{CollisionType, GameSnapshot, GameState, PlayState, Position, Snake};
