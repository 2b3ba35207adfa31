//! Grid Snake - a terminal Snake game that remembers your best score
//!
//! This library provides:
//! - Core game logic (game module)
//! - Best-score persistence (store module)
//! - Speed-driven tick timing (clock module)
//! - TUI rendering and keyboard input (render, input modules)
//! - The interactive play loop (modes module)

pub mod clock;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod store;
