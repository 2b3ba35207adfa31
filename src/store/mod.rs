//! Best-score persistence
//!
//! The game only ever remembers one number. It is kept behind a small
//! key-value surface so the backing medium (a JSON file on disk, or memory for
//! tests and `--no-save`) can be swapped without touching the engine.

pub mod kv;
pub mod score;

pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
pub use score::{BEST_SCORE_KEY, BestScoreStore, ScoreStore};
