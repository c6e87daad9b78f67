//! Slide-maze puzzle core.
//!
//! Deterministic, frontend-agnostic game logic: a seeded maze generator,
//! a pure action reducer over an immutable game state, and read-only view
//! selectors. Every level is fully reproducible from `(level, seed)`.

pub mod core;
pub mod progress;
pub mod types;

pub use crate::core::{create_level, game_reducer, GameState};
pub use crate::types::{Action, Direction, GameStatus, Position};
