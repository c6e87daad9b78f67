//! Core module - pure game logic with no external dependencies
//!
//! This module contains the generator, state management, and game rules.
//! It has zero dependencies on UI, networking, or I/O.

pub mod generator;
pub mod grid;
pub mod hazards;
pub mod levels;
pub mod overrides;
pub mod reducer;
pub mod rng;
pub mod selectors;
pub mod state;

// Re-export commonly used types
pub use generator::{generate, BfsFlow, MazeBundle};
pub use grid::Grid;
pub use hazards::HazardOverlay;
pub use levels::{level_config, move_limit, LevelParams, Theme};
pub use reducer::{apply_move, game_reducer, restart, undo};
pub use rng::SeededRng;
pub use selectors::{can_undo, cell_at, grid_for_render, progress_percent, CellView};
pub use state::{create_level, GameState, HistoryEntry};
