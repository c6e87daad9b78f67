//! Level configuration - maps a level number to generation parameters
//!
//! Grid size grows every 3 levels, the seed follows a fixed affine formula
//! (except for the curated levels, which map to reserved seeds), and the
//! move budget is derived from the BFS solution length with a guaranteed
//! 2-move cushion.

use crate::core::overrides;
use crate::types::{MAX_LEVEL, THEME_BAND};

/// Parameters feeding the maze generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelParams {
    pub level: u32,
    /// Logical cell-graph side; the rasterized grid is `2*grid_size + 1` wide.
    pub grid_size: i32,
    /// Difficulty framing in 0..1; not used for branching logic.
    pub complexity: f64,
    /// Deterministic generation key.
    pub seed: u32,
}

/// Generation parameters for a level, with the level clamped to `[1, MAX_LEVEL]`.
pub fn level_config(level: u32) -> LevelParams {
    let level = level.clamp(1, MAX_LEVEL);
    let seed = overrides::curated_seed(level).unwrap_or(1000 + level * 7);
    LevelParams {
        level,
        grid_size: 4 + (level / 3) as i32,
        complexity: (0.3 + f64::from(level) * 0.05).min(0.8),
        seed,
    }
}

/// Move budget for a level: optimal length plus a 30% buffer, shrunk by a
/// per-level penalty, never below `solution_length + 2`.
pub fn move_limit(solution_length: u32, level: u32) -> u32 {
    let s = i64::from(solution_length);
    let buffer = (s * 3 + 9) / 10; // ceil(s * 0.3)
    let penalty = i64::from(level) / 2;
    (s + buffer - penalty).max(s + 2) as u32
}

/// Stage theme, one per band of 50 levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Meadow,
    Ice,
    Soil,
    Sand,
    Lava,
}

impl Theme {
    /// Theme for a level number (clamped to the valid range).
    pub fn for_level(level: u32) -> Self {
        match (level.clamp(1, MAX_LEVEL) - 1) / THEME_BAND {
            0 => Theme::Meadow,
            1 => Theme::Ice,
            2 => Theme::Soil,
            3 => Theme::Sand,
            _ => Theme::Lava,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_grows_every_three_levels() {
        assert_eq!(level_config(1).grid_size, 4);
        assert_eq!(level_config(2).grid_size, 4);
        assert_eq!(level_config(3).grid_size, 5);
        assert_eq!(level_config(5).grid_size, 5);
        assert_eq!(level_config(6).grid_size, 6);
        assert_eq!(level_config(9).grid_size, 7);
    }

    #[test]
    fn test_grid_size_monotonic() {
        for level in 1..MAX_LEVEL {
            assert!(level_config(level + 1).grid_size >= level_config(level).grid_size);
        }
    }

    #[test]
    fn test_complexity_capped() {
        assert!((level_config(1).complexity - 0.35).abs() < 1e-9);
        assert!((level_config(100).complexity - 0.8).abs() < 1e-9);
        assert!((level_config(MAX_LEVEL).complexity - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_seed_formula() {
        assert_eq!(level_config(1).seed, 1007);
        assert_eq!(level_config(2).seed, 1014);
        // Curated levels map to reserved seeds instead.
        for level in [3, 7, 8, 18] {
            let seed = level_config(level).seed;
            assert_ne!(seed, 1000 + level * 7);
            assert_eq!(overrides::curated_seed(level), Some(seed));
        }
    }

    #[test]
    fn test_level_clamped() {
        assert_eq!(level_config(0).level, 1);
        assert_eq!(level_config(9999).level, MAX_LEVEL);
        assert_eq!(level_config(9999), level_config(MAX_LEVEL));
    }

    #[test]
    fn test_move_limit_floor() {
        for s in 1..200 {
            for level in (1..=MAX_LEVEL).step_by(7) {
                assert!(move_limit(s, level) >= s + 2);
            }
        }
    }

    #[test]
    fn test_move_limit_buffer_before_penalty_bites() {
        // Level 1: penalty 0, so the 30% buffer applies in full.
        assert_eq!(move_limit(10, 1), 13);
        assert_eq!(move_limit(20, 1), 26);
        // High level: penalty eats the buffer down to the floor.
        assert_eq!(move_limit(10, MAX_LEVEL), 12);
    }

    #[test]
    fn test_theme_bands() {
        assert_eq!(Theme::for_level(1), Theme::Meadow);
        assert_eq!(Theme::for_level(50), Theme::Meadow);
        assert_eq!(Theme::for_level(51), Theme::Ice);
        assert_eq!(Theme::for_level(100), Theme::Ice);
        assert_eq!(Theme::for_level(101), Theme::Soil);
        assert_eq!(Theme::for_level(150), Theme::Soil);
        assert_eq!(Theme::for_level(151), Theme::Sand);
        assert_eq!(Theme::for_level(200), Theme::Sand);
        assert_eq!(Theme::for_level(201), Theme::Lava);
        assert_eq!(Theme::for_level(250), Theme::Lava);
    }
}
