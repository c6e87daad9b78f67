//! Game state - the immutable root aggregate
//!
//! A `GameState` is created by the level-configuration + generator pipeline
//! and replaced wholesale on every transition; the reducer never mutates one
//! in place. History snapshots clone every container they capture so undo can
//! restore them without aliasing the live state.

use std::collections::BTreeSet;

use crate::core::generator;
use crate::core::grid::Grid;
use crate::core::hazards::HazardOverlay;
use crate::core::levels::{self, Theme};
use crate::core::rng::SeededRng;
use crate::types::{Coin, Door, GameStatus, Position, MAX_LEVEL};

/// Salt applied to the level seed for the hazard decoration stream, so maze
/// carving and hazard placement draw from independent deterministic streams.
const HAZARD_STREAM_SALT: u32 = 0x9e37_79b9;

/// Pre-move snapshot pushed before each successful slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub player_pos: Position,
    pub moves_left: u32,
    pub collected_coins: BTreeSet<Position>,
    pub overlay: HazardOverlay,
    pub time_left: Option<u32>,
    pub timer_running: bool,
}

/// Complete game state for one level in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub level: u32,
    /// Generation seed, retained so restart reproduces the identical maze.
    pub seed: u32,
    pub theme: Theme,
    pub grid: Grid,
    pub player_pos: Position,
    pub exit_pos: Position,
    /// Fixed after generation.
    pub coins: Vec<Coin>,
    /// Fixed after generation.
    pub doors: Vec<Door>,
    /// Positions of collected coins; grows monotonically within a level.
    pub collected_coins: BTreeSet<Position>,
    pub moves_left: u32,
    pub max_moves: u32,
    pub solution_length: u32,
    pub status: GameStatus,
    /// One entry per successful move since the level was (re)created,
    /// minus undos.
    pub history: Vec<HistoryEntry>,
    pub overlay: HazardOverlay,
    /// Countdown seconds; present on ice levels only.
    pub time_left: Option<u32>,
    pub max_time: Option<u32>,
    /// Set by the first successful move; `Tick` is inert until then.
    pub timer_running: bool,
}

/// Build a fresh state for `level`, optionally pinning a specific seed
/// (used to reproduce a stored save). The level is clamped to
/// `[1, MAX_LEVEL]`.
pub fn create_level(level: u32, seed: Option<u32>) -> GameState {
    let mut params = levels::level_config(level);
    if let Some(seed) = seed {
        params.seed = seed;
    }

    let bundle = generator::generate(&params);
    let theme = Theme::for_level(params.level);
    let mut decor_rng = SeededRng::new(params.seed ^ HAZARD_STREAM_SALT);
    let overlay = HazardOverlay::for_theme(theme, &bundle, &mut decor_rng);

    let max_moves = levels::move_limit(bundle.solution_length, params.level);
    let max_time = match theme {
        Theme::Ice => Some(30 + 2 * bundle.solution_length),
        _ => None,
    };

    GameState {
        level: params.level,
        seed: params.seed,
        theme,
        player_pos: bundle.start,
        exit_pos: bundle.exit,
        coins: bundle.coins,
        doors: bundle.doors,
        collected_coins: BTreeSet::new(),
        moves_left: max_moves,
        max_moves,
        solution_length: bundle.solution_length,
        status: GameStatus::Playing,
        history: Vec::new(),
        overlay,
        time_left: max_time,
        max_time,
        timer_running: false,
        grid: bundle.grid,
    }
}

impl GameState {
    /// Cells soil collapse must never claim: start, exit, coins, doors.
    pub fn protected_cells(&self) -> BTreeSet<Position> {
        let mut protected = BTreeSet::new();
        protected.insert(self.player_pos_at_start());
        protected.insert(self.exit_pos);
        protected.extend(self.coins.iter().map(|coin| coin.pos));
        protected.extend(self.doors.iter().map(|door| door.pos));
        protected
    }

    /// The start cell of the rasterization scheme.
    fn player_pos_at_start(&self) -> Position {
        Position::new(1, 1)
    }

    pub fn coin_at(&self, pos: Position) -> Option<&Coin> {
        self.coins.iter().find(|coin| coin.pos == pos)
    }

    pub fn door_at(&self, pos: Position) -> Option<&Door> {
        self.doors.iter().find(|door| door.pos == pos)
    }

    /// Any collected coin of the door's color unlocks it, not just the
    /// paired one.
    pub fn door_unlocked(&self, door: &Door, collected: &BTreeSet<Position>) -> bool {
        self.coins
            .iter()
            .any(|coin| coin.color == door.color && collected.contains(&coin.pos))
    }

    pub fn all_coins_collected(&self) -> bool {
        self.coins
            .iter()
            .all(|coin| self.collected_coins.contains(&coin.pos))
    }

    /// Snapshot of the current mutable fields, with containers cloned.
    pub fn snapshot(&self) -> HistoryEntry {
        HistoryEntry {
            player_pos: self.player_pos,
            moves_left: self.moves_left,
            collected_coins: self.collected_coins.clone(),
            overlay: self.overlay.clone(),
            time_left: self.time_left,
            timer_running: self.timer_running,
        }
    }
}
