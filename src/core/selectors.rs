//! Read-only view selectors over `GameState`
//!
//! Frontends never inspect grid and overlay fields directly; they ask the
//! selectors, which classify each cell with a fixed precedence and stay free
//! of side effects.

use crate::core::state::GameState;
use crate::types::{CoinColor, Position};

/// What a frontend should draw at one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Wall,
    Path,
    Player,
    Exit,
    Coin(CoinColor),
    Door { color: CoinColor, locked: bool },
    Icy,
    Lava,
    Collapsed,
}

/// Classify the cell at `(x, y)`.
///
/// Precedence, highest first: player, lava terrain, collapsed soil, wall
/// (out-of-bounds renders as wall), exit, uncollected coin, door, icy
/// floor, plain path. Collected coins disappear; doors stay visible once
/// unlocked so the player can read the maze.
pub fn cell_at(state: &GameState, x: i32, y: i32) -> CellView {
    let pos = Position::new(x, y);

    if pos == state.player_pos {
        return CellView::Player;
    }
    if state.overlay.is_lava(pos) {
        return CellView::Lava;
    }
    if state.overlay.collapsed.contains(&pos) {
        return CellView::Collapsed;
    }
    if !state.grid.is_path(pos) {
        return CellView::Wall;
    }
    if pos == state.exit_pos {
        return CellView::Exit;
    }
    if let Some(coin) = state.coin_at(pos) {
        if !state.collected_coins.contains(&coin.pos) {
            return CellView::Coin(coin.color);
        }
    }
    if let Some(door) = state.door_at(pos) {
        return CellView::Door {
            color: door.color,
            locked: !state.door_unlocked(door, &state.collected_coins),
        };
    }
    if state.overlay.icy_cells.contains(&pos) {
        return CellView::Icy;
    }
    CellView::Path
}

/// True when at least one move can be taken back.
pub fn can_undo(state: &GameState) -> bool {
    !state.history.is_empty()
}

/// Share of the move budget already consumed, in whole percent.
pub fn progress_percent(state: &GameState) -> u32 {
    if state.max_moves == 0 {
        return 0;
    }
    (state.max_moves - state.moves_left) * 100 / state.max_moves
}

/// Full row-major view of the board, ready to draw.
pub fn grid_for_render(state: &GameState) -> Vec<Vec<CellView>> {
    (0..state.grid.height())
        .map(|y| (0..state.grid.width()).map(|x| cell_at(state, x, y)).collect())
        .collect()
}
