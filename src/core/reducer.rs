//! State reducer - pure transition function over `GameState`
//!
//! Every entry point takes the current state by reference and returns a new
//! value; a rejected action returns a clone of the input. The slide loop is
//! theme-agnostic: hazard strategies are folded in per step, and the win/loss
//! evaluation lets a hazard override an apparent win.

use std::collections::BTreeSet;

use crate::core::hazards::{hazards_for, Hazard, HazardCtx, HazardOverlay, StepRuling};
use crate::core::state::{create_level, GameState};
use crate::types::{Action, Direction, GameStatus, Position, MAX_LEVEL};

/// Dispatch an action against the current state.
pub fn game_reducer(state: &GameState, action: Action) -> GameState {
    match action {
        Action::Move(direction) => apply_move(state, direction),
        Action::Undo => undo(state),
        Action::Restart => restart(state),
        Action::NextLevel => create_level((state.level + 1).min(MAX_LEVEL), None),
        Action::LoadLevel { level, seed } => create_level(level, seed),
        Action::Tick { seconds } => tick(state, seconds),
        Action::SandRevealTick { seconds } => sand_reveal_tick(state, seconds),
    }
}

/// Apply one slide-move: the player advances cell by cell in `direction`
/// until blocked or halted by a hazard, collecting coins along the way.
///
/// A slide that moves the player consumes exactly one move and pushes one
/// history snapshot; a slide blocked immediately returns the state unchanged.
pub fn apply_move(state: &GameState, direction: Direction) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }

    let protected = state.protected_cells();
    let ctx = HazardCtx {
        protected: &protected,
    };
    let strategies = hazards_for(state.theme);

    // Working copies: coins collected mid-slide unlock doors later in the
    // same slide, and hazards mutate overlay state per step.
    let mut collected = state.collected_coins.clone();
    let mut overlay = state.overlay.clone();
    let mut pos = state.player_pos;

    loop {
        let next = pos.step(direction);
        if !can_enter(state, &overlay, &collected, next) {
            break;
        }
        pos = next;

        if let Some(coin) = state.coin_at(pos) {
            collected.insert(coin.pos);
        }

        let mut halted = false;
        for hazard in strategies {
            if hazard.on_enter(&ctx, &mut overlay, pos) == StepRuling::Halt {
                halted = true;
            }
        }
        if halted {
            break;
        }
    }

    if pos == state.player_pos {
        return state.clone();
    }

    let mut next_state = state.clone();
    next_state.history.push(state.snapshot());
    next_state.player_pos = pos;
    next_state.collected_coins = collected;
    next_state.moves_left = state.moves_left.saturating_sub(1);

    for hazard in strategies {
        hazard.after_move(&mut overlay);
    }
    next_state.overlay = overlay;

    if next_state.time_left.is_some() {
        next_state.timer_running = true;
    }

    next_state.status = evaluate_status(&next_state, strategies);
    next_state
}

/// True when a slide may advance into `pos`.
fn can_enter(
    state: &GameState,
    overlay: &HazardOverlay,
    collected: &BTreeSet<Position>,
    pos: Position,
) -> bool {
    if !state.grid.is_path(pos) || overlay.collapsed.contains(&pos) {
        return false;
    }
    if let Some(door) = state.door_at(pos) {
        if !state.door_unlocked(door, collected) {
            return false;
        }
    }
    true
}

/// Win/loss evaluation after a committed move. Hazard rulings take
/// precedence over the win check; move/time exhaustion only applies while
/// still playing.
fn evaluate_status(state: &GameState, strategies: &[&dyn Hazard]) -> GameStatus {
    let won = state.player_pos == state.exit_pos && state.all_coins_collected();
    let mut status = if won {
        GameStatus::Won
    } else {
        GameStatus::Playing
    };

    for hazard in strategies {
        if let Some(ruling) = hazard.status_ruling(&state.overlay, state.player_pos) {
            status = ruling;
        }
    }

    if status == GameStatus::Playing && (state.moves_left == 0 || state.time_left == Some(0)) {
        status = GameStatus::Lost;
    }
    status
}

/// Pop the last snapshot and restore it; undoing out of a terminal state
/// returns to `Playing`. No-op when history is empty.
pub fn undo(state: &GameState) -> GameState {
    let mut next = state.clone();
    let Some(entry) = next.history.pop() else {
        return next;
    };
    next.player_pos = entry.player_pos;
    next.moves_left = entry.moves_left;
    next.collected_coins = entry.collected_coins;
    next.overlay = entry.overlay;
    next.time_left = entry.time_left;
    next.timer_running = entry.timer_running;
    next.status = GameStatus::Playing;
    next
}

/// Regenerate the identical maze from the retained seed: fresh state,
/// empty history.
pub fn restart(state: &GameState) -> GameState {
    create_level(state.level, Some(state.seed))
}

/// Advance the countdown timer; inert until the first successful move.
fn tick(state: &GameState, seconds: u32) -> GameState {
    if state.status != GameStatus::Playing || !state.timer_running {
        return state.clone();
    }
    let Some(time_left) = state.time_left else {
        return state.clone();
    };

    let mut next = state.clone();
    let remaining = time_left.saturating_sub(seconds);
    next.time_left = Some(remaining);
    if remaining == 0 {
        next.status = GameStatus::Lost;
    }
    next
}

/// Wind down the sand reveal window.
fn sand_reveal_tick(state: &GameState, seconds: u32) -> GameState {
    if state.status != GameStatus::Playing || state.overlay.sand_reveal_seconds == 0 {
        return state.clone();
    }
    let mut next = state.clone();
    next.overlay.sand_reveal_seconds = state.overlay.sand_reveal_seconds.saturating_sub(seconds);
    next
}
