//! Hazard strategies - per-theme rules layered onto the slide loop
//!
//! Each stage theme contributes one strategy with three hooks: a per-step
//! ruling applied after the player enters a cell, a mutation applied once per
//! completed move, and a terminal override consulted during win/loss
//! evaluation. The slide algorithm itself stays theme-agnostic; it just folds
//! the active strategies in a fixed order.
//!
//! All hazard-derived runtime state lives in [`HazardOverlay`], which is
//! cloned whole into every history snapshot. The base grid is never mutated
//! after generation: collapsed soil cells and the lava front are overlay
//! fields consulted by the blocking test, which keeps undo exact while the
//! observable behavior stays a monotonic path-to-wall conversion.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::generator::{BfsFlow, MazeBundle};
use crate::core::levels::Theme;
use crate::core::rng::SeededRng;
use crate::types::{
    GameStatus, Position, ICY_CELL_PERCENT, LAVA_ADVANCE_EVERY, SAND_REVEAL_SECONDS,
};

/// Runtime hazard state carried by [`crate::core::state::GameState`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HazardOverlay {
    /// Ice theme: cells rendered as ice; legality-neutral in the base rules.
    pub icy_cells: BTreeSet<Position>,
    /// Soil theme: per-cell visit counts.
    pub soil_visits: BTreeMap<Position, u32>,
    /// Soil theme: cells that collapsed into walls.
    pub collapsed: BTreeSet<Position>,
    /// Sand theme: fog-of-war is active.
    pub sand_storm_active: bool,
    /// Sand theme: cell that triggers a full-visibility reveal.
    pub sand_checkpoint: Option<Position>,
    /// Sand theme: seconds left on the current reveal window.
    pub sand_reveal_seconds: u32,
    /// Lava theme: rows `<= lava_row` are lava terrain.
    pub lava_row: Option<i32>,
    /// Lava theme: completed moves since the level started.
    pub lava_move_counter: u32,
}

impl HazardOverlay {
    /// Build the overlay for a freshly generated level.
    ///
    /// The RNG is a dedicated decoration stream derived from the level seed,
    /// so hazard placement is as reproducible as the maze itself.
    pub fn for_theme(theme: Theme, bundle: &MazeBundle, rng: &mut SeededRng) -> Self {
        let mut overlay = Self::default();
        match theme {
            Theme::Meadow | Theme::Soil => {}
            Theme::Ice => {
                let mut candidates = Vec::new();
                for y in 0..bundle.grid.height() {
                    for x in 0..bundle.grid.width() {
                        let pos = Position::new(x, y);
                        if bundle.grid.is_path(pos) && pos != bundle.start && pos != bundle.exit {
                            candidates.push(pos);
                        }
                    }
                }
                let count = candidates.len() * ICY_CELL_PERCENT as usize / 100;
                overlay
                    .icy_cells
                    .extend(rng.shuffled(candidates).into_iter().take(count));
            }
            Theme::Sand => {
                let flow = BfsFlow::from_start(&bundle.grid, bundle.start);
                let path = flow.path_to(bundle.exit);
                overlay.sand_storm_active = true;
                overlay.sand_checkpoint = path.get(path.len() / 2).copied();
            }
            Theme::Lava => {
                overlay.lava_row = Some(0);
            }
        }
        overlay
    }

    /// True when `pos` lies in lava terrain.
    pub fn is_lava(&self, pos: Position) -> bool {
        self.lava_row.is_some_and(|row| pos.y <= row)
    }
}

/// Whether a slide keeps going after entering a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepRuling {
    Continue,
    Halt,
}

/// Read-only context handed to hazard hooks.
pub struct HazardCtx<'a> {
    /// Cells that never collapse: start, exit, coin and door positions.
    pub protected: &'a BTreeSet<Position>,
}

/// One theme's rule set, folded into the slide loop in a fixed order.
pub trait Hazard: Sync {
    /// Ruling applied right after the player enters `pos` during a slide.
    fn on_enter(
        &self,
        ctx: &HazardCtx<'_>,
        overlay: &mut HazardOverlay,
        pos: Position,
    ) -> StepRuling;

    /// Applied once per completed (position-changing) move.
    fn after_move(&self, _overlay: &mut HazardOverlay) {}

    /// Terminal override consulted after the win check; takes precedence.
    fn status_ruling(&self, _overlay: &HazardOverlay, _player: Position) -> Option<GameStatus> {
        None
    }
}

/// Ice cells slow the visual slide but never change legality here; the
/// theme's pressure comes from the countdown timer owned by the state.
pub struct IceHazard;

impl Hazard for IceHazard {
    fn on_enter(&self, _: &HazardCtx<'_>, _: &mut HazardOverlay, _: Position) -> StepRuling {
        StepRuling::Continue
    }
}

/// Every visit increments the cell's counter; the third visit to a
/// non-protected cell collapses it and the slide halts on it.
pub struct SoilHazard;

impl Hazard for SoilHazard {
    fn on_enter(
        &self,
        ctx: &HazardCtx<'_>,
        overlay: &mut HazardOverlay,
        pos: Position,
    ) -> StepRuling {
        let visits = overlay.soil_visits.entry(pos).or_insert(0);
        *visits += 1;
        if *visits >= 3 && !ctx.protected.contains(&pos) {
            overlay.collapsed.insert(pos);
            StepRuling::Halt
        } else {
            StepRuling::Continue
        }
    }
}

/// Reaching the checkpoint halts the slide and opens a full-visibility
/// window; the window is re-armed on every visit.
pub struct SandHazard;

impl Hazard for SandHazard {
    fn on_enter(
        &self,
        _: &HazardCtx<'_>,
        overlay: &mut HazardOverlay,
        pos: Position,
    ) -> StepRuling {
        if overlay.sand_storm_active && overlay.sand_checkpoint == Some(pos) {
            overlay.sand_reveal_seconds = SAND_REVEAL_SECONDS;
            StepRuling::Halt
        } else {
            StepRuling::Continue
        }
    }
}

/// The front advances one row every `LAVA_ADVANCE_EVERY` completed moves;
/// entering lava terrain, or being caught by the front, is an instant loss.
pub struct LavaHazard;

impl Hazard for LavaHazard {
    fn on_enter(
        &self,
        _: &HazardCtx<'_>,
        overlay: &mut HazardOverlay,
        pos: Position,
    ) -> StepRuling {
        if overlay.is_lava(pos) {
            StepRuling::Halt
        } else {
            StepRuling::Continue
        }
    }

    fn after_move(&self, overlay: &mut HazardOverlay) {
        overlay.lava_move_counter += 1;
        if overlay.lava_move_counter % LAVA_ADVANCE_EVERY == 0 {
            if let Some(row) = overlay.lava_row.as_mut() {
                *row += 1;
            }
        }
    }

    fn status_ruling(&self, overlay: &HazardOverlay, player: Position) -> Option<GameStatus> {
        if overlay.is_lava(player) {
            Some(GameStatus::Lost)
        } else {
            None
        }
    }
}

/// Active strategies for a theme, in the fixed composition order.
pub fn hazards_for(theme: Theme) -> &'static [&'static dyn Hazard] {
    match theme {
        Theme::Meadow => &[],
        Theme::Ice => &[&IceHazard],
        Theme::Soil => &[&SoilHazard],
        Theme::Sand => &[&SandHazard],
        Theme::Lava => &[&LavaHazard],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_with(protected: &BTreeSet<Position>) -> HazardCtx<'_> {
        HazardCtx { protected }
    }

    #[test]
    fn test_soil_collapses_on_third_visit() {
        let protected = BTreeSet::new();
        let ctx = ctx_with(&protected);
        let mut overlay = HazardOverlay::default();
        let pos = Position::new(3, 3);

        assert_eq!(SoilHazard.on_enter(&ctx, &mut overlay, pos), StepRuling::Continue);
        assert_eq!(SoilHazard.on_enter(&ctx, &mut overlay, pos), StepRuling::Continue);
        assert_eq!(SoilHazard.on_enter(&ctx, &mut overlay, pos), StepRuling::Halt);
        assert!(overlay.collapsed.contains(&pos));
        assert_eq!(overlay.soil_visits.get(&pos), Some(&3));
    }

    #[test]
    fn test_soil_never_collapses_protected_cells() {
        let pos = Position::new(1, 1);
        let protected: BTreeSet<Position> = [pos].into_iter().collect();
        let ctx = ctx_with(&protected);
        let mut overlay = HazardOverlay::default();

        for _ in 0..10 {
            assert_eq!(SoilHazard.on_enter(&ctx, &mut overlay, pos), StepRuling::Continue);
        }
        assert!(overlay.collapsed.is_empty());
        assert_eq!(overlay.soil_visits.get(&pos), Some(&10));
    }

    #[test]
    fn test_sand_checkpoint_arms_reveal_and_halts() {
        let protected = BTreeSet::new();
        let ctx = ctx_with(&protected);
        let checkpoint = Position::new(4, 2);
        let mut overlay = HazardOverlay {
            sand_storm_active: true,
            sand_checkpoint: Some(checkpoint),
            ..HazardOverlay::default()
        };

        assert_eq!(
            SandHazard.on_enter(&ctx, &mut overlay, Position::new(2, 2)),
            StepRuling::Continue
        );
        assert_eq!(overlay.sand_reveal_seconds, 0);
        assert_eq!(
            SandHazard.on_enter(&ctx, &mut overlay, checkpoint),
            StepRuling::Halt
        );
        assert_eq!(overlay.sand_reveal_seconds, SAND_REVEAL_SECONDS);
    }

    #[test]
    fn test_lava_advances_every_third_move() {
        let mut overlay = HazardOverlay {
            lava_row: Some(0),
            ..HazardOverlay::default()
        };
        for _ in 0..2 {
            LavaHazard.after_move(&mut overlay);
        }
        assert_eq!(overlay.lava_row, Some(0));
        LavaHazard.after_move(&mut overlay);
        assert_eq!(overlay.lava_row, Some(1));
        for _ in 0..3 {
            LavaHazard.after_move(&mut overlay);
        }
        assert_eq!(overlay.lava_row, Some(2));
    }

    #[test]
    fn test_lava_status_ruling() {
        let overlay = HazardOverlay {
            lava_row: Some(2),
            ..HazardOverlay::default()
        };
        assert_eq!(
            LavaHazard.status_ruling(&overlay, Position::new(5, 2)),
            Some(GameStatus::Lost)
        );
        assert_eq!(
            LavaHazard.status_ruling(&overlay, Position::new(5, 1)),
            Some(GameStatus::Lost)
        );
        assert_eq!(LavaHazard.status_ruling(&overlay, Position::new(5, 3)), None);
    }

    #[test]
    fn test_lava_entry_halts_slide() {
        let protected = BTreeSet::new();
        let ctx = ctx_with(&protected);
        let mut overlay = HazardOverlay {
            lava_row: Some(3),
            ..HazardOverlay::default()
        };
        assert_eq!(
            LavaHazard.on_enter(&ctx, &mut overlay, Position::new(1, 3)),
            StepRuling::Halt
        );
        assert_eq!(
            LavaHazard.on_enter(&ctx, &mut overlay, Position::new(1, 4)),
            StepRuling::Continue
        );
    }

    #[test]
    fn test_hazards_for_theme() {
        assert!(hazards_for(Theme::Meadow).is_empty());
        assert_eq!(hazards_for(Theme::Ice).len(), 1);
        assert_eq!(hazards_for(Theme::Soil).len(), 1);
        assert_eq!(hazards_for(Theme::Sand).len(), 1);
        assert_eq!(hazards_for(Theme::Lava).len(), 1);
    }
}
