//! Curated level layouts keyed by reserved generation seeds
//!
//! A handful of early-game levels use hand-authored mazes instead of the
//! procedural carver. Each entry is data only; the generator validates a
//! layout (start/exit on path, non-zero BFS solution) before substituting it
//! and silently falls back to procedural generation when validation fails,
//! so an authoring mistake can never ship an unsolvable level.

use crate::types::{Coin, CoinColor, Door, Position};

/// Hand-authored maze layout plus its fixed coin/door set.
#[derive(Debug, Clone, Copy)]
pub struct CuratedLayout {
    pub name: &'static str,
    /// Reserved seed; `level_config` maps the curated level to this value.
    pub seed: u32,
    pub level: u32,
    /// `#` wall / `.` path rows.
    pub rows: &'static [&'static str],
    pub coins: &'static [Coin],
    pub doors: &'static [Door],
}

pub const CURATED: [CuratedLayout; 4] = [
    CuratedLayout {
        name: "switchback",
        seed: 9301,
        level: 3,
        rows: &[
            "###########",
            "#.........#",
            "#########.#",
            "#.........#",
            "#.#########",
            "#.........#",
            "#########.#",
            "#.........#",
            "#.#########",
            "#.........#",
            "###########",
        ],
        coins: &[Coin {
            pos: Position::new(5, 1),
            color: CoinColor::Red,
        }],
        doors: &[Door {
            pos: Position::new(5, 9),
            color: CoinColor::Red,
        }],
    },
    CuratedLayout {
        name: "long-road",
        seed: 9307,
        level: 7,
        rows: &[
            "#############",
            "#...........#",
            "###########.#",
            "#...........#",
            "#.###########",
            "#...........#",
            "###########.#",
            "#...........#",
            "#.###########",
            "#...........#",
            "###########.#",
            "#...........#",
            "#############",
        ],
        coins: &[
            Coin {
                pos: Position::new(3, 1),
                color: CoinColor::Red,
            },
            Coin {
                pos: Position::new(7, 7),
                color: CoinColor::Blue,
            },
        ],
        doors: &[
            Door {
                pos: Position::new(9, 5),
                color: CoinColor::Red,
            },
            Door {
                pos: Position::new(3, 11),
                color: CoinColor::Blue,
            },
        ],
    },
    CuratedLayout {
        name: "spiral",
        seed: 9308,
        level: 8,
        rows: &[
            "#############",
            "#...........#",
            "#.#########.#",
            "#.#.......#.#",
            "#.#.#####.#.#",
            "#.#.#...#.#.#",
            "#.#.#.#.#.#.#",
            "#.#.#.#.#.#.#",
            "#.#.#.#####.#",
            "#.#.#.......#",
            "#.#.#########",
            "#.#.........#",
            "#############",
        ],
        coins: &[Coin {
            pos: Position::new(5, 1),
            color: CoinColor::Green,
        }],
        doors: &[Door {
            pos: Position::new(7, 11),
            color: CoinColor::Green,
        }],
    },
    CuratedLayout {
        name: "gauntlet",
        seed: 9318,
        level: 18,
        rows: &[
            "###############",
            "#.............#",
            "#############.#",
            "#.............#",
            "#.#############",
            "#.............#",
            "#############.#",
            "#.............#",
            "#.#############",
            "#.............#",
            "#############.#",
            "#.............#",
            "#.#############",
            "#.............#",
            "###############",
        ],
        coins: &[
            Coin {
                pos: Position::new(7, 1),
                color: CoinColor::Red,
            },
            Coin {
                pos: Position::new(7, 5),
                color: CoinColor::Blue,
            },
            Coin {
                pos: Position::new(7, 9),
                color: CoinColor::Green,
            },
        ],
        doors: &[
            Door {
                pos: Position::new(7, 3),
                color: CoinColor::Red,
            },
            Door {
                pos: Position::new(7, 7),
                color: CoinColor::Blue,
            },
            Door {
                pos: Position::new(7, 13),
                color: CoinColor::Green,
            },
        ],
    },
];

/// Reserved seed for a curated level, if the level is curated.
pub fn curated_seed(level: u32) -> Option<u32> {
    CURATED
        .iter()
        .find(|layout| layout.level == level)
        .map(|layout| layout.seed)
}

/// Curated layout registered under a generation seed, if any.
pub fn layout_for_seed(seed: u32) -> Option<&'static CuratedLayout> {
    CURATED.iter().find(|layout| layout.seed == seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::Grid;

    #[test]
    fn test_curated_seed_lookup() {
        assert_eq!(curated_seed(3), Some(9301));
        assert_eq!(curated_seed(7), Some(9307));
        assert_eq!(curated_seed(8), Some(9308));
        assert_eq!(curated_seed(18), Some(9318));
        assert_eq!(curated_seed(4), None);
    }

    #[test]
    fn test_layout_for_seed() {
        assert_eq!(layout_for_seed(9308).map(|l| l.name), Some("spiral"));
        assert!(layout_for_seed(1007).is_none());
    }

    #[test]
    fn test_reserved_seeds_never_collide_with_formula() {
        // Procedural seeds are 1000 + level * 7 for levels 1..=250.
        for layout in &CURATED {
            assert!(layout.seed > 1000 + 250 * 7);
        }
    }

    #[test]
    fn test_layouts_parse_with_odd_dimensions() {
        for layout in &CURATED {
            let grid = Grid::from_rows(layout.rows).expect(layout.name);
            assert_eq!(grid.width() % 2, 1, "{}", layout.name);
            assert_eq!(grid.height() % 2, 1, "{}", layout.name);
        }
    }

    #[test]
    fn test_coins_and_doors_sit_on_path_cells() {
        for layout in &CURATED {
            let grid = Grid::from_rows(layout.rows).expect(layout.name);
            for coin in layout.coins {
                assert!(grid.is_path(coin.pos), "{} coin {:?}", layout.name, coin);
            }
            for door in layout.doors {
                assert!(grid.is_path(door.pos), "{} door {:?}", layout.name, door);
            }
        }
    }

    #[test]
    fn test_every_door_has_a_matching_coin() {
        for layout in &CURATED {
            for door in layout.doors {
                assert!(
                    layout.coins.iter().any(|coin| coin.color == door.color),
                    "{} door {:?} has no coin",
                    layout.name,
                    door
                );
            }
        }
    }
}
