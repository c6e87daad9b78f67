//! Grid module - rasterized wall/path board
//!
//! The grid is built once per level by the generator (or parsed from a
//! curated layout) and never mutated afterwards; runtime hazards that close
//! cells off are tracked as overlay state on top of it.

use crate::types::{CellKind, Position};

/// Rectangular grid of wall/path cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Create a grid of the given dimensions, all walls.
    pub fn filled_walls(width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            cells: vec![CellKind::Wall; (width * height) as usize],
        }
    }

    /// Parse a grid from `#` (wall) / `.` (path) rows.
    ///
    /// Returns `None` for empty input, ragged rows, or unknown characters.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let height = rows.len() as i32;
        let width = rows.first()?.chars().count() as i32;
        if width == 0 {
            return None;
        }

        let mut cells = Vec::with_capacity((width * height) as usize);
        for row in rows {
            if row.chars().count() as i32 != width {
                return None;
            }
            for ch in row.chars() {
                match ch {
                    '#' => cells.push(CellKind::Wall),
                    '.' => cells.push(CellKind::Path),
                    _ => return None,
                }
            }
        }

        Some(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    /// Cell kind at a position, or `None` when out of bounds.
    pub fn get(&self, pos: Position) -> Option<CellKind> {
        if self.in_bounds(pos) {
            Some(self.cells[(pos.y * self.width + pos.x) as usize])
        } else {
            None
        }
    }

    /// True when the position is an in-bounds path cell.
    pub fn is_path(&self, pos: Position) -> bool {
        self.get(pos) == Some(CellKind::Path)
    }

    /// Set a cell kind; returns false when out of bounds.
    ///
    /// Only the generator calls this while building a level.
    pub(crate) fn set(&mut self, pos: Position, kind: CellKind) -> bool {
        if self.in_bounds(pos) {
            self.cells[(pos.y * self.width + pos.x) as usize] = kind;
            true
        } else {
            false
        }
    }

    /// Row-major cell slice, for rendering adapters.
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_walls() {
        let grid = Grid::filled_walls(5, 3);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(grid.get(Position::new(x, y)), Some(CellKind::Wall));
            }
        }
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&["#####", "#...#", "#####"]).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert!(grid.is_path(Position::new(1, 1)));
        assert!(grid.is_path(Position::new(3, 1)));
        assert!(!grid.is_path(Position::new(0, 0)));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        assert!(Grid::from_rows(&["###", "##"]).is_none());
        assert!(Grid::from_rows(&["#x#"]).is_none());
        assert!(Grid::from_rows(&[]).is_none());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::filled_walls(4, 4);
        assert_eq!(grid.get(Position::new(-1, 0)), None);
        assert_eq!(grid.get(Position::new(0, -1)), None);
        assert_eq!(grid.get(Position::new(4, 0)), None);
        assert_eq!(grid.get(Position::new(0, 4)), None);
        assert!(!grid.is_path(Position::new(-1, -1)));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::filled_walls(4, 4);
        assert!(grid.set(Position::new(2, 1), CellKind::Path));
        assert!(grid.is_path(Position::new(2, 1)));
        assert!(!grid.set(Position::new(9, 9), CellKind::Path));
    }
}
