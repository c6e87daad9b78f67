//! Maze generator - spanning-tree carving, rasterization, and coin placement
//!
//! The carver runs a randomized depth-first spanning tree ("recursive
//! backtracker") over a logical cell graph, which guarantees every cell is
//! reachable from the origin, then rasterizes the graph into a fine
//! `(2n+1) x (2n+1)` wall/path grid. A light de-braiding pass opens the
//! vertical centerline where it separates two corridors. Coin/door pairs are
//! placed along the BFS solution path so that each coin always precedes its
//! door.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use crate::core::grid::Grid;
use crate::core::levels::LevelParams;
use crate::core::overrides::{self, CuratedLayout};
use crate::core::rng::SeededRng;
use crate::types::{CellKind, Coin, CoinColor, Door, Position, COIN_THRESHOLD_LEVEL};

/// Everything the generator produces for one level.
#[derive(Debug, Clone)]
pub struct MazeBundle {
    pub grid: Grid,
    pub start: Position,
    pub exit: Position,
    /// BFS shortest-path step count from start to exit; 0 when unreachable.
    pub solution_length: u32,
    pub coins: Vec<Coin>,
    pub doors: Vec<Door>,
}

/// Generate the maze bundle for the given parameters.
///
/// Pure function of `params`: identical parameters produce a bit-identical
/// bundle. Seeds registered in the curated override table substitute the
/// hand-authored layout, falling back to procedural carving when the layout
/// fails validation.
pub fn generate(params: &LevelParams) -> MazeBundle {
    if let Some(layout) = overrides::layout_for_seed(params.seed) {
        if let Some(bundle) = instantiate_curated(layout) {
            return bundle;
        }
    }

    let grid = carve_grid(params.grid_size, params.seed);
    let start = Position::new(1, 1);
    let exit = Position::new(grid.width() - 2, grid.height() - 2);

    let flow = BfsFlow::from_start(&grid, start);
    let solution_length = flow.distance_to(exit);
    debug_assert!(solution_length > 0, "carved maze must be solvable");

    let (coins, doors) = place_pairs(&flow, start, exit, params.level);

    MazeBundle {
        grid,
        start,
        exit,
        solution_length,
        coins,
        doors,
    }
}

/// Validate a curated layout and build its bundle; `None` rejects it.
fn instantiate_curated(layout: &CuratedLayout) -> Option<MazeBundle> {
    let grid = Grid::from_rows(layout.rows)?;
    let start = Position::new(1, 1);
    let exit = Position::new(grid.width() - 2, grid.height() - 2);
    if !grid.is_path(start) || !grid.is_path(exit) {
        return None;
    }

    let flow = BfsFlow::from_start(&grid, start);
    let solution_length = flow.distance_to(exit);
    if solution_length == 0 {
        return None;
    }

    Some(MazeBundle {
        grid,
        start,
        exit,
        solution_length,
        coins: layout.coins.to_vec(),
        doors: layout.doors.to_vec(),
    })
}

/// Wall flags per logical cell, indexed north/east/south/west.
const NORTH: usize = 0;
const EAST: usize = 1;
const SOUTH: usize = 2;
const WEST: usize = 3;

/// Carve a spanning tree over an `n x n` cell graph and rasterize it.
fn carve_grid(n: i32, seed: u32) -> Grid {
    debug_assert!(n >= 2);
    let n = n as usize;
    let mut rng = SeededRng::new(seed);
    let mut walls = vec![[true; 4]; n * n];
    let mut visited = vec![false; n * n];

    // Randomized depth-first spanning tree from cell (0, 0). Candidate
    // neighbors are enumerated in fixed N/E/S/W order; the seeded RNG picks
    // among the unvisited ones.
    let mut stack = vec![0usize];
    visited[0] = true;
    while let Some(&current) = stack.last() {
        let cx = current % n;
        let cy = current / n;

        let mut candidates: ArrayVec<(usize, usize), 4> = ArrayVec::new();
        if cy > 0 && !visited[current - n] {
            candidates.push((NORTH, current - n));
        }
        if cx + 1 < n && !visited[current + 1] {
            candidates.push((EAST, current + 1));
        }
        if cy + 1 < n && !visited[current + n] {
            candidates.push((SOUTH, current + n));
        }
        if cx > 0 && !visited[current - 1] {
            candidates.push((WEST, current - 1));
        }

        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let pick = rng.next_range(0, candidates.len() as i32) as usize;
        let (side, neighbor) = candidates[pick];
        walls[current][side] = false;
        walls[neighbor][(side + 2) % 4] = false;
        visited[neighbor] = true;
        stack.push(neighbor);
    }

    rasterize(n, &walls)
}

/// Odd-even rasterization: logical cell centers and carved edge midpoints
/// become path cells; everything else stays wall.
fn rasterize(n: usize, walls: &[[bool; 4]]) -> Grid {
    let side = 2 * n as i32 + 1;
    let mut grid = Grid::filled_walls(side, side);

    for cy in 0..n {
        for cx in 0..n {
            let cell = cy * n + cx;
            let fx = 2 * cx as i32 + 1;
            let fy = 2 * cy as i32 + 1;
            grid.set(Position::new(fx, fy), CellKind::Path);
            if !walls[cell][EAST] {
                grid.set(Position::new(fx + 1, fy), CellKind::Path);
            }
            if !walls[cell][SOUTH] {
                grid.set(Position::new(fx, fy + 1), CellKind::Path);
            }
        }
    }

    debraid_centerline(&mut grid);
    grid
}

/// Open centerline walls that separate two corridors. This only ever adds
/// connectivity, so the spanning-tree solvability guarantee holds.
fn debraid_centerline(grid: &mut Grid) {
    let cx = grid.width() / 2;
    for y in 1..grid.height() - 1 {
        let here = Position::new(cx, y);
        if grid.get(here) == Some(CellKind::Wall)
            && grid.is_path(Position::new(cx - 1, y))
            && grid.is_path(Position::new(cx + 1, y))
        {
            grid.set(here, CellKind::Path);
        }
    }
}

/// BFS distances and parents over path cells from a start position.
#[derive(Debug)]
pub struct BfsFlow {
    width: i32,
    dist: Vec<i32>,
    parent: Vec<i32>,
}

impl BfsFlow {
    /// Run a 4-directional, unit-cost BFS from `start`.
    pub fn from_start(grid: &Grid, start: Position) -> Self {
        let size = (grid.width() * grid.height()) as usize;
        let mut dist = vec![-1i32; size];
        let mut parent = vec![-1i32; size];
        let index = |pos: Position| (pos.y * grid.width() + pos.x) as usize;

        let mut queue = VecDeque::new();
        if grid.is_path(start) {
            dist[index(start)] = 0;
            queue.push_back(start);
        }

        while let Some(pos) = queue.pop_front() {
            for dir in crate::types::Direction::ALL {
                let next = pos.step(dir);
                if grid.is_path(next) && dist[index(next)] < 0 {
                    dist[index(next)] = dist[index(pos)] + 1;
                    parent[index(next)] = index(pos) as i32;
                    queue.push_back(next);
                }
            }
        }

        Self {
            width: grid.width(),
            dist,
            parent,
        }
    }

    /// Shortest-path step count to `target`; 0 when unreachable.
    pub fn distance_to(&self, target: Position) -> u32 {
        let idx = (target.y * self.width + target.x) as usize;
        match self.dist.get(idx) {
            Some(&d) if d > 0 => d as u32,
            _ => 0,
        }
    }

    /// The shortest-path cell sequence from the BFS start to `target`,
    /// inclusive of both endpoints; empty when unreachable.
    pub fn path_to(&self, target: Position) -> Vec<Position> {
        let mut idx = (target.y * self.width + target.x) as isize;
        if self.dist.get(idx as usize).copied().unwrap_or(-1) < 0 {
            return Vec::new();
        }

        let mut path = Vec::new();
        while idx >= 0 {
            let pos = Position::new(idx as i32 % self.width, idx as i32 / self.width);
            path.push(pos);
            idx = self.parent[idx as usize] as isize;
        }
        path.reverse();
        path
    }
}

/// Coin/door pairs along the solution path.
///
/// The path interior is partitioned into `pair_count + 1` contiguous
/// segments by distance rank; pair `i` takes the middle of the first half of
/// segment `i` for its coin and the middle of the second half for its door,
/// so the coin always precedes the door along the shortest path.
fn place_pairs(
    flow: &BfsFlow,
    start: Position,
    exit: Position,
    level: u32,
) -> (Vec<Coin>, Vec<Door>) {
    if level < COIN_THRESHOLD_LEVEL {
        return (Vec::new(), Vec::new());
    }

    let path = flow.path_to(exit);
    if path.len() < 3 {
        return (Vec::new(), Vec::new());
    }
    let interior = &path[1..path.len() - 1];
    debug_assert!(!interior.contains(&start));

    let pair_count = pair_count_for_level(level);
    let seg = interior.len() / (pair_count + 1);
    if seg < 2 {
        return (Vec::new(), Vec::new());
    }

    let mut pairs: ArrayVec<(Position, Position), 3> = ArrayVec::new();
    for i in 0..pair_count {
        let segment = &interior[i * seg..(i + 1) * seg];
        let half = segment.len() / 2;
        let coin_pos = segment[half / 2];
        let door_pos = segment[half + (segment.len() - half) / 2];
        pairs.push((coin_pos, door_pos));
    }

    let coins = pairs
        .iter()
        .enumerate()
        .map(|(i, &(pos, _))| Coin {
            pos,
            color: CoinColor::PALETTE[i],
        })
        .collect();
    let doors = pairs
        .iter()
        .enumerate()
        .map(|(i, &(_, pos))| Door {
            pos,
            color: CoinColor::PALETTE[i],
        })
        .collect();
    (coins, doors)
}

/// 1..=3 pairs, scaling with level across the 250-level range.
fn pair_count_for_level(level: u32) -> usize {
    (1 + (level.saturating_sub(COIN_THRESHOLD_LEVEL) / 40).min(2)) as usize
}
