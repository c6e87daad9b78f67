//! Core types shared across the crate
//! This module contains pure data types with no external dependencies

/// Highest playable level; shared with persistence collaborators.
pub const MAX_LEVEL: u32 = 250;

/// Levels below this get no procedural coin/door pairs.
pub const COIN_THRESHOLD_LEVEL: u32 = 4;

/// The lava front advances one row after this many completed moves.
pub const LAVA_ADVANCE_EVERY: u32 = 3;

/// Seconds of full visibility granted by a sand checkpoint.
pub const SAND_REVEAL_SECONDS: u32 = 5;

/// Probability (percent) that an interior path cell is icy on ice levels.
pub const ICY_CELL_PERCENT: u32 = 20;

/// Number of levels per stage/theme band.
pub const THEME_BAND: u32 = 50;

/// Integer grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent position one cell away in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Cardinal slide directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit (dx, dy) offset for this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Kind of a rasterized grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Wall,
    Path,
}

/// Coin/door color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoinColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl CoinColor {
    /// Fixed palette order used for procedural pair assignment.
    pub const PALETTE: [CoinColor; 6] = [
        CoinColor::Red,
        CoinColor::Blue,
        CoinColor::Green,
        CoinColor::Yellow,
        CoinColor::Purple,
        CoinColor::Orange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CoinColor::Red => "red",
            CoinColor::Blue => "blue",
            CoinColor::Green => "green",
            CoinColor::Yellow => "yellow",
            CoinColor::Purple => "purple",
            CoinColor::Orange => "orange",
        }
    }
}

/// Collectible keyed to same-color doors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coin {
    pub pos: Position,
    pub color: CoinColor,
}

/// Impassable until any coin of the same color has been collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Door {
    pub pos: Position,
    pub color: CoinColor,
}

/// Game lifecycle status; `Won`/`Lost` are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Actions accepted by the reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Undo,
    Restart,
    NextLevel,
    LoadLevel { level: u32, seed: Option<u32> },
    Tick { seconds: u32 },
    SandRevealTick { seconds: u32 },
}
