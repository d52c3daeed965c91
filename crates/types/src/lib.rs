//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by the engine, the game session,
//! input translation and rendering. Everything here is plain data with no
//! external dependencies.
//!
//! # Grid Layout
//!
//! A grid of dimension `dim` is a flat, row-major sequence of `dim * dim`
//! cells (`index = row * dim + col`). Each cell is either empty (`None`) or a
//! tile value (`Some(v)`).
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_DIM` | 2 | Smallest playable grid dimension |
//! | `DEFAULT_DIM` | 4 | Classic 4x4 board |
//! | `MAX_DIM` | 12 | Largest grid the terminal front-end accepts |
//! | `MIN_SWIPE_DISTANCE` | 5 | Mouse drag length (cells) recognised as a swipe |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{tile_rank, Direction, GameAction};
//!
//! // Parse a direction token (case-insensitive)
//! assert_eq!(Direction::from_str("left"), Some(Direction::Left));
//! assert_eq!(Direction::from_str("ArrowUp"), Some(Direction::Up));
//! assert_eq!(Direction::from_str("sideways"), None);
//!
//! // Actions wrap directions
//! assert_eq!(GameAction::from_str("up"), Some(GameAction::Move(Direction::Up)));
//!
//! // Tile rank is log2 of the value
//! assert_eq!(tile_rank(2), 1);
//! assert_eq!(tile_rank(2048), 11);
//! ```

/// Smallest playable grid dimension
pub const MIN_DIM: usize = 2;

/// Default grid dimension (classic 4x4)
pub const DEFAULT_DIM: usize = 4;

/// Largest grid dimension accepted by the terminal front-end.
///
/// The session itself only enforces [`MIN_DIM`].
pub const MAX_DIM: usize = 12;

/// Minimum Euclidean length (in terminal cells) of a mouse drag that counts as a swipe
pub const MIN_SWIPE_DISTANCE: u16 = 5;

/// Smallest tile value a spawn can produce
pub const SPAWN_LOW: u32 = 2;

/// Largest tile value a spawn can produce
pub const SPAWN_HIGH: u32 = 4;

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(v)`: Tile holding value `v`
pub type Cell = Option<u32>;

/// The four cardinal shift directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in dispatch order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a direction token (case-insensitive)
    ///
    /// Accepts plain names (`"up"`), single letters (`"u"`) and browser-style
    /// key names (`"ArrowUp"`). Anything else is `None`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" | "arrowup" => Some(Direction::Up),
            "down" | "d" | "arrowdown" => Some(Direction::Down),
            "left" | "l" | "arrowleft" => Some(Direction::Left),
            "right" | "r" | "arrowright" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions that can be applied to a session
///
/// Produced by keyboard and mouse input translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift and merge every line toward the given edge
    Move(Direction),
    /// Discard the current game and start a fresh one
    Restart,
}

impl GameAction {
    /// Parse an action token
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("Right"), Some(GameAction::Move(Direction::Right)));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("restart") {
            return Some(GameAction::Restart);
        }
        Direction::from_str(s).map(GameAction::Move)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(direction) => direction.as_str(),
            GameAction::Restart => "restart",
        }
    }
}

/// Display rank of a tile value (log2 of the value).
///
/// `tile_rank(2) == 1`, `tile_rank(4) == 2`. Zero maps to rank 0.
pub fn tile_rank(value: u32) -> u32 {
    if value == 0 {
        0
    } else {
        31 - value.leading_zeros()
    }
}
