//! Read-only view of a session for renderers.
//!
//! A snapshot can be refilled in place with
//! [`GameState::snapshot_into`](crate::GameState::snapshot_into), which keeps
//! the cell buffer allocation across frames.

use crate::types::{Cell, Direction, DEFAULT_DIM};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub dim: usize,
    /// Row-major cells, `dim * dim` long
    pub cells: Vec<Cell>,
    /// FNV-1a hash of `cells`; changes whenever the visible board changes
    pub board_hash: u64,
    pub score: u64,
    pub best_tile: u32,
    pub empty: usize,
    pub game_over: bool,
    pub last_direction: Option<Direction>,
    pub episode_id: u32,
    pub moves: u32,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.dim = DEFAULT_DIM;
        self.cells.clear();
        self.cells.resize(DEFAULT_DIM * DEFAULT_DIM, None);
        self.board_hash = hash_cells(&self.cells);
        self.score = 0;
        self.best_tile = 0;
        self.empty = DEFAULT_DIM * DEFAULT_DIM;
        self.game_over = false;
        self.last_direction = None;
        self.episode_id = 0;
        self.moves = 0;
        self.seed = 0;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Cell at (row, col), `None` when out of bounds or empty
    pub fn tile(&self, row: usize, col: usize) -> Cell {
        if row >= self.dim || col >= self.dim {
            return None;
        }
        self.cells.get(row * self.dim + col).copied().flatten()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            dim: DEFAULT_DIM,
            cells: Vec::new(),
            board_hash: 0,
            score: 0,
            best_tile: 0,
            empty: 0,
            game_over: false,
            last_direction: None,
            episode_id: 0,
            moves: 0,
            seed: 0,
        };
        s.clear();
        s
    }
}

/// FNV-1a 64-bit over the cells (tag byte + little-endian value per cell).
pub fn hash_cells(cells: &[Cell]) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    let mut feed = |b: u8| {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    };
    for cell in cells {
        match cell {
            None => feed(0),
            Some(v) => {
                feed(1);
                for b in v.to_le_bytes() {
                    feed(b);
                }
            }
        }
    }
    h
}
