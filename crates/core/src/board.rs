//! Board module - the N x N tile grid
//!
//! The board is a flat, row-major vector of `dim * dim` cells. It is owned by
//! the session and lent to the engine as `&mut [Cell]` for each shift.
//! Coordinates: (row, col), both in `0..dim`, row 0 at the top.

use crate::error::GameError;
use crate::types::{Cell, MIN_DIM};

/// The game grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dim: usize,
    /// Flat array of cells, row-major order (row * dim + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given dimension
    pub fn new(dim: usize) -> Result<Self, GameError> {
        let len = Self::cell_count(dim)?;
        Ok(Self {
            dim,
            cells: vec![None; len],
        })
    }

    /// Build a board from explicit cells
    pub fn from_cells(dim: usize, cells: Vec<Cell>) -> Result<Self, GameError> {
        let expected = Self::cell_count(dim)?;
        if cells.len() != expected {
            return Err(GameError::CellCountMismatch {
                dim,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { dim, cells })
    }

    fn cell_count(dim: usize) -> Result<usize, GameError> {
        if dim < MIN_DIM {
            return Err(GameError::InvalidDimension { dim });
        }
        dim.checked_mul(dim)
            .ok_or(GameError::InvalidDimension { dim })
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.dim || col >= self.dim {
            return None;
        }
        Some(row * self.dim + col)
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Get cell at (row, col). Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn count_empty(&self) -> usize {
        tui_2048_engine::count_empty(&self.cells)
    }

    pub fn count_occupied(&self) -> usize {
        tui_2048_engine::count_occupied(&self.cells)
    }

    /// Flat index of the `n`-th empty cell in row-major order
    pub fn nth_empty(&self, n: usize) -> Option<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .nth(n)
            .map(|(idx, _)| idx)
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub(crate) fn place(&mut self, idx: usize, value: u32) {
        self.cells[idx] = Some(value);
    }
}
