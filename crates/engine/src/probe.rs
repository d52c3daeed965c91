//! Terminal-state probe: does any move remain?
//!
//! A grid with an empty cell always has a move. A full grid can only change
//! through a merge, and any merge available to the right (or down) is also
//! available to the left (or up), so probing left and up on a scratch copy is
//! enough. The live grid is never touched.

use crate::shift::{shift_left_into, shift_up_into};
use crate::types::Cell;

/// Reusable scratch space for terminal probes.
///
/// Holding one of these across moves keeps the probe allocation-free once
/// the buffers have grown to the grid size.
#[derive(Debug, Clone, Default)]
pub struct ProbeBuffer {
    scratch: Vec<Cell>,
    events: Vec<u32>,
}

impl ProbeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the buffers for a `dim x dim` grid.
    pub fn with_dim(dim: usize) -> Self {
        Self {
            scratch: Vec::with_capacity(dim * dim),
            events: Vec::with_capacity(dim * dim),
        }
    }

    /// Returns true if neither a left nor an up shift of `grid` would emit
    /// any event and the grid has no empty cell.
    pub fn is_terminal(&mut self, grid: &[Cell], dim: usize) -> bool {
        if grid.iter().any(Option::is_none) {
            return false;
        }

        self.reload(grid);
        if shift_left_into(&mut self.scratch, dim, &mut self.events) > 0 {
            return false;
        }

        // A full grid with no left merge is unchanged by the left probe, so
        // the scratch copy still mirrors `grid`.
        shift_up_into(&mut self.scratch, dim, &mut self.events) == 0
    }

    fn reload(&mut self, grid: &[Cell]) {
        self.scratch.clear();
        self.scratch.extend_from_slice(grid);
        self.events.clear();
    }
}

/// One-shot terminal check. Allocates a fresh [`ProbeBuffer`].
///
/// # Examples
///
/// ```
/// use tui_2048_engine::is_terminal;
///
/// assert!(is_terminal(&[Some(0), Some(1), Some(2), Some(3)], 2));
/// assert!(!is_terminal(&[None, None, None, None], 2));
/// assert!(!is_terminal(&[Some(2), Some(2), Some(0), Some(1)], 2));
/// ```
pub fn is_terminal(grid: &[Cell], dim: usize) -> bool {
    ProbeBuffer::new().is_terminal(grid, dim)
}

/// Convenience inverse of [`is_terminal`].
pub fn has_moves(grid: &[Cell], dim: usize) -> bool {
    !is_terminal(grid, dim)
}
