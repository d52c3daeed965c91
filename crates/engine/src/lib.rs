//! Grid transform engine - pure shift/merge functions over a flat grid
//!
//! The engine owns nothing. Every function borrows a row-major
//! `&mut [Cell]` of length `dim * dim` for the duration of one call, transforms
//! it in place and returns (or appends) merge events.
//!
//! # Merge Events
//!
//! One event per tile movement within a shift:
//!
//! - `0`: the tile slid into an empty cell
//! - `v > 0`: two tiles merged into a tile of value `v`
//!
//! The sum of a shift's events is its score delta. An empty event list means
//! the grid did not change at all, so callers should only accept the move
//! (and spawn a tile) when at least one event was emitted.
//!
//! # Rules
//!
//! - Lines are compacted toward the leading edge of the shift direction.
//! - A tile produced by a merge cannot merge again in the same shift.
//! - Right and down shifts are left and up shifts under reflection.
//!
//! # Example
//!
//! ```
//! use tui_2048_engine::{is_terminal, shift_left};
//!
//! let mut grid = vec![
//!     None,    Some(0), None,
//!     Some(1), Some(1), Some(1),
//!     None,    Some(2), Some(1),
//! ];
//! let events = shift_left(&mut grid, 3);
//! assert!(!events.is_empty());
//! assert_eq!(grid, vec![
//!     Some(0), None,    None,
//!     Some(2), Some(1), None,
//!     Some(2), Some(1), None,
//! ]);
//!
//! assert!(is_terminal(&[Some(0), Some(1), Some(2), Some(3)], 2));
//! ```

pub mod probe;
pub mod reflect;
pub mod shift;

pub use tui_2048_types as types;

pub use probe::{has_moves, is_terminal, ProbeBuffer};
pub use reflect::{reflect_horizontal, reflect_vertical};
pub use shift::{
    shift, shift_down, shift_down_into, shift_into, shift_left, shift_left_into, shift_right,
    shift_right_into, shift_up, shift_up_into, MergeEvents,
};

/// Number of empty cells in `grid`.
pub fn count_empty(grid: &[types::Cell]) -> usize {
    grid.iter().filter(|cell| cell.is_none()).count()
}

/// Number of occupied cells in `grid`.
pub fn count_occupied(grid: &[types::Cell]) -> usize {
    grid.len() - count_empty(grid)
}
