//! In-place grid reflections used to derive right/down shifts from left/up.

use crate::types::Cell;

/// Reverse every row (mirror across the vertical axis).
pub fn reflect_horizontal(grid: &mut [Cell], dim: usize) {
    for row in grid.chunks_exact_mut(dim) {
        row.reverse();
    }
}

/// Reverse every column (mirror across the horizontal axis).
pub fn reflect_vertical(grid: &mut [Cell], dim: usize) {
    for row in 0..dim / 2 {
        let mirror = dim - row - 1;
        for col in 0..dim {
            grid.swap(row * dim + col, mirror * dim + col);
        }
    }
}
