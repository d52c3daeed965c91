//! Directional shift-and-merge over a flat row-major grid.
//!
//! Every operation works in place on a borrowed `&mut [Cell]` and reports one
//! merge event per tile movement: the merged value for a merge, `0` for a
//! plain slide. An empty event list means the grid was left untouched.
//!
//! Left and up share one line-compaction routine (a row is a line with
//! stride 1, a column a line with stride `dim`). Right and down reuse them
//! through reflection.

use crate::reflect::{reflect_horizontal, reflect_vertical};
use crate::types::{Cell, Direction};

/// Merge events emitted by a single shift, in line order.
pub type MergeEvents = Vec<u32>;

/// Shift every row toward column 0.
///
/// # Examples
///
/// ```
/// use tui_2048_engine::shift_left;
///
/// let mut grid = vec![Some(2), Some(2), None, Some(4)];
/// let events = shift_left(&mut grid, 2);
/// assert_eq!(grid, vec![Some(4), None, Some(4), None]);
/// assert_eq!(events, vec![4, 0]);
/// ```
pub fn shift_left(grid: &mut [Cell], dim: usize) -> MergeEvents {
    let mut events = MergeEvents::new();
    shift_left_into(grid, dim, &mut events);
    events
}

/// Shift every column toward row 0.
pub fn shift_up(grid: &mut [Cell], dim: usize) -> MergeEvents {
    let mut events = MergeEvents::new();
    shift_up_into(grid, dim, &mut events);
    events
}

/// Shift every row toward the last column.
pub fn shift_right(grid: &mut [Cell], dim: usize) -> MergeEvents {
    let mut events = MergeEvents::new();
    shift_right_into(grid, dim, &mut events);
    events
}

/// Shift every column toward the last row.
pub fn shift_down(grid: &mut [Cell], dim: usize) -> MergeEvents {
    let mut events = MergeEvents::new();
    shift_down_into(grid, dim, &mut events);
    events
}

/// Dispatch to the shift matching `direction`.
pub fn shift(grid: &mut [Cell], dim: usize, direction: Direction) -> MergeEvents {
    let mut events = MergeEvents::new();
    shift_into(grid, dim, direction, &mut events);
    events
}

/// Like [`shift`], but appends events to a caller-owned buffer.
///
/// Returns the number of events appended. The buffer is not cleared first,
/// so callers can reuse one allocation across moves.
pub fn shift_into(grid: &mut [Cell], dim: usize, direction: Direction, events: &mut Vec<u32>) -> usize {
    match direction {
        Direction::Up => shift_up_into(grid, dim, events),
        Direction::Down => shift_down_into(grid, dim, events),
        Direction::Left => shift_left_into(grid, dim, events),
        Direction::Right => shift_right_into(grid, dim, events),
    }
}

pub fn shift_left_into(grid: &mut [Cell], dim: usize, events: &mut Vec<u32>) -> usize {
    debug_assert_eq!(grid.len(), dim * dim);
    let before = events.len();
    for row in 0..dim {
        compact_line(grid, row * dim, 1, dim, events);
    }
    events.len() - before
}

pub fn shift_up_into(grid: &mut [Cell], dim: usize, events: &mut Vec<u32>) -> usize {
    debug_assert_eq!(grid.len(), dim * dim);
    let before = events.len();
    for col in 0..dim {
        compact_line(grid, col, dim, dim, events);
    }
    events.len() - before
}

pub fn shift_right_into(grid: &mut [Cell], dim: usize, events: &mut Vec<u32>) -> usize {
    reflect_horizontal(grid, dim);
    let n = shift_left_into(grid, dim, events);
    reflect_horizontal(grid, dim);
    n
}

pub fn shift_down_into(grid: &mut [Cell], dim: usize, events: &mut Vec<u32>) -> usize {
    reflect_vertical(grid, dim);
    let n = shift_up_into(grid, dim, events);
    reflect_vertical(grid, dim);
    n
}

/// Compact one line of `len` cells starting at `start`, stepping by `stride`,
/// toward its first cell.
///
/// `target` is the compaction pointer (a position within the line). It only
/// advances past a cell once that cell is final: either it just absorbed a
/// merge, or it holds a tile the one being slid cannot merge with. A merged
/// cell is therefore never revisited, which enforces merge-once-per-shift.
/// Merges whose sum does not fit in a `u32` are refused, so every tile stays
/// a power of two.
fn compact_line(grid: &mut [Cell], start: usize, stride: usize, len: usize, events: &mut Vec<u32>) {
    let at = |pos: usize| start + pos * stride;
    let mut target = 0;

    // Position 0 never moves.
    for source in 1..len {
        while target < source {
            let Some(value) = grid[at(source)] else {
                break;
            };
            match grid[at(target)] {
                None => {
                    grid[at(target)] = Some(value);
                    grid[at(source)] = None;
                    events.push(0);
                }
                Some(resident) if resident == value => {
                    // 2^31 is the largest tile; a pair of them stays apart.
                    let Some(merged) = resident.checked_add(value) else {
                        target += 1;
                        continue;
                    };
                    grid[at(target)] = Some(merged);
                    grid[at(source)] = None;
                    events.push(merged);
                    target += 1;
                }
                Some(_) => {
                    target += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_line_slides_into_gap() {
        let mut line = vec![None, Some(2), None, Some(4)];
        let mut events = Vec::new();
        compact_line(&mut line, 0, 1, 4, &mut events);
        assert_eq!(line, vec![Some(2), Some(4), None, None]);
        assert_eq!(events, vec![0, 0]);
    }

    #[test]
    fn test_compact_line_merges_once_per_shift() {
        // 2 2 4 _ => 4 4 _ _ (the fresh 4 must not absorb the old 4)
        let mut line = vec![Some(2), Some(2), Some(4), None];
        let mut events = Vec::new();
        compact_line(&mut line, 0, 1, 4, &mut events);
        assert_eq!(line, vec![Some(4), Some(4), None, None]);
        assert_eq!(events, vec![4, 0]);
    }

    #[test]
    fn test_compact_line_four_equal_tiles_make_two_merges() {
        let mut line = vec![Some(2); 4];
        let mut events = Vec::new();
        compact_line(&mut line, 0, 1, 4, &mut events);
        assert_eq!(line, vec![Some(4), Some(4), None, None]);
        assert_eq!(events, vec![4, 0, 4]);
    }

    #[test]
    fn test_compact_line_three_equal_tiles_merge_leading_pair() {
        let mut line = vec![Some(8), Some(8), Some(8)];
        let mut events = Vec::new();
        compact_line(&mut line, 0, 1, 3, &mut events);
        assert_eq!(line, vec![Some(16), Some(8), None]);
        assert_eq!(events, vec![16, 0]);
    }

    #[test]
    fn test_compact_line_with_stride_only_touches_its_column() {
        // 2x2 grid, column 1 holds [_, 2]; column 0 must be left alone.
        let mut grid = vec![Some(4), None, None, Some(2)];
        let mut events = Vec::new();
        compact_line(&mut grid, 1, 2, 2, &mut events);
        assert_eq!(grid, vec![Some(4), Some(2), None, None]);
        assert_eq!(events, vec![0]);
    }

    #[test]
    fn test_compact_line_full_distinct_line_is_untouched() {
        let mut line = vec![Some(2), Some(4), Some(8), Some(16)];
        let mut events = Vec::new();
        compact_line(&mut line, 0, 1, 4, &mut events);
        assert_eq!(line, vec![Some(2), Some(4), Some(8), Some(16)]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_compact_line_refuses_merge_past_largest_tile() {
        let top = 1u32 << 31;
        let mut line = vec![Some(top), Some(top)];
        let mut events = Vec::new();
        compact_line(&mut line, 0, 1, 2, &mut events);
        assert_eq!(line, vec![Some(top), Some(top)]);
        assert!(events.is_empty());

        // The pair still slides, and smaller tiles behind it still merge.
        let mut line = vec![None, Some(top), Some(top), Some(2), Some(2)];
        compact_line(&mut line, 0, 1, 5, &mut events);
        assert_eq!(line, vec![Some(top), Some(top), Some(4), None, None]);
        assert_eq!(events, vec![0, 0, 0, 4]);
    }

    #[test]
    fn test_compact_line_on_seeded_lines() {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = ChaCha8Rng::seed_from_u64(0x2048_0001);
        for _ in 0..1000 {
            let len = rng.gen_range(2..=8);
            let line: Vec<Cell> = (0..len)
                .map(|_| {
                    if rng.gen_bool(0.4) {
                        None
                    } else {
                        Some(2u32 << rng.gen_range(0..4))
                    }
                })
                .collect();

            let mut out = line.clone();
            let mut events = Vec::new();
            compact_line(&mut out, 0, 1, len, &mut events);

            let mass = |l: &[Cell]| l.iter().flatten().map(|&v| u64::from(v)).sum::<u64>();
            assert_eq!(mass(&out), mass(&line), "{:?}", line);

            // Tiles end up packed at the front of the line.
            let occupied = out.iter().filter(|c| c.is_some()).count();
            assert!(out[..occupied].iter().all(Option::is_some), "{:?}", out);

            let merges = events.iter().filter(|&&e| e != 0).count();
            assert_eq!(occupied + merges, line.iter().filter(|c| c.is_some()).count());
            assert_eq!(events.is_empty(), out == line);
        }
    }

    #[test]
    fn test_shift_into_appends_without_clearing() {
        let mut grid = vec![None, Some(2), None, None];
        let mut events = vec![99];
        let n = shift_into(&mut grid, 2, Direction::Left, &mut events);
        assert_eq!(n, 1);
        assert_eq!(events, vec![99, 0]);
    }
}
