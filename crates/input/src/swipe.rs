//! Swipe gesture tracking for pointer input.
//!
//! A gesture starts on button press, follows drag updates and resolves on
//! release. Short gestures are ignored; otherwise the dominant axis wins.

use crate::types::{Direction, MIN_SWIPE_DISTANCE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
    end: Option<(u16, u16)>,
    min_distance: u16,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_min_distance(MIN_SWIPE_DISTANCE)
    }

    pub fn with_min_distance(min_distance: u16) -> Self {
        Self {
            start: None,
            end: None,
            min_distance,
        }
    }

    /// Begin a gesture at (x, y), discarding any unfinished one.
    pub fn start(&mut self, x: u16, y: u16) {
        self.start = Some((x, y));
        self.end = Some((x, y));
    }

    /// Record the latest pointer position of an active gesture.
    pub fn update(&mut self, x: u16, y: u16) {
        if self.start.is_some() {
            self.end = Some((x, y));
        }
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Finish the gesture and resolve it to a direction.
    ///
    /// Returns `None` without an active gesture or when the pointer travelled
    /// less than the minimum distance. Ties between axes resolve vertically.
    pub fn end(&mut self) -> Option<Direction> {
        let (sx, sy) = self.start.take()?;
        let (ex, ey) = self.end.take()?;

        let dx = i32::from(ex) - i32::from(sx);
        let dy = i32::from(ey) - i32::from(sy);
        let min = i32::from(self.min_distance);
        if dx * dx + dy * dy < min * min {
            return None;
        }

        if dx.abs() > dy.abs() {
            if dx > 0 {
                Some(Direction::Right)
            } else {
                Some(Direction::Left)
            }
        } else if dy > 0 {
            Some(Direction::Down)
        } else {
            Some(Direction::Up)
        }
    }
}
