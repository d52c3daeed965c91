//! Frame pacing for the terminal loop.
//!
//! The board only changes on input, so a frame is keyed by a [`fingerprint`]
//! of what the view draws. A new fingerprint redraws at once; an unchanged
//! one is repainted at most once per interval to repair terminals that
//! dropped output.

use crate::core::GameSnapshot;

#[derive(Debug, Clone, Copy)]
struct Drawn {
    fingerprint: u64,
    at_ms: u64,
}

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    repaint_ms: u64,
    last: Option<Drawn>,
}

impl RenderThrottle {
    pub fn new(repaint_ms: u64) -> Self {
        Self {
            repaint_ms,
            last: None,
        }
    }

    /// Whether `snap` should be drawn at `now_ms`. A `true` answer records
    /// the frame as drawn.
    pub fn should_render(&mut self, now_ms: u64, snap: &GameSnapshot) -> bool {
        let fingerprint = fingerprint(snap);
        let due = match self.last {
            None => true,
            Some(last) if last.fingerprint != fingerprint => true,
            Some(last) => now_ms.saturating_sub(last.at_ms) >= self.repaint_ms,
        };
        if due {
            self.last = Some(Drawn { fingerprint, at_ms: now_ms });
        }
        due
    }

    /// Forget the last frame so the next call renders.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Fingerprint of everything the view draws from a snapshot.
///
/// The board hash covers the tiles; panel fields are folded in on top.
pub fn fingerprint(snap: &GameSnapshot) -> u64 {
    let last = snap.last_direction.map_or(0, |d| d as u64 + 1);
    [
        snap.score,
        u64::from(snap.moves),
        u64::from(snap.episode_id),
        u64::from(snap.game_over),
        snap.dim as u64,
        last,
    ]
    .into_iter()
    .fold(snap.board_hash, |h, v| (h ^ v).wrapping_mul(0x0000_0100_0000_01B3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    #[test]
    fn reset_forces_next_frame() {
        let snap = GameSnapshot::default();
        let mut t = RenderThrottle::new(1000);
        assert!(t.should_render(0, &snap));
        assert!(!t.should_render(5, &snap));
        t.reset();
        assert!(t.should_render(6, &snap));
    }

    #[test]
    fn fingerprint_tracks_panel_fields() {
        let snap = GameSnapshot::default();
        let base = fingerprint(&snap);

        let mut scored = snap.clone();
        scored.score = 4;
        assert_ne!(fingerprint(&scored), base);

        let mut over = snap.clone();
        over.game_over = true;
        assert_ne!(fingerprint(&over), base);

        let mut restarted = snap.clone();
        restarted.episode_id = 1;
        assert_ne!(fingerprint(&restarted), base);

        let mut turned = snap.clone();
        turned.last_direction = Some(Direction::Up);
        assert_ne!(fingerprint(&turned), base);

        assert_eq!(fingerprint(&snap.clone()), base);
    }
}
