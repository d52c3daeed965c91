//! Game state module - one 2048 session
//!
//! Ties the board, the spawn RNG and the engine together. The session owns
//! the grid outright and lends it to the engine for each shift; all mutation
//! goes through [`GameState::apply_move`], [`GameState::apply_action`] and
//! [`GameState::reset`].

use tracing::{debug, error, info};
use tui_2048_engine::{shift_into, ProbeBuffer};

use crate::board::Board;
use crate::error::GameError;
use crate::rng::TileRng;
use crate::snapshot::{hash_cells, GameSnapshot};
use crate::types::{Direction, GameAction};

/// Result of a single [`GameState::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub direction: Direction,
    /// Whether any tile moved. False means the board and score are unchanged.
    pub moved: bool,
    /// Sum of the merge events (points gained this move)
    pub score_delta: u64,
    /// Number of merges (non-zero events)
    pub merges: u32,
    /// Flat index of the tile spawned after the shift
    pub spawned: Option<usize>,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: TileRng,
    score: u64,
    game_over: bool,
    last_direction: Option<Direction>,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Accepted moves in the current episode.
    moves: u32,
    /// Events of the most recent shift. Reused across moves.
    events: Vec<u32>,
    probe: ProbeBuffer,
}

impl GameState {
    /// Start a new session on an empty `dim x dim` board with one spawned tile
    pub fn new(dim: usize, seed: u64) -> Result<Self, GameError> {
        let board = Board::new(dim)?;
        let mut state = Self {
            board,
            rng: TileRng::new(seed),
            score: 0,
            game_over: false,
            last_direction: None,
            episode_id: 0,
            moves: 0,
            events: Vec::with_capacity(dim * dim),
            probe: ProbeBuffer::with_dim(dim),
        };
        state.spawn_tile();
        info!(dim, seed, "session started");
        Ok(state)
    }

    /// Start a session from an explicit board, without spawning.
    ///
    /// Score starts at zero and the terminal flag is computed from `board`.
    pub fn from_board(board: Board, seed: u64) -> Self {
        let dim = board.dim();
        let mut state = Self {
            board,
            rng: TileRng::new(seed),
            score: 0,
            game_over: false,
            last_direction: None,
            episode_id: 0,
            moves: 0,
            events: Vec::with_capacity(dim * dim),
            probe: ProbeBuffer::with_dim(dim),
        };
        state.refresh_game_over();
        state
    }

    pub fn dim(&self) -> usize {
        self.board.dim()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Merge events of the most recent move (empty after a no-op move)
    pub fn last_events(&self) -> &[u32] {
        &self.events
    }

    /// Shift the board toward `direction`.
    ///
    /// If any tile moved, one new tile is spawned and the merge total is
    /// added to the score. A move that changes nothing leaves board and score
    /// untouched. The direction is recorded and the terminal flag recomputed
    /// either way.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let dim = self.board.dim();
        self.events.clear();
        shift_into(self.board.cells_mut(), dim, direction, &mut self.events);
        self.last_direction = Some(direction);

        let mut outcome = MoveOutcome {
            direction,
            moved: !self.events.is_empty(),
            score_delta: 0,
            merges: 0,
            spawned: None,
        };

        if outcome.moved {
            outcome.score_delta = self.events.iter().map(|&e| u64::from(e)).sum();
            outcome.merges = self.events.iter().filter(|&&e| e != 0).count() as u32;
            outcome.spawned = self.spawn_tile();
            self.score = self.score.saturating_add(outcome.score_delta);
            self.moves = self.moves.saturating_add(1);
        }

        self.refresh_game_over();

        debug!(
            direction = direction.as_str(),
            moved = outcome.moved,
            score_delta = outcome.score_delta,
            merges = outcome.merges,
            score = self.score,
            game_over = self.game_over,
            "move applied"
        );
        outcome
    }

    /// Apply an input action. Returns true if the board changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction).moved,
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Discard the current game and start over on a `dim x dim` board.
    ///
    /// The RNG stream continues (it is not reseeded), so consecutive episodes
    /// of one session differ while the whole session stays reproducible.
    pub fn reset(&mut self, dim: usize) -> Result<(), GameError> {
        self.board = Board::new(dim)?;
        self.start_episode();
        Ok(())
    }

    fn restart(&mut self) {
        self.board.clear();
        self.start_episode();
    }

    fn start_episode(&mut self) {
        self.score = 0;
        self.game_over = false;
        self.last_direction = None;
        self.moves = 0;
        self.events.clear();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.spawn_tile();
        info!(
            dim = self.board.dim(),
            episode_id = self.episode_id,
            "session reset"
        );
    }

    /// Place a 2 or a 4 on a uniformly chosen empty cell.
    ///
    /// Returns the flat index of the new tile, or `None` if the board was
    /// full. The session never spawns onto a full board; a `None` here is an
    /// internal invariant violation.
    pub fn spawn_tile(&mut self) -> Option<usize> {
        let empty = self.board.count_empty();
        if empty == 0 {
            error!(
                dim = self.board.dim(),
                "spawn requested on a full board"
            );
            debug_assert!(empty > 0, "spawn requested on a full board");
            return None;
        }

        let nth = self.rng.next_index(empty);
        let idx = self.board.nth_empty(nth)?;
        let value = self.rng.tile_value();
        self.board.place(idx, value);
        Some(idx)
    }

    fn refresh_game_over(&mut self) {
        self.game_over = self
            .probe
            .is_terminal(self.board.cells(), self.board.dim());
    }

    /// Fill `out` with the current state, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.dim = self.board.dim();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.board_hash = hash_cells(&out.cells);
        out.score = self.score;
        out.best_tile = self.board.max_tile();
        out.empty = self.board.count_empty();
        out.game_over = self.game_over;
        out.last_direction = self.last_direction;
        out.episode_id = self.episode_id;
        out.moves = self.moves;
        out.seed = self.rng.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
