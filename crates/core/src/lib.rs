//! Core game logic - the 2048 session, pure and deterministic
//!
//! This crate owns session state and delegates every board transformation to
//! `tui-2048-engine`. It has no dependencies on terminal I/O, which makes it:
//!
//! - **Deterministic**: the same seed and moves produce the same game
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: usable from the terminal front-end, benchmarks or headless tools
//!
//! # Module Structure
//!
//! - [`board`]: the N x N grid with bounds-checked access and occupancy counts
//! - [`game_state`]: the session: moves, spawns, score, terminal flag, reset
//! - [`rng`]: seeded spawn randomness
//! - [`snapshot`]: read-only copies for renderers
//! - [`error`]: construction errors
//!
//! # Game Rules
//!
//! - A move shifts every line toward one edge, merging equal neighbours once
//! - Each merge scores the merged value
//! - A move that changes nothing is ignored (no spawn, no score)
//! - After every accepted move a 2 or a 4 appears on a random empty cell
//! - The game is over when the board is full and no two neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, GameState};
//! use tui_2048_types::{Direction, GameAction};
//!
//! // A seeded 4x4 session starts with one tile
//! let game = GameState::new(4, 12345).unwrap();
//! assert_eq!(game.board().count_empty(), 15);
//!
//! // Sessions can also be seeded with an explicit board
//! let board = Board::from_cells(2, vec![Some(2), Some(2), None, None]).unwrap();
//! let mut game = GameState::from_board(board, 7);
//! let outcome = game.apply_move(Direction::Left);
//! assert!(outcome.moved);
//! assert_eq!(game.score(), 4);
//!
//! game.apply_action(GameAction::Restart);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::GameError;
pub use game_state::{GameState, MoveOutcome};
pub use rng::TileRng;
pub use snapshot::GameSnapshot;
