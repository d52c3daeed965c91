//! Integration tests for the session driven through the input layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tui_2048::core::{Board, GameError, GameState};
use tui_2048::engine::shift;
use tui_2048::input::{handle_key_event, handle_mouse_event, SwipeTracker};
use tui_2048::types::{Cell, Direction, GameAction};

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(4, 12345).unwrap();
    assert_eq!(state.dim(), 4);
    assert_eq!(state.board().count_occupied(), 1);
    assert_eq!(state.score(), 0);
    assert!(!state.game_over());

    // Play until the game ends or a cap is hit, cycling directions.
    let mut turns = 0;
    while !state.game_over() && turns < 10_000 {
        let dir = Direction::ALL[turns % 4];
        state.apply_move(dir);
        turns += 1;
    }
    assert!(state.game_over());
    assert!(state.score() > 0);

    assert!(state.apply_action(GameAction::Restart));
    assert_eq!(state.score(), 0);
    assert_eq!(state.moves(), 0);
    assert_eq!(state.episode_id(), 1);
    assert!(!state.game_over());
    assert_eq!(state.board().count_occupied(), 1);
}

#[test]
fn test_invalid_dimensions_are_rejected() {
    assert!(matches!(
        GameState::new(1, 1),
        Err(GameError::InvalidDimension { dim: 1 })
    ));
    assert!(matches!(
        GameState::new(0, 1),
        Err(GameError::InvalidDimension { dim: 0 })
    ));
    assert!(GameState::new(2, 1).is_ok());
}

#[test]
fn test_each_accepted_move_spawns_exactly_one_tile() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for seed in 0..20u64 {
        let dim = 2 + (seed as usize % 4);
        let mut state = GameState::new(dim, seed).unwrap();

        for _ in 0..200 {
            let dir = Direction::ALL[rng.gen_range(0..4)];

            let before: Vec<Cell> = state.board().cells().to_vec();
            let score_before = state.score();
            let mut shifted = before.clone();
            let events = shift(&mut shifted, dim, dir);

            let outcome = state.apply_move(dir);
            assert_eq!(outcome.moved, !events.is_empty());

            if outcome.moved {
                let empty_after_shift = shifted.iter().filter(|c| c.is_none()).count();
                assert_eq!(state.board().count_empty(), empty_after_shift - 1);
                let gained: u64 = events.iter().map(|&e| u64::from(e)).sum();
                assert_eq!(state.score(), score_before + gained);

                let spawned = outcome.spawned.unwrap();
                assert_eq!(shifted[spawned], None);
                assert!(matches!(state.board().cells()[spawned], Some(2) | Some(4)));
            } else {
                assert_eq!(state.board().cells(), &before[..]);
                assert_eq!(state.score(), score_before);
            }

            if state.game_over() {
                break;
            }
        }
    }
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut s = GameState::new(4, seed).unwrap();
        for i in 0..100 {
            s.apply_move(Direction::ALL[(i * 7 + 3) % 4]);
        }
        s.snapshot()
    };
    assert_eq!(play(9), play(9));
}

#[test]
fn test_game_over_board_from_explicit_cells() {
    let board = Board::from_cells(2, vec![Some(0), Some(1), Some(2), Some(3)]).unwrap();
    let state = GameState::from_board(board, 1);
    assert!(state.game_over());

    let board = Board::from_cells(2, vec![None; 4]).unwrap();
    let state = GameState::from_board(board, 1);
    assert!(!state.game_over());
}

#[test]
fn test_keys_drive_the_session() {
    let board = Board::from_cells(2, vec![Some(2), Some(2), None, None]).unwrap();
    let mut state = GameState::from_board(board, 3);

    let action = handle_key_event(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)).unwrap();
    assert!(state.apply_action(action));
    assert_eq!(state.score(), 4);
    assert_eq!(state.board().get(0, 0), Some(Some(4)));
    assert_eq!(state.last_direction(), Some(Direction::Left));

    // Unmapped keys never reach the session.
    assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);

    let restart = handle_key_event(KeyEvent::from(KeyCode::Char('r'))).unwrap();
    state.apply_action(restart);
    assert_eq!(state.score(), 0);
    assert_eq!(state.board().count_occupied(), 1);
}

#[test]
fn test_mouse_swipe_drives_the_session() {
    let board = Board::from_cells(2, vec![Some(2), None, Some(2), None]).unwrap();
    let mut state = GameState::from_board(board, 3);
    let mut tracker = SwipeTracker::new();

    let ev = |kind, column, row| MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };

    assert_eq!(
        handle_mouse_event(&mut tracker, ev(MouseEventKind::Down(MouseButton::Left), 10, 10)),
        None
    );
    handle_mouse_event(&mut tracker, ev(MouseEventKind::Drag(MouseButton::Left), 10, 4));
    let action = handle_mouse_event(&mut tracker, ev(MouseEventKind::Up(MouseButton::Left), 11, 2))
        .unwrap();
    assert_eq!(action, GameAction::Move(Direction::Up));

    assert!(state.apply_action(action));
    assert_eq!(state.score(), 4);
    assert_eq!(state.board().get(0, 0), Some(Some(4)));
}

#[test]
fn test_no_op_move_keeps_board_but_records_direction() {
    let board = Board::from_cells(2, vec![Some(2), None, Some(4), None]).unwrap();
    let mut state = GameState::from_board(board, 5);
    let outcome = state.apply_move(Direction::Left);
    assert!(!outcome.moved);
    assert_eq!(outcome.spawned, None);
    assert_eq!(state.moves(), 0);
    assert_eq!(state.board().count_occupied(), 2);
    assert_eq!(state.last_direction(), Some(Direction::Left));
}
