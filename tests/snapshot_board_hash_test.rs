use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::types::{Cell, Direction};

fn fnv1a64_bytes(bytes: impl Iterator<Item = u8>) -> u64 {
    // FNV-1a 64-bit.
    let mut h: u64 = 0xcbf29ce484222325;
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

fn fnv1a64_cells(cells: &[Cell]) -> u64 {
    fnv1a64_bytes(cells.iter().flat_map(|cell| {
        let mut bytes = Vec::with_capacity(5);
        match cell {
            None => bytes.push(0),
            Some(v) => {
                bytes.push(1);
                bytes.extend_from_slice(&v.to_le_bytes());
            }
        }
        bytes
    }))
}

#[test]
fn snapshot_into_sets_board_hash() {
    let mut gs = GameState::new(4, 1).unwrap();

    let mut snap = GameSnapshot::default();
    gs.snapshot_into(&mut snap);
    assert_eq!(snap.board_hash, fnv1a64_cells(&snap.cells));

    let _ = gs.apply_move(Direction::Left);
    let _ = gs.apply_move(Direction::Up);

    gs.snapshot_into(&mut snap);
    assert_eq!(snap.board_hash, fnv1a64_cells(&snap.cells));
}

#[test]
fn board_hash_changes_only_with_the_board() {
    let mut gs = GameState::new(4, 3).unwrap();
    let mut snap = GameSnapshot::default();
    gs.snapshot_into(&mut snap);
    let before = snap.board_hash;

    // Refilling without changes keeps the hash.
    gs.snapshot_into(&mut snap);
    assert_eq!(snap.board_hash, before);

    // An accepted move always spawns, so the board differs.
    let moved = Direction::ALL
        .into_iter()
        .any(|dir| gs.apply_move(dir).moved);
    assert!(moved);
    gs.snapshot_into(&mut snap);
    assert_ne!(snap.board_hash, before);
}

#[test]
fn snapshot_reflects_session_fields() {
    let mut gs = GameState::new(3, 8).unwrap();
    for dir in Direction::ALL {
        gs.apply_move(dir);
    }
    let snap = gs.snapshot();
    assert_eq!(snap.dim, 3);
    assert_eq!(snap.cells.len(), 9);
    assert_eq!(snap.score, gs.score());
    assert_eq!(snap.moves, gs.moves());
    assert_eq!(snap.empty, gs.board().count_empty());
    assert_eq!(snap.best_tile, gs.board().max_tile());
    assert_eq!(snap.last_direction, Some(Direction::Right));
    assert_eq!(snap.seed, 8);
}
