use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.row, 7);
    assert_eq!(pos.col, 7);
    assert_eq!(pos, Pos::CENTER);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
}

#[test]
fn test_pos_try_new() {
    assert_eq!(Pos::try_new(3, 4), Some(Pos::new(3, 4)));
    assert_eq!(Pos::try_new(15, 0), None);
    assert_eq!(Pos::try_new(0, 99), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_ordering_is_row_major() {
    let all: Vec<Pos> = Pos::all().collect();
    assert_eq!(all.len(), TOTAL_CELLS);
    assert_eq!(all[0], Pos::new(0, 0));
    assert_eq!(all[1], Pos::new(0, 1));
    assert_eq!(all[15], Pos::new(1, 0));
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 14).to_index(), 14);
    assert_eq!(Pos::new(14, 0).to_index(), 210);
    assert_eq!(Pos::new(14, 14).to_index(), 224);
}

#[test]
fn test_chebyshev() {
    assert_eq!(Pos::new(7, 7).chebyshev(Pos::new(7, 7)), 0);
    assert_eq!(Pos::new(7, 7).chebyshev(Pos::new(8, 6)), 1);
    assert_eq!(Pos::new(7, 7).chebyshev(Pos::new(9, 5)), 2);
    assert_eq!(Pos::new(0, 0).chebyshev(Pos::new(3, 1)), 3);
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new();
    let pos = Pos::new(4, 9);
    board.place_stone(pos, Stone::White);
    assert_eq!(board.get(pos), Stone::White);
    assert!(!board.is_empty(pos));
    assert_eq!(board.stone_count(), 1);

    board.remove_stone(pos);
    assert_eq!(board.get(pos), Stone::Empty);
    assert!(board.is_board_empty());
}

#[test]
fn test_place_empty_is_noop() {
    let mut board = Board::new();
    board.place_stone(Pos::new(1, 1), Stone::Empty);
    assert!(board.is_board_empty());
}

#[test]
fn test_iter_ones_row_major() {
    let mut board = Board::new();
    board.place_stone(Pos::new(14, 14), Stone::Black);
    board.place_stone(Pos::new(0, 3), Stone::Black);
    board.place_stone(Pos::new(8, 2), Stone::Black);

    let stones: Vec<Pos> = board.black.iter_ones().collect();
    assert_eq!(
        stones,
        vec![Pos::new(0, 3), Pos::new(8, 2), Pos::new(14, 14)]
    );
}

#[test]
fn test_snapshot_is_independent() {
    let mut live = Board::new();
    live.place_stone(Pos::new(7, 7), Stone::Black);

    let mut snapshot = live;
    snapshot.place_stone(Pos::new(7, 8), Stone::White);

    assert_eq!(live.stone_count(), 1);
    assert_eq!(snapshot.stone_count(), 2);
    assert!(live.is_empty(Pos::new(7, 8)));
}

#[test]
fn test_has_neighbor_radius() {
    let mut board = Board::new();
    board.place_stone(Pos::new(7, 7), Stone::Black);

    assert!(board.has_neighbor(Pos::new(5, 5), 2));
    assert!(board.has_neighbor(Pos::new(9, 8), 2));
    assert!(!board.has_neighbor(Pos::new(4, 7), 2));
    assert!(!board.has_neighbor(Pos::new(0, 0), 2));
}

#[test]
fn test_has_neighbor_at_edge() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 0), Stone::White);
    assert!(board.has_neighbor(Pos::new(2, 2), 2));
    assert!(board.has_neighbor(Pos::new(0, 1), 2));
    assert!(!board.has_neighbor(Pos::new(0, 3), 2));
}

#[test]
fn test_empty_cells_and_full() {
    let mut board = Board::new();
    assert_eq!(board.empty_cells().count(), TOTAL_CELLS);
    for (i, pos) in Pos::all().enumerate() {
        let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
        board.place_stone(pos, stone);
    }
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}

#[test]
fn test_swap_colors() {
    let mut board = Board::new();
    board.place_stone(Pos::new(1, 2), Stone::Black);
    board.place_stone(Pos::new(3, 4), Stone::White);

    let swapped = board.with_colors_swapped();
    assert_eq!(swapped.get(Pos::new(1, 2)), Stone::White);
    assert_eq!(swapped.get(Pos::new(3, 4)), Stone::Black);
    assert_eq!(swapped.with_colors_swapped(), board);
}
