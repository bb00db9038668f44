//! Exhaustive checks of win and draw detection over every 3x3 board.

use tictactoe_core::{
    Board, Player, Position, Square, WIN_PATTERNS, check_draw, check_win, find_winner,
    relevant_pattern_indices,
};

const X: Square = Square::Occupied(Player::X);
const O: Square = Square::Occupied(Player::O);
const E: Square = Square::Empty;

/// Every assignment of {empty, X, O} to the nine squares (3^9 boards).
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut n| {
        let mut rows = [[E; 3]; 3];
        for pos in Position::ALL {
            rows[pos.row()][pos.col()] = match n % 3 {
                0 => E,
                1 => X,
                _ => O,
            };
            n /= 3;
        }
        Board::from_rows(rows)
    })
}

#[test]
fn test_uniform_pattern_is_always_reported() {
    for board in all_boards() {
        for pattern in &WIN_PATTERNS {
            let owner = board.get(pattern[0]);
            if owner == E || pattern.iter().any(|p| board.get(*p) != owner) {
                continue;
            }
            for last in pattern {
                let result = check_win(&board, *last).expect("uniform line must be found");
                assert_eq!(Some(result.winner), owner.player());
                // Another line through `last` may be reported first; it must be owned too.
                assert!(result.line.contains(last));
                assert!(result.line.iter().all(|p| board.get(*p) == owner));
            }
        }
    }
}

#[test]
fn test_reduced_check_matches_full_scan() {
    for board in all_boards() {
        for last in Position::ALL {
            let Some(mover) = board.get(last).player() else {
                continue;
            };
            let owned = Square::Occupied(mover);
            let expected = WIN_PATTERNS
                .iter()
                .find(|p| p.contains(&last) && p.iter().all(|q| board.get(*q) == owned));
            assert_eq!(
                check_win(&board, last).map(|r| r.line),
                expected.copied(),
                "board {:?} last {}",
                board,
                last
            );
        }
    }
}

#[test]
fn test_any_win_found_by_full_scan_is_found_from_one_of_its_squares() {
    for board in all_boards() {
        if let Some(result) = find_winner(&board) {
            assert!(result.line.iter().any(|p| check_win(&board, *p).is_some()));
        }
    }
}

#[test]
fn test_draw_iff_no_empty_square() {
    for board in all_boards() {
        let has_empty = board.squares().contains(&E);
        assert_eq!(check_draw(&board), !has_empty);
    }
}

#[test]
fn test_relevant_pattern_counts() {
    for pos in Position::ALL {
        let relevant = relevant_pattern_indices(pos);
        let expected = if pos.is_center() {
            4
        } else if pos.is_corner() {
            3
        } else {
            2
        };
        assert_eq!(relevant.len(), expected, "at {}", pos);
        assert!(relevant.iter().all(|i| i < WIN_PATTERNS.len()));
        assert!(relevant.as_slice().windows(2).all(|w| w[0] < w[1]));
        assert!(relevant.patterns().all(|(_, pattern)| pattern.contains(&pos)));
    }
}

#[test]
fn test_top_row_scenario() {
    let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
    let result = check_win(&board, Position::TOP_RIGHT).expect("X wins");
    assert_eq!(result.winner, Player::X);
    assert_eq!(
        result.line,
        [
            Position::new(0, 0).unwrap(),
            Position::new(0, 1).unwrap(),
            Position::new(0, 2).unwrap()
        ]
    );
}

#[test]
fn test_full_board_without_line_scenario() {
    let board = Board::from_rows([[X, O, X], [O, X, O], [O, X, O]]);
    for last in Position::ALL {
        assert_eq!(check_win(&board, last), None);
    }
    assert!(check_draw(&board));
}

#[test]
fn test_center_selects_four_patterns() {
    let board = Board::new().with_mark(Position::CENTER, Player::X);
    assert_eq!(relevant_pattern_indices(Position::CENTER).as_slice(), &[1, 4, 6, 7]);
    assert_eq!(check_win(&board, Position::CENTER), None);
    assert!(!check_draw(&board));
}

#[test]
fn test_empty_board_has_no_result() {
    let board = Board::new();
    assert_eq!(find_winner(&board), None);
    assert!(!check_draw(&board));
}
