//! Win condition checking
//!
//! A move can only create a new five through the stone it places, so the
//! check walks the four axes through that single cell instead of rescanning
//! the board.

use crate::board::{Board, Pos, Stone};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 axes)
pub(crate) const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Length of the contiguous `color` run through `pos` along `(dr, dc)`.
///
/// Walks both ways from `pos` until an empty cell, a foreign stone or the
/// edge. The cell at `pos` is counted as part of the run.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    let mut count = 1;
    for sign in [1, -1] {
        let mut r = i32::from(pos.row) + dr * sign;
        let mut c = i32::from(pos.col) + dc * sign;
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == color {
            count += 1;
            r += dr * sign;
            c += dc * sign;
        }
    }
    count
}

/// Fast five-in-a-row check at a specific position for the given color.
///
/// Only checks 4 directions from the given position. No allocation.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| run_length(board, pos, dr, dc, color) >= WIN_LENGTH)
}

/// Whether the stone standing at `pos` completes five or more in a row.
///
/// The player is whatever occupies `pos`; an empty cell never wins.
#[inline]
pub fn is_winning_move(board: &Board, pos: Pos) -> bool {
    has_five_at_pos(board, pos, board.get(pos))
}

/// The full winning run through `pos`, ordered from one end to the other.
///
/// Returns `None` if the stone at `pos` is not part of a five.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn find_winning_line(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let color = board.get(pos);
    if color == Stone::Empty {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let mut line = vec![pos];

        // Extend in negative direction first
        let mut r = i32::from(pos.row) - dr;
        let mut c = i32::from(pos.col) - dc;
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == color {
            line.insert(0, Pos::new(r as u8, c as u8));
            r -= dr;
            c -= dc;
        }

        // Extend in positive direction
        r = i32::from(pos.row) + dr;
        c = i32::from(pos.col) + dc;
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == color {
            line.push(Pos::new(r as u8, c as u8));
            r += dr;
            c += dc;
        }

        if line.len() >= WIN_LENGTH {
            return Some(line);
        }
    }
    None
}
