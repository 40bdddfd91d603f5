//! Heuristic evaluation function for Blind Omok board positions
//!
//! This is the leaf evaluation of the minimax search. Each stone is scored
//! independently along the four axes, so a run of three contributes once per
//! stone in it. The magnitudes in [`PatternScore`] are tuned against exactly
//! that per-stone counting.

use crate::board::{Board, Pos, Stone};
use crate::rules::win::DIRECTIONS;

use super::patterns::{line_score, PatternScore};

/// Cells examined past the starting stone in each direction
const SCAN_REACH: i32 = 4;

/// Evaluate the board from the perspective of the given color.
///
/// Returns the sum of per-direction scores over every `color` stone minus the
/// same sum over every opponent stone. Positive values favor `color`.
///
/// Swapping every stone's color negates the result.
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i32 {
    side_score(board, color) - side_score(board, color.opponent())
}

/// Sum of per-direction scores for all stones of one color.
#[must_use]
pub fn side_score(board: &Board, color: Stone) -> i32 {
    let Some(stones) = board.stones(color) else {
        return 0;
    };

    stones
        .iter_ones()
        .map(|pos| {
            DIRECTIONS
                .iter()
                .map(|&(dr, dc)| evaluate_direction(board, pos, dr, dc, color))
                .sum::<i32>()
        })
        .sum()
}

/// Score of the stone at `pos` along one axis.
#[must_use]
pub fn evaluate_direction(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> i32 {
    let (count, open_ends) = scan_direction(board, pos, dr, dc, color);
    line_score(count, open_ends)
}

/// Walk from `pos` along `(dr, dc)` and back, returning
/// `(contiguous count, open ends)`.
///
/// The forward walk starts on `pos` itself and covers five cells; the
/// backward walk covers the four cells behind it. Each walk stops at the
/// first cell that is not `color`: an empty cell adds an open end, a foreign
/// stone or the edge adds nothing. A walk that runs its full length without
/// stopping adds no open end either.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn scan_direction(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> (u32, u32) {
    let mut count = 0;
    let mut open_ends = 0;

    for (sign, first) in [(1, 0), (-1, 1)] {
        for step in first..=SCAN_REACH {
            let r = i32::from(pos.row) + dr * step * sign;
            let c = i32::from(pos.col) + dc * step * sign;
            if !Pos::is_valid(r, c) {
                break;
            }
            match board.get(Pos::new(r as u8, c as u8)) {
                s if s == color => count += 1,
                Stone::Empty => {
                    open_ends += 1;
                    break;
                }
                _ => break,
            }
        }
    }

    (count, open_ends)
}

/// Whether a score says one side already has five.
#[inline]
#[must_use]
pub fn is_decisive(score: i32) -> bool {
    score.abs() >= PatternScore::FIVE
}
