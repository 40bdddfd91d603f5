//! Minimax search with alpha-beta pruning
//!
//! The AI is the maximizing side and its opponent the minimizing side. Leaves
//! are scored with the static evaluator from the AI's point of view. Only
//! empty cells within [`NEIGHBOR_RADIUS`] of an existing stone are searched,
//! which keeps the branching factor small on a mostly empty board.
//!
//! # Example
//!
//! ```
//! use omok::board::{Board, Pos, Stone};
//! use omok::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&board, Stone::White, 2);
//! let best = result.best_move.expect("stones on board give candidates");
//! assert!(best.chebyshev(Pos::new(7, 7)) <= 2);
//! ```

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate;

/// Infinity score for alpha-beta bounds. Kept symmetric so `-INF` is valid.
const INF: i32 = i32::MAX;

/// Chebyshev distance within which a cell counts as having a neighbor
pub const NEIGHBOR_RADIUS: u8 = 2;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, leaves included
    pub nodes: u64,
    /// Leaves scored by the static evaluator
    pub evaluations: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
}

/// Result of a root search.
///
/// The score is kept for logging; callers of the engine only ever see the
/// move.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// Best move found, if any candidate exists
    pub best_move: Option<Pos>,
    /// Minimax value of the best move from the searching side's view
    pub score: i32,
    /// Depth actually searched
    pub depth: u8,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Empty cells with at least one stone within [`NEIGHBOR_RADIUS`], in
/// row-major order.
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    board
        .empty_cells()
        .filter(|&pos| board.has_neighbor(pos, NEIGHBOR_RADIUS))
        .collect()
}

/// Minimax searcher.
///
/// Holds only counters; every search works on its own copy of the board.
#[derive(Debug, Default)]
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the most recent search
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search `depth` plies for the best move of `color`.
    ///
    /// A depth of 0 is treated as 1. Among equally scored moves the first in
    /// row-major order wins. Returns `best_move: None` only when no candidate
    /// cell exists (empty or full board).
    pub fn search(&mut self, board: &Board, color: Stone, depth: u8) -> SearchResult {
        debug_assert!(color != Stone::Empty, "search needs a side to move");
        self.stats = SearchStats::default();

        let depth = depth.max(1);
        let mut work_board = *board;
        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;

        for mov in candidate_moves(&work_board) {
            work_board.place_stone(mov, color);
            let score = self.minimax(&mut work_board, color, depth - 1, false, alpha, INF);
            work_board.remove_stone(mov);

            // A child that failed low returned an upper bound <= alpha, which
            // can never beat the current best under strict comparison.
            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
            alpha = alpha.max(score);
        }

        SearchResult {
            best_move,
            score: best_score,
            depth,
            stats: self.stats,
        }
    }

    /// Recursive minimax with alpha-beta bounds.
    ///
    /// `color` is always the AI; `maximizing` says whose stone goes down at
    /// this node. The board is restored before returning.
    fn minimax(
        &mut self,
        board: &mut Board,
        color: Stone,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            self.stats.evaluations += 1;
            return evaluate(board, color);
        }

        let moves = candidate_moves(board);

        if maximizing {
            let mut max_score = -INF;
            for mov in moves {
                board.place_stone(mov, color);
                let score = self.minimax(board, color, depth - 1, false, alpha, beta);
                board.remove_stone(mov);

                max_score = max_score.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            max_score
        } else {
            let opponent = color.opponent();
            let mut min_score = INF;
            for mov in moves {
                board.place_stone(mov, opponent);
                let score = self.minimax(board, color, depth - 1, true, alpha, beta);
                board.remove_stone(mov);

                min_score = min_score.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            min_score
        }
    }
}
