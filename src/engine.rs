//! Main AI engine
//!
//! The engine picks the computer's move with a layered policy, returning on
//! the first layer that produces a move:
//!
//! 1. **Immediate win**: first empty cell (row-major) that completes five
//! 2. **Block**: first empty cell where the opponent would complete five
//! 3. **Alpha-Beta**: depth-limited minimax over neighbor-adjacent cells
//! 4. **Random**: any neighbor-adjacent empty cell
//! 5. **Opening**: the center on an empty board, otherwise any empty cell
//!
//! # Example
//!
//! ```
//! use omok::{AIEngine, Board, Pos, Stone};
//!
//! let mut engine = AIEngine::with_depth(2);
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! if let Some(pos) = engine.select_move(&board, Stone::White) {
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```

use std::time::Instant;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Pos, Stone};
use crate::config::{AiConfig, DEFAULT_DEPTH};
use crate::eval::heuristic::is_decisive;
use crate::rules::is_winning_move;
use crate::search::{candidate_moves, Searcher};

/// Which layer of the policy produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Completes five for the engine's side
    ImmediateWin,
    /// Occupies the cell where the opponent would complete five
    Block,
    /// Minimax with alpha-beta pruning
    AlphaBeta,
    /// Random neighbor-adjacent cell
    Random,
    /// Center on an empty board, or any empty cell
    Opening,
    /// The board is full
    NoMove,
}

/// Chosen move with diagnostics.
///
/// There is deliberately no score here: the caller gets a move, and the
/// numbers below only feed logging and the debug panel.
#[derive(Debug, Clone, Copy)]
pub struct MoveResult {
    pub best_move: Option<Pos>,
    pub search_type: SearchType,
    pub time_ms: u64,
    pub nodes: u64,
}

/// First empty cell, in row-major order, where `color` would complete five.
pub fn find_immediate_win(board: &Board, color: Stone) -> Option<Pos> {
    let mut work_board = *board;
    board.empty_cells().find(|&pos| {
        work_board.place_stone(pos, color);
        let wins = is_winning_move(&work_board, pos);
        work_board.remove_stone(pos);
        wins
    })
}

/// AI engine for Blind Omok.
pub struct AIEngine {
    searcher: Searcher,
    max_depth: u8,
    rng: StdRng,
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AIEngine {
    /// Engine with the reference depth of 2 and an entropy-seeded RNG
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    #[must_use]
    pub fn with_depth(max_depth: u8) -> Self {
        Self {
            searcher: Searcher::new(),
            max_depth,
            rng: StdRng::from_entropy(),
        }
    }

    /// Engine built from a validated configuration
    #[must_use]
    pub fn with_config(config: &AiConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            searcher: Searcher::new(),
            max_depth: config.depth,
            rng,
        }
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.max_depth = depth;
    }

    /// Best move for `color` on `board`, or `None` on a full board.
    ///
    /// `board` is only read; all trial placements happen on a private copy.
    #[must_use]
    pub fn select_move(&mut self, board: &Board, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Best move together with the layer that produced it.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, color: Stone) -> MoveResult {
        debug_assert!(color != Stone::Empty, "the engine plays Black or White");
        let start = Instant::now();

        let result = self.choose(board, color);
        let result = MoveResult {
            time_ms: start.elapsed().as_millis() as u64,
            ..result
        };

        debug!(
            "{} -> {:?} via {:?} ({} nodes, {}ms)",
            color.name(),
            result.best_move.map(|p| (p.row, p.col)),
            result.search_type,
            result.nodes,
            result.time_ms
        );
        result
    }

    fn choose(&mut self, board: &Board, color: Stone) -> MoveResult {
        let found = |pos: Pos, search_type: SearchType, nodes: u64| MoveResult {
            best_move: Some(pos),
            search_type,
            time_ms: 0,
            nodes,
        };

        // 1. Win now
        if let Some(pos) = find_immediate_win(board, color) {
            return found(pos, SearchType::ImmediateWin, 0);
        }

        // 2. Stop the opponent from winning next move
        if let Some(pos) = find_immediate_win(board, color.opponent()) {
            return found(pos, SearchType::Block, 0);
        }

        // 3. Minimax
        let result = self.searcher.search(board, color, self.max_depth);
        if let Some(pos) = result.best_move {
            if is_decisive(result.score) {
                debug!("search sees a decided position (score {})", result.score);
            }
            return found(pos, SearchType::AlphaBeta, result.stats.nodes);
        }

        // 4. Any cell near the action. Unreachable while the search covers
        // every candidate: it only comes back empty when there are none.
        if let Some(pos) = self.random_neighbor_move(board) {
            return found(pos, SearchType::Random, result.stats.nodes);
        }

        // 5. Nothing on the board to play near
        if let Some(pos) = self.opening_move(board) {
            return found(pos, SearchType::Opening, result.stats.nodes);
        }

        warn!("no empty cell left for {}", color.name());
        MoveResult {
            best_move: None,
            search_type: SearchType::NoMove,
            time_ms: 0,
            nodes: result.stats.nodes,
        }
    }

    /// Uniform pick among neighbor-adjacent empty cells
    fn random_neighbor_move(&mut self, board: &Board) -> Option<Pos> {
        candidate_moves(board).choose(&mut self.rng).copied()
    }

    /// Center of an empty board. With stones on the board but nothing
    /// neighbor-adjacent free, a uniform pick among all empty cells.
    fn opening_move(&mut self, board: &Board) -> Option<Pos> {
        if board.is_board_empty() {
            return Some(Pos::CENTER);
        }
        let empty: Vec<Pos> = board.empty_cells().collect();
        empty.choose(&mut self.rng).copied()
    }
}

/// One-shot convenience: best move for `color` on an owned snapshot.
#[must_use]
pub fn select_move(snapshot: Board, color: Stone, depth: u8) -> Option<Pos> {
    AIEngine::with_depth(depth).select_move(&snapshot, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;

    fn engine() -> AIEngine {
        AIEngine::with_config(&AiConfig::default().with_seed(7))
    }

    #[test]
    fn test_engine_creation() {
        assert_eq!(AIEngine::new().max_depth(), 2);
        assert_eq!(AIEngine::default().max_depth(), 2);
        assert_eq!(AIEngine::with_depth(3).max_depth(), 3);
    }

    #[test]
    fn test_engine_set_depth() {
        let mut engine = AIEngine::new();
        engine.set_depth(1);
        assert_eq!(engine.max_depth(), 1);
    }

    #[test]
    fn test_engine_empty_board_plays_center() {
        let result = engine().get_move_with_stats(&Board::new(), Stone::White);
        assert_eq!(result.best_move, Some(Pos::CENTER));
        assert_eq!(result.search_type, SearchType::Opening);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new();
        for c in 0..4 {
            board.place_stone(Pos::new(0, c), Stone::White);
        }
        board.place_stone(Pos::new(7, 7), Stone::Black);

        let result = engine().get_move_with_stats(&board, Stone::White);
        assert_eq!(result.best_move, Some(Pos::new(0, 4)));
        assert_eq!(result.search_type, SearchType::ImmediateWin);
    }

    #[test]
    fn test_win_takes_priority_over_block() {
        let mut board = Board::new();
        // Black threatens (5,4) and (5,9)
        for c in 5..9 {
            board.place_stone(Pos::new(5, c), Stone::Black);
        }
        // White can win at (12, 7)
        for c in 3..7 {
            board.place_stone(Pos::new(12, c), Stone::White);
        }
        board.place_stone(Pos::new(12, 2), Stone::Black);

        let result = engine().get_move_with_stats(&board, Stone::White);
        assert_eq!(result.best_move, Some(Pos::new(12, 7)));
        assert_eq!(result.search_type, SearchType::ImmediateWin);
    }

    #[test]
    fn test_engine_wins_along_edge() {
        let mut board = Board::new();
        for c in 0..4 {
            board.place_stone(Pos::new(14, c), Stone::White);
        }
        let result = engine().get_move_with_stats(&board, Stone::White);
        assert_eq!(result.best_move, Some(Pos::new(14, 4)));
    }

    #[test]
    fn test_engine_blocks_open_four() {
        let mut board = Board::new();
        for c in 5..9 {
            board.place_stone(Pos::new(5, c), Stone::Black);
        }
        board.place_stone(Pos::new(6, 6), Stone::White);
        board.place_stone(Pos::new(4, 7), Stone::White);

        let result = engine().get_move_with_stats(&board, Stone::White);
        let pos = result.best_move.unwrap();
        assert!(pos == Pos::new(5, 4) || pos == Pos::new(5, 9), "got {pos:?}");
        // Row-major scan finds the left end first
        assert_eq!(pos, Pos::new(5, 4));
        assert_eq!(result.search_type, SearchType::Block);
    }

    #[test]
    fn test_engine_blocks_single_winning_cell() {
        // Black four closed on the left by White: only (9, 5) completes it
        let mut board = Board::new();
        board.place_stone(Pos::new(9, 0), Stone::White);
        for c in 1..5 {
            board.place_stone(Pos::new(9, c), Stone::Black);
        }
        board.place_stone(Pos::new(3, 3), Stone::White);

        let result = engine().get_move_with_stats(&board, Stone::White);
        assert_eq!(result.best_move, Some(Pos::new(9, 5)));
        assert_eq!(result.search_type, SearchType::Block);
    }

    #[test]
    fn test_engine_blocks_for_black_too() {
        let mut board = Board::new();
        for r in 2..6 {
            board.place_stone(Pos::new(r, 10), Stone::White);
        }
        board.place_stone(Pos::new(1, 10), Stone::Black);
        board.place_stone(Pos::new(8, 8), Stone::Black);

        let pos = engine().select_move(&board, Stone::Black);
        assert_eq!(pos, Some(Pos::new(6, 10)));
    }

    #[test]
    fn test_engine_answers_first_move_nearby() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);

        let result = engine().get_move_with_stats(&board, Stone::White);
        let pos = result.best_move.unwrap();
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        assert!(pos.chebyshev(Pos::new(7, 7)) <= 2, "got {pos:?}");
        assert!(board.is_empty(pos));
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_engine_does_not_mutate_board() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(8, 8), Stone::White);
        let before = board;

        let _ = engine().select_move(&board, Stone::White);
        assert_eq!(board, before);
    }

    #[test]
    fn test_engine_full_board_returns_none() {
        let mut board = Board::new();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let stone = if (c / 2 + r) % 2 == 0 { Stone::Black } else { Stone::White };
                board.place_stone(Pos::new(r as u8, c as u8), stone);
            }
        }
        let result = engine().get_move_with_stats(&board, Stone::White);
        assert_eq!(result.best_move, None);
        assert_eq!(result.search_type, SearchType::NoMove);
    }

    #[test]
    fn test_random_fallback_is_neighbor_adjacent_and_seeded() {
        let mut board = Board::new();
        board.place_stone(Pos::new(3, 3), Stone::Black);
        board.place_stone(Pos::new(10, 11), Stone::White);
        let candidates = candidate_moves(&board);

        let picks: Vec<Pos> = (0..20)
            .filter_map(|_| engine().random_neighbor_move(&board))
            .collect();
        assert_eq!(picks.len(), 20);
        assert!(picks.iter().all(|p| candidates.contains(p)));
        // Same seed, same pick
        assert!(picks.windows(2).all(|w| w[0] == w[1]));

        assert!(engine().random_neighbor_move(&Board::new()).is_none());
    }

    #[test]
    fn test_opening_move_any_empty_cell() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::Black);
        let pos = engine().opening_move(&board).unwrap();
        assert!(board.is_empty(pos));
    }

    #[test]
    fn test_find_immediate_win_row_major() {
        // Two separate winning cells: (2, 5) comes before (8, 0)
        let mut board = Board::new();
        for c in 1..5 {
            board.place_stone(Pos::new(2, c), Stone::White);
        }
        board.place_stone(Pos::new(2, 0), Stone::Black);
        for r in 4..8 {
            board.place_stone(Pos::new(r, 0), Stone::White);
        }
        board.place_stone(Pos::new(3, 0), Stone::Black);

        assert_eq!(find_immediate_win(&board, Stone::White), Some(Pos::new(2, 5)));
        assert_eq!(find_immediate_win(&board, Stone::Black), None);
    }

    #[test]
    fn test_convenience_select_move() {
        let mut board = Board::new();
        for c in 0..4 {
            board.place_stone(Pos::new(6, c), Stone::Black);
        }
        assert_eq!(select_move(board, Stone::White, 2), Some(Pos::new(6, 4)));
    }
}
