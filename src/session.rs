//! Game session: board, turn order, win detection and running scores
//!
//! The session is the only owner of the live board. The AI never sees it
//! directly; it is handed a copy through [`GameSession::snapshot`].

use log::{debug, info};
use thiserror::Error;

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::rules::{find_winning_line, is_winning_move};

/// The human plays Black and moves first
pub const HUMAN: Stone = Stone::Black;
/// The computer plays White
pub const AI: Stone = Stone::White;

/// Reasons a move is refused. None of them change the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("({row}, {col}) is off the {size}x{size} board", size = BOARD_SIZE)]
    OutOfBounds { row: usize, col: usize },
    #[error("({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },
    #[error("the game is already over")]
    GameOver,
    #[error("it is {}'s turn, not {}'s", .expected.name(), .got.name())]
    WrongTurn { expected: Stone, got: Stone },
}

/// One recorded move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub player: Stone,
}

/// Games won by each side since the session was created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    pub black: u32,
    pub white: u32,
}

impl Scores {
    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
            Stone::Empty => 0,
        }
    }

    fn record_win(&mut self, stone: Stone) {
        match stone {
            Stone::Black => self.black += 1,
            Stone::White => self.white += 1,
            Stone::Empty => {}
        }
    }
}

/// Emitted for every accepted move.
///
/// Stones stay hidden during play; `reveal` carries the full board only on
/// the move that ends the game so the presentation can disclose it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEvent {
    pub pos: Pos,
    pub player: Stone,
    pub game_over: bool,
    /// `None` on a game-ending move means the board filled up without a five
    pub winner: Option<Stone>,
    pub reveal: Option<Board>,
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    InProgress { to_move: Stone },
    Terminal { winner: Option<Stone> },
}

/// A single game table: the current game plus scores across games.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    current_player: Stone,
    game_over: bool,
    winner: Option<Stone>,
    history: Vec<Move>,
    scores: Scores,
    generation: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Stone::Black,
            game_over: false,
            winner: None,
            history: Vec::with_capacity(BOARD_SIZE * BOARD_SIZE),
            scores: Scores::default(),
            generation: 0,
        }
    }

    /// Place `player`'s stone at (`row`, `col`).
    ///
    /// On success the move is recorded, a five ends the game and scores a
    /// win, a full board ends it as a draw, and otherwise the turn passes.
    pub fn apply_move(&mut self, row: usize, col: usize, player: Stone) -> Result<MoveEvent, MoveError> {
        let pos = Pos::try_new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        if player != self.current_player {
            return Err(MoveError::WrongTurn {
                expected: self.current_player,
                got: player,
            });
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }

        self.board.place_stone(pos, player);
        self.history.push(Move { pos, player });
        debug!("{} plays ({}, {})", player.name(), pos.row, pos.col);

        if is_winning_move(&self.board, pos) {
            self.game_over = true;
            self.winner = Some(player);
            self.scores.record_win(player);
            info!(
                "{} wins after {} moves (Black {} - White {})",
                player.name(),
                self.history.len(),
                self.scores.black,
                self.scores.white
            );
        } else if self.board.is_full() {
            self.game_over = true;
            info!("board full, game drawn");
        } else {
            self.current_player = player.opponent();
        }

        Ok(MoveEvent {
            pos,
            player,
            game_over: self.game_over,
            winner: self.winner,
            reveal: self.game_over.then_some(self.board),
        })
    }

    /// Whether the stone at (`row`, `col`) is part of a five.
    /// Off-board and empty cells are never winning.
    pub fn is_winning_move(&self, row: usize, col: usize) -> bool {
        Pos::try_new(row, col).is_some_and(|pos| is_winning_move(&self.board, pos))
    }

    /// The five (or longer) that ended the game, for highlighting
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        self.winner?;
        let last = self.history.last()?;
        find_winning_line(&self.board, last.pos)
    }

    /// Start a new game. Scores carry over.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Stone::Black;
        self.game_over = false;
        self.winner = None;
        self.history.clear();
        self.generation += 1;
        info!(
            "new game #{} (Black {} - White {})",
            self.generation, self.scores.black, self.scores.white
        );
    }

    /// Independent copy of the board for the AI
    #[inline]
    pub fn snapshot(&self) -> Board {
        self.board
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::Terminal {
                winner: self.winner,
            }
        } else {
            GamePhase::InProgress {
                to_move: self.current_player,
            }
        }
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    #[inline]
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Incremented by every reset; tags AI requests so late answers from a
    /// previous game can be recognized
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
