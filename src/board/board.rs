//! Board structure: one bitboard per color

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE};

/// Game board.
///
/// `Board` is `Copy`, so handing it to the AI produces an independent
/// snapshot; nothing the search does can reach the live game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    pub const fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone without any rule checks.
    /// Game moves go through `GameSession::apply_move`.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == BOARD_SIZE * BOARD_SIZE
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&pos| self.is_empty(pos))
    }

    /// Whether any stone lies within Chebyshev distance `radius` of `pos`
    pub fn has_neighbor(&self, pos: Pos, radius: u8) -> bool {
        let r = i32::from(radius);
        let (row, col) = (i32::from(pos.row), i32::from(pos.col));
        let max = BOARD_SIZE as i32 - 1;
        for nr in (row - r).max(0)..=(row + r).min(max) {
            for nc in (col - r).max(0)..=(col + r).min(max) {
                if !self.is_empty(Pos::new(nr as u8, nc as u8)) {
                    return true;
                }
            }
        }
        false
    }

    /// The same position with every stone's color flipped
    pub fn with_colors_swapped(&self) -> Board {
        Board {
            black: self.white,
            white: self.black,
        }
    }
}
