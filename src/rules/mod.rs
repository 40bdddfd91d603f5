//! Game rules for Blind Omok
//!
//! Freestyle five-in-a-row: no captures, no forbidden moves, and an
//! overline (six or more) also wins.

pub mod win;

// Re-exports for convenient access
pub use win::{find_winning_line, has_five_at_pos, is_winning_move, run_length};
