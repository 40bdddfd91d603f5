//! Evaluation module for Blind Omok positions
//!
//! Every stone is scored along the four axes from a short walk in each
//! direction; the side to evaluate gets its own total minus the opponent's.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_direction, scan_direction, side_score};
pub use patterns::{line_score, PatternScore};
