//! Search module for the Blind Omok AI
//!
//! Contains:
//! - Candidate move generation with the neighbor-adjacency filter
//! - Depth-limited minimax with alpha-beta pruning

pub mod alphabeta;

pub use alphabeta::{candidate_moves, SearchResult, SearchStats, Searcher, NEIGHBOR_RADIUS};
