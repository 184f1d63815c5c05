//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation (cells next to existing stones)
//! - Fixed-depth minimax with alpha-beta pruning

pub mod alphabeta;
pub mod moves;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
pub use moves::{adjacent_candidates, candidates};
