//! Evaluation module for Gomoku positions
//!
//! Positions are scored by sliding a five-cell window over every row,
//! column and diagonal. See [`heuristic`] for the scoring rule.

pub mod heuristic;
pub mod patterns;
pub mod windows;

pub use heuristic::{evaluate, Evaluator};
pub use patterns::{window_score, WindowScore};
pub use windows::{WINDOWS, WINDOW_COUNT};
