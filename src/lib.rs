//! Gomoku AI engine for free-style 15x15 Gomoku
//!
//! Two players alternate placing stones; the first to get five or more in a
//! row (horizontally, vertically or diagonally) wins. The engine plays the
//! second side.
//!
//! # Architecture
//!
//! - [`board`]: cells, positions and the fixed-size board
//! - [`rules`]: win detection around the last placed stone
//! - [`eval`]: five-cell window evaluation, full and incremental
//! - [`search`]: candidate generation and alpha-beta search
//! - [`engine`]: game record (history, status, undo) and the public API
//! - [`config`]: difficulty and engine settings
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Difficulty, GomokuEngine, Player};
//!
//! let mut engine = GomokuEngine::with_difficulty(Difficulty::Easy);
//!
//! // Human opens in the centre
//! engine.place(7, 7, Player::First).unwrap();
//!
//! // AI responds
//! if let Some(pos) = engine.best_move() {
//!     engine.place(pos.row.into(), pos.col.into(), Player::Second).unwrap();
//!     println!("AI plays at {pos}");
//! }
//! assert!(!engine.is_decided());
//! ```
//!
//! # Search
//!
//! The search tries every empty cell adjacent to a stone, looks
//! [`Difficulty::depth`] plies further with alpha-beta pruning, and keeps the
//! first move with the highest score. Depth is the only cost control: there
//! is no clock.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Move, Player, Pos, AI_PLAYER, BOARD_SIZE, HUMAN_PLAYER};
pub use config::{Difficulty, EngineConfig};
pub use engine::{GameStatus, GomokuEngine, MoveResult};
pub use error::EngineError;
