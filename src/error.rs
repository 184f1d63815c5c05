//! Errors reported by the engine
//!
//! Every variant is an ordinary, recoverable game condition. The engine state
//! is unchanged whenever one is returned.

use crate::board::Pos;

/// Rejected engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Coordinates outside the 15x15 board.
    #[display("({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    /// The target intersection already holds a stone.
    #[display("{_0} is already occupied")]
    Occupied(Pos),

    /// The game has a winner; no more stones can be placed.
    #[display("Game is already over")]
    GameOver,

    /// There is no move to take back.
    #[display("No moves to undo")]
    NothingToUndo,
}

impl std::error::Error for EngineError {}
