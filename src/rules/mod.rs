//! Game rules for free-style Gomoku
//!
//! The only rule beyond "place on an empty intersection" is the win
//! condition: five or more in a row. Overlines count.

pub mod win;

// Re-exports for convenient access
pub use win::{winning_line, wins_at, DIRECTIONS, WIN_LENGTH};
