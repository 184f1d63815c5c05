//! Win condition checking for free-style Gomoku
//!
//! Five or more stones in a row wins. A new win can only pass through the
//! stone just placed, so the checks here scan the line segments through that
//! one cell instead of the whole board.

use crate::board::{Board, Player, Pos};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Reach on each side of the placed stone
const REACH: i32 = 4;

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Check whether `player` has five or more in a row through `pos`.
///
/// For each direction this looks at up to 9 cells centred on `pos`
/// (clipped at the edges) and tracks the longest run of `player` stones.
#[inline]
pub fn wins_at(board: &Board, pos: Pos, player: Player) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| run_through(board, pos, player, dr, dc).is_some())
}

/// Positions of the winning five through `pos`, if there is one.
///
/// With an overline the first five stones of the run (scan order) are
/// returned.
pub fn winning_line(board: &Board, pos: Pos, player: Player) -> Option<[Pos; WIN_LENGTH]> {
    DIRECTIONS.iter().find_map(|&(dr, dc)| {
        let start = run_through(board, pos, player, dr, dc)?;
        let mut line = [start; WIN_LENGTH];
        for (k, slot) in line.iter_mut().enumerate() {
            *slot = start.offset(dr, dc, k as i32)?;
        }
        Some(line)
    })
}

/// Scan the 9-cell segment through `pos` along `(dr, dc)`.
///
/// Returns the first cell of the first run reaching five.
fn run_through(board: &Board, pos: Pos, player: Player, dr: i32, dc: i32) -> Option<Pos> {
    let mut count = 0;
    let mut run_start = pos;
    for k in -REACH..=REACH {
        let Some(p) = pos.offset(dr, dc, k) else {
            continue;
        };
        if board.is_player(p, player) {
            if count == 0 {
                run_start = p;
            }
            count += 1;
            if count >= WIN_LENGTH {
                return Some(run_start);
            }
        } else {
            count = 0;
        }
    }
    None
}
