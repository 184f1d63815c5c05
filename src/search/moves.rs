//! Candidate move generation
//!
//! Candidates are empty cells touching at least one stone (8-neighbourhood).
//! Order is row-major and matters: the search keeps the first of several
//! equally scored moves.

use crate::board::{Board, Pos};

/// Offsets of the 8 neighbouring cells
const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Check if an occupied cell touches `pos`
#[inline]
pub fn has_neighbor(board: &Board, pos: Pos) -> bool {
    NEIGHBOURS
        .iter()
        .filter_map(|&(dr, dc)| pos.offset(dr, dc, 1))
        .any(|p| !board.is_empty(p))
}

/// Empty cells adjacent to a stone, without any fallback.
///
/// Empty only when the board has no stones or no empty cells.
#[must_use]
pub fn adjacent_candidates(board: &Board) -> Vec<Pos> {
    board
        .empty_cells()
        .filter(|&pos| has_neighbor(board, pos))
        .collect()
}

/// Moves worth searching.
///
/// Falls back to every empty cell when no cell is adjacent to a stone.
#[must_use]
pub fn candidates(board: &Board) -> Vec<Pos> {
    let moves = adjacent_candidates(board);
    if moves.is_empty() {
        board.empty_cells().collect()
    } else {
        moves
    }
}
