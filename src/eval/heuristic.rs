//! Heuristic evaluation of Gomoku positions
//!
//! The score is the signed sum of [`window_score`] over every five-cell window
//! on the board, always from the automated player's point of view: positive
//! favours [`AI_PLAYER`], negative favours its opponent.
//!
//! Two implementations share that definition:
//! - [`evaluate`] rescans all 572 windows
//! - [`Evaluator`] keeps per-window counts and updates only the windows
//!   through a changed cell, which is what the search uses at its leaves
//!
//! Both must return the same value for the same board.

use crate::board::{Board, Player, Pos, AI_PLAYER, TOTAL_CELLS};

use super::patterns::window_score;
use super::windows::{WINDOWS, WINDOW_COUNT};

/// Evaluate the board from scratch.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    (0..WINDOW_COUNT)
        .map(|w| {
            let (ai, opp) = count_window(board, w);
            window_score(ai, opp)
        })
        .sum()
}

/// Count (automated, opponent) stones in window `w`
fn count_window(board: &Board, w: usize) -> (u8, u8) {
    let mut ai = 0;
    let mut opp = 0;
    for &idx in WINDOWS.cells(w) {
        match board.get(Pos::from_index(idx as usize)).player() {
            Some(p) if p == AI_PLAYER => ai += 1,
            Some(_) => opp += 1,
            None => {}
        }
    }
    (ai, opp)
}

/// Incrementally maintained evaluation.
///
/// Mirrors a [`Board`]: every `place_stone`/`remove_stone` on the board must be
/// matched by [`Evaluator::place`]/[`Evaluator::remove`] with the same player.
#[derive(Debug, Clone)]
pub struct Evaluator {
    /// `[automated, opponent]` stone counts per window
    counts: Vec<[u8; 2]>,
    total: i32,
}

impl Evaluator {
    /// Build the counts for an existing board
    #[must_use]
    pub fn new(board: &Board) -> Self {
        let mut counts = Vec::with_capacity(WINDOW_COUNT);
        let mut total = 0;
        for w in 0..WINDOW_COUNT {
            let (ai, opp) = count_window(board, w);
            total += window_score(ai, opp);
            counts.push([ai, opp]);
        }
        Self { counts, total }
    }

    /// Current score (same as `evaluate` on the mirrored board)
    #[inline]
    #[must_use]
    pub fn score(&self) -> i32 {
        self.total
    }

    /// Account for a stone of `player` placed at `pos`
    #[inline]
    pub fn place(&mut self, pos: Pos, player: Player) {
        self.update(pos, player, true);
    }

    /// Account for the stone of `player` removed from `pos`
    #[inline]
    pub fn remove(&mut self, pos: Pos, player: Player) {
        self.update(pos, player, false);
    }

    fn update(&mut self, pos: Pos, player: Player, add: bool) {
        let side = usize::from(player != AI_PLAYER);
        let idx = pos.to_index();
        debug_assert!(idx < TOTAL_CELLS);
        for &w in WINDOWS.through(idx) {
            let slot = &mut self.counts[w as usize];
            let before = window_score(slot[0], slot[1]);
            if add {
                slot[side] += 1;
            } else {
                slot[side] -= 1;
            }
            self.total += window_score(slot[0], slot[1]) - before;
        }
    }
}
