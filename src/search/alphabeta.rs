//! Fixed-depth minimax search with alpha-beta pruning
//!
//! The automated player ([`AI_PLAYER`]) maximises, its opponent minimises,
//! and leaves are scored by the incremental [`Evaluator`].
//!
//! The search works on the caller's board directly: every hypothetical stone
//! is placed, searched and removed again before the next sibling is tried, so
//! the board is left exactly as it was found, including after a cutoff.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Player};
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Player::First);
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&mut board, 1, false);
//! assert!(result.best_move.is_some());
//! assert_eq!(board.stone_count(), 1);
//! ```

use crate::board::{Board, Player, Pos, AI_PLAYER};
use crate::eval::Evaluator;

use super::moves::{adjacent_candidates, candidates};

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cutoffs at maximising nodes (beta <= alpha after raising alpha)
    pub beta_cutoffs: u64,
    /// Cutoffs at minimising nodes
    pub alpha_cutoffs: u64,
    /// Leaves scored by the evaluator
    pub leaves: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` only on a full board
    pub best_move: Option<Pos>,
    /// Minimax value of the best move
    pub score: i32,
    /// Plies searched below the root move
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Alpha-beta searcher.
///
/// Holds only counters; the board and evaluator are threaded through each
/// call. One searcher can be reused for any number of searches.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the best move for [`AI_PLAYER`].
    ///
    /// * `depth` - plies searched after the candidate move (at least 1)
    /// * `decided` - whether the real game is already over; when set every
    ///   node is treated as terminal and scored statically
    ///
    /// On a board with no stones the centre is returned without searching.
    /// Ties keep the earliest candidate in row-major order.
    pub fn search(&mut self, board: &mut Board, depth: u8, decided: bool) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let center = Pos::center();
        if adjacent_candidates(board).is_empty() && board.is_empty(center) {
            return SearchResult {
                best_move: Some(center),
                score: 0,
                depth,
                nodes: 0,
                stats: self.stats,
            };
        }

        let mut eval = Evaluator::new(board);
        let mut best: Option<(Pos, i32)> = None;

        for mov in candidates(board) {
            // Siblings that cannot beat the current best fail low against it,
            // so the chosen move is the same as with a full window.
            let alpha = best.map_or(i32::MIN, |(_, s)| s);

            board.place_stone(mov, AI_PLAYER);
            eval.place(mov, AI_PLAYER);
            let score = self.alpha_beta(board, &mut eval, depth, alpha, i32::MAX, false, decided);
            eval.remove(mov, AI_PLAYER);
            board.remove_stone(mov);

            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mov, score));
            }
        }

        SearchResult {
            best_move: best.map(|(pos, _)| pos),
            score: best.map_or(0, |(_, s)| s),
            depth,
            nodes: self.nodes,
            stats: self.stats,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        eval: &mut Evaluator,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        decided: bool,
    ) -> i32 {
        self.nodes += 1;

        // The decided flag belongs to the real game, not to this node: a five
        // made during the search is only seen through its window score.
        if depth == 0 || decided {
            self.stats.leaves += 1;
            return eval.score();
        }

        let moves = candidates(board);
        if moves.is_empty() {
            self.stats.leaves += 1;
            return eval.score();
        }

        let player: Player = if maximizing {
            AI_PLAYER
        } else {
            AI_PLAYER.opponent()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mov in moves {
            board.place_stone(mov, player);
            eval.place(mov, player);
            let score = self.alpha_beta(board, eval, depth - 1, alpha, beta, !maximizing, decided);
            eval.remove(mov, player);
            board.remove_stone(mov);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                if maximizing {
                    self.stats.beta_cutoffs += 1;
                } else {
                    self.stats.alpha_cutoffs += 1;
                }
                break;
            }
        }

        best
    }

    /// Nodes visited by the last search
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}
