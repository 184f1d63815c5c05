//! Main engine: game record plus the automated player
//!
//! [`GomokuEngine`] owns the board, the move history used for undo, the game
//! status and the difficulty setting. Callers (a GUI or console front end)
//! drive it through a small synchronous API:
//!
//! 1. the human move is applied with [`GomokuEngine::place`], which also
//!    checks for a win
//! 2. [`GomokuEngine::best_move`] runs the search for the automated side
//! 3. the caller applies that move with `place` as well
//!
//! # Example
//!
//! ```
//! use gomoku::{Difficulty, GomokuEngine, Player};
//!
//! let mut engine = GomokuEngine::with_difficulty(Difficulty::Easy);
//! engine.place(7, 7, Player::First).unwrap();
//!
//! let reply = engine.best_move().unwrap();
//! engine.place(reply.row.into(), reply.col.into(), Player::Second).unwrap();
//! assert_eq!(engine.move_count(), 2);
//! ```

use std::time::Instant;

use tracing::{debug, instrument};

use crate::board::{Board, Cell, Move, Player, Pos, BOARD_SIZE};
use crate::config::{Difficulty, EngineConfig};
use crate::error::EngineError;
use crate::rules::{winning_line, wins_at, WIN_LENGTH};
use crate::search::Searcher;

/// Whether the game is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    /// Someone made five in a row
    Decided(Player),
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` on a full board
    pub best_move: Option<Pos>,
    /// Minimax value from the automated player's side
    pub score: i32,
    /// Plies searched below each candidate
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Gomoku game engine.
///
/// A single instance is not reentrant: [`best_move`](Self::best_move) borrows
/// it mutably while it tries moves on the live board. Separate instances are
/// independent and can run on separate threads.
#[derive(Debug)]
pub struct GomokuEngine {
    board: Board,
    history: Vec<Move>,
    status: GameStatus,
    difficulty: Difficulty,
    searcher: Searcher,
}

impl GomokuEngine {
    /// Empty board, medium difficulty.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: Board::new(),
            history: Vec::with_capacity(BOARD_SIZE * BOARD_SIZE),
            status: GameStatus::InProgress,
            difficulty: config.difficulty,
            searcher: Searcher::new(),
        }
    }

    #[must_use]
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::with_config(EngineConfig::with_difficulty(difficulty))
    }

    /// Start a new game: empty board, no history, in progress.
    ///
    /// Difficulty is kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.history.clear();
        self.status = GameStatus::InProgress;
        debug!("game reset");
    }

    /// Place a stone for `player`.
    ///
    /// Fails without changing anything if the coordinates are off the board,
    /// the cell is taken, or the game is already decided. A placement that
    /// makes five in a row decides the game for `player`.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<Move, EngineError> {
        let pos = Pos::try_new(row, col).ok_or(EngineError::OutOfBounds { row, col })?;
        if !self.board.is_empty(pos) {
            return Err(EngineError::Occupied(pos));
        }
        if self.is_decided() {
            return Err(EngineError::GameOver);
        }

        self.board.place_stone(pos, player);
        let mov = Move::new(pos, player);
        self.history.push(mov);

        if wins_at(&self.board, pos, player) {
            self.status = GameStatus::Decided(player);
            debug!(%pos, ?player, "five in a row");
        } else {
            debug!(%pos, ?player, "stone placed");
        }

        Ok(mov)
    }

    /// Take back the last turn pair.
    ///
    /// Removes the two most recent moves (or the only one left) and reopens a
    /// decided game. Returns how many moves were removed.
    pub fn undo(&mut self) -> Result<usize, EngineError> {
        if self.history.is_empty() {
            return Err(EngineError::NothingToUndo);
        }

        let mut undone = 0;
        while undone < 2 {
            let Some(mov) = self.history.pop() else {
                break;
            };
            self.board.remove_stone(mov.pos);
            undone += 1;
        }
        self.status = GameStatus::InProgress;

        debug!(undone, remaining = self.history.len(), "moves undone");
        Ok(undone)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Best move for the automated player at the current difficulty.
    ///
    /// `None` only when the board is full.
    #[must_use]
    pub fn best_move(&mut self) -> Option<Pos> {
        self.best_move_with_stats().best_move
    }

    /// Best move with search statistics.
    ///
    /// Blocks for the whole search. The board is used as scratch space and
    /// is back in its original state when this returns.
    #[instrument(level = "debug", skip(self), fields(difficulty = %self.difficulty, stones = self.history.len()))]
    pub fn best_move_with_stats(&mut self) -> MoveResult {
        let start = Instant::now();
        let depth = self.difficulty.depth();
        let decided = self.is_decided();

        let result = self.searcher.search(&mut self.board, depth, decided);
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            time_ms,
            "search finished"
        );

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            nodes: result.nodes,
            time_ms,
        }
    }

    #[must_use]
    pub fn is_decided(&self) -> bool {
        matches!(self.status, GameStatus::Decided(_))
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Decided(player) => Some(player),
            GameStatus::InProgress => None,
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Contents of a cell, or `OutOfBounds`.
    pub fn value_at(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        Pos::try_new(row, col)
            .map(|pos| self.board.get(pos))
            .ok_or(EngineError::OutOfBounds { row, col })
    }

    /// The five stones that decided the game.
    #[must_use]
    pub fn winning_line(&self) -> Option<[Pos; WIN_LENGTH]> {
        let winner = self.winner()?;
        let last = self.history.last()?;
        winning_line(&self.board, last.pos, winner)
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        debug!(%difficulty, "difficulty changed");
    }

    /// Set difficulty from an integer level, clamped to the nearest tier.
    pub fn set_difficulty_level(&mut self, level: i32) {
        self.set_difficulty(Difficulty::from_level(level));
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Accepted moves since the last reset, oldest first
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }
}

impl Default for GomokuEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{AI_PLAYER, HUMAN_PLAYER};

    fn assert_all_empty(engine: &GomokuEngine) {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                assert_eq!(engine.value_at(r, c), Ok(Cell::Empty));
            }
        }
    }

    fn assert_history_matches_board(engine: &GomokuEngine) {
        assert_eq!(engine.history().len(), engine.board().stone_count() as usize);
        for mov in engine.history() {
            assert_eq!(engine.board().get(mov.pos), Cell::from(mov.player));
        }
    }

    #[test]
    fn test_engine_creation() {
        let engine = GomokuEngine::new();
        assert_eq!(engine.difficulty(), Difficulty::Medium);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert!(!engine.can_undo());
        assert_all_empty(&engine);
    }

    #[test]
    fn test_engine_with_config() {
        let engine = GomokuEngine::with_config(EngineConfig::with_difficulty(Difficulty::Hard));
        assert_eq!(engine.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_place_then_value_at() {
        let mut engine = GomokuEngine::new();
        let mov = engine.place(3, 11, HUMAN_PLAYER).unwrap();
        assert_eq!(mov, Move::new(Pos::new(3, 11), HUMAN_PLAYER));
        assert_eq!(engine.value_at(3, 11), Ok(Cell::First));

        engine.place(14, 0, AI_PLAYER).unwrap();
        assert_eq!(engine.value_at(14, 0), Ok(Cell::Second));
        assert_eq!(engine.last_move().map(|m| m.pos), Some(Pos::new(14, 0)));
        assert_history_matches_board(&engine);
    }

    #[test]
    fn test_rejected_placements_leave_board_unchanged() {
        let mut engine = GomokuEngine::new();
        engine.place(7, 7, HUMAN_PLAYER).unwrap();
        let board_before = engine.board().clone();
        let history_before = engine.history().to_vec();

        assert_eq!(
            engine.place(7, 7, AI_PLAYER),
            Err(EngineError::Occupied(Pos::new(7, 7)))
        );
        assert_eq!(
            engine.place(15, 3, AI_PLAYER),
            Err(EngineError::OutOfBounds { row: 15, col: 3 })
        );
        assert_eq!(
            engine.place(0, 100, AI_PLAYER),
            Err(EngineError::OutOfBounds { row: 0, col: 100 })
        );

        assert_eq!(engine.board(), &board_before);
        assert_eq!(engine.history(), history_before.as_slice());
    }

    #[test]
    fn test_value_at_out_of_range() {
        let engine = GomokuEngine::new();
        assert_eq!(
            engine.value_at(15, 0),
            Err(EngineError::OutOfBounds { row: 15, col: 0 })
        );
        assert!(engine.value_at(0, 15).is_err());
    }

    #[test]
    fn test_five_decides_game() {
        let mut engine = GomokuEngine::new();
        for c in 0..4 {
            engine.place(2, c, HUMAN_PLAYER).unwrap();
        }
        assert!(!engine.is_decided(), "four in a row is not a win");
        assert_eq!(engine.winner(), None);

        engine.place(2, 4, HUMAN_PLAYER).unwrap();
        assert!(engine.is_decided());
        assert_eq!(engine.winner(), Some(HUMAN_PLAYER));
        assert_eq!(engine.status(), GameStatus::Decided(HUMAN_PLAYER));

        let line = engine.winning_line().unwrap();
        assert_eq!(line[0], Pos::new(2, 0));
        assert_eq!(line[4], Pos::new(2, 4));
    }

    #[test]
    fn test_five_in_each_direction() {
        let lines: [[(usize, usize); 5]; 4] = [
            [(4, 2), (4, 3), (4, 4), (4, 5), (4, 6)],
            [(1, 9), (2, 9), (3, 9), (4, 9), (5, 9)],
            [(8, 8), (9, 9), (10, 10), (11, 11), (12, 12)],
            [(10, 4), (11, 3), (12, 2), (13, 1), (14, 0)],
        ];
        for line in &lines {
            let mut engine = GomokuEngine::new();
            // Winning stone goes in the middle of the line
            for &i in &[0, 1, 3, 4, 2] {
                let (r, c) = line[i];
                engine.place(r, c, AI_PLAYER).unwrap();
            }
            assert_eq!(engine.winner(), Some(AI_PLAYER), "line {line:?}");
        }
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut engine = GomokuEngine::new();
        for r in 0..5 {
            engine.place(r, 0, AI_PLAYER).unwrap();
        }
        let before = engine.board().clone();
        assert_eq!(engine.place(9, 9, HUMAN_PLAYER), Err(EngineError::GameOver));
        assert_eq!(engine.board(), &before);
        assert_eq!(engine.move_count(), 5);
    }

    #[test]
    fn test_undo_pops_two() {
        let mut engine = GomokuEngine::new();
        engine.place(7, 7, HUMAN_PLAYER).unwrap();
        engine.place(7, 8, AI_PLAYER).unwrap();
        engine.place(8, 7, HUMAN_PLAYER).unwrap();

        assert_eq!(engine.undo(), Ok(2));
        assert_eq!(engine.value_at(7, 8), Ok(Cell::Empty));
        assert_eq!(engine.value_at(8, 7), Ok(Cell::Empty));
        assert_eq!(engine.value_at(7, 7), Ok(Cell::First));
        assert!(engine.can_undo());
        assert_history_matches_board(&engine);

        // Only one record left
        assert_eq!(engine.undo(), Ok(1));
        assert!(!engine.can_undo());
        assert_all_empty(&engine);

        assert_eq!(engine.undo(), Err(EngineError::NothingToUndo));
    }

    #[test]
    fn test_undo_after_win_reopens_game() {
        let mut engine = GomokuEngine::new();
        for c in 3..8 {
            engine.place(10, c, HUMAN_PLAYER).unwrap();
        }
        assert!(engine.is_decided());

        engine.undo().unwrap();
        assert!(!engine.is_decided());
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.winning_line(), None);
        assert_eq!(engine.move_count(), 3);

        // Play resumes
        assert!(engine.place(10, 6, AI_PLAYER).is_ok());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut engine = GomokuEngine::with_difficulty(Difficulty::Easy);
        for c in 0..5 {
            engine.place(0, c, AI_PLAYER).unwrap();
        }
        engine.reset();
        let board_once = engine.board().clone();
        engine.reset();

        assert_eq!(engine.board(), &board_once);
        assert_all_empty(&engine);
        assert!(!engine.can_undo());
        assert!(!engine.is_decided());
        assert_eq!(engine.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_difficulty_changes() {
        let mut engine = GomokuEngine::new();
        engine.set_difficulty(Difficulty::Hard);
        assert_eq!(engine.difficulty(), Difficulty::Hard);

        engine.set_difficulty_level(0);
        assert_eq!(engine.difficulty(), Difficulty::Easy);
        engine.set_difficulty_level(4);
        assert_eq!(engine.difficulty(), Difficulty::Medium);
        engine.set_difficulty_level(9);
        assert_eq!(engine.difficulty().level(), 5);
    }

    #[test]
    fn test_empty_board_plays_center() {
        let mut engine = GomokuEngine::with_difficulty(Difficulty::Easy);
        assert_eq!(engine.best_move(), Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_completes_open_four() {
        let mut engine = GomokuEngine::with_difficulty(Difficulty::Easy);
        for c in 7..11 {
            engine.place(7, c, AI_PLAYER).unwrap();
        }
        for &(r, c) in &[(9, 7), (9, 9), (10, 8)] {
            engine.place(r, c, HUMAN_PLAYER).unwrap();
        }

        let best = engine.best_move().unwrap();
        assert!(best == Pos::new(7, 6) || best == Pos::new(7, 11), "got {best}");

        engine.place(best.row.into(), best.col.into(), AI_PLAYER).unwrap();
        assert_eq!(engine.winner(), Some(AI_PLAYER));
    }

    #[test]
    fn test_medium_blocks_open_four() {
        let mut engine = GomokuEngine::with_difficulty(Difficulty::Medium);
        for c in 5..9 {
            engine.place(7, c, HUMAN_PLAYER).unwrap();
        }
        engine.place(8, 8, AI_PLAYER).unwrap();

        let result = engine.best_move_with_stats();
        let best = result.best_move.unwrap();
        assert!(best == Pos::new(7, 4) || best == Pos::new(7, 9), "got {best}");
        assert_eq!(result.depth, 3);
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_search_leaves_game_untouched() {
        let mut engine = GomokuEngine::with_difficulty(Difficulty::Medium);
        engine.place(7, 7, HUMAN_PLAYER).unwrap();
        engine.place(6, 8, AI_PLAYER).unwrap();
        engine.place(8, 8, HUMAN_PLAYER).unwrap();
        let board_before = engine.board().clone();
        let history_before = engine.history().to_vec();

        let _ = engine.best_move();

        assert_eq!(engine.board(), &board_before);
        assert_eq!(engine.history(), history_before.as_slice());
        assert_eq!(engine.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_game_against_scripted_player() {
        let mut engine = GomokuEngine::with_difficulty(Difficulty::Easy);
        let script = [(7, 7), (8, 8), (6, 6), (9, 9), (5, 5), (7, 9), (6, 8), (8, 6), (4, 4)];

        for &(r, c) in &script {
            if engine.is_decided() {
                break;
            }
            if engine.place(r, c, HUMAN_PLAYER).is_err() {
                continue;
            }
            assert_history_matches_board(&engine);
            if engine.is_decided() {
                break;
            }
            let reply = engine.best_move().unwrap();
            engine
                .place(reply.row.into(), reply.col.into(), AI_PLAYER)
                .unwrap();
            assert_history_matches_board(&engine);
        }

        while engine.can_undo() {
            engine.undo().unwrap();
            assert_history_matches_board(&engine);
        }
        assert_all_empty(&engine);
    }

    #[test]
    fn test_engine_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<GomokuEngine>();
    }
}
