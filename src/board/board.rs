//! Fixed-size grid of cells

use std::fmt;

use super::{Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Game board: a flat row-major array of 225 cells.
///
/// The board only stores stones. Turn order, history and game status are
/// owned by [`crate::engine::GomokuEngine`], which lets the search mutate and
/// restore a board without touching the real game record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
    stones: u32,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
            stones: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Check whether `pos` holds a stone of `player`
    #[inline]
    pub fn is_player(&self, pos: Pos, player: Player) -> bool {
        self.get(pos) == Cell::from(player)
    }

    /// Put a stone on an empty cell. No rule checks.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, player: Player) {
        let cell = &mut self.cells[pos.to_index()];
        debug_assert!(cell.is_empty(), "placing on occupied {pos}");
        if cell.is_empty() {
            self.stones += 1;
        }
        *cell = Cell::from(player);
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        let cell = &mut self.cells[pos.to_index()];
        if !cell.is_empty() {
            self.stones -= 1;
        }
        *cell = Cell::Empty;
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.stones
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones as usize == TOTAL_CELLS
    }

    /// Iterate over occupied cells in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Player)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.player().map(|p| (Pos::from_index(idx), p)))
    }

    /// Iterate over empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| Pos::from_index(idx))
    }

    /// Clear every cell
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; TOTAL_CELLS];
        self.stones = 0;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..BOARD_SIZE {
            write!(f, "{:2}", c)?;
        }
        writeln!(f)?;

        for r in 0..BOARD_SIZE {
            write!(f, "{:2} ", r)?;
            for c in 0..BOARD_SIZE {
                let cell = self.get(Pos::new(r as u8, c as u8));
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
