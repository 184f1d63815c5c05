//! Precomputed table of every five-cell window on the board
//!
//! Built at compile time. Each window lists its five cell indices, and each
//! cell lists the windows passing through it so that a single placement only
//! touches the (at most 20) windows it can change.

use crate::board::{BOARD_SIZE, TOTAL_CELLS};
use crate::rules::WIN_LENGTH;

/// Windows per line of 15 cells
const PER_LINE: usize = BOARD_SIZE - WIN_LENGTH + 1; // 11

/// Rows + columns + two diagonal directions: 2*15*11 + 2*11*11
pub const WINDOW_COUNT: usize = 2 * BOARD_SIZE * PER_LINE + 2 * PER_LINE * PER_LINE; // 572

/// A cell lies in at most five windows per direction
pub const MAX_WINDOWS_PER_CELL: usize = 4 * WIN_LENGTH;

pub struct WindowTable {
    cells: [[u8; WIN_LENGTH]; WINDOW_COUNT],
    by_cell: [[u16; MAX_WINDOWS_PER_CELL]; TOTAL_CELLS],
    by_cell_len: [u8; TOTAL_CELLS],
}

/// The shared table
pub static WINDOWS: WindowTable = WindowTable::build();

impl WindowTable {
    const fn build() -> Self {
        let mut table = WindowTable {
            cells: [[0; WIN_LENGTH]; WINDOW_COUNT],
            by_cell: [[0; MAX_WINDOWS_PER_CELL]; TOTAL_CELLS],
            by_cell_len: [0; TOTAL_CELLS],
        };

        // Same order as the direction list in rules::win
        let dirs: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];
        let size = BOARD_SIZE as i32;
        let len = WIN_LENGTH as i32;
        let mut w = 0;

        let mut d = 0;
        while d < dirs.len() {
            let (dr, dc) = dirs[d];
            let mut row = 0;
            while row < size {
                let mut col = 0;
                while col < size {
                    let end_r = row + dr * (len - 1);
                    let end_c = col + dc * (len - 1);
                    if end_r >= 0 && end_r < size && end_c >= 0 && end_c < size {
                        let mut k = 0;
                        while k < len {
                            let idx = ((row + dr * k) * size + col + dc * k) as usize;
                            table.cells[w][k as usize] = idx as u8;
                            let n = table.by_cell_len[idx] as usize;
                            table.by_cell[idx][n] = w as u16;
                            table.by_cell_len[idx] += 1;
                            k += 1;
                        }
                        w += 1;
                    }
                    col += 1;
                }
                row += 1;
            }
            d += 1;
        }

        assert!(w == WINDOW_COUNT);
        table
    }

    /// Cell indices of window `w`
    #[inline]
    pub fn cells(&self, w: usize) -> &[u8; WIN_LENGTH] {
        &self.cells[w]
    }

    /// Windows through the cell at flat index `idx`
    #[inline]
    pub fn through(&self, idx: usize) -> &[u16] {
        &self.by_cell[idx][..self.by_cell_len[idx] as usize]
    }
}
