//! Window scores for Gomoku evaluation
//!
//! A window is five consecutive cells along a row, column or diagonal.
//! Only windows holding stones of a single side can still become a five,
//! so they are the only ones that score.

/// Scores for a live window, indexed by how many stones it holds
pub struct WindowScore;

impl WindowScore {
    /// One stone
    pub const ONE: i32 = 10;
    /// Two stones
    pub const TWO: i32 = 100;
    /// Three stones
    pub const THREE: i32 = 1_000;
    /// Four stones (one move from five)
    pub const FOUR: i32 = 10_000;
    /// Five in a row
    pub const FIVE: i32 = 100_000;

    const BY_COUNT: [i32; 6] = [0, Self::ONE, Self::TWO, Self::THREE, Self::FOUR, Self::FIVE];

    /// Magnitude for a live window with `count` stones (0..=5)
    #[inline]
    pub const fn for_count(count: u8) -> i32 {
        Self::BY_COUNT[count as usize]
    }
}

/// Score of one window from the automated side's point of view.
///
/// Dead windows (both sides present) and empty windows are worth 0.
#[inline]
pub const fn window_score(ai_count: u8, opp_count: u8) -> i32 {
    match (ai_count, opp_count) {
        (0, 0) => 0,
        (a, 0) => WindowScore::for_count(a),
        (0, o) => -WindowScore::for_count(o),
        _ => 0,
    }
}
