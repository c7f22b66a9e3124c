//! Scoring module - line clearing and the flat per-row bonus
//!
//! A row is full when every cell is filled. Clearing removes all full rows at
//! once, lets the remaining rows keep their order beneath `k` fresh empty
//! rows, and scores `k * LINE_CLEAR_POINTS`. There are no combos, levels or
//! multi-line curves. The clearer knows nothing about the active piece.

use crate::board::{Board, ClearedRows};
use crate::types::LINE_CLEAR_POINTS;

/// Outcome of one line-clear pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineClear {
    /// Indices of the removed rows as they were before clearing, top to bottom
    pub rows: ClearedRows,
    pub score_delta: u32,
}

impl LineClear {
    pub fn lines(&self) -> usize {
        self.rows.len()
    }
}

/// Points for clearing `lines` rows
pub fn line_clear_score(lines: usize) -> u32 {
    (lines as u32).saturating_mul(LINE_CLEAR_POINTS)
}

/// Remove every full row from `board` and compute the score delta.
pub fn clear_lines(board: &mut Board) -> LineClear {
    let rows = board.clear_full_rows();
    let score_delta = line_clear_score(rows.len());
    LineClear { rows, score_delta }
}
