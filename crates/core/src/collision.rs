//! Collision detection - the only authority on whether a placement is legal
//!
//! Moves, rotations and spawns all ask the same question. Leaving the grid in
//! any direction (including above row 0) and overlapping a filled cell are
//! treated identically: both collide.

use crate::board::Board;
use crate::pieces::Shape;

/// Does `shape`, with its top-left cell at board coordinate (x, y), leave the
/// board or overlap a filled cell?
pub fn collides(shape: &Shape, board: &Board, x: i8, y: i8) -> bool {
    shape.cells().any(|(dx, dy)| {
        // Saturate so extreme offsets stay out of bounds instead of wrapping.
        let px = x.saturating_add(dx);
        let py = y.saturating_add(dy);
        !board.is_empty_at(px, py)
    })
}
