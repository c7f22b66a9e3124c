//! Active piece controller
//!
//! The falling piece owns its own matrix (initially a catalog copy, possibly
//! rotated) and the board position of that matrix's top-left cell. Every
//! command builds a candidate, asks [`collides`], and either commits it or
//! leaves the piece untouched.

use crate::board::Board;
use crate::collision::collides;
use crate::pieces::{catalog_piece, Piece, Shape};
use crate::types::{Color, PieceKind, SPAWN_X, SPAWN_Y};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

/// Result of a downward move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row
    Moved,
    /// The row below is blocked; the caller should lock the piece
    Blocked,
}

impl Tetromino {
    /// Place a drawn piece at the spawn position
    pub fn spawn(piece: Piece) -> Self {
        Self::at(piece, SPAWN_X, SPAWN_Y)
    }

    pub fn at(piece: Piece, x: i8, y: i8) -> Self {
        Self {
            kind: piece.kind,
            shape: piece.shape,
            x,
            y,
        }
    }

    /// Catalog piece of `kind` at the spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self::spawn(catalog_piece(kind))
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Board coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + Clone + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }

    pub fn collides(&self, board: &Board) -> bool {
        collides(&self.shape, board, self.x, self.y)
    }

    fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..*self
        }
    }

    fn commit_if_clear(&mut self, candidate: Self, board: &Board) -> bool {
        if candidate.collides(board) {
            return false;
        }
        *self = candidate;
        true
    }

    /// Move one column left (`dx = -1`) or right (`dx = 1`).
    /// Returns false, leaving the piece unchanged, if the target collides.
    pub fn try_shift(&mut self, board: &Board, dx: i8) -> bool {
        self.commit_if_clear(self.shifted(dx, 0), board)
    }

    /// Rotate clockwise in place. No kicks: a blocked rotation is a no-op.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        self.commit_if_clear(self.rotated(), board)
    }

    /// Move down one row, or report that the piece must lock.
    pub fn try_drop(&mut self, board: &Board) -> DropOutcome {
        if self.commit_if_clear(self.shifted(0, 1), board) {
            DropOutcome::Moved
        } else {
            DropOutcome::Blocked
        }
    }
}
