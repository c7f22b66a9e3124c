//! Pieces module - the fixed catalog of seven shapes and matrix rotation
//!
//! A shape is a small rectangular boolean matrix (`true` marks an occupied
//! cell). Catalog entries are constants; rotating a piece always produces a
//! new matrix and never touches the catalog.

use crate::rng::PieceSource;
use crate::types::{Color, PieceKind};

/// Largest side of any shape matrix (the I piece is 1x4 / 4x1)
pub const MAX_SHAPE_DIM: usize = 4;

/// Rectangular boolean matrix, stored inline (no allocation).
///
/// Cells outside `rows x cols` are always `false`, so derived equality
/// compares exactly the occupied pattern and the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    grid: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// Returns None unless the rows are rectangular and 1..=4 on each side.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let cols = rows.first()?.len();
        if rows.len() > MAX_SHAPE_DIM || cols == 0 || cols > MAX_SHAPE_DIM {
            return None;
        }
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }

        let mut grid = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                grid[r][c] = v != 0;
            }
        }
        Some(Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            grid,
        })
    }

    const fn from_bits(rows: u8, cols: u8, bits: [[u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM]) -> Self {
        let mut grid = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut r = 0;
        while r < rows as usize {
            let mut c = 0;
            while c < cols as usize {
                grid[r][c] = bits[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self { rows, cols, grid }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether (row, col) is occupied; false outside the matrix
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.grid[row][col]
    }

    /// Occupied cells as (dx, dy) offsets from the top-left, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + Clone + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.grid[r][c])
                .map(move |c| (c as i8, r as i8))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }

    /// 90° clockwise turn. See [`rotate_clockwise`].
    pub fn rotated(&self) -> Self {
        rotate_clockwise(self)
    }
}

/// Rotate a matrix 90° clockwise about its own origin.
///
/// The result is the transpose with each row reversed: a `rows x cols` input
/// becomes `cols x rows`, and `out[i][j] = in[rows - 1 - j][i]`.
pub fn rotate_clockwise(shape: &Shape) -> Shape {
    let rows = shape.rows as usize;
    let mut grid = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
    for (i, out_row) in grid.iter_mut().enumerate().take(shape.cols as usize) {
        for (j, out_cell) in out_row.iter_mut().enumerate().take(rows) {
            *out_cell = shape.grid[rows - 1 - j][i];
        }
    }
    Shape {
        rows: shape.cols,
        cols: shape.rows,
        grid,
    }
}

const I_SHAPE: Shape = Shape::from_bits(1, 4, [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]);

const O_SHAPE: Shape = Shape::from_bits(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);

const T_SHAPE: Shape = Shape::from_bits(2, 3, [[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);

const S_SHAPE: Shape = Shape::from_bits(2, 3, [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);

const Z_SHAPE: Shape = Shape::from_bits(2, 3, [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]]);

const J_SHAPE: Shape = Shape::from_bits(2, 3, [[1, 0, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);

const L_SHAPE: Shape = Shape::from_bits(2, 3, [[0, 0, 1, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);

/// The canonical (spawn) matrix for a piece kind
pub fn catalog_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// A piece drawn from the catalog: its kind and its own copy of the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
}

impl Piece {
    pub fn color(&self) -> Color {
        self.kind.color()
    }
}

pub fn catalog_piece(kind: PieceKind) -> Piece {
    Piece {
        kind,
        shape: catalog_shape(kind),
    }
}

/// Draw the next piece from `source` as a fresh catalog copy.
pub fn random_piece<S: PieceSource + ?Sized>(source: &mut S) -> Piece {
    catalog_piece(source.next_kind())
}
