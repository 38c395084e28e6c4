//! Pieces module - tetromino shape matrices and rotation
//!
//! Shapes are small boolean matrices in the classic flat layouts (the I piece
//! spawns as a 4x1 row). Rotation is the transpose of the row-reversed matrix,
//! i.e. 90 degrees clockwise, and always builds a new value; callers keep the
//! old shape when the rotated one collides. There is no wall kick: a rotation
//! that would overlap a wall or the stack simply fails.

use crate::types::PieceKind;

/// Maximum edge length of any shape bounding box.
pub const MAX_SHAPE_DIM: usize = 4;

/// One rotation of a tetromino: a `width` x `height` occupancy matrix.
///
/// The matrix is stored in a fixed 4x4 grid; cells outside the bounding box
/// are always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from per-row bitmasks, most significant bit leftmost.
    const fn from_bit_rows(width: u8, rows: &[u8]) -> Self {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut y = 0;
        while y < rows.len() {
            let mut x = 0;
            while x < width as usize {
                if (rows[y] >> (width as usize - 1 - x)) & 1 == 1 {
                    cells[y][x] = true;
                }
                x += 1;
            }
            y += 1;
        }
        Self {
            width,
            height: rows.len() as u8,
            cells,
        }
    }

    /// Bounding-box width in cells.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Bounding-box height in cells.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at (x, y) inside the bounding box is filled.
    pub fn is_filled(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height && self.cells[y as usize][x as usize]
    }

    /// Iterate the (x, y) offsets of every filled cell, row by row.
    pub fn filled_cells(self) -> impl Iterator<Item = (i8, i8)> {
        (0..self.height as usize)
            .flat_map(move |y| (0..self.width as usize).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.cells[y][x])
            .map(|(x, y)| (x as i8, y as i8))
    }

    /// The 90-degree-clockwise rotation: transpose of the row-reversed matrix.
    ///
    /// The bounding box dimensions swap; four rotations restore the original.
    pub fn rotated_cw(&self) -> Self {
        let w = self.width as usize;
        let h = self.height as usize;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for y in 0..h {
            for x in 0..w {
                if self.cells[y][x] {
                    cells[x][h - 1 - y] = true;
                }
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

const I_SHAPE: Shape = Shape::from_bit_rows(4, &[0b1111]);
const O_SHAPE: Shape = Shape::from_bit_rows(2, &[0b11, 0b11]);
const T_SHAPE: Shape = Shape::from_bit_rows(3, &[0b010, 0b111]);
const J_SHAPE: Shape = Shape::from_bit_rows(3, &[0b100, 0b111]);
const L_SHAPE: Shape = Shape::from_bit_rows(3, &[0b001, 0b111]);
const S_SHAPE: Shape = Shape::from_bit_rows(3, &[0b110, 0b011]);
const Z_SHAPE: Shape = Shape::from_bit_rows(3, &[0b011, 0b110]);

/// Spawn-orientation shape for a piece kind.
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}
