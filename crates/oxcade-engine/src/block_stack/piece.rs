use arrayvec::ArrayVec;

use super::{
    grid::GRID_WIDTH,
    shape::{ShapeKind, ShapeMatrix},
};

/// A falling piece: an occupancy matrix anchored on the grid.
///
/// Pieces are values. Movement and rotation return new `Piece`s and never
/// look at the grid; validity is decided by [`Grid::is_placeable`].
///
/// # Coordinate System
///
/// - `(x, y)` is the grid position of the matrix's top-left cell
/// - X increases rightward (columns), Y increases downward (rows)
/// - `y` may be negative; such cells sit above the visible grid
///
/// # Example
///
/// ```
/// use oxcade_engine::{Piece, ShapeKind};
///
/// let piece = Piece::spawn(ShapeKind::T);
/// assert_eq!((piece.x(), piece.y()), (4, 0));
///
/// let moved = piece.shifted(1, 0).rotated();
/// assert_eq!(moved.x(), 5);
/// assert_eq!(moved.shape().rows(), 3);
/// ```
///
/// [`Grid::is_placeable`]: super::grid::Grid::is_placeable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: ShapeKind,
    shape: ShapeMatrix,
    x: i32,
    y: i32,
}

impl Piece {
    /// Creates a piece of `kind` in spawn orientation, horizontally centred on row 0.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn spawn(kind: ShapeKind) -> Self {
        let shape = kind.template();
        let x = (GRID_WIDTH / 2 - shape.cols() / 2) as i32;
        Self::new(kind, shape, x, 0)
    }

    /// Creates a piece from explicit parts.
    #[must_use]
    pub const fn new(kind: ShapeKind, shape: ShapeMatrix, x: i32, y: i32) -> Self {
        Self { kind, shape, x, y }
    }

    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub const fn shape(&self) -> &ShapeMatrix {
        &self.shape
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Returns the grid coordinates `(x, y)` of every occupied cell.
    #[must_use]
    pub fn cells(&self) -> ArrayVec<(i32, i32), 16> {
        self.shape
            .occupied_offsets()
            .into_iter()
            .map(|(dx, dy)| (self.x + i32::from(dx), self.y + i32::from(dy)))
            .collect()
    }

    /// Returns this piece with its anchor moved by `(dx, dy)`.
    #[must_use]
    pub const fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Returns this piece turned 90° clockwise around its anchor.
    #[must_use]
    pub const fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_clockwise(),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_is_centred() {
        // 4-wide bar: 10/2 - 4/2 = 3; 3-wide shapes: 10/2 - 3/2 = 4; square: 10/2 - 2/2 = 4
        assert_eq!(Piece::spawn(ShapeKind::I).x(), 3);
        assert_eq!(Piece::spawn(ShapeKind::T).x(), 4);
        assert_eq!(Piece::spawn(ShapeKind::O).x(), 4);
        for kind in ShapeKind::ALL {
            assert_eq!(Piece::spawn(kind).y(), 0);
        }
    }

    #[test]
    fn test_cells_follow_anchor() {
        let piece = Piece::spawn(ShapeKind::O).shifted(-4, 3);
        let cells = piece.cells();
        assert_eq!(cells.as_slice(), &[(0, 3), (1, 3), (0, 4), (1, 4)]);
    }

    #[test]
    fn test_rotated_keeps_anchor_and_kind() {
        let piece = Piece::spawn(ShapeKind::L).shifted(2, 5);
        let rotated = piece.rotated();
        assert_eq!((rotated.x(), rotated.y()), (piece.x(), piece.y()));
        assert_eq!(rotated.kind(), ShapeKind::L);
        assert_eq!(rotated.shape(), &piece.shape().rotated_clockwise());
    }
}
