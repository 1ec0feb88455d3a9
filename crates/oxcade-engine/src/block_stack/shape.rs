use arrayvec::ArrayVec;
use rand::{Rng, distr::StandardUniform, prelude::Distribution};

/// Enum representing the kind of a falling-block shape.
///
/// The kind is also the color/identity tag written into the grid when a
/// piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ShapeKind {
    /// Straight bar.
    I = 0,
    /// Square.
    O = 1,
    /// T-shape.
    T = 2,
    /// L-shape.
    L = 3,
    /// J-shape.
    J = 4,
    /// S-shape.
    S = 5,
    /// Z-shape.
    Z = 6,
}

/// Uniform choice among the seven templates.
impl Distribution<ShapeKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeKind {
        ShapeKind::ALL[rng.random_range(0..ShapeKind::LEN)]
    }
}

impl ShapeKind {
    /// Number of shape kinds (7).
    pub const LEN: usize = 7;

    /// All shape kinds in template order.
    pub const ALL: [Self; Self::LEN] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Returns the spawn-orientation occupancy matrix of this kind.
    #[must_use]
    pub const fn template(self) -> ShapeMatrix {
        SHAPE_TEMPLATES[self as usize]
    }
}

/// Occupancy matrix of a piece.
///
/// A matrix has `rows × cols` cells (at most 4×4). Rotating swaps the
/// dimensions, so a 2×3 template becomes 3×2 after one quarter turn.
/// Cells outside the `rows × cols` window are always unoccupied, which keeps
/// the derived equality meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    cells: [[bool; ShapeMatrix::MAX_SIDE]; ShapeMatrix::MAX_SIDE],
}

impl ShapeMatrix {
    /// Largest supported side length.
    pub const MAX_SIDE: usize = 4;

    /// Builds a matrix from rows of `0`/`1` flags.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or exceeds [`Self::MAX_SIDE`].
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_bits<const R: usize, const C: usize>(bits: [[u8; C]; R]) -> Self {
        assert!(R > 0 && R <= Self::MAX_SIDE);
        assert!(C > 0 && C <= Self::MAX_SIDE);
        let mut cells = [[false; Self::MAX_SIDE]; Self::MAX_SIDE];
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                cells[r][c] = bits[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            rows: R as u8,
            cols: C as u8,
            cells,
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows as usize
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Returns whether the cell at `(row, col)` is occupied.
    ///
    /// Out-of-range coordinates are unoccupied.
    #[must_use]
    pub const fn is_occupied(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.cells[row][col]
    }

    /// Returns the matrix turned 90° clockwise.
    ///
    /// An `R×C` matrix becomes `C×R` with `rotated[c][R-1-r] = self[r][c]`.
    /// Four applications give back the original matrix.
    #[must_use]
    pub const fn rotated_clockwise(&self) -> Self {
        let rows = self.rows();
        let cols = self.cols();
        let mut cells = [[false; Self::MAX_SIDE]; Self::MAX_SIDE];
        let mut r = 0;
        while r < rows {
            let mut c = 0;
            while c < cols {
                cells[c][rows - 1 - r] = self.cells[r][c];
                c += 1;
            }
            r += 1;
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Returns the `(col, row)` offsets of all occupied cells, row by row.
    #[must_use]
    pub fn occupied_offsets(&self) -> ArrayVec<(u8, u8), 16> {
        let mut offsets = ArrayVec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.cells[usize::from(row)][usize::from(col)] {
                    offsets.push((col, row));
                }
            }
        }
        offsets
    }
}

const SHAPE_TEMPLATES: [ShapeMatrix; ShapeKind::LEN] = [
    // I
    ShapeMatrix::from_bits([[1, 1, 1, 1], [0, 0, 0, 0]]),
    // O
    ShapeMatrix::from_bits([[1, 1], [1, 1]]),
    // T
    ShapeMatrix::from_bits([[1, 1, 1], [0, 1, 0]]),
    // L
    ShapeMatrix::from_bits([[1, 1, 1], [1, 0, 0]]),
    // J
    ShapeMatrix::from_bits([[1, 1, 1], [0, 0, 1]]),
    // S
    ShapeMatrix::from_bits([[1, 1, 0], [0, 1, 1]]),
    // Z
    ShapeMatrix::from_bits([[0, 1, 1], [1, 1, 0]]),
];
