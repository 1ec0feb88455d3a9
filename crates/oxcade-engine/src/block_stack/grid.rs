use super::{piece::Piece, shape::ShapeKind};

/// Number of grid columns.
pub const GRID_WIDTH: usize = 10;
/// Number of grid rows.
pub const GRID_HEIGHT: usize = 20;

/// A single cell in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell of a locked piece, tagged with the piece's shape kind.
    Filled(ShapeKind),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GridRow {
    cells: [Cell; GRID_WIDTH],
}

impl GridRow {
    const EMPTY: Self = Self {
        cells: [Cell::Empty; GRID_WIDTH],
    };

    fn is_filled(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }
}

/// The static cell grid of the falling-block game.
///
/// Row 0 is the top row. The grid is only mutated when a piece locks
/// ([`Grid::fill_piece`]) and when full rows are removed ([`Grid::clear_lines`]).
///
/// # Example
///
/// ```
/// use oxcade_engine::{Cell, Grid, Piece, ShapeKind};
///
/// let mut grid = Grid::EMPTY;
/// let piece = Piece::spawn(ShapeKind::O).shifted(0, 18);
/// assert!(grid.is_placeable(&piece));
///
/// grid.fill_piece(&piece);
/// assert_eq!(grid.cell(4, 19), Some(Cell::Filled(ShapeKind::O)));
/// assert!(!grid.is_placeable(&piece));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [GridRow; GRID_HEIGHT],
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Grid {
    /// A grid with every cell empty.
    pub const EMPTY: Self = Self {
        rows: [GridRow::EMPTY; GRID_HEIGHT],
    };

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_WIDTH]> {
        self.rows.iter().map(|row| &row.cells)
    }

    /// Returns the cell at `(x, y)`, or `None` when outside the grid.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.rows.get(y)?.cells.get(x).copied()
    }

    /// Overwrites a single cell.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) {
        self.rows[y].cells[x] = cell;
    }

    /// Returns whether `piece` may occupy its current position.
    ///
    /// Every occupied cell must be inside the side walls and above the floor.
    /// Cells on the grid must be empty; cells above row 0 are tolerated.
    #[must_use]
    pub fn is_placeable(&self, piece: &Piece) -> bool {
        piece.cells().into_iter().all(|(x, y)| {
            let Some(col) = usize::try_from(x).ok().filter(|&col| col < GRID_WIDTH) else {
                return false;
            };
            match usize::try_from(y) {
                Err(_) => true,
                Ok(row) => row < GRID_HEIGHT && self.rows[row].cells[col].is_empty(),
            }
        })
    }

    /// Writes the piece's cells into the grid, tagged with its kind.
    ///
    /// Cells above row 0 have nowhere to go and are dropped.
    pub fn fill_piece(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y))
                && x < GRID_WIDTH
                && y < GRID_HEIGHT
            {
                self.rows[y].cells[x] = Cell::Filled(piece.kind());
            }
        }
    }

    /// Clears filled rows and returns the number of rows cleared.
    ///
    /// Rows are scanned bottom to top. Surviving rows keep their relative
    /// order and shift down by the number of cleared rows below them; the
    /// same number of empty rows enter at the top.
    pub fn clear_lines(&mut self) -> usize {
        let mut count = 0;
        for y in (0..GRID_HEIGHT).rev() {
            if self.rows[y].is_filled() {
                count += 1;
                continue;
            }
            if count > 0 {
                self.rows[y + count] = self.rows[y];
            }
        }
        self.rows[..count].fill(GridRow::EMPTY);
        count
    }
}
