//! Strongly-typed identifiers for lattice cells.

use std::fmt;

/// Index of a cell within a lattice arena.
///
/// Cells are appended in creation order, so `CellId(n)` is the n-th cell
/// created by the builder. For a parsed text that is row-major order with
/// the origin at `CellId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub u32);

impl CellId {
    /// Largest number of cells an arena can address.
    pub const MAX_CELLS: usize = u32::MAX as usize;

    /// The id as an arena index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CellId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Where a cell sat in the source text.
///
/// `x` is the column (character offset within the row) and `y` is the row.
/// Purely informational: links are never derived from positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column within the row.
    pub x: usize,
    /// Row within the text.
    pub y: usize,
}

impl Position {
    /// Create a position from a column and a row.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
