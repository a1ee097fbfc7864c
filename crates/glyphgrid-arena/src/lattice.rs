//! The lattice arena: owner of every cell built from one text.

use crate::cell::{Cell, CellMut};
use crate::record::CellRecord;
use glyphgrid_core::{CellId, Direction, Position};

/// An arena of cross-linked cells with a designated origin.
///
/// Produced by [`LatticeBuilder::finish`](crate::LatticeBuilder). The origin
/// is the only entry point a caller needs; every other cell of a
/// rectangular lattice is reachable from it through neighbour moves.
///
/// Cells are stored in creation order. Dropping the lattice reclaims every
/// cell at once.
///
/// # Examples
///
/// ```
/// use glyphgrid_arena::LatticeBuilder;
/// use glyphgrid_core::GridBuilder;
///
/// let mut b = LatticeBuilder::new();
/// let a = b.cell('A', 0, 0);
/// let z = b.cell('Z', 1, 0);
/// b.east_west(Some(z), Some(a));
/// let mut lattice = b.finish(a);
///
/// assert_eq!(lattice.origin().east().map(|c| *c.contents()), Some('Z'));
/// lattice.origin_mut().set_contents('Q');
/// let back = lattice.origin().east().and_then(|c| c.west()).unwrap();
/// assert_eq!(*back.contents(), 'Q');
/// ```
#[derive(Clone, Debug)]
pub struct Lattice<T> {
    records: Vec<CellRecord<T>>,
    origin: CellId,
}

impl<T> Lattice<T> {
    /// Assemble a finished lattice. `origin` must index into `records`.
    pub(crate) fn from_parts(records: Vec<CellRecord<T>>, origin: CellId) -> Self {
        assert!(
            origin.index() < records.len(),
            "origin {origin} outside lattice of {} cells",
            records.len()
        );
        Self { records, origin }
    }

    pub(crate) fn record(&self, id: CellId) -> Option<&CellRecord<T>> {
        self.records.get(id.index())
    }

    pub(crate) fn record_mut(&mut self, id: CellId) -> Option<&mut CellRecord<T>> {
        self.records.get_mut(id.index())
    }

    /// Id of the origin cell.
    pub fn origin_id(&self) -> CellId {
        self.origin
    }

    /// The origin cell (first row, first column of the source text).
    pub fn origin(&self) -> Cell<'_, T> {
        Cell::new(self, self.origin)
    }

    /// Exclusive view of the origin cell.
    pub fn origin_mut(&mut self) -> CellMut<'_, T> {
        let origin = self.origin;
        CellMut::new(self, origin)
    }

    /// View of the cell with the given id, or `None` if it is not in this lattice.
    pub fn cell(&self, id: CellId) -> Option<Cell<'_, T>> {
        self.record(id).map(|_| Cell::new(self, id))
    }

    /// Exclusive view of the cell with the given id.
    pub fn cell_mut(&mut self, id: CellId) -> Option<CellMut<'_, T>> {
        if id.index() < self.records.len() {
            Some(CellMut::new(self, id))
        } else {
            None
        }
    }

    /// First cell created at the given column and row.
    ///
    /// Linear scan; intended for tests and tooling, not hot loops.
    pub fn cell_at(&self, x: usize, y: usize) -> Option<Cell<'_, T>> {
        let target = Position::new(x, y);
        self.records
            .iter()
            .position(|r| r.position == target)
            .map(|i| Cell::new(self, CellId(i as u32)))
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`: a finished lattice holds at least its origin.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All cells in creation order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Cell<'_, T>> + '_ {
        (0..self.records.len()).map(move |i| Cell::new(self, CellId(i as u32)))
    }

    /// Contents of a cell, or `None` for an unknown id.
    pub fn contents(&self, id: CellId) -> Option<&T> {
        self.record(id).map(|r| &r.contents)
    }

    /// Replace the contents of a cell, returning the previous value.
    ///
    /// Returns `None` (and drops `value`) if `id` is not in this lattice.
    pub fn set_contents(&mut self, id: CellId, value: T) -> Option<T> {
        self.record_mut(id)
            .map(|r| std::mem::replace(&mut r.contents, value))
    }

    /// Neighbour id of a cell in the given direction.
    pub fn neighbor_id(&self, id: CellId, dir: Direction) -> Option<CellId> {
        self.record(id).and_then(|r| r.link(dir))
    }

    /// Convert every cell's contents, keeping topology and ids.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Lattice<U> {
        Lattice {
            records: self
                .records
                .into_iter()
                .map(|r| r.map(&mut f))
                .collect(),
            origin: self.origin,
        }
    }
}
