//! Borrowed views onto individual lattice cells.

use crate::lattice::Lattice;
use crate::record::CellRecord;
use glyphgrid_core::{CellId, Direction, Position};
use smallvec::SmallVec;
use std::fmt;

/// Shared view of one cell: read its contents and walk to its neighbours.
///
/// `Cell` is `Copy` and cheap to pass around. Equality is identity: two
/// views are equal when they name the same cell of the same lattice,
/// regardless of contents.
pub struct Cell<'a, T> {
    lattice: &'a Lattice<T>,
    id: CellId,
}

impl<'a, T> Cell<'a, T> {
    pub(crate) fn new(lattice: &'a Lattice<T>, id: CellId) -> Self {
        Self { lattice, id }
    }

    fn record(&self) -> &'a CellRecord<T> {
        // Views are only created for ids inside their lattice.
        match self.lattice.record(self.id) {
            Some(r) => r,
            None => unreachable!("cell view {} outside its lattice", self.id),
        }
    }

    /// Arena id of this cell.
    pub fn id(&self) -> CellId {
        self.id
    }

    /// The cell's contents.
    pub fn contents(&self) -> &'a T {
        &self.record().contents
    }

    /// Column and row the cell was created at.
    pub fn position(&self) -> Position {
        self.record().position
    }

    /// The neighbour in `dir`, or `None` at a boundary.
    pub fn neighbor(&self, dir: Direction) -> Option<Cell<'a, T>> {
        self.record()
            .link(dir)
            .map(|id| Cell::new(self.lattice, id))
    }

    /// The cell in the row above.
    pub fn north(&self) -> Option<Cell<'a, T>> {
        self.neighbor(Direction::North)
    }

    /// The cell in the row below.
    pub fn south(&self) -> Option<Cell<'a, T>> {
        self.neighbor(Direction::South)
    }

    /// The cell to the right.
    pub fn east(&self) -> Option<Cell<'a, T>> {
        self.neighbor(Direction::East)
    }

    /// The cell to the left.
    pub fn west(&self) -> Option<Cell<'a, T>> {
        self.neighbor(Direction::West)
    }

    /// Present neighbours in the order north, south, east, west.
    pub fn adjacent_cells(&self) -> SmallVec<[Cell<'a, T>; 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&d| self.neighbor(d))
            .collect()
    }

    /// Number of present neighbours, `0..=4`.
    pub fn degree(&self) -> usize {
        self.record().degree()
    }

    /// Follow `path` one move at a time.
    ///
    /// Returns `None` as soon as a move has no neighbour.
    pub fn walk(&self, path: &[Direction]) -> Option<Cell<'a, T>> {
        path.iter().try_fold(*self, |cell, &d| cell.neighbor(d))
    }

    /// The lattice this cell belongs to.
    pub fn lattice(&self) -> &'a Lattice<T> {
        self.lattice
    }
}

impl<T> Clone for Cell<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cell<'_, T> {}

impl<T> PartialEq for Cell<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.lattice, other.lattice) && self.id == other.id
    }
}

impl<T> Eq for Cell<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cell<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("id", &self.id)
            .field("position", &self.position())
            .field("contents", self.contents())
            .finish()
    }
}

/// Exclusive view of one cell: rewrite its contents, then keep walking.
///
/// Holding a `CellMut` borrows the whole lattice mutably, so content writes
/// can never race with readers.
pub struct CellMut<'a, T> {
    lattice: &'a mut Lattice<T>,
    id: CellId,
}

impl<'a, T> CellMut<'a, T> {
    pub(crate) fn new(lattice: &'a mut Lattice<T>, id: CellId) -> Self {
        Self { lattice, id }
    }

    fn record(&self) -> &CellRecord<T> {
        match self.lattice.record(self.id) {
            Some(r) => r,
            None => unreachable!("cell view {} outside its lattice", self.id),
        }
    }

    fn record_mut(&mut self) -> &mut CellRecord<T> {
        let id = self.id;
        match self.lattice.record_mut(id) {
            Some(r) => r,
            None => unreachable!("cell view {id} outside its lattice"),
        }
    }

    /// Arena id of this cell.
    pub fn id(&self) -> CellId {
        self.id
    }

    /// Column and row the cell was created at.
    pub fn position(&self) -> Position {
        self.record().position
    }

    /// The cell's contents.
    pub fn contents(&self) -> &T {
        &self.record().contents
    }

    /// Mutable access to the cell's contents.
    pub fn contents_mut(&mut self) -> &mut T {
        &mut self.record_mut().contents
    }

    /// Replace the contents, returning the previous value.
    ///
    /// The new value is visible through every view of this cell.
    pub fn set_contents(&mut self, value: T) -> T {
        std::mem::replace(self.contents_mut(), value)
    }

    /// Id of the neighbour in `dir`.
    pub fn neighbor_id(&self, dir: Direction) -> Option<CellId> {
        self.record().link(dir)
    }

    /// Move this exclusive view to the neighbour in `dir`.
    pub fn into_neighbor(self, dir: Direction) -> Option<CellMut<'a, T>> {
        let next = self.neighbor_id(dir)?;
        Some(CellMut::new(self.lattice, next))
    }

    /// Reborrow as a shared view.
    pub fn as_cell(&self) -> Cell<'_, T> {
        Cell::new(&*self.lattice, self.id)
    }
}

impl<T: fmt::Debug> fmt::Debug for CellMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellMut")
            .field("id", &self.id)
            .field("position", &self.position())
            .field("contents", self.contents())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lattice, LatticeBuilder};
    use glyphgrid_core::{parse_path, Direction, GridBuilder, Position};

    /// One row "ABC".
    fn row() -> Lattice<char> {
        let mut b = LatticeBuilder::new();
        let a = b.cell('A', 0, 0);
        let bb = b.cell('B', 1, 0);
        b.east_west(Some(bb), Some(a));
        let c = b.cell('C', 2, 0);
        b.east_west(Some(c), Some(bb));
        b.finish(a)
    }

    #[test]
    fn middle_of_row_has_two_neighbours() {
        let l = row();
        let mid = l.origin().east().unwrap();
        assert_eq!(*mid.contents(), 'B');
        let adj = mid.adjacent_cells();
        assert_eq!(adj.len(), 2);
        // North/south absent, so east comes before west.
        assert_eq!(*adj[0].contents(), 'C');
        assert_eq!(adj[1], l.origin());
        assert_eq!(mid.degree(), 2);
    }

    #[test]
    fn boundaries_are_absent() {
        let l = row();
        let o = l.origin();
        assert!(o.north().is_none());
        assert!(o.south().is_none());
        assert!(o.west().is_none());
        assert_eq!(o.degree(), 1);
    }

    #[test]
    fn walk_follows_and_stops() {
        let l = row();
        let o = l.origin();
        let end = o.walk(&parse_path("EE").unwrap()).unwrap();
        assert_eq!(*end.contents(), 'C');
        assert_eq!(end.position(), Position::new(2, 0));
        assert!(o.walk(&parse_path("EEE").unwrap()).is_none());
        assert_eq!(o.walk(&[]), Some(o));
    }

    #[test]
    fn identity_not_content_equality() {
        let mut l = row();
        l.set_contents(l.origin().east().unwrap().id(), 'A');
        let o = l.origin();
        let mid = o.east().unwrap();
        assert_eq!(o.contents(), mid.contents());
        assert_ne!(o, mid);
    }

    #[test]
    fn views_from_different_lattices_differ() {
        let a = row();
        let b = row();
        assert_ne!(a.origin(), b.origin());
    }

    #[test]
    fn cell_mut_writes_are_shared() {
        let mut l = row();
        let old = l.origin_mut().set_contents('Z');
        assert_eq!(old, 'A');
        let back = l.origin().east().and_then(|c| c.west()).unwrap();
        assert_eq!(*back.contents(), 'Z');
    }

    #[test]
    fn cell_mut_walks_and_edits() {
        let mut l = row();
        let mut last = l
            .origin_mut()
            .into_neighbor(Direction::East)
            .and_then(|c| c.into_neighbor(Direction::East))
            .unwrap();
        *last.contents_mut() = 'x';
        assert_eq!(last.neighbor_id(Direction::East), None);
        assert_eq!(last.as_cell().west().map(|c| *c.contents()), Some('B'));
        assert_eq!(l.cell_at(2, 0).map(|c| *c.contents()), Some('x'));
    }

    #[test]
    fn into_neighbor_at_edge_is_none() {
        let mut l = row();
        assert!(l.origin_mut().into_neighbor(Direction::West).is_none());
    }
}
