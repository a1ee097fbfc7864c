//! The default [`GridBuilder`]: cells go straight into a lattice arena.

use crate::lattice::Lattice;
use crate::record::CellRecord;
use glyphgrid_core::{CellId, Direction, GridBuilder, Position};

fn keep_char(c: char) -> char {
    c
}

/// Builds a [`Lattice`] one cell and one link at a time.
///
/// Each character is turned into contents by the converter `F`;
/// [`LatticeBuilder::new`] keeps it as a `char`. Link slots are written
/// only here, and each slot is written at most once: re-linking a slot to a
/// different cell is a bug in the driver and trips a debug assertion, while
/// re-linking to the same cell is a no-op.
pub struct LatticeBuilder<T, F = fn(char) -> T> {
    records: Vec<CellRecord<T>>,
    convert: F,
}

impl LatticeBuilder<char> {
    /// Builder producing a `Lattice<char>`.
    pub fn new() -> Self {
        Self::with_converter(keep_char)
    }

    /// Builder producing a `Lattice<char>` with room for `cells` cells.
    pub fn with_capacity(cells: usize) -> Self {
        let mut b = Self::new();
        b.reserve(cells);
        b
    }
}

impl Default for LatticeBuilder<char> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> LatticeBuilder<T, F>
where
    F: FnMut(char) -> T,
{
    /// Builder that converts each character with `convert`.
    pub fn with_converter(convert: F) -> Self {
        Self {
            records: Vec::new(),
            convert,
        }
    }

    /// Reserve room for `additional` more cells.
    pub fn reserve(&mut self, additional: usize) {
        self.records.reserve(additional);
    }

    /// Number of cells created so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no cell has been created yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Point `from`'s `dir` slot at `to`.
    fn link(&mut self, from: CellId, dir: Direction, to: CellId) {
        debug_assert!(
            from.index() < self.records.len(),
            "link from unknown cell {from}"
        );
        let Some(record) = self.records.get_mut(from.index()) else {
            return;
        };
        let slot = &mut record.links[dir.index()];
        match *slot {
            None => *slot = Some(to),
            Some(existing) => debug_assert_eq!(
                existing, to,
                "{dir} slot of cell {from} already linked"
            ),
        }
    }
}

impl<T, F> GridBuilder for LatticeBuilder<T, F>
where
    F: FnMut(char) -> T,
{
    type Handle = CellId;
    type Output = Lattice<T>;

    fn cell(&mut self, ch: char, x: usize, y: usize) -> CellId {
        debug_assert!(self.records.len() < CellId::MAX_CELLS);
        let id = CellId(self.records.len() as u32);
        let contents = (self.convert)(ch);
        self.records
            .push(CellRecord::new(contents, Position::new(x, y)));
        id
    }

    fn east_west(&mut self, east: Option<CellId>, west: Option<CellId>) {
        if let (Some(e), Some(w)) = (east, west) {
            self.link(e, Direction::West, w);
            self.link(w, Direction::East, e);
        }
    }

    fn north_south(&mut self, north: Option<CellId>, south: Option<CellId>) {
        if let (Some(n), Some(s)) = (north, south) {
            self.link(n, Direction::South, s);
            self.link(s, Direction::North, n);
        }
    }

    /// # Panics
    ///
    /// Panics if `origin` was not created by this builder.
    fn finish(self, origin: CellId) -> Lattice<T> {
        Lattice::from_parts(self.records, origin)
    }
}
