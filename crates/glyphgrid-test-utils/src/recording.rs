//! A [`GridBuilder`] decorator that records every call.

use glyphgrid_arena::{Lattice, LatticeBuilder};
use glyphgrid_core::{CellId, GridBuilder, Position};
use std::cell::RefCell;
use std::rc::Rc;

/// One builder call, with handles replaced by the `(x, y)` they were
/// created at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Cell { ch: char, x: usize, y: usize },
    EastWest { east: (usize, usize), west: (usize, usize) },
    NorthSouth { north: (usize, usize), south: (usize, usize) },
    /// A link call where one side was absent.
    Partial,
}

/// Records calls, then delegates to a [`LatticeBuilder`].
///
/// Grab the shared call log with [`calls`](RecordingBuilder::calls) before
/// handing the builder to the parser; it stays readable after the builder
/// has been consumed.
pub struct RecordingBuilder {
    inner: LatticeBuilder<char>,
    positions: Vec<Position>,
    calls: Rc<RefCell<Vec<Call>>>,
}

impl RecordingBuilder {
    pub fn new() -> Self {
        Self {
            inner: LatticeBuilder::new(),
            positions: Vec::new(),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Shared handle to the call log.
    pub fn calls(&self) -> Rc<RefCell<Vec<Call>>> {
        Rc::clone(&self.calls)
    }

    fn xy(&self, id: CellId) -> (usize, usize) {
        let p = self.positions[id.index()];
        (p.x, p.y)
    }
}

impl Default for RecordingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GridBuilder for RecordingBuilder {
    type Handle = CellId;
    type Output = Lattice<char>;

    fn cell(&mut self, ch: char, x: usize, y: usize) -> CellId {
        self.calls.borrow_mut().push(Call::Cell { ch, x, y });
        self.positions.push(Position::new(x, y));
        self.inner.cell(ch, x, y)
    }

    fn east_west(&mut self, east: Option<CellId>, west: Option<CellId>) {
        let call = match (east, west) {
            (Some(e), Some(w)) => Call::EastWest {
                east: self.xy(e),
                west: self.xy(w),
            },
            _ => Call::Partial,
        };
        self.calls.borrow_mut().push(call);
        self.inner.east_west(east, west);
    }

    fn north_south(&mut self, north: Option<CellId>, south: Option<CellId>) {
        let call = match (north, south) {
            (Some(n), Some(s)) => Call::NorthSouth {
                north: self.xy(n),
                south: self.xy(s),
            },
            _ => Call::Partial,
        };
        self.calls.borrow_mut().push(call);
        self.inner.north_south(north, south);
    }

    fn finish(self, origin: CellId) -> Lattice<char> {
        self.inner.finish(origin)
    }
}
