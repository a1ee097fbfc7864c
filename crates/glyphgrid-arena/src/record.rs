//! Per-cell storage inside the arena.

use glyphgrid_core::{CellId, Direction, Position};

/// One arena slot: contents plus four optional neighbour indices.
#[derive(Clone, Debug)]
pub(crate) struct CellRecord<T> {
    pub(crate) contents: T,
    pub(crate) position: Position,
    /// Indexed by [`Direction::index`].
    pub(crate) links: [Option<CellId>; 4],
}

impl<T> CellRecord<T> {
    pub(crate) fn new(contents: T, position: Position) -> Self {
        Self {
            contents,
            position,
            links: [None; 4],
        }
    }

    pub(crate) fn link(&self, dir: Direction) -> Option<CellId> {
        self.links[dir.index()]
    }

    pub(crate) fn degree(&self) -> usize {
        self.links.iter().filter(|l| l.is_some()).count()
    }

    pub(crate) fn map<U>(self, f: impl FnOnce(T) -> U) -> CellRecord<U> {
        CellRecord {
            contents: f(self.contents),
            position: self.position,
            links: self.links,
        }
    }
}
