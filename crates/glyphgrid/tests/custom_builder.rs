//! The parser accepts any `GridBuilder`, including ones that build
//! something other than a `Lattice`.

use glyphgrid::prelude::*;
use glyphgrid_test_utils::{Call, RecordingBuilder};

/// Counts links instead of building cells.
#[derive(Default)]
struct LinkCounter {
    cells: usize,
    horizontal: usize,
    vertical: usize,
}

impl GridBuilder for LinkCounter {
    type Handle = (usize, usize);
    type Output = (usize, usize, usize);

    fn cell(&mut self, _ch: char, x: usize, y: usize) -> (usize, usize) {
        self.cells += 1;
        (x, y)
    }

    fn east_west(&mut self, east: Option<(usize, usize)>, west: Option<(usize, usize)>) {
        if let (Some(e), Some(w)) = (east, west) {
            assert_eq!((e.0, e.1), (w.0 + 1, w.1));
            self.horizontal += 1;
        }
    }

    fn north_south(&mut self, north: Option<(usize, usize)>, south: Option<(usize, usize)>) {
        if let (Some(n), Some(s)) = (north, south) {
            assert_eq!((n.0, n.1 + 1), (s.0, s.1));
            self.vertical += 1;
        }
    }

    fn finish(self, origin: (usize, usize)) -> (usize, usize, usize) {
        assert_eq!(origin, (0, 0));
        (self.cells, self.horizontal, self.vertical)
    }
}

#[test]
fn alternate_builder_output() {
    let grid = AsciiGrid::new();
    assert_eq!(grid.parse_with("ABC\nDEF", LinkCounter::default()).unwrap(), (6, 4, 3));
    assert_eq!(grid.parse_with("ABC\nD", LinkCounter::default()).unwrap(), (4, 2, 1));
    assert_eq!(grid.parse_with("A", LinkCounter::default()).unwrap(), (1, 0, 0));
}

#[test]
fn alternate_builder_sees_same_errors() {
    let err = AsciiGrid::new()
        .parse_with("", LinkCounter::default())
        .unwrap_err();
    assert_eq!(err, ParseError::EmptyInput);
}

#[test]
fn converting_builder_changes_node_type() {
    let builder = LatticeBuilder::with_converter(|c: char| c.to_digit(10).unwrap_or(0));
    let l = AsciiGrid::new().parse_with("12\n34", builder).unwrap();
    let total: u32 = l.cells().map(|c| *c.contents()).sum();
    assert_eq!(total, 10);
    assert_eq!(l.origin().walk(&parse_path("SE").unwrap()).map(|c| *c.contents()), Some(4));
}

#[test]
fn recording_builder_observes_wiring_order() {
    let rec = RecordingBuilder::new();
    let log = rec.calls();
    AsciiGrid::new().parse_with("AB\nCD", rec).unwrap();
    let links: Vec<Call> = log
        .borrow()
        .iter()
        .filter(|c| !matches!(c, Call::Cell { .. }))
        .cloned()
        .collect();
    assert_eq!(
        links,
        vec![
            Call::EastWest { east: (1, 0), west: (0, 0) },
            Call::NorthSouth { north: (0, 0), south: (0, 1) },
            Call::NorthSouth { north: (1, 0), south: (1, 1) },
            Call::EastWest { east: (1, 1), west: (0, 1) },
        ]
    );
}
