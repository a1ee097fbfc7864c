//! Lattice invariant checks.
//!
//! These functions verify that a lattice satisfies the structural contract:
//! symmetric links, neighbour lists that agree with the link slots, and a
//! topology matching the text it was parsed from. Reused across the arena,
//! parser and facade test suites.

use glyphgrid_arena::Lattice;
use glyphgrid_core::{CellId, Direction, Position};
use indexmap::{IndexMap, IndexSet};
use std::collections::VecDeque;

/// Assert that `a.east == b` implies `b.west == a`, and likewise for every
/// other direction.
pub fn assert_links_symmetric<T>(lattice: &Lattice<T>) {
    for cell in lattice.cells() {
        for d in Direction::ALL {
            if let Some(n) = cell.neighbor(d) {
                let back = n.neighbor(d.opposite()).map(|c| c.id());
                assert_eq!(
                    back,
                    Some(cell.id()),
                    "cell {} has {d} neighbour {} whose {} slot is {back:?}",
                    cell.id(),
                    n.id(),
                    d.opposite(),
                );
            }
        }
    }
}

/// Assert that `adjacent_cells()` lists exactly the present slots, in
/// north, south, east, west order.
pub fn assert_degree_matches_slots<T>(lattice: &Lattice<T>) {
    for cell in lattice.cells() {
        let slots: Vec<CellId> = Direction::ALL
            .iter()
            .filter_map(|&d| cell.neighbor(d))
            .map(|c| c.id())
            .collect();
        let adjacent: Vec<CellId> = cell.adjacent_cells().iter().map(|c| c.id()).collect();
        assert_eq!(adjacent, slots, "adjacent cells of {} out of order", cell.id());
        assert_eq!(cell.degree(), slots.len());
        assert!(cell.degree() <= 4);
    }
}

/// Breadth-first set of cells reachable from the origin, in visit order.
pub fn reachable_from_origin<T>(lattice: &Lattice<T>) -> IndexSet<CellId> {
    let mut seen = IndexSet::new();
    let mut queue = VecDeque::new();
    seen.insert(lattice.origin_id());
    queue.push_back(lattice.origin());
    while let Some(cell) = queue.pop_front() {
        for n in cell.adjacent_cells() {
            if seen.insert(n.id()) {
                queue.push_back(n);
            }
        }
    }
    seen
}

/// Assert that the lattice has one cell per character of `rows`, with the
/// right contents, and exactly the links the row layout implies.
pub fn assert_shape_matches(lattice: &Lattice<char>, rows: &[&str]) {
    let widths: Vec<usize> = rows.iter().map(|r| r.chars().count()).collect();
    assert_eq!(lattice.len(), widths.iter().sum::<usize>(), "cell count");

    let by_position: IndexMap<Position, CellId> =
        lattice.cells().map(|c| (c.position(), c.id())).collect();
    assert_eq!(by_position.len(), lattice.len(), "duplicate positions");
    let at = |x: usize, y: usize| by_position.get(&Position::new(x, y)).copied();

    assert_eq!(Some(lattice.origin_id()), at(0, 0), "origin is not (0, 0)");

    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            let id = at(x, y).unwrap_or_else(|| panic!("no cell at ({x}, {y})"));
            let cell = lattice.cell(id).expect("id from this lattice");
            assert_eq!(*cell.contents(), ch, "contents at ({x}, {y})");

            let north = (y > 0 && x < widths[y - 1]).then(|| at(x, y - 1)).flatten();
            let south = (y + 1 < widths.len() && x < widths[y + 1])
                .then(|| at(x, y + 1))
                .flatten();
            let east = (x + 1 < widths[y]).then(|| at(x + 1, y)).flatten();
            let west = (x > 0).then(|| at(x - 1, y)).flatten();

            for (d, expected) in [
                (Direction::North, north),
                (Direction::South, south),
                (Direction::East, east),
                (Direction::West, west),
            ] {
                assert_eq!(
                    cell.neighbor(d).map(|c| c.id()),
                    expected,
                    "{d} of ({x}, {y})"
                );
            }
        }
    }

    if rows.iter().all(|r| !r.is_empty()) {
        assert_eq!(
            reachable_from_origin(lattice).len(),
            lattice.len(),
            "cells unreachable from origin"
        );
    }
}

/// Run every check against a lattice parsed from `rows`.
pub fn assert_lattice_invariants(lattice: &Lattice<char>, rows: &[&str]) {
    assert_links_symmetric(lattice);
    assert_degree_matches_slots(lattice);
    assert_shape_matches(lattice, rows);
}
