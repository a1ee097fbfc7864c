//! Fixture texts covering the shapes the parser must handle.

pub const SINGLE: &str = "A";

pub const ROW: &str = "ABC";

pub const COLUMN: &str = "A\nB\nC";

pub const SQUARE_2X2: &str = "AB\nCD";

/// Second row shorter than the first.
pub const RAGGED_SHORT: &str = "AB\nC";

/// Rows growing, shrinking and growing again.
pub const RAGGED_MIXED: &str = "ABCD\nE\nFGH\nIJKLMN";

/// An empty row between two full ones.
pub const GAPPED: &str = "AB\n\nCD";

pub const MAZE: &str = "\
#########
#S..#...#
#.#.#.#.#
#.#...#E#
#########";

pub const ALL: &[&str] = &[
    SINGLE,
    ROW,
    COLUMN,
    SQUARE_2X2,
    RAGGED_SHORT,
    RAGGED_MIXED,
    GAPPED,
    MAZE,
];
