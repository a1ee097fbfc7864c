//! Cardinal directions and movement paths.

use crate::error::DirectionError;
use smallvec::SmallVec;
use std::fmt;

/// One of the four cardinal neighbour slots of a cell.
///
/// The declaration order (north, south, east, west) is the order in which
/// adjacent cells are reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// The cell in the row above.
    North,
    /// The cell in the row below.
    South,
    /// The cell to the right in the same row.
    East,
    /// The cell to the left in the same row.
    West,
}

impl Direction {
    /// All directions in neighbour-reporting order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The direction pointing back the way this one came.
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// The axis this direction moves along.
    pub fn axis(self) -> Axis {
        match self {
            Self::North | Self::South => Axis::Vertical,
            Self::East | Self::West => Axis::Horizontal,
        }
    }

    /// Slot index in `0..4`, matching [`Direction::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse a single-letter direction (`N`, `S`, `E`, `W`, any case).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// Single-letter abbreviation.
    pub fn as_char(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

/// The two axes along which a builder wires links.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// North/south links between consecutive rows.
    Vertical,
    /// East/west links within a row.
    Horizontal,
}

/// A sequence of moves through the lattice.
///
/// `SmallVec<[Direction; 8]>` keeps short walks off the heap.
pub type Path = SmallVec<[Direction; 8]>;

/// Parse a compact path such as `"ESWN"` into a [`Path`].
///
/// Whitespace is ignored so paths can be grouped (`"EE SS"`).
pub fn parse_path(s: &str) -> Result<Path, DirectionError> {
    s.char_indices()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(offset, c)| {
            Direction::from_char(c).ok_or(DirectionError::UnknownDirection { found: c, offset })
        })
        .collect()
}
