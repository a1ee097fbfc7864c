//! Error types for the glyphgrid workspace.
//!
//! One enum per concern: [`ParseError`] for turning text into a lattice and
//! [`DirectionError`] for reading compact movement paths.

use std::error::Error;
use std::fmt;

/// Errors from parsing text into a lattice.
///
/// Every variant means the same thing to a caller: the input cannot yield an
/// origin cell. Ragged rows, single characters and one-column text are all
/// valid and never produce an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The text is empty or consists only of line breaks.
    EmptyInput,
    /// The text has characters, but not in its first row, so there is no
    /// cell at row 0, column 0.
    MissingOrigin {
        /// Number of empty rows preceding the first non-empty row.
        leading_empty_rows: usize,
    },
    /// The text holds more characters than the lattice may address.
    CapacityExceeded {
        /// Number of cells the text would produce.
        requested: usize,
        /// Configured cell limit.
        capacity: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "input text contains no cells"),
            Self::MissingOrigin { leading_empty_rows } => {
                write!(
                    f,
                    "no origin cell: first {leading_empty_rows} row(s) are empty"
                )
            }
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "lattice capacity exceeded: requested {requested} cells, capacity {capacity} cells"
                )
            }
        }
    }
}

impl Error for ParseError {}

/// Errors from parsing a compact path string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectionError {
    /// A character that is not one of `N`, `S`, `E`, `W`.
    UnknownDirection {
        /// The offending character.
        found: char,
        /// Byte offset of the character within the path string.
        offset: usize,
    },
}

impl fmt::Display for DirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDirection { found, offset } => {
                write!(f, "unknown direction {found:?} at offset {offset}")
            }
        }
    }
}

impl Error for DirectionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(ParseError::EmptyInput.to_string(), "input text contains no cells");
        assert_eq!(
            ParseError::MissingOrigin {
                leading_empty_rows: 2
            }
            .to_string(),
            "no origin cell: first 2 row(s) are empty"
        );
        let e = ParseError::CapacityExceeded {
            requested: 10,
            capacity: 4,
        };
        assert!(e.to_string().contains("requested 10 cells"));
    }

    #[test]
    fn errors_are_std_errors() {
        fn assert_error<E: Error + Send + Sync + 'static>() {}
        assert_error::<ParseError>();
        assert_error::<DirectionError>();
    }
}
