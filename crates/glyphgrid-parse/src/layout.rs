//! Row splitting and up-front validation of parser input.

use crate::config::ParseConfig;
use glyphgrid_core::ParseError;

/// The rows of a text, validated and measured before any cell is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout<'t> {
    rows: Vec<&'t str>,
    cells: usize,
    widest: usize,
}

impl<'t> Layout<'t> {
    /// Split `text` into rows and check that it can yield an origin.
    ///
    /// Interior empty rows are kept; they hold no cells, so the row below
    /// them gets no north links. Empty rows produced by trailing line breaks
    /// are dropped.
    pub fn scan(text: &'t str, config: &ParseConfig) -> Result<Self, ParseError> {
        let rows = split_rows(text, config);
        if rows.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if rows[0].is_empty() {
            let leading_empty_rows = rows.iter().take_while(|r| r.is_empty()).count();
            return Err(ParseError::MissingOrigin { leading_empty_rows });
        }

        let widths: Vec<usize> = rows.iter().map(|r| r.chars().count()).collect();
        let cells: usize = widths.iter().sum();
        let capacity = config.cell_limit();
        if cells > capacity {
            return Err(ParseError::CapacityExceeded {
                requested: cells,
                capacity,
            });
        }
        let widest = widths.iter().copied().max().unwrap_or(0);

        Ok(Self {
            rows,
            cells,
            widest,
        })
    }

    /// Rows in top-to-bottom order.
    pub fn rows(&self) -> &[&'t str] {
        &self.rows
    }

    /// Total number of cells the text produces.
    pub fn cell_count(&self) -> usize {
        self.cells
    }

    /// Width of the longest row, in characters.
    pub fn widest(&self) -> usize {
        self.widest
    }

    /// Whether rows differ in length.
    pub fn is_ragged(&self) -> bool {
        self.cells != self.widest * self.rows.len()
    }
}

/// Split on the configured line break, dropping trailing empty rows.
pub(crate) fn split_rows<'t>(text: &'t str, config: &ParseConfig) -> Vec<&'t str> {
    let mut rows: Vec<&str> = text
        .split(config.line_break)
        .map(|row| {
            if config.strip_carriage_return {
                row.strip_suffix('\r').unwrap_or(row)
            } else {
                row
            }
        })
        .collect();
    while rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }
    rows
}
