//! Parser configuration.

use glyphgrid_core::CellId;

/// Configuration for [`AsciiGrid`](crate::AsciiGrid).
///
/// All values are plain data; the defaults reproduce line-feed splitting
/// with no character filtering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseConfig {
    /// Character separating rows.
    ///
    /// Default: `'\n'`.
    pub line_break: char,

    /// Drop a single `'\r'` at the end of each row, so CRLF text parses the
    /// same as LF text.
    ///
    /// Default: `false` (a carriage return is an ordinary cell).
    pub strip_carriage_return: bool,

    /// Upper bound on the number of cells one parse may create.
    ///
    /// Default and ceiling: [`CellId::MAX_CELLS`]. Larger values are
    /// clamped to the ceiling by [`ParseConfig::cell_limit`].
    pub max_cells: usize,
}

impl ParseConfig {
    /// Default row separator.
    pub const DEFAULT_LINE_BREAK: char = '\n';

    /// Default cell limit.
    pub const DEFAULT_MAX_CELLS: usize = CellId::MAX_CELLS;

    /// Config with default values.
    pub fn new() -> Self {
        Self {
            line_break: Self::DEFAULT_LINE_BREAK,
            strip_carriage_return: false,
            max_cells: Self::DEFAULT_MAX_CELLS,
        }
    }

    /// Use `line_break` as the row separator.
    pub fn with_line_break(mut self, line_break: char) -> Self {
        self.line_break = line_break;
        self
    }

    /// Enable or disable trailing carriage-return stripping.
    pub fn with_strip_carriage_return(mut self, strip: bool) -> Self {
        self.strip_carriage_return = strip;
        self
    }

    /// Limit the number of cells per parse.
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Effective cell limit, never above what a lattice can address.
    pub fn cell_limit(&self) -> usize {
        self.max_cells.min(CellId::MAX_CELLS)
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new()
    }
}
