//! The text parser: rows in, linked lattice out.

use crate::config::ParseConfig;
use crate::layout::{self, Layout};
use glyphgrid_arena::{Lattice, LatticeBuilder};
use glyphgrid_core::{GridBuilder, ParseError};
use tracing::{debug, debug_span, trace};

/// Parses text into a lattice of cross-linked cells.
///
/// Rows are processed top to bottom and characters left to right. Each
/// character becomes one cell, linked to the cell directly above it (if
/// that row reaches this column) and to the cell directly to its left.
/// East and south links follow from the symmetric wiring.
///
/// # Examples
///
/// ```
/// use glyphgrid_parse::AsciiGrid;
///
/// let lattice = AsciiGrid::new().parse("AB\nCD").unwrap();
/// let origin = lattice.origin();
/// let d = origin.east().and_then(|c| c.south()).unwrap();
/// assert_eq!(*d.contents(), 'D');
/// assert_eq!(d.west().and_then(|c| c.north()), Some(origin));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AsciiGrid {
    config: ParseConfig,
}

impl AsciiGrid {
    /// Parser with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser with the given configuration.
    pub fn with_config(config: ParseConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Rows of `text` as the parser sees them.
    pub fn rows<'t>(&self, text: &'t str) -> Vec<&'t str> {
        layout::split_rows(text, &self.config)
    }

    /// Parse `text` into a `Lattice<char>` using the default builder.
    ///
    /// Returns an error only when the text cannot yield an origin cell
    /// (see [`ParseError`]).
    pub fn parse(&self, text: &str) -> Result<Lattice<char>, ParseError> {
        self.run(text, LatticeBuilder::with_capacity)
    }

    /// Parse `text`, delegating cell creation and linking to `builder`.
    pub fn parse_with<B: GridBuilder>(
        &self,
        text: &str,
        builder: B,
    ) -> Result<B::Output, ParseError> {
        self.run(text, |_| builder)
    }

    /// Validate `text`, size the builder from the cell count, then build.
    fn run<B: GridBuilder>(
        &self,
        text: &str,
        make_builder: impl FnOnce(usize) -> B,
    ) -> Result<B::Output, ParseError> {
        let _span = debug_span!("parse", bytes = text.len()).entered();

        let layout = Layout::scan(text, &self.config)
            .inspect_err(|e| debug!(error = %e, "rejected input"))?;
        let builder = make_builder(layout.cell_count());
        let output = build(&layout, builder)?;

        debug!(
            rows = layout.rows().len(),
            cells = layout.cell_count(),
            ragged = layout.is_ragged(),
            "parsed lattice"
        );
        Ok(output)
    }
}

/// Single pass over a validated layout.
///
/// Only the previous row's handles are retained: that is all the north
/// lookup ever needs. A column beyond the previous row's width has no
/// cell above it.
fn build<B: GridBuilder>(layout: &Layout<'_>, mut builder: B) -> Result<B::Output, ParseError> {
    let mut above: Vec<B::Handle> = Vec::with_capacity(layout.widest());
    let mut current: Vec<B::Handle> = Vec::with_capacity(layout.widest());
    let mut origin = None;

    for (y, row) in layout.rows().iter().enumerate() {
        current.clear();
        for (x, ch) in row.chars().enumerate() {
            let cell = builder.cell(ch, x, y);
            origin.get_or_insert(cell);
            if let Some(&north) = above.get(x) {
                builder.north_south(Some(north), Some(cell));
            }
            if let Some(&west) = current.last() {
                builder.east_west(Some(cell), Some(west));
            }
            current.push(cell);
        }
        trace!(row = y, width = current.len(), "row built");
        std::mem::swap(&mut above, &mut current);
    }

    // Layout::scan guarantees a non-empty first row.
    let origin = origin.ok_or(ParseError::EmptyInput)?;
    Ok(builder.finish(origin))
}

/// Parse `text` with the default configuration and builder.
///
/// Shorthand for `AsciiGrid::new().parse(text)`.
pub fn parse(text: &str) -> Result<Lattice<char>, ParseError> {
    AsciiGrid::new().parse(text)
}
