//! The construction strategy used by the text parser.

/// Creates cells and wires bidirectional links between them.
///
/// The parser drives a builder row by row: one [`cell`](Self::cell) call per
/// character, then at most one [`north_south`](Self::north_south) and one
/// [`east_west`](Self::east_west) call linking the new cell to the cells
/// above and to the left. Swapping the builder changes what gets built
/// (a different node type, an instrumented double) without touching the
/// parsing logic.
///
/// Link operations tolerate absent arguments, so callers never have to guard
/// before invoking them.
pub trait GridBuilder {
    /// Handle to a cell created by this builder.
    type Handle: Copy;

    /// What the builder yields once parsing has designated the origin.
    type Output;

    /// Create an unlinked cell holding `ch`.
    ///
    /// `x` is the column and `y` the row. They are informational and must not
    /// influence linking.
    fn cell(&mut self, ch: char, x: usize, y: usize) -> Self::Handle;

    /// Link two horizontally adjacent cells.
    ///
    /// If `east` is present its west slot is set to `west`; if `west` is
    /// present its east slot is set to `east`.
    fn east_west(&mut self, east: Option<Self::Handle>, west: Option<Self::Handle>);

    /// Link two vertically adjacent cells.
    ///
    /// If `north` is present its south slot is set to `south`; if `south` is
    /// present its north slot is set to `north`.
    fn north_south(&mut self, north: Option<Self::Handle>, south: Option<Self::Handle>);

    /// Finish construction with `origin` as the entry point.
    fn finish(self, origin: Self::Handle) -> Self::Output;
}
