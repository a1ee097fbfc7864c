//! glyphgrid: parse a block of text into a navigable lattice of cells.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all glyphgrid sub-crates. For most users, adding `glyphgrid` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use glyphgrid::prelude::*;
//!
//! let mut lattice = glyphgrid::parse("#.\n.#").unwrap();
//!
//! // Walk the text as a 2D structure from the top-left cell.
//! let origin = lattice.origin();
//! let diagonal = origin.walk(&parse_path("ES").unwrap()).unwrap();
//! assert_eq!(*diagonal.contents(), '#');
//! assert_eq!(origin.adjacent_cells().len(), 2);
//!
//! // Contents are mutable; topology is not.
//! lattice.origin_mut().set_contents('@');
//! let back = lattice.origin().east().and_then(|c| c.west()).unwrap();
//! assert_eq!(*back.contents(), '@');
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `glyphgrid-core` | `CellId`, `Direction`, errors, the `GridBuilder` trait |
//! | [`arena`] | `glyphgrid-arena` | `Lattice`, `Cell`, `CellMut`, `LatticeBuilder` |
//! | [`parser`] | `glyphgrid-parse` | `AsciiGrid`, `ParseConfig`, `Layout` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`glyphgrid-core`).
///
/// Implement [`types::GridBuilder`] to plug a custom construction strategy
/// into the parser.
pub use glyphgrid_core as types;

/// Cell storage and navigation (`glyphgrid-arena`).
pub use glyphgrid_arena as arena;

/// Text parsing (`glyphgrid-parse`).
pub use glyphgrid_parse as parser;

pub use glyphgrid_parse::parse;

/// Common imports for typical glyphgrid usage.
///
/// ```rust
/// use glyphgrid::prelude::*;
/// ```
pub mod prelude {
    pub use glyphgrid_arena::{Cell, CellMut, Lattice, LatticeBuilder};
    pub use glyphgrid_core::{
        parse_path, CellId, Direction, GridBuilder, ParseError, Path, Position,
    };
    pub use glyphgrid_parse::{AsciiGrid, ParseConfig};
}
