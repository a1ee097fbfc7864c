//! Text-to-lattice parsing for glyphgrid.
//!
//! [`AsciiGrid`] turns a block of text into a cross-linked lattice in a
//! single top-to-bottom, left-to-right pass, handing cell creation and link
//! wiring to a pluggable [`GridBuilder`](glyphgrid_core::GridBuilder).
//!
//! Rows may differ in length. A cell whose column does not exist in the row
//! above (or below) simply has no north (or south) neighbour.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod grid;
pub mod layout;

pub use config::ParseConfig;
pub use grid::{parse, AsciiGrid};
pub use layout::Layout;
