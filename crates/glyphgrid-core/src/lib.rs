//! Core types and traits for the glyphgrid text lattice.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the glyphgrid workspace:
//! cell identifiers, cardinal directions, error types, and the
//! [`GridBuilder`] construction strategy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod id;
pub mod traits;

pub use direction::{parse_path, Axis, Direction, Path};
pub use error::{DirectionError, ParseError};
pub use id::{CellId, Position};
pub use traits::GridBuilder;
