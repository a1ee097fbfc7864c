//! Arena-backed cell lattice for glyphgrid.
//!
//! Cells reference each other in both directions, so the lattice is full of
//! cycles. Rather than shared pointers, every cell lives in one growable
//! arena and its four neighbour slots hold [`CellId`](glyphgrid_core::CellId)
//! indices into that arena.
//!
//! # Architecture
//!
//! ```text
//! Lattice<T> (owner)
//! ├── CellRecord<T>[] (contents, position, [Option<CellId>; 4])
//! └── origin: CellId
//!
//! Cell<'a, T>     shared view: navigation + reads
//! CellMut<'a, T>  exclusive view: content writes + navigation
//! LatticeBuilder  the only code that writes link slots
//! ```
//!
//! # Mutation
//!
//! Once built, only cell contents can change. Topology is fixed: the
//! finished [`Lattice`] has no API that touches a link slot.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod cell;
pub mod lattice;
mod record;

pub use builder::LatticeBuilder;
pub use cell::{Cell, CellMut};
pub use lattice::Lattice;
