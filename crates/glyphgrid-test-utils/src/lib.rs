//! Test utilities for glyphgrid development.
//!
//! Provides a [`RecordingBuilder`] test double, lattice invariant checks
//! shared by every test suite, and a small set of fixture texts.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod invariants;
pub mod recording;

pub use invariants::{
    assert_degree_matches_slots, assert_lattice_invariants, assert_links_symmetric,
    assert_shape_matches, reachable_from_origin,
};
pub use recording::{Call, RecordingBuilder};
