//! `uiscope-snapshot` — the tree-walk-and-serialize engine.
//!
//! [`extract_record`] flattens one host node into the fixed attribute
//! schema; [`TreeSerializer`] walks the live tree depth-first and nests
//! the records in containment order.

pub mod extract;
pub mod serialize;

#[cfg(test)]
pub(crate) mod testnode;

pub use extract::extract_record;
pub use serialize::{TreeSerializer, DEFAULT_MAX_DEPTH};
