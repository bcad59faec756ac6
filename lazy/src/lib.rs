//! Rill Lazy Sequences
//!
//! Pull-based sequence primitives composed by the comprehension compiler.
//!
//! Responsibilities:
//! - Hide element production behind a demand-driven iterator
//! - Provide the flat-map, resource-generator, and dedup combinators
//! - Provide the eager run-to-completion driver

mod seq;

pub use seq::LazySeq;
