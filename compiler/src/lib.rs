//! Rill Compiler
//!
//! Compile a comprehension clause list into a lazy pull-based pipeline.
//!
//! Responsibilities:
//! - Classify clauses by shape, without evaluating them
//! - Decompose bitstring generators into fixed pattern and source
//! - Validate the trailing options list
//! - Fold the clause list into nested lazy combinators
//! - Report structured, located errors before any pipeline exists
//!
//! The compiler only constructs the pipeline; driving the returned
//! sequence is the caller's responsibility.

mod bits;
mod builder;
mod classify;
mod error;
mod options;

pub use bits::{decompose, match_front};
pub use builder::{compile, PipelineBuilder};
pub use classify::{classify, starts_with_generator, ClauseKind};
pub use error::{CompileError, CompileResult};
pub use options::Options;
