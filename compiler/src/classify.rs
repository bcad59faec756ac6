//! Clause classification.
//!
//! Classification is purely structural: no source, condition, or body
//! thunk is invoked to decide what a clause is.

use rill_ir::Clause;

use crate::bits;

/// The structural kind of a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKind {
    /// `pattern <- source` over an enumerable.
    ValueGenerator,
    /// Bitstring pattern decoded repeatedly from a bit buffer.
    BitGenerator,
    /// Boolean condition guarding continuation.
    Filter,
    /// Trailing settings list.
    Options,
}

/// Classify a clause by shape alone.
///
/// A bitstring clause is a generator only when it decomposes into fixed
/// pattern parts plus a source; without the trailing binder it falls back
/// to a plain filter.
pub fn classify(clause: &Clause) -> ClauseKind {
    match clause {
        Clause::Bind(_) => ClauseKind::ValueGenerator,
        Clause::Bits(bitstring) => {
            if bits::decompose(bitstring).is_some() {
                ClauseKind::BitGenerator
            } else {
                ClauseKind::Filter
            }
        }
        Clause::Filter(_) => ClauseKind::Filter,
        Clause::Opts(_) => ClauseKind::Options,
    }
}

/// True iff the clause list begins with a generator clause.
pub fn starts_with_generator(clauses: &[Clause]) -> bool {
    match clauses.first() {
        Some(first) => matches!(
            classify(first),
            ClauseKind::ValueGenerator | ClauseKind::BitGenerator
        ),
        None => false,
    }
}
