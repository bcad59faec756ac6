//! Pipeline construction.
//!
//! The builder folds the clause list, back to front, into one nested
//! lazy-combinator expression. Processing in reverse declaration order
//! puts the first clause outermost, so the first generator varies slowest
//! and later clauses run only once an earlier binding succeeds.

use std::rc::Rc;

use rill_core::Bindings;
use rill_ir::{BindClause, BitsClause, Clause, Comprehension, FilterClause};
use rill_lazy::LazySeq;

use crate::classify::starts_with_generator;
use crate::error::{CompileError, CompileResult};
use crate::{bits, options};

/// A pipeline stage: given the bindings accumulated by the outer clauses,
/// produce the sub-sequence this nesting level contributes.
type StageFn = Rc<dyn Fn(&Bindings) -> LazySeq>;

/// Compile a comprehension into a lazy pipeline.
///
/// The returned sequence evaluates no user expression until it is pulled;
/// every validation failure is reported before any stage exists, so a
/// partially built pipeline is never observable.
pub fn compile(comprehension: Comprehension) -> CompileResult<LazySeq> {
    PipelineBuilder::new().build(comprehension)
}

/// Folds a clause list into one nested lazy-sequence expression.
#[derive(Debug, Default)]
pub struct PipelineBuilder;

impl PipelineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self
    }

    /// Build the pipeline for a comprehension.
    pub fn build(&self, comprehension: Comprehension) -> CompileResult<LazySeq> {
        let arity = comprehension.arity();
        let Comprehension {
            clauses,
            body,
            span,
        } = comprehension;

        if clauses.is_empty() {
            return Err(CompileError::usage(arity, span));
        }
        let body = match body {
            Some(body) => body,
            None => return Err(CompileError::missing_body(span)),
        };
        if !starts_with_generator(&clauses) {
            return Err(CompileError::not_a_generator(clauses[0].span()));
        }

        // Options are recognized in trailing position only; anywhere else
        // the input is malformed. Checked before any stage is wrapped.
        let last = clauses.len() - 1;
        for (index, clause) in clauses.iter().enumerate() {
            if matches!(clause, Clause::Opts(_)) && index != last {
                return Err(CompileError::malformed_options(None, clause.span()));
            }
        }

        // Innermost stage: yield the body as a single-element sub-sequence.
        let mut stage: StageFn = Rc::new(move |env: &Bindings| LazySeq::once(body(env)));
        let mut uniq = false;

        for clause in clauses.into_iter().rev() {
            match clause {
                Clause::Opts(opts) => {
                    uniq = options::validate(&opts.entries, opts.span)?.uniq;
                }
                Clause::Bind(generator) => stage = Self::wrap_generator(generator, stage),
                Clause::Bits(bitstring) => stage = Self::wrap_bitstring(bitstring, stage),
                Clause::Filter(filter) => stage = Self::wrap_filter(filter, stage),
            }
        }

        // Defer the root so that not even the first source expression runs
        // at construction time; dedup wraps the whole pipeline once.
        let root = LazySeq::defer(move || stage(&Bindings::new()));
        Ok(if uniq { root.uniq() } else { root })
    }

    /// Value generator: flat-map the source, soft-matching each element.
    /// A bind failure contributes the empty sub-sequence, never an error.
    fn wrap_generator(generator: BindClause, inner: StageFn) -> StageFn {
        let BindClause {
            pattern, source, ..
        } = generator;

        Rc::new(move |env: &Bindings| {
            let env = env.clone();
            let pattern = pattern.clone();
            let inner = inner.clone();
            source(&env).flat_map(move |element| match pattern.try_bind(&element, &env) {
                Some(bound) => inner(&bound),
                None => LazySeq::empty(),
            })
        })
    }

    /// Binary generator: a stateful decode of the buffer front whose state
    /// is the remaining bits; the first mismatch halts it without error.
    fn wrap_bitstring(bitstring: BitsClause, inner: StageFn) -> StageFn {
        let (segments, source) = match bits::decompose(&bitstring) {
            Some((segments, source)) => (segments.to_vec(), source.clone()),
            // No trailing binder: a plain filter over a constructed
            // bitstring value, which is always truthy.
            None => return inner,
        };

        Rc::new(move |env: &Bindings| {
            let env = env.clone();
            let segments = segments.clone();
            let inner = inner.clone();
            LazySeq::resource(source(&env), move |buffer| {
                bits::match_front(&segments, &buffer, &env)
                    .map(|(bound, rest)| (inner(&bound), rest))
            })
        })
    }

    /// Filter: evaluate the condition once per arrival at this nesting
    /// point; false contributes the empty sub-sequence.
    fn wrap_filter(filter: FilterClause, inner: StageFn) -> StageFn {
        let FilterClause { condition, .. } = filter;

        Rc::new(move |env: &Bindings| {
            if condition(env) {
                inner(env)
            } else {
                LazySeq::empty()
            }
        })
    }
}
