//! Integration test support for rill.
//!
//! Construction helpers shared by the end-to-end tests. The tests drive
//! the public `rill_compiler::compile` surface only; these helpers just
//! keep comprehension literals readable.

pub mod prelude {
    pub use rill_compiler::{
        classify, compile, starts_with_generator, ClauseKind, CompileError, Options,
        PipelineBuilder,
    };
    pub use rill_core::{BitBuf, Bindings, Pattern, Value};
    pub use rill_ir::{BitSegment, Clause, Comprehension, SegPattern, Span};
    pub use rill_lazy::LazySeq;

    /// A source closure yielding the same integers on every evaluation.
    pub fn int_source(values: Vec<i64>) -> impl Fn(&Bindings) -> LazySeq {
        move |_: &Bindings| {
            LazySeq::from_values(values.iter().map(|i| Value::Int(*i)).collect())
        }
    }

    /// A source closure over arbitrary values.
    pub fn value_source(values: Vec<Value>) -> impl Fn(&Bindings) -> LazySeq {
        move |_: &Bindings| LazySeq::from_values(values.clone())
    }

    /// A generator clause `name <- values`.
    pub fn int_generator(name: &str, values: Vec<i64>) -> Clause {
        Clause::bind(Pattern::bind(name), int_source(values), Span::default())
    }

    /// The options entry `uniq: flag`.
    pub fn uniq_entry(flag: bool) -> Value {
        Value::pair(Value::atom("uniq"), Value::Bool(flag))
    }

    /// A body returning the named variable unchanged.
    pub fn var_body(name: &'static str) -> impl Fn(&Bindings) -> Value {
        move |env: &Bindings| env.get(name).cloned().unwrap_or(Value::Int(0))
    }

    /// The integer bound to `name`, for bodies doing arithmetic.
    pub fn int_var(env: &Bindings, name: &str) -> i64 {
        env.get(name).and_then(Value::as_int).unwrap_or(0)
    }
}
