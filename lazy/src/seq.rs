//! The lazy sequence type and its combinators.

use rill_core::Value;
use std::collections::HashSet;

/// A pull-based sequence of values.
///
/// Nothing runs until `next` is called; a partially consumed sequence may
/// be abandoned at any point and all further evaluation stops with it.
pub struct LazySeq {
    iter: Box<dyn Iterator<Item = Value>>,
}

impl LazySeq {
    fn wrap(iter: impl Iterator<Item = Value> + 'static) -> Self {
        Self {
            iter: Box::new(iter),
        }
    }

    /// The empty sequence.
    pub fn empty() -> Self {
        Self::wrap(std::iter::empty())
    }

    /// A single-element sequence.
    pub fn once(value: Value) -> Self {
        Self::wrap(std::iter::once(value))
    }

    /// A sequence over already-materialized values.
    pub fn from_values(values: Vec<Value>) -> Self {
        Self::wrap(values.into_iter())
    }

    /// Delay construction of the inner sequence until the first pull.
    pub fn defer(thunk: impl FnOnce() -> LazySeq + 'static) -> Self {
        Self::wrap(Defer {
            thunk: Some(Box::new(thunk)),
            inner: None,
        })
    }

    /// Flat-mapping combinator: each element contributes the sub-sequence
    /// `f` produces for it, in order.
    pub fn flat_map(self, f: impl FnMut(Value) -> LazySeq + 'static) -> Self {
        Self::wrap(self.iter.flat_map(f))
    }

    /// Stateful generator combinator.
    ///
    /// Each step either emits a sub-sequence together with the next state,
    /// or halts with `None`. An emitted sub-sequence is drained fully
    /// before the next step runs; ceasing to pull stops the state from
    /// advancing any further.
    pub fn resource<S: 'static>(
        state: S,
        step: impl FnMut(S) -> Option<(LazySeq, S)> + 'static,
    ) -> Self {
        Self::wrap(Resource {
            state: Some(state),
            step: Box::new(step),
            current: None,
        })
    }

    /// Deduplication combinator: suppresses elements equal to one already
    /// produced, preserving first-occurrence order.
    ///
    /// The seen-set is owned by this one sequence and dies with it.
    pub fn uniq(self) -> Self {
        let mut seen = HashSet::new();
        Self::wrap(self.iter.filter(move |value| seen.insert(format!("{:?}", value))))
    }

    /// Drive the sequence to completion, discarding every element.
    ///
    /// Only useful for sequences pulled for their side effects.
    pub fn run(self) {
        for _ in self {}
    }
}

impl std::fmt::Debug for LazySeq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("LazySeq")
    }
}

impl Iterator for LazySeq {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        self.iter.next()
    }
}

impl FromIterator<Value> for LazySeq {
    /// Materializes the input; front-ends use this to hand finite
    /// collections to a generator source.
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self::from_values(iter.into_iter().collect())
    }
}

struct Defer {
    thunk: Option<Box<dyn FnOnce() -> LazySeq>>,
    inner: Option<LazySeq>,
}

impl Iterator for Defer {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        if self.inner.is_none() {
            let thunk = self.thunk.take()?;
            self.inner = Some(thunk());
        }
        self.inner.as_mut().and_then(|seq| seq.next())
    }
}

struct Resource<S> {
    state: Option<S>,
    step: Box<dyn FnMut(S) -> Option<(LazySeq, S)>>,
    current: Option<LazySeq>,
}

impl<S> Iterator for Resource<S> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        loop {
            if let Some(current) = self.current.as_mut() {
                if let Some(value) = current.next() {
                    return Some(value);
                }
                self.current = None;
            }

            let state = self.state.take()?;
            let (emitted, next_state) = (self.step)(state)?;
            self.current = Some(emitted);
            self.state = Some(next_state);
        }
    }
}
