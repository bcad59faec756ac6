//! Fallible destructuring patterns.
//!
//! A pattern match either extends the environment or reports failure; it
//! never raises. Generators rely on this to skip non-matching elements
//! instead of aborting the pipeline.

use crate::{Bindings, Value};
use std::collections::HashSet;

/// A destructuring pattern over values.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// Matches anything, binds nothing.
    Wildcard,
    /// Binds the matched value to a variable.
    Bind(String),
    /// Matches only a value equal to the literal.
    Literal(Value),
    /// Matches a tuple of the same arity, element-wise.
    Tuple(Vec<Pattern>),
    /// Matches a list of the same length, element-wise.
    List(Vec<Pattern>),
}

impl Pattern {
    /// Create a variable-binding pattern.
    pub fn bind(name: impl Into<String>) -> Self {
        Pattern::Bind(name.into())
    }

    /// Create a literal pattern.
    pub fn literal(value: impl Into<Value>) -> Self {
        Pattern::Literal(value.into())
    }

    /// Attempt to match `value`, extending `base` with this pattern's
    /// bindings.
    ///
    /// Returns `None` on any mismatch. A variable repeated within one
    /// pattern must receive equal values; a pattern variable shadows any
    /// same-named binding already present in `base`.
    pub fn try_bind(&self, value: &Value, base: &Bindings) -> Option<Bindings> {
        let mut env = base.clone();
        let mut fresh = HashSet::new();
        self.bind_into(value, &mut env, &mut fresh)?;
        Some(env)
    }

    fn bind_into(
        &self,
        value: &Value,
        env: &mut Bindings,
        fresh: &mut HashSet<String>,
    ) -> Option<()> {
        match self {
            Pattern::Wildcard => Some(()),

            Pattern::Bind(name) => {
                // A repeat within the same pattern must agree with the
                // value bound by the first occurrence.
                if fresh.contains(name) {
                    if env.get(name) == Some(value) {
                        Some(())
                    } else {
                        None
                    }
                } else {
                    env.insert(name.clone(), value.clone());
                    fresh.insert(name.clone());
                    Some(())
                }
            }

            Pattern::Literal(literal) => {
                if literal == value {
                    Some(())
                } else {
                    None
                }
            }

            Pattern::Tuple(patterns) => match value {
                Value::Tuple(items) if items.len() == patterns.len() => {
                    for (pattern, item) in patterns.iter().zip(items) {
                        pattern.bind_into(item, env, fresh)?;
                    }
                    Some(())
                }
                _ => None,
            },

            Pattern::List(patterns) => match value {
                Value::List(items) if items.len() == patterns.len() => {
                    for (pattern, item) in patterns.iter().zip(items) {
                        pattern.bind_into(item, env, fresh)?;
                    }
                    Some(())
                }
                _ => None,
            },
        }
    }
}
