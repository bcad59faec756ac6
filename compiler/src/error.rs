//! Compile error types.

use rill_core::Value;
use rill_ir::Span;
use thiserror::Error;

/// Result type for comprehension compilation.
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors raised while constructing a pipeline.
///
/// All of these are construction-time failures and abort the whole build;
/// a successfully built pipeline never fails for shape reasons while it is
/// being driven.
#[derive(Debug, Clone, Error)]
pub enum CompileError {
    #[error("not a comprehension (called with {arity} arguments)")]
    Usage { arity: usize, span: Span },

    #[error("comprehension is missing a body")]
    MissingBody { span: Span },

    #[error("comprehension must start with a generator")]
    NotAGenerator { span: Span },

    #[error("{}", malformed_options_message(.entry))]
    MalformedOptions { entry: Option<Value>, span: Span },

    #[error("unsupported option: {name}")]
    UnsupportedOption { name: String, span: Span },

    #[error("uniq must be a boolean, got: {value}")]
    InvalidUniqValue { value: Value, span: Span },
}

fn malformed_options_message(entry: &Option<Value>) -> String {
    match entry {
        Some(value) => format!("options must be name/value pairs, got: {}", value),
        None => "options are only allowed as the final clause".to_string(),
    }
}

impl CompileError {
    pub fn usage(arity: usize, span: Span) -> Self {
        Self::Usage { arity, span }
    }

    pub fn missing_body(span: Span) -> Self {
        Self::MissingBody { span }
    }

    pub fn not_a_generator(span: Span) -> Self {
        Self::NotAGenerator { span }
    }

    pub fn malformed_options(entry: impl Into<Option<Value>>, span: Span) -> Self {
        Self::MalformedOptions {
            entry: entry.into(),
            span,
        }
    }

    pub fn unsupported_option(name: impl Into<String>, span: Span) -> Self {
        Self::UnsupportedOption {
            name: name.into(),
            span,
        }
    }

    pub fn invalid_uniq(value: Value, span: Span) -> Self {
        Self::InvalidUniqValue { value, span }
    }

    /// Source location of the originating construct.
    pub fn span(&self) -> Span {
        match self {
            Self::Usage { span, .. }
            | Self::MissingBody { span }
            | Self::NotAGenerator { span }
            | Self::MalformedOptions { span, .. }
            | Self::UnsupportedOption { span, .. }
            | Self::InvalidUniqValue { span, .. } => *span,
        }
    }
}
