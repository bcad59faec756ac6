//! Trailing option validation.
//!
//! The options clause is validated in full before any pipeline stage is
//! constructed; the first bad entry aborts the whole build.

use rill_core::Value;
use rill_ir::Span;

use crate::error::{CompileError, CompileResult};

/// Validated comprehension options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Deduplicate produced elements, keeping first occurrences.
    pub uniq: bool,
}

/// Validate a trailing options list.
///
/// Every entry must be an `{atom, value}` pair. The only recognized name
/// is `uniq`, which must carry a boolean.
pub fn validate(entries: &[Value], span: Span) -> CompileResult<Options> {
    let mut options = Options::default();

    for entry in entries {
        match as_pair(entry) {
            Some((name, value)) => apply(name, value, &mut options, span)?,
            None => return Err(CompileError::malformed_options(entry.clone(), span)),
        }
    }

    Ok(options)
}

/// Apply a single named option to the accumulated settings.
fn apply(name: &str, value: &Value, options: &mut Options, span: Span) -> CompileResult<()> {
    match name {
        "uniq" => match value.as_bool() {
            Some(flag) => {
                options.uniq = flag;
                Ok(())
            }
            None => Err(CompileError::invalid_uniq(value.clone(), span)),
        },
        other => Err(CompileError::unsupported_option(other, span)),
    }
}

fn as_pair(entry: &Value) -> Option<(&str, &Value)> {
    match entry {
        Value::Tuple(parts) if parts.len() == 2 => match &parts[0] {
            Value::Atom(name) => Some((name.as_str(), &parts[1])),
            _ => None,
        },
        _ => None,
    }
}
