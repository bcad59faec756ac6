//! Bitstring generator decomposition and front matching.

use rill_core::{BitBuf, Bindings, Value};
use rill_ir::{BitSegment, BitsClause, BitsExpr, SegPattern};

/// Split a bitstring clause into its fixed pattern parts and its source
/// buffer expression.
///
/// Returns `None` when the final segment carried no `<-` binder; such a
/// clause is not decomposable into a generator and the caller treats it
/// as a plain filter instead.
pub fn decompose(clause: &BitsClause) -> Option<(&[BitSegment], &BitsExpr)> {
    let source = clause.source.as_ref()?;
    Some((&clause.segments, source))
}

/// Match the fixed pattern parts against the front of `buf`.
///
/// Decodes every segment in order, MSB-first. On success returns `base`
/// extended with the bound fields plus the unconsumed remainder. Returns
/// `None` when the buffer is too short, a literal field disagrees, or a
/// field is wider than a decodable word; the caller halts the generator
/// in that case rather than raising.
pub fn match_front(
    segments: &[BitSegment],
    buf: &BitBuf,
    base: &Bindings,
) -> Option<(Bindings, BitBuf)> {
    let mut env = base.clone();
    let mut rest = buf.clone();

    for segment in segments {
        let (decoded, next) = rest.take_bits(segment.width as usize)?;
        match &segment.pattern {
            SegPattern::Bind(name) => env.insert(name.clone(), Value::Int(decoded as i64)),
            SegPattern::Literal(expected) => {
                if decoded != *expected {
                    return None;
                }
            }
            SegPattern::Ignore => {}
        }
        rest = next;
    }

    Some((env, rest))
}
