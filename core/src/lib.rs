//! Rill Core Types
//!
//! This crate provides the foundational types used throughout the rill
//! workspace:
//! - Value types (the Value enum with scalar and composite variants)
//! - Variable environments (Bindings)
//! - Fallible destructuring patterns (Pattern)
//! - Bit-level buffer cursors (BitBuf)

mod bindings;
mod bits;
mod pattern;
mod value;

pub use bindings::*;
pub use bits::*;
pub use pattern::*;
pub use value::*;
