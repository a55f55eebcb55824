//! Error types for the text boundary.
//!
//! The merge engine is total and has no error type of its own; everything
//! that can go wrong in this system goes wrong here, at parse time.

use std::fmt;

/// Which of the two merge inputs an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The first input: the value whose content takes precedence.
    Source,
    /// The second input: the value supplying fallback content.
    Target,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => f.write_str("source"),
            Side::Target => f.write_str("target"),
        }
    }
}

/// Errors produced by a [`TextAdapter`](crate::TextAdapter).
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// The input text is not well-formed for the adapter's format.
    ///
    /// Empty or absent input lands here too: an adapter must never
    /// substitute `Null` for text it could not parse.
    #[error("malformed input: {0}")]
    Malformed(String),
}

/// One of the two merge inputs failed to parse.
///
/// Carries the adapter's diagnostic unchanged, tagged with the side that
/// failed so the caller knows which input to fix.
#[derive(Debug, thiserror::Error)]
#[error("failed to parse {side} input: {cause}")]
pub struct ParseError {
    /// The input that was malformed.
    pub side: Side,
    /// The adapter's own diagnostic.
    #[source]
    pub cause: AdapterError,
}

/// Convenience alias for text-boundary results.
pub type TextResult<T> = Result<T, ParseError>;
