//! Text boundary for jom.
//!
//! The merge engine itself never touches text; this crate owns the seam
//! between raw text and the in-memory `Value` tree. Callers hand any
//! [`TextAdapter`] to [`merge_text`], or reach for [`merge_json_text`] when
//! plain JSON is all they need.
//!
//! # Key Types
//!
//! - [`TextAdapter`] / [`JsonAdapter`] — Pluggable parse/serialize capability
//! - [`merge_text`] / [`merge_json_text`] — Text-in, text-out merge
//! - [`ParseError`] / [`AdapterError`] — The only failure modes of the system

pub mod adapter;
pub mod error;
pub mod merge_text;

pub use adapter::{JsonAdapter, TextAdapter};
pub use error::{AdapterError, ParseError, Side, TextResult};
pub use merge_text::{merge_json_text, merge_text};
