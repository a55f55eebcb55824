//! Merge engine for jom.
//!
//! Combines two JSON values into one under source-biased precedence rules:
//! objects deep-merge key by key, arrays concatenate, an explicit null on
//! the source side defers to the target, and every other pairing keeps the
//! source value. The merge is a pure structural recursion with no I/O, no
//! shared state, and no failure path.
//!
//! # Key Functions
//!
//! - [`merge`] — Top-level dispatch over any two values
//! - [`merge_objects`] — Key-union deep merge of two objects
//! - [`merge_arrays`] — Concatenation of two arrays

pub mod merge;

pub use merge::{merge, merge_arrays, merge_objects};
