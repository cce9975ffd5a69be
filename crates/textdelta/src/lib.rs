//! Edit-script computation and application for the textdelta workspace.
//!
//! Computes differences between texts or byte strings as byte-offset edit
//! scripts, and applies, validates, sorts, and line-expands such scripts.
//! The diff engines themselves live in sibling crates: the default
//! divide-and-conquer LCS engine in `textdelta-lcs` (dispatched by this
//! crate), and a classic trace-based Myers alternative in
//! `textdelta-myers`. Both feed the same [`Edit`] algebra.
//!
//! # Key Types
//!
//! - [`Edit`] -- a byte-offset replacement `{start, end, new}`
//! - [`diff_text`] / [`diff_binary`] / [`diff_lines`] -- edit-script producers
//! - [`apply`] / [`apply_to`] -- in-memory and streaming application
//! - [`sort_edits`] / [`validate`] / [`line_edits`] -- script normalization
//!
//! `diff_text` respects code-point boundaries, falling back to byte-level
//! processing when both inputs are ASCII; `diff_binary` always runs at
//! byte level; `diff_lines` works in whole lines. Every producer returns
//! scripts that validate cleanly against their source, and for any inputs
//! `a` and `b`, applying the produced script to `a` yields exactly `b`.

pub mod apply;
pub mod edit;
pub mod error;
pub mod expand;
pub mod lines;
pub mod text;

pub use apply::{apply, apply_to};
pub use edit::{sort_edits, validate, Edit};
pub use error::{DeltaError, DeltaResult};
pub use expand::line_edits;
pub use lines::diff_lines;
pub use text::{diff_binary, diff_text};
