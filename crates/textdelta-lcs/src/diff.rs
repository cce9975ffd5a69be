//! The diff record and the per-domain entry points.

use crate::engine;
use crate::sequence::PairSeqs;

/// A region where two sequences differ: elements `[start, end)` of A are
/// replaced by elements `[repl_start, repl_end)` of B. Either range may be
/// empty (pure insertion or pure deletion), never both.
///
/// Indices are in the element domain of the call that produced the diff
/// (bytes, chars, lines, or caller elements). The diffs of one call are
/// ordered and non-overlapping, and the elements in the gaps between them
/// compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diff {
    pub start: usize,
    pub end: usize,
    pub repl_start: usize,
    pub repl_end: usize,
}

/// Diff two byte slices.
pub fn diff_bytes(a: &[u8], b: &[u8]) -> Vec<Diff> {
    engine::compute(&PairSeqs { a, b, eq: |x: &u8, y: &u8| x == y })
}

/// Diff two code-point arrays. Indices in the result are char indices, not
/// byte offsets.
pub fn diff_chars(a: &[char], b: &[char]) -> Vec<Diff> {
    engine::compute(&PairSeqs { a, b, eq: |x: &char, y: &char| x == y })
}

/// Diff two arrays of line views. Lines are equal iff their contents match
/// exactly, terminator included.
pub fn diff_lines(a: &[&str], b: &[&str]) -> Vec<Diff> {
    engine::compute(&PairSeqs { a, b, eq: |x: &&str, y: &&str| x == y })
}

/// Diff two slices of comparable elements.
pub fn diff_slices<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Diff> {
    engine::compute(&PairSeqs { a, b, eq: |x: &T, y: &T| x == y })
}

/// Diff two slices through a caller-supplied equality oracle. The element
/// types need not match.
pub fn diff_slices_by<T, U, F>(a: &[T], b: &[U], eq: F) -> Vec<Diff>
where
    F: Fn(&T, &U) -> bool,
{
    engine::compute(&PairSeqs { a, b, eq })
}
