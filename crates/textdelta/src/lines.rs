//! Line-granularity diffing.

use std::borrow::Cow;

use textdelta_lcs as lcs;
use tracing::trace;

use crate::edit::Edit;

/// Compute the differences between two texts at line granularity.
///
/// Both inputs are split at `\n` (each line keeps its terminator; a
/// trailing empty line produced by a final `\n` is dropped), the LCS runs
/// over the line arrays, and the resulting edits carry byte offsets into
/// `before` with replacements borrowed from `after`.
pub fn diff_lines<'b>(before: &str, after: &'b str) -> Vec<Edit<'b>> {
    let a = split_lines(before);
    let b = split_lines(after);
    trace!(before_lines = a.len(), after_lines = b.len(), "diffing lines");

    let a_offsets = line_offsets(&a);
    let b_offsets = line_offsets(&b);
    lcs::diff_lines(&a, &b)
        .into_iter()
        .map(|d| Edit {
            start: a_offsets[d.start],
            end: a_offsets[d.end],
            // Lines are contiguous in `after`, so the replacement is one slice.
            new: Cow::Borrowed(&after.as_bytes()[b_offsets[d.repl_start]..b_offsets[d.repl_end]]),
        })
        .collect()
}

/// Split at `\n`, keeping the terminator on each line. A trailing line
/// without a terminator is kept; the empty tail after a final `\n` is not.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    for (i, byte) in text.bytes().enumerate() {
        if byte == b'\n' {
            lines.push(&text[start..=i]);
            start = i + 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Byte offset of the start of each line, plus the total length.
fn line_offsets(lines: &[&str]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(lines.len() + 1);
    let mut total = 0;
    for line in lines {
        offsets.push(total);
        total += line.len();
    }
    offsets.push(total);
    offsets
}
