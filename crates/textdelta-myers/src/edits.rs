//! Translation of line operations into byte-offset edit scripts.

use std::borrow::Cow;

use textdelta::Edit;
use tracing::trace;

use crate::ops::{operations, OpKind};

/// Compute a line-level edit script converting `before` into `after`.
///
/// Both inputs are split at `\n`; operations come out of the O(ND) search
/// and are mapped to byte offsets through a line-offset table. The result
/// validates cleanly against `before` and, applied to it, yields `after`.
pub fn compute_edits<'b>(before: &str, after: &'b str) -> Vec<Edit<'b>> {
    let before_lines = split_lines(before);
    let after_lines = split_lines(after);
    let ops = operations(&before_lines, &after_lines);
    trace!(ops = ops.len(), "consolidated diff operations");

    let line_offsets = offsets(&before_lines);
    let repl_offsets = offsets(&after_lines);

    let mut edits = Vec::with_capacity(ops.len());
    for op in &ops {
        let (start, end) = (line_offsets[op.start], line_offsets[op.end]);
        match op.kind {
            OpKind::Delete => {
                edits.push(Edit { start, end, new: Cow::Borrowed(&b""[..]) });
            }
            OpKind::Insert => {
                // Lines are contiguous in `after`, so the inserted run is
                // a single slice of it.
                let content =
                    &after.as_bytes()[repl_offsets[op.repl_start]..repl_offsets[op.repl_end]];
                if !content.is_empty() {
                    edits.push(Edit { start, end, new: Cow::Borrowed(content) });
                }
            }
            OpKind::Equal => {}
        }
    }
    edits
}

/// Split at `\n`, keeping the terminator on each line and dropping the
/// empty tail after a final `\n`.
fn split_lines(text: &str) -> Vec<&str> {
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
fn offsets(lines: &[&str]) -> Vec<usize> {
    let mut table = Vec::with_capacity(lines.len() + 1);
    let mut total = 0;
    for line in lines {
        table.push(total);
        total += line.len();
    }
    table.push(total);
    table
}
