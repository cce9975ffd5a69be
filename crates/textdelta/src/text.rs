//! Character-aware and binary diff entry points.

use std::borrow::Cow;

use textdelta_lcs as lcs;
use tracing::trace;

use crate::edit::Edit;

/// Compute the differences between two texts.
///
/// The resulting edits carry byte offsets into `before` and respect rune
/// boundaries: no edit splits a multi-byte code point. When both inputs
/// are ASCII the diff runs directly over bytes and the replacements borrow
/// from `after`.
pub fn diff_text<'b>(before: &str, after: &'b str) -> Vec<Edit<'b>> {
    if before == after {
        return Vec::new(); // common case
    }

    if before.is_ascii() && after.is_ascii() {
        trace!(before_len = before.len(), after_len = after.len(), "diffing on the byte path");
        return diff_ascii(before.as_bytes(), after.as_bytes());
    }
    trace!(before_len = before.len(), after_len = after.len(), "diffing on the char path");
    diff_utf8(before, after)
}

/// Compute the differences between two byte strings.
///
/// The inputs are treated as opaque binary data; edit boundaries may land
/// anywhere, including inside a multi-byte code point. Replacements alias
/// `after`, so no per-edit allocation happens.
pub fn diff_binary<'b>(before: &[u8], after: &'b [u8]) -> Vec<Edit<'b>> {
    if before == after {
        return Vec::new();
    }
    diff_ascii(before, after)
}

/// Byte-indexed diffs translate to edits directly.
fn diff_ascii<'b>(before: &[u8], after: &'b [u8]) -> Vec<Edit<'b>> {
    lcs::diff_bytes(before, after)
        .into_iter()
        .map(|d| Edit {
            start: d.start,
            end: d.end,
            new: Cow::Borrowed(&after[d.repl_start..d.repl_end]),
        })
        .collect()
}

/// Diff over decoded code points, then convert char indices back to byte
/// offsets into `before` and re-encode the replacements.
fn diff_utf8<'b>(before: &str, after: &str) -> Vec<Edit<'b>> {
    let a: Vec<char> = before.chars().collect();
    let b: Vec<char> = after.chars().collect();

    let diffs = lcs::diff_chars(&a, &b);
    let mut edits = Vec::with_capacity(diffs.len());
    let mut last_end = 0;
    let mut offset = 0;
    for d in diffs {
        offset += utf8_len(&a[last_end..d.start]); // text between edits
        let start = offset;
        offset += utf8_len(&a[d.start..d.end]); // text replaced by this edit
        let new: String = b[d.repl_start..d.repl_end].iter().collect();
        edits.push(Edit { start, end: offset, new: Cow::Owned(new.into_bytes()) });
        last_end = d.end;
    }
    edits
}

/// Length in bytes of the UTF-8 encoding of `chars`.
fn utf8_len(chars: &[char]) -> usize {
    chars.iter().map(|c| c.len_utf8()).sum()
}
