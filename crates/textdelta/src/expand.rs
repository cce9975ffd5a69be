//! Expansion of edit scripts to whole-line granularity.

use std::borrow::Cow;

use crate::edit::{validate, Edit};
use crate::error::DeltaResult;

/// Expand and merge a sequence of edits so that each resulting edit
/// replaces one or more complete lines of `src`.
///
/// Edits that already begin and end at a line start are returned as they
/// are, as are insertions at end of file; note that when the final line of
/// `src` has no terminator, such an insertion keeps `end == src.len()`
/// without a trailing newline. Otherwise edits touching the same line are
/// merged and every merged edit is widened to the enclosing line
/// boundaries. Applying the expanded script gives the same output as
/// applying the original.
pub fn line_edits<'a>(src: &'a [u8], edits: &[Edit<'a>]) -> DeltaResult<Vec<Edit<'a>>> {
    let (edits, _) = validate(src.len(), edits)?;

    // Fast path: everything already aligned to line starts.
    let aligned = edits.iter().all(|edit| {
        edit.start >= src.len() // insertion at EOF
            || ((edit.start == 0 || src[edit.start - 1] == b'\n')
                && (edit.end == 0 || src[edit.end - 1] == b'\n'))
    });
    if aligned {
        return Ok(edits.into_owned());
    }

    let mut expanded = Vec::with_capacity(edits.len());
    let mut prev = edits[0].clone();
    for edit in &edits[1..] {
        let between = &src[prev.end..edit.start];
        if !between.contains(&b'\n') {
            // Overlapping lines: merge into the running edit.
            let mut merged =
                Vec::with_capacity(prev.new.len() + between.len() + edit.new.len());
            merged.extend_from_slice(&prev.new);
            merged.extend_from_slice(between);
            merged.extend_from_slice(&edit.new);
            prev.new = Cow::Owned(merged);
            prev.end = edit.end;
        } else {
            expanded.push(expand_edit(prev, src));
            prev = edit.clone();
        }
    }
    expanded.push(expand_edit(prev, src));
    Ok(expanded)
}

/// Widen `edit` to complete whole lines of `src`.
fn expand_edit<'a>(mut edit: Edit<'a>, src: &'a [u8]) -> Edit<'a> {
    // Left: back up to the start of the line. `col` is the zero-based
    // column of `start`.
    let start = edit.start;
    let col = match src[..start].iter().rposition(|&b| b == b'\n') {
        Some(nl) => start - 1 - nl,
        None => start,
    };
    if col > 0 {
        let mut new = Vec::with_capacity(col + edit.new.len());
        new.extend_from_slice(&src[start - col..start]);
        new.extend_from_slice(&edit.new);
        edit.start = start - col;
        edit.new = Cow::Owned(new);
    }

    // Right: extend past the next newline, or to EOF when the trailing
    // line has no terminator.
    let end = edit.end;
    edit.end = match src[end..].iter().position(|&b| b == b'\n') {
        Some(nl) => end + nl + 1,
        None => src.len(),
    };
    if edit.end > end {
        let mut new = edit.new.into_owned();
        new.extend_from_slice(&src[end..edit.end]);
        edit.new = Cow::Owned(new);
    }

    edit
}
