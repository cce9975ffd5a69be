use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DeltaError, DeltaResult};

/// A change to a section of a document: the bytes at `[start, end)` of the
/// source are replaced by `new`.
///
/// An insertion has `start == end`; a deletion has an empty `new`. The
/// replacement borrows from the after-text when a diff engine produced it
/// on the byte or line path, and is owned otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit<'a> {
    /// Byte offset of the start of the replaced region.
    pub start: usize,
    /// Byte offset one past the end of the replaced region.
    pub end: usize,
    /// Replacement bytes.
    pub new: Cow<'a, [u8]>,
}

impl Edit<'_> {
    /// Detach the edit from whatever buffer its replacement borrows.
    pub fn into_owned(self) -> Edit<'static> {
        Edit {
            start: self.start,
            end: self.end,
            new: Cow::Owned(self.new.into_owned()),
        }
    }
}

impl fmt::Display for Edit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{start:{},end:{},new:{:?}}}",
            self.start,
            self.end,
            String::from_utf8_lossy(&self.new)
        )
    }
}

/// Order a slice of edits by `(start, end)` offset.
///
/// This puts insertions (`end == start`) before deletions at the same
/// point, and the sort is stable so multiple insertions at one offset keep
/// the order they were submitted in. (Multiple deletions at one point are
/// rejected by [`validate`] as overlapping.)
pub fn sort_edits(edits: &mut [Edit<'_>]) {
    edits.sort_by(|a, b| (a.start, a.end).cmp(&(b.start, b.end)));
}

/// Check that `edits` are consistent with a source of `src_len` bytes, and
/// compute the size of the patched output.
///
/// Returns the edits sorted by `(start, end)`; the input slice is borrowed
/// unchanged when it is already sorted, otherwise a sorted copy is made.
pub fn validate<'e, 'a>(
    src_len: usize,
    edits: &'e [Edit<'a>],
) -> DeltaResult<(Cow<'e, [Edit<'a>]>, usize)> {
    let sorted = edits
        .windows(2)
        .all(|w| (w[0].start, w[0].end) <= (w[1].start, w[1].end));
    let edits: Cow<'e, [Edit<'a>]> = if sorted {
        Cow::Borrowed(edits)
    } else {
        let mut copy = edits.to_vec();
        sort_edits(&mut copy);
        Cow::Owned(copy)
    };

    let mut size = src_len;
    let mut last_end = 0;
    for edit in edits.iter() {
        if edit.start > edit.end || edit.end > src_len {
            return Err(DeltaError::OutOfBounds {
                start: edit.start,
                end: edit.end,
                len: src_len,
            });
        }
        if edit.start < last_end {
            return Err(DeltaError::Overlapping {
                start: edit.start,
                end: edit.end,
                prev_end: last_end,
            });
        }
        size = size - (edit.end - edit.start) + edit.new.len();
        last_end = edit.end;
    }

    Ok((edits, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(start: usize, end: usize, new: &'static str) -> Edit<'static> {
        Edit { start, end, new: Cow::Borrowed(new.as_bytes()) }
    }

    #[test]
    fn sort_orders_by_start_then_end() {
        let mut edits = vec![edit(4, 5, "x"), edit(0, 2, "y"), edit(4, 4, "i")];
        sort_edits(&mut edits);
        assert_eq!(edits, vec![edit(0, 2, "y"), edit(4, 4, "i"), edit(4, 5, "x")]);
    }

    #[test]
    fn sort_is_idempotent() {
        let mut once = vec![edit(3, 3, "b"), edit(1, 2, ""), edit(3, 3, "a")];
        sort_edits(&mut once);
        let mut twice = once.clone();
        sort_edits(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn sort_preserves_insertion_order_at_same_offset() {
        let mut edits = vec![edit(2, 2, "first"), edit(0, 0, "z"), edit(2, 2, "second")];
        sort_edits(&mut edits);
        assert_eq!(
            edits,
            vec![edit(0, 0, "z"), edit(2, 2, "first"), edit(2, 2, "second")]
        );
    }

    #[test]
    fn validate_computes_patched_size() {
        let edits = vec![edit(1, 3, "u"), edit(6, 7, "r")];
        let (sorted, size) = validate(8, &edits).unwrap();
        assert_eq!(size, 8 - 2 + 1 - 1 + 1);
        assert!(matches!(sorted, Cow::Borrowed(_)));
    }

    #[test]
    fn validate_sorts_unsorted_input() {
        let edits = vec![edit(6, 7, "r"), edit(1, 3, "u")];
        let (sorted, _) = validate(8, &edits).unwrap();
        assert!(matches!(sorted, Cow::Owned(_)));
        assert_eq!(sorted[0].start, 1);
    }

    #[test]
    fn validate_rejects_out_of_bounds() {
        let err = validate(4, &[edit(2, 5, "")]).unwrap_err();
        assert!(matches!(err, DeltaError::OutOfBounds { end: 5, len: 4, .. }));
    }

    #[test]
    fn validate_rejects_inverted_range() {
        let edits = vec![Edit { start: 3, end: 1, new: Cow::Borrowed(&b""[..]) }];
        assert!(matches!(
            validate(4, &edits).unwrap_err(),
            DeltaError::OutOfBounds { .. }
        ));
    }

    #[test]
    fn validate_rejects_overlap() {
        let err = validate(10, &[edit(0, 4, ""), edit(2, 6, "")]).unwrap_err();
        assert!(matches!(err, DeltaError::Overlapping { start: 2, .. }));
    }

    #[test]
    fn validate_rejects_double_deletion_at_same_offset() {
        let err = validate(10, &[edit(2, 4, "a"), edit(2, 4, "b")]).unwrap_err();
        assert!(matches!(err, DeltaError::Overlapping { .. }));
    }

    #[test]
    fn validate_allows_stacked_insertions() {
        let edits = vec![edit(2, 2, "a"), edit(2, 2, "b")];
        let (sorted, size) = validate(4, &edits).unwrap();
        assert_eq!(size, 6);
        assert_eq!(sorted.as_ref(), &edits[..]);
    }

    #[test]
    fn validate_allows_insertion_then_deletion_at_same_offset() {
        let edits = vec![edit(2, 2, "new"), edit(2, 3, "")];
        assert!(validate(4, &edits).is_ok());
    }

    #[test]
    fn display_renders_replacement() {
        let e = edit(1, 3, "xy");
        assert_eq!(e.to_string(), "{start:1,end:3,new:\"xy\"}");
    }
}
