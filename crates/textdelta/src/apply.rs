//! Application of validated edit scripts, in memory and streaming.

use std::io::{self, Read, Write};

use crate::edit::{validate, Edit};
use crate::error::DeltaResult;

/// Apply a sequence of edits to `src` and return the patched buffer.
///
/// Edits are applied in order of start offset; edits with the same start
/// offset are applied in the order they were provided. Fails if any edit is
/// out of bounds or any pair of edits overlaps.
///
/// # Panics
///
/// Panics if the patched buffer does not come out at the size computed by
/// [`validate`]. That can only happen through a bug in validation or
/// application itself and is not recoverable.
pub fn apply(src: &[u8], edits: &[Edit<'_>]) -> DeltaResult<Vec<u8>> {
    let (edits, size) = validate(src.len(), edits)?;

    let mut out = Vec::with_capacity(size);
    let mut last_end = 0;
    for edit in edits.iter() {
        out.extend_from_slice(&src[last_end..edit.start]);
        out.extend_from_slice(&edit.new);
        last_end = edit.end;
    }
    out.extend_from_slice(&src[last_end..]);

    assert_eq!(out.len(), size, "patched size diverged from validated size");
    Ok(out)
}

/// Apply a sequence of edits to the `src` reader (of known length
/// `src_len`) and write the result to `dst`. Returns the number of bytes
/// written.
///
/// Source bytes are consumed strictly forward; nothing is buffered beyond
/// what the underlying copy loop holds. The first reader or writer error
/// aborts the walk, and anything already written stays written.
pub fn apply_to<R, W>(src: R, src_len: usize, dst: W, edits: &[Edit<'_>]) -> DeltaResult<u64>
where
    R: Read,
    W: Write,
{
    let (edits, _) = validate(src_len, edits)?;

    let mut src = src;
    let mut dst = dst;
    // `cursor` tracks bytes consumed from the reader, `last_end` the
    // logical source position after the last applied edit.
    let mut cursor: u64 = 0;
    let mut last_end: u64 = 0;
    let mut written: u64 = 0;
    for edit in edits.iter() {
        let (start, end) = (edit.start as u64, edit.end as u64);
        if last_end < start {
            discard(&mut src, last_end - cursor)?;
            copy_exact(&mut src, &mut dst, start - last_end)?;
            written += start - last_end;
            cursor = start;
        }
        dst.write_all(&edit.new)?;
        written += edit.new.len() as u64;
        last_end = end;
    }
    discard(&mut src, last_end - cursor)?;
    written += io::copy(&mut src, &mut dst)?;

    Ok(written)
}

/// Consume exactly `n` bytes from the reader.
fn discard<R: Read>(src: &mut R, n: u64) -> io::Result<()> {
    copy_exact(src, &mut io::sink(), n)
}

/// Copy exactly `n` bytes from reader to writer; the source running short
/// is an `UnexpectedEof` error.
fn copy_exact<R: Read, W: Write>(src: &mut R, dst: &mut W, n: u64) -> io::Result<()> {
    let copied = io::copy(&mut src.take(n), dst)?;
    if copied < n {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "source ended before the edited range",
        ));
    }
    Ok(())
}
