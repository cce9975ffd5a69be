//! Divide-and-conquer computation of non-matching regions.
//!
//! `compute` walks a [`Sequences`] view and produces the ordered list of
//! [`Diff`]s between A and B. Each recursion step trims the common prefix
//! and suffix of the current window, handles the degenerate windows
//! directly, and otherwise splits at a middle anchor found by a
//! bidirectional furthest-reaching-path search (forward paths grown from
//! the window's top-left corner, reverse paths from its bottom-right, with
//! overlap detection per Myers' O(ND) scheme). The anchor search only ever
//! touches elements through the view's common-prefix/suffix operations, so
//! one engine serves every element domain.
//!
//! The result is minimal in total edit length, deterministic for equal
//! inputs, and never fails.

use crate::diff::Diff;
use crate::sequence::Sequences;

/// Forward diagonals that no valid path has reached.
const UNREACHED_FWD: isize = isize::MIN / 2;
/// Reverse diagonals that no valid path has reached.
const UNREACHED_REV: isize = isize::MAX / 2;

/// Compute the ordered, non-overlapping diffs between the view's two
/// sequences. Equal inputs produce an empty list.
pub(crate) fn compute<S: Sequences>(seqs: &S) -> Vec<Diff> {
    let (m, n) = seqs.lengths();
    let mut diffs = Vec::new();
    recurse(seqs, 0, m, 0, n, &mut diffs);
    diffs
}

/// Append `d`, merging it into the previous diff when the two are adjacent
/// on both sides.
fn push_diff(diffs: &mut Vec<Diff>, d: Diff) {
    if let Some(last) = diffs.last_mut() {
        if last.end == d.start && last.repl_end == d.repl_start {
            last.end = d.end;
            last.repl_end = d.repl_end;
            return;
        }
    }
    diffs.push(d);
}

fn recurse<S: Sequences>(
    seqs: &S,
    mut ai: usize,
    mut aj: usize,
    mut bi: usize,
    mut bj: usize,
    diffs: &mut Vec<Diff>,
) {
    let prefix = seqs.common_prefix_len(ai, aj, bi, bj);
    ai += prefix;
    bi += prefix;
    let suffix = seqs.common_suffix_len(ai, aj, bi, bj);
    aj -= suffix;
    bj -= suffix;

    if ai == aj && bi == bj {
        return;
    }
    if ai == aj || bi == bj {
        // Pure insertion or pure deletion.
        push_diff(
            diffs,
            Diff { start: ai, end: aj, repl_start: bi, repl_end: bj },
        );
        return;
    }

    let (sx, sy, ex, ey) = middle_anchor(seqs, ai, aj, bi, bj);
    recurse(seqs, ai, sx, bi, sy, diffs);
    recurse(seqs, ex, aj, ey, bj, diffs);
}

/// Find a matching run `(sx, sy)..(ex, ey)` (possibly empty) splitting the
/// window `[ai, aj) x [bi, bj)` on a minimal edit path.
///
/// Forward furthest-reaching d-paths and reverse d-paths are grown in
/// lockstep; the first pair that overlaps on a diagonal yields the anchor.
/// Both window sides must be non-empty, and the window must already be
/// trimmed (first and last elements differ), which guarantees the anchor is
/// a proper split.
fn middle_anchor<S: Sequences>(
    seqs: &S,
    ai: usize,
    aj: usize,
    bi: usize,
    bj: usize,
) -> (usize, usize, usize, usize) {
    let n = (aj - ai) as isize;
    let m = (bj - bi) as isize;
    let delta = n - m;
    let odd = delta % 2 != 0;
    let max_d = (n + m + 1) / 2;

    // Diagonals are indexed by k = x - y, biased by `off`. Reverse paths
    // may wander up to max_d diagonals past delta, so the bias covers
    // [-2(n+m), 2(n+m)].
    let off = 2 * (n + m);
    let mut vf = vec![UNREACHED_FWD; (4 * (n + m) + 2) as usize];
    let mut vb = vec![UNREACHED_REV; (4 * (n + m) + 2) as usize];
    // Virtual predecessors of the two start corners.
    vf[(1 + off) as usize] = 0;
    vb[(delta - 1 + off) as usize] = n;

    // A move candidate only counts when it stays inside the window.
    let in_window = |x: isize, k: isize| {
        let y = x - k;
        x >= 0 && x <= n && y >= 0 && y <= m
    };

    for d in 0..=max_d {
        // Forward paths, deepest x per diagonal. A path moves down (from
        // the diagonal above) or right (from the one below); on equal
        // reach the down move wins.
        let mut k = -d;
        while k <= d {
            let i = (k + off) as usize;
            let mut best = UNREACHED_FWD;
            if k == -d || k != d {
                let x = vf[i + 1]; // down
                if in_window(x, k) && x > best {
                    best = x;
                }
            }
            if k != -d {
                let x = vf[i - 1] + 1; // right
                if in_window(x, k) && x > best {
                    best = x;
                }
            }
            if best == UNREACHED_FWD {
                vf[i] = UNREACHED_FWD;
                k += 2;
                continue;
            }
            let (mut x, mut y) = (best, best - k);
            let (x0, y0) = (x, y);
            let run =
                seqs.common_prefix_len(ai + x as usize, aj, bi + y as usize, bj) as isize;
            x += run;
            y += run;
            vf[i] = x;
            // Reverse paths of depth d-1 live on diagonals delta +/- (d-1).
            if odd && (k - delta).abs() <= d - 1 && vb[i] <= x {
                return (
                    ai + x0 as usize,
                    bi + y0 as usize,
                    ai + x as usize,
                    bi + y as usize,
                );
            }
            k += 2;
        }

        // Reverse paths, smallest x per diagonal. A path moves up (from
        // the diagonal below) or left (from the one above); on equal
        // reach the up move wins.
        let mut k = delta - d;
        while k <= delta + d {
            let i = (k + off) as usize;
            let mut best = UNREACHED_REV;
            if k == delta + d || k != delta - d {
                let x = vb[i - 1]; // up
                if in_window(x, k) && x < best {
                    best = x;
                }
            }
            if k != delta + d {
                let x = vb[i + 1] - 1; // left
                if in_window(x, k) && x < best {
                    best = x;
                }
            }
            if best == UNREACHED_REV {
                vb[i] = UNREACHED_REV;
                k += 2;
                continue;
            }
            let (mut x, mut y) = (best, best - k);
            let (x0, y0) = (x, y);
            let run = seqs.common_suffix_len(ai, ai + x as usize, bi, bi + y as usize) as isize;
            x -= run;
            y -= run;
            vb[i] = x;
            if !odd && k.abs() <= d && vf[i] >= x {
                return (
                    ai + x as usize,
                    bi + y as usize,
                    ai + x0 as usize,
                    bi + y0 as usize,
                );
            }
            k += 2;
        }
    }

    unreachable!("forward and reverse paths overlap within (n + m + 1) / 2 steps")
}

#[cfg(test)]
mod tests {
    use crate::{diff_bytes, diff_slices, Diff};

    /// Rebuild B from A and the diff list, checking the ordering and
    /// non-overlap invariants along the way.
    fn reconstruct(a: &[u8], b: &[u8], diffs: &[Diff]) -> Vec<u8> {
        let mut out = Vec::new();
        let (mut last_end, mut last_repl_end) = (0, 0);
        for d in diffs {
            assert!(d.start <= d.end && d.end <= a.len(), "bad A range: {d:?}");
            assert!(d.repl_start <= d.repl_end && d.repl_end <= b.len(), "bad B range: {d:?}");
            assert!(d.end - d.start + d.repl_end - d.repl_start > 0, "empty diff: {d:?}");
            assert!(last_end <= d.start && last_repl_end <= d.repl_start, "overlap: {d:?}");
            assert_eq!(
                &a[last_end..d.start],
                &b[last_repl_end..d.repl_start],
                "gap before {d:?} is not equal"
            );
            out.extend_from_slice(&a[last_end..d.start]);
            out.extend_from_slice(&b[d.repl_start..d.repl_end]);
            last_end = d.end;
            last_repl_end = d.repl_end;
        }
        assert_eq!(&a[last_end..], &b[last_repl_end..]);
        out.extend_from_slice(&a[last_end..]);
        out
    }

    fn check(a: &[u8], b: &[u8]) -> Vec<Diff> {
        let diffs = diff_bytes(a, b);
        assert_eq!(reconstruct(a, b, &diffs), b, "{:?} -> {:?}", a, b);
        diffs
    }

    #[test]
    fn equal_inputs_no_diffs() {
        assert!(check(b"gargantuan\n", b"gargantuan\n").is_empty());
        assert!(check(b"", b"").is_empty());
    }

    #[test]
    fn empty_a_single_insertion() {
        let diffs = check(b"", b"abc");
        assert_eq!(diffs, vec![Diff { start: 0, end: 0, repl_start: 0, repl_end: 3 }]);
    }

    #[test]
    fn empty_b_single_deletion() {
        let diffs = check(b"abc", b"");
        assert_eq!(diffs, vec![Diff { start: 0, end: 3, repl_start: 0, repl_end: 0 }]);
    }

    #[test]
    fn disjoint_inputs_merge_to_one_replacement() {
        let diffs = check(b"fruit", b"cheese");
        assert_eq!(diffs, vec![Diff { start: 0, end: 5, repl_start: 0, repl_end: 6 }]);
    }

    #[test]
    fn single_insertion_between_common_ends() {
        let diffs = check(b"gord\n", b"gourd\n");
        assert_eq!(diffs, vec![Diff { start: 2, end: 2, repl_start: 2, repl_end: 3 }]);
    }

    #[test]
    fn single_deletion_between_common_ends() {
        let diffs = check(b"groat\n", b"goat\n");
        assert_eq!(diffs, vec![Diff { start: 1, end: 2, repl_start: 1, repl_end: 1 }]);
    }

    #[test]
    fn two_isolated_replacements() {
        let diffs = check(b"blanket\n", b"bunker\n");
        assert_eq!(
            diffs,
            vec![
                Diff { start: 1, end: 3, repl_start: 1, repl_end: 2 },
                Diff { start: 6, end: 7, repl_start: 5, repl_end: 6 },
            ]
        );
    }

    #[test]
    fn minimal_edit_length() {
        // LCS("ABCABBA", "CBABAC") = 4, so the minimum script deletes 3
        // and inserts 2 elements.
        let diffs = check(b"ABCABBA", b"CBABAC");
        let deleted: usize = diffs.iter().map(|d| d.end - d.start).sum();
        let inserted: usize = diffs.iter().map(|d| d.repl_end - d.repl_start).sum();
        assert_eq!(deleted + inserted, 5);
    }

    #[test]
    fn skewed_lengths() {
        check(b"a", b"aaaaaaaaaa");
        check(b"aaaaaaaaaa", b"a");
        check(b"x", b"yyyyyyyyyyx");
        check(b"xyyyyyyyyyy", b"y");
    }

    #[test]
    fn assorted_pairs_round_trip() {
        let cases: &[(&[u8], &[u8])] = &[
            (b"A", b"B"),
            (b"A", b"AB"),
            (b"AB", b"A"),
            (b"abcdef", b"abcxyzdef"),
            (b"abcxyzdef", b"abcdef"),
            (b"aabbccdd", b"abcd"),
            (b"abcd", b"aabbccdd"),
            (b"banana", b"ananas"),
            (b"kitten", b"sitting"),
            (b"saturday", b"sunday"),
            (b"xaxbxcx", b"yaybycy"),
            (b"aaaaabaaaaa", b"aaaaacaaaaa"),
            (b"abab", b"baba"),
            (b"A\nB\nC\nA\nB\nB\nA\n", b"C\nB\nA\nB\nA\nC\n"),
        ];
        for &(a, b) in cases {
            check(a, b);
            check(b, a);
        }
    }

    #[test]
    fn deterministic_output() {
        let a = b"the quick brown fox jumps over the lazy dog";
        let b = b"the quick red fox leaps over a lazy dog";
        assert_eq!(diff_bytes(a, b), diff_bytes(a, b));
    }

    #[test]
    fn generic_elements() {
        let a = [1u32, 2, 3, 4, 5];
        let b = [1u32, 9, 3, 5];
        let diffs = diff_slices(&a, &b);
        assert_eq!(
            diffs,
            vec![
                Diff { start: 1, end: 2, repl_start: 1, repl_end: 2 },
                Diff { start: 3, end: 4, repl_start: 3, repl_end: 3 },
            ]
        );
    }
}
