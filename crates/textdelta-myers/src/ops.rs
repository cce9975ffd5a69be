//! The O(ND) shortest-edit-sequence search and its consolidation into
//! operations.
//!
//! The search tracks, for each diagonal `k = x - y`, the furthest-reaching
//! x of a d-step path, and snapshots the whole vector per step so the
//! solution can be recovered by backtracking. That trace is the memory
//! hazard of this engine: O((M+N)^2) in the worst case.

/// The kind of a diff operation over line arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpKind {
    /// Lines deleted from A (a horizontal run).
    Delete,
    /// Lines inserted from B (a vertical run).
    Insert,
    /// Lines common to both sides (a diagonal run). Consolidated
    /// operation lists elide these.
    Equal,
}

/// A consolidated run of one kind: lines `[start, end)` of A and
/// `[repl_start, repl_end)` of B.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operation {
    pub kind: OpKind,
    pub start: usize,
    pub end: usize,
    pub repl_start: usize,
    pub repl_end: usize,
}

/// Return the operations converting `a` into `b`, consolidating runs of
/// lines and omitting equal regions.
///
/// Ties between a deletion and an insertion are broken toward the
/// deletion, so the output is deterministic.
pub fn operations(a: &[&str], b: &[&str]) -> Vec<Operation> {
    if a.is_empty() && b.is_empty() {
        return Vec::new();
    }

    let m = a.len() as isize;
    let n = b.len() as isize;
    let (trace, offset) = shortest_edit_sequence(a, b);
    let snakes = backtrack(&trace, m, n, offset);

    let mut ops = Vec::new();
    let mut pending: Option<Operation> = None;
    let flush = |pending: &mut Option<Operation>, ops: &mut Vec<Operation>, x: isize, y: isize| {
        if let Some(mut op) = pending.take() {
            op.end = x as usize;
            op.repl_end = y as usize;
            ops.push(op);
        }
    };

    let (mut x, mut y) = (0isize, 0isize);
    for &(sx, sy) in snakes.iter().flatten() {
        // Delete: horizontal moves until we reach the snake's diagonal.
        while sx - sy > x - y {
            if pending.is_none() {
                pending = Some(Operation {
                    kind: OpKind::Delete,
                    start: x as usize,
                    end: 0,
                    repl_start: y as usize,
                    repl_end: 0,
                });
            }
            x += 1;
            if x == m {
                break;
            }
        }
        flush(&mut pending, &mut ops, x, y);
        // Insert: vertical moves.
        while sx - sy < x - y {
            if pending.is_none() {
                pending = Some(Operation {
                    kind: OpKind::Insert,
                    start: x as usize,
                    end: 0,
                    repl_start: y as usize,
                    repl_end: 0,
                });
            }
            y += 1;
        }
        flush(&mut pending, &mut ops, x, y);
        // Equal: follow the diagonal.
        while x < sx {
            x += 1;
            y += 1;
        }
        if x >= m && y >= n {
            break;
        }
    }
    ops
}

/// Compute the furthest-reaching-path trace for the shortest edit
/// sequence converting `a` into `b`.
///
/// Paths go *down* (insert) when `k == -d` or the diagonal below reaches
/// further, otherwise *right* (delete); maximizing x on ties prefers
/// deletions to insertions.
fn shortest_edit_sequence(a: &[&str], b: &[&str]) -> (Vec<Vec<isize>>, isize) {
    let m = a.len() as isize;
    let n = b.len() as isize;
    let offset = n + m;
    let mut v = vec![0isize; (2 * (n + m) + 1) as usize];
    let mut trace: Vec<Vec<isize>> = Vec::new();

    for d in 0..=(n + m) {
        let mut k = -d;
        while k <= d {
            let mut x = if k == -d
                || (k != d && v[(k - 1 + offset) as usize] < v[(k + 1 + offset) as usize])
            {
                v[(k + 1 + offset) as usize] // down
            } else {
                v[(k - 1 + offset) as usize] + 1 // right
            };
            let mut y = x - k;

            // Diagonal moves while the lines match.
            while x < m && y < n && a[x as usize] == b[y as usize] {
                x += 1;
                y += 1;
            }

            v[(k + offset) as usize] = x;

            if x == m && y == n {
                trace.push(v.clone());
                return (trace, offset);
            }
            k += 2;
        }
        trace.push(v.clone());
    }

    (trace, offset)
}

/// Recover the snakes of the solution from the trace. A snake is the end
/// point of a single deletion or insertion followed by zero or more
/// diagonal moves.
fn backtrack(
    trace: &[Vec<isize>],
    mut x: isize,
    mut y: isize,
    offset: isize,
) -> Vec<Option<(isize, isize)>> {
    let mut snakes: Vec<Option<(isize, isize)>> = vec![None; trace.len()];
    let mut d = trace.len() as isize - 1;
    while x > 0 && y > 0 && d > 0 {
        let v = &trace[d as usize];
        snakes[d as usize] = Some((x, y));

        let k = x - y;
        let k_prev = if k == -d
            || (k != d && v[(k - 1 + offset) as usize] < v[(k + 1 + offset) as usize])
        {
            k + 1
        } else {
            k - 1
        };

        x = v[(k_prev + offset) as usize];
        y = x - k_prev;
        d -= 1;
    }
    if x < 0 || y < 0 {
        return snakes;
    }
    snakes[d as usize] = Some((x, y));
    snakes
}
