//! Classic Myers O(ND) line diff for the textdelta workspace.
//!
//! An alternative producer of [`textdelta::Edit`] scripts, following the
//! original trace-based formulation of the algorithm: grow
//! furthest-reaching paths per diagonal, snapshot the diagonal vector at
//! every step, then backtrack through the snapshots to recover the
//! solution's snakes. Deletions are preferred to insertions on ties.
//!
//! Output is interchangeable with the scripts the LCS dispatch in
//! `textdelta` produces: sorted, non-overlapping, and round-trip exact.
//! The two engines share nothing but the `Edit` record.
//!
//! # Memory
//!
//! The saved trace costs O((M+N)^2) space in the worst case, which is a
//! real hazard for large inputs. Callers that need predictable memory
//! should prefer `textdelta::diff_lines`.
//!
//! # Key Items
//!
//! - [`compute_edits`] -- line-level edit script for two texts
//! - [`operations`] / [`Operation`] / [`OpKind`] -- the consolidated
//!   operation list over line arrays

mod edits;
mod ops;

pub use edits::compute_edits;
pub use ops::{operations, OpKind, Operation};
