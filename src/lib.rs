//! This package solves the linear sum assignment problem (LSAP).
//!
//! Given an `n x n` cost matrix `C`, it finds a permutation `σ` minimizing
//!
//!     Σ_i C[i, σ(i)]
//!
//! together with dual variables `u`, `v` such that
//!
//!     C[i, j] - u[i] - v[j] >= 0   for all i, j
//!
//! with equality on the assigned pairs, which certifies optimality.
//!
//! The solver is the shortest augmenting path algorithm of Jonker and
//! Volgenant, in four phases sharing the column duals:
//!
//! **Column reduction**
//!    seeds the duals with the column minima and a partial assignment.
//!
//! **Reduction transfer**
//!    tightens the duals of columns held by singly assigned rows.
//!
//! **Augmenting row reduction**
//!    reassigns free rows to their cheapest reduced column, twice over.
//!
//! **Augmentation**
//!    completes the assignment with Dijkstra-like shortest alternating paths,
//!    in `O(n³)` overall.
//!
//! [lapjv()] is the allocation-free kernel, [solve()] a validating wrapper, and
//! [lapjvs()] handles rectangular matrices, forbidden (`+inf`) pairs and a per
//! pair cost limit. [lapjvs_batch()] solves stacks of problems, in parallel with
//! the `rayon` feature.

mod batch;
mod cost;
mod error;
mod lapjv;
mod lapjvs;
mod matrix_util;
mod postproc;
mod solve;

#[cfg(test)]
mod tests;

pub use batch::*;
pub use cost::*;
pub use error::*;
pub use lapjv::*;
pub use lapjvs::*;
pub use solve::*;
