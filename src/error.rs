//! Error types reported by the validating entry points.
//!
//! The kernel [`lapjv`](crate::lapjv()) itself never fails on a conforming
//! square matrix of finite costs; everything here is raised at the boundary.

use thiserror::Error;

/// Result type alias using [`LapError`].
pub type Result<T> = std::result::Result<T, LapError>;

/// Errors raised while validating or post-processing an assignment problem.
#[derive(Error, Debug)]
pub enum LapError {
    /// The cost data does not describe a matrix the solver accepts.
    #[error("invalid cost matrix shape: {rows}x{cols} with {len} entries")]
    InvalidShape {
        /// Number of rows requested
        rows: usize,
        /// Number of columns requested
        cols: usize,
        /// Number of entries supplied
        len: usize,
    },

    /// NaN or `-inf` entry. `+inf` is accepted by [`lapjvs`](crate::lapjvs())
    /// as a forbidden pair but not by [`solve`](crate::solve()).
    #[error("non-finite cost at ({row}, {col})")]
    NonFiniteInput {
        /// Row of the offending entry
        row: usize,
        /// Column of the offending entry
        col: usize,
    },

    /// No assignment avoids the forbidden pairs.
    #[error("cost matrix is infeasible")]
    Infeasible,

    /// The stacked cost data does not hold `batch` matrices of the given shape.
    #[error("invalid batch shape: {batch}x{rows}x{cols} with {len} entries")]
    InvalidBatch {
        /// Number of problems
        batch: usize,
        /// Rows per problem
        rows: usize,
        /// Columns per problem
        cols: usize,
        /// Number of entries supplied
        len: usize,
    },

    /// The dedicated worker pool for a batch could not be created.
    #[cfg(feature = "rayon")]
    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
