// Rectangular, forbidden and cost limited problems on top of the square solver

use crate::cost::Cost;
use crate::error::{LapError, Result};
use crate::lapjv::{LapInform, Workspace};
use crate::matrix_util::{extend_with_limit, forbidden_sentinel, pad_square};
use crate::postproc::trim_solution;
use crate::solve::solve_with;
use log::debug;

/// Used to specify options to [lapjvs()] and [lapjvs_batch](crate::lapjvs_batch()).
#[derive(Debug, Clone, Copy)]
pub struct LapOptions<T> {
    /// Pad to a square matrix with zero cost dummies. `None` pads only
    /// rectangular inputs; `Some(false)` rejects them.
    pub extend_cost: Option<bool>,
    /// Upper limit for the cost of a single assignment. Rows and columns can
    /// stay unmatched when every pairing costs more. Ignored if not finite.
    pub cost_limit: Option<T>,
    /// Also return the row duals of the solved square problem.
    pub compute_row_duals: bool,
}

impl<T> Default for LapOptions<T> {
    fn default() -> Self {
        Self {
            extend_cost: None,
            cost_limit: None,
            compute_row_duals: false,
        }
    }
}

/// Assignment of an `n_rows x n_cols` problem.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment<T> {
    /// Total cost over the assigned pairs, on the original matrix.
    pub cost: T,
    /// `x[row]` is the column assigned to `row`, if any.
    pub x: Vec<Option<usize>>,
    /// `y[col]` is the row assigned to `col`, if any.
    pub y: Vec<Option<usize>>,
    /// Column duals of the solved square problem, dummies included.
    pub v: Vec<T>,
    /// Row duals of the solved square problem, when requested.
    pub u: Option<Vec<T>>,
    pub inform: LapInform,
}

impl<T> Assignment<T> {
    /// Returns the number of assigned pairs.
    pub fn num_assigned(&self) -> usize {
        self.x.iter().filter(|j| j.is_some()).count()
    }

    /// Returns an iterator over the (row, col) pairs in row order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.x
            .iter()
            .enumerate()
            .filter_map(|(i, j)| j.map(|j| (i, j)))
    }

    /// Row and column indices of the assigned pairs as parallel vectors.
    pub fn rows_cols(&self) -> (Vec<usize>, Vec<usize>) {
        self.pairs().unzip()
    }
}

/// Solve the linear sum assignment problem for a row-major `n_rows x n_cols`
/// cost matrix.
///
/// Entries equal to `+inf` mark pairs that must not be assigned. The problem
/// is brought to square form as follows:
///
/// * with a finite `cost_limit`, it is extended to order `n_rows + n_cols` so
///   that any row and column may stay unmatched together at the price of
///   the limit;
/// * otherwise, if the input is rectangular or `extend_cost` is set, it is
///   padded with zero cost dummies to order `max(n_rows, n_cols)`;
/// * otherwise the square input is solved as is.
///
/// Returns [LapError::Infeasible] when the forbidden pairs leave no valid
/// assignment (never in cost limit mode, where such pairs are left unmatched).
pub fn lapjvs<T: Cost>(
    cost: &[T],
    n_rows: usize,
    n_cols: usize,
    options: &LapOptions<T>,
) -> Result<Assignment<T>> {
    let mut work = Workspace::new();
    lapjvs_with(cost, n_rows, n_cols, options, &mut work)
}

/// As [lapjvs()], reusing the scratch buffers of `work`.
pub fn lapjvs_with<T: Cost>(
    cost: &[T],
    n_rows: usize,
    n_cols: usize,
    options: &LapOptions<T>,
    work: &mut Workspace<T>,
) -> Result<Assignment<T>> {
    let invalid_shape = || LapError::InvalidShape {
        rows: n_rows,
        cols: n_cols,
        len: cost.len(),
    };
    if cost.len() != n_rows * n_cols {
        return Err(invalid_shape());
    }

    let limit = options.cost_limit.filter(|l| l.is_finite_cost());
    let extend = options.extend_cost.unwrap_or(n_rows != n_cols);
    if limit.is_none() && !extend && n_rows != n_cols {
        return Err(invalid_shape());
    }

    let sentinel = forbidden_sentinel(cost, n_rows, n_cols)?;
    let (square, dim) = match limit {
        Some(limit) => {
            let sentinel = match sentinel {
                Some(s) if s > limit => s,
                _ => limit,
            };
            extend_with_limit(cost, n_rows, n_cols, limit, sentinel)
        }
        None => pad_square(cost, n_rows, n_cols, sentinel),
    };
    debug!(
        "lapjvs: {}x{} problem solved at order {} (limit = {:?})",
        n_rows, n_cols, dim, limit
    );

    let solution = solve_with(dim, &square, options.compute_row_duals, work)?;
    let trimmed = trim_solution(cost, n_rows, n_cols, &solution.rowsol, limit.is_some())?;

    Ok(Assignment {
        cost: trimmed.cost,
        x: trimmed.x,
        y: trimmed.y,
        v: solution.v,
        u: solution.u,
        inform: solution.inform,
    })
}
