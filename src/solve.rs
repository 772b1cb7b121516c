// Validating entry point for square problems

use crate::cost::Cost;
use crate::error::{LapError, Result};
use crate::lapjv::{lapjv, LapInform, Workspace};

/// Optimal assignment of a square problem together with its dual certificate.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T> {
    /// Column assigned to each row.
    pub rowsol: Vec<usize>,
    /// Row assigned to each column.
    pub colsol: Vec<usize>,
    /// Column duals.
    pub v: Vec<T>,
    /// Row duals, when requested.
    pub u: Option<Vec<T>>,
    /// Sum of `cost[i][rowsol[i]]`.
    pub cost: T,
    pub inform: LapInform,
}

/// Solve a square assignment problem of order `dim`.
///
/// `cost` holds `dim * dim` finite entries in row-major order. Row duals are
/// only computed if `compute_row_duals` is set.
pub fn solve<T: Cost>(dim: usize, cost: &[T], compute_row_duals: bool) -> Result<Solution<T>> {
    let mut work = Workspace::new();
    solve_with(dim, cost, compute_row_duals, &mut work)
}

/// As [solve()], reusing the scratch buffers of `work`.
pub fn solve_with<T: Cost>(
    dim: usize,
    cost: &[T],
    compute_row_duals: bool,
    work: &mut Workspace<T>,
) -> Result<Solution<T>> {
    if cost.len() != dim * dim {
        return Err(LapError::InvalidShape {
            rows: dim,
            cols: dim,
            len: cost.len(),
        });
    }
    if let Some(k) = cost.iter().position(|c| !c.is_finite_cost()) {
        return Err(LapError::NonFiniteInput {
            row: k / dim,
            col: k % dim,
        });
    }

    let mut rowsol = vec![0; dim];
    let mut colsol = vec![0; dim];
    let mut v = vec![T::zero(); dim];
    let mut u = compute_row_duals.then(|| vec![T::zero(); dim]);
    let mut inform = LapInform::default();

    let lapcost = lapjv(
        dim,
        cost,
        &mut rowsol,
        &mut colsol,
        u.as_deref_mut(),
        &mut v,
        work,
        &mut inform,
    );

    Ok(Solution {
        rowsol,
        colsol,
        v,
        u,
        cost: lapcost,
        inform,
    })
}
