use crate::cost::Cost;
use crate::error::{LapError, Result};

/// Mapping of an `n_rows x n_cols` problem recovered from a padded solution.
pub(crate) struct Trimmed<T> {
    pub x: Vec<Option<usize>>,
    pub y: Vec<Option<usize>>,
    pub cost: T,
}

// Drops the dummy rows and columns added by `pad_square()` or
// `extend_with_limit()` from the square solution `rowsol`, and sums the cost
// of the remaining pairs on the original matrix.
//
// A remaining pair on a forbidden entry means the problem has no feasible
// assignment, unless `drop_forbidden` is set (cost limit mode, where leaving
// the pair unmatched is always allowed), in which case the pair is discarded.
pub(crate) fn trim_solution<T: Cost>(
    cost: &[T],
    n_rows: usize,
    n_cols: usize,
    rowsol: &[usize],
    drop_forbidden: bool,
) -> Result<Trimmed<T>> {
    assert_eq!(cost.len(), n_rows * n_cols);
    assert!(rowsol.len() >= n_rows);

    let mut x = vec![None; n_rows];
    let mut y = vec![None; n_cols];
    let mut total = T::zero();
    for (i, &j) in rowsol[..n_rows].iter().enumerate() {
        if j >= n_cols {
            continue; // matched with a dummy column
        }
        let c = cost[i * n_cols + j];
        if c.is_forbidden() {
            if drop_forbidden {
                continue;
            }
            return Err(LapError::Infeasible);
        }
        x[i] = Some(j);
        y[j] = Some(i);
        total = total + c;
    }

    Ok(Trimmed { x, y, cost: total })
}
