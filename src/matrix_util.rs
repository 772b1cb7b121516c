// Expansion of rectangular and constrained problems into square ones

use crate::cost::Cost;
use crate::error::{LapError, Result};
use num_traits::{NumCast, ToPrimitive};

/// Finite stand-in for forbidden (`+inf`) pairs of an `n_rows x n_cols` matrix,
/// or `None` when there is no such pair.
///
/// The value `2 * min(n_rows, n_cols) * max|c| + 1`, taken over the finite
/// entries, is larger than the cost of any assignment built from finite
/// entries, so it only appears in an optimal solution when no such
/// assignment exists. It is capped at a quarter of `T::max_value()` to leave
/// the solver room for its differences. NaN and `-inf` are rejected.
pub(crate) fn forbidden_sentinel<T: Cost>(
    cost: &[T],
    n_rows: usize,
    n_cols: usize,
) -> Result<Option<T>> {
    let mut max_abs = 0.0f64;
    let mut forbidden = false;
    for (k, &c) in cost.iter().enumerate() {
        if c.is_forbidden() {
            forbidden = true;
            continue;
        }
        if !c.is_finite_cost() {
            return Err(LapError::NonFiniteInput {
                row: k / n_cols,
                col: k % n_cols,
            });
        }
        max_abs = max_abs.max(c.to_f64().map_or(0.0, f64::abs));
    }
    if !forbidden {
        return Ok(None);
    }

    let cap = T::max_value().to_f64().unwrap_or(f64::MAX) / 4.0;
    let bound = 2.0 * usize::min(n_rows, n_cols) as f64 * max_abs + 1.0;
    let sentinel = <T as NumCast>::from(bound.min(cap))
        .unwrap_or_else(|| T::max_value() / (T::two() + T::two()));
    Ok(Some(sentinel))
}

/// Embed `cost` in the top-left corner of a zero `max(n_rows, n_cols)` square,
/// replacing forbidden entries with `sentinel`.
///
/// The dummy rows (or columns) cost nothing whatever they are matched with, so
/// the optimum restricted to the real rows and columns is the optimum of the
/// rectangular problem. With `n_rows == n_cols` this is a sanitised copy.
pub(crate) fn pad_square<T: Cost>(
    cost: &[T],
    n_rows: usize,
    n_cols: usize,
    sentinel: Option<T>,
) -> (Vec<T>, usize) {
    assert_eq!(cost.len(), n_rows * n_cols);

    let dim = usize::max(n_rows, n_cols);
    let mut square = vec![T::zero(); dim * dim];
    for i in 0..n_rows {
        let src = &cost[i * n_cols..(i + 1) * n_cols];
        let dst = &mut square[i * dim..i * dim + n_cols];
        for (d, &c) in dst.iter_mut().zip(src) {
            *d = match sentinel {
                Some(s) if c.is_forbidden() => s,
                _ => c,
            };
        }
    }
    (square, dim)
}

/// Build the `(n_rows + n_cols)` square problem in which every row and column
/// may stay unmatched, at a joint price of `limit` per rejected pair.
///
/// ```text
///     | cost         lo |
///     | limit - lo   0  |      lo = limit / 2
/// ```
///
/// A real pair is then only chosen when it is cheaper than rejecting both its
/// row and its column. Forbidden entries cost `sentinel`.
pub(crate) fn extend_with_limit<T: Cost>(
    cost: &[T],
    n_rows: usize,
    n_cols: usize,
    limit: T,
    sentinel: T,
) -> (Vec<T>, usize) {
    assert_eq!(cost.len(), n_rows * n_cols);

    let dim = n_rows + n_cols;
    let lo = limit / T::two();
    let hi = limit - lo;
    let mut square = vec![T::zero(); dim * dim];
    for i in 0..dim {
        let row = &mut square[i * dim..(i + 1) * dim];
        if i < n_rows {
            let src = &cost[i * n_cols..(i + 1) * n_cols];
            for (d, &c) in row[..n_cols].iter_mut().zip(src) {
                *d = if c.is_forbidden() { sentinel } else { c };
            }
            row[n_cols..].fill(lo);
        } else {
            row[..n_cols].fill(hi);
        }
    }
    (square, dim)
}
