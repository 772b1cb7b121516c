// Solving stacks of equally shaped problems

use crate::cost::Cost;
use crate::error::{LapError, Result};
use crate::lapjv::Workspace;
use crate::lapjvs::{lapjvs_with, Assignment, LapOptions};
use log::debug;

/// Solve `batch` problems stored back to back as a row-major
/// `[batch, n_rows, n_cols]` array.
///
/// With the `rayon` feature the problems are solved in parallel, each worker
/// owning its own [Workspace]. `n_threads == 0` runs on the global rayon pool,
/// any other value on a dedicated pool of that size. Results are returned in
/// batch order; the first failing problem fails the whole batch.
pub fn lapjvs_batch<T: Cost>(
    costs: &[T],
    batch: usize,
    n_rows: usize,
    n_cols: usize,
    options: &LapOptions<T>,
    n_threads: usize,
) -> Result<Vec<Assignment<T>>> {
    let size = n_rows * n_cols;
    if costs.len() != batch * size {
        return Err(LapError::InvalidBatch {
            batch,
            rows: n_rows,
            cols: n_cols,
            len: costs.len(),
        });
    }
    debug!(
        "lapjvs_batch: {} problems of {}x{}, {} threads",
        batch, n_rows, n_cols, n_threads
    );

    solve_all(costs, batch, n_rows, n_cols, options, n_threads)
}

#[cfg(feature = "rayon")]
fn solve_all<T: Cost>(
    costs: &[T],
    batch: usize,
    n_rows: usize,
    n_cols: usize,
    options: &LapOptions<T>,
    n_threads: usize,
) -> Result<Vec<Assignment<T>>> {
    use rayon::prelude::*;

    let size = n_rows * n_cols;
    let run = || {
        (0..batch)
            .into_par_iter()
            .map_init(Workspace::new, |work, b| {
                lapjvs_with(&costs[b * size..(b + 1) * size], n_rows, n_cols, options, work)
            })
            .collect::<Result<Vec<_>>>()
    };
    if n_threads == 0 {
        return run();
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .build()?;
    pool.install(run)
}

#[cfg(not(feature = "rayon"))]
fn solve_all<T: Cost>(
    costs: &[T],
    batch: usize,
    n_rows: usize,
    n_cols: usize,
    options: &LapOptions<T>,
    _n_threads: usize,
) -> Result<Vec<Assignment<T>>> {
    let size = n_rows * n_cols;
    let mut work = Workspace::new();
    (0..batch)
        .map(|b| lapjvs_with(&costs[b * size..(b + 1) * size], n_rows, n_cols, options, &mut work))
        .collect()
}
