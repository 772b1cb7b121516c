// Jonker-Volgenant Algorithm implementation (dense LAPJV)

use crate::cost::Cost;
use log::{debug, trace};
use std::iter::zip;

/// Marks a column without an owning row while the algorithm runs.
const UNASSIGNED: usize = usize::MAX;

/// Used to return information about the execution of [lapjv()].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LapInform {
    /// Order of the solved matrix.
    pub dim: usize,
    /// Rows left unassigned by column reduction and reduction transfer.
    pub free_after_transfer: usize,
    /// Rows left unassigned after both augmenting row reduction passes.
    pub free_after_reduction: usize,
    /// Number of shortest augmenting paths found.
    pub augmented: usize,
}

/// Minimum and second minimum of the reduced costs `c_ij - v_j` of one row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UMins<T> {
    pub min: T,
    pub sub_min: T,
    pub argmin: usize,
    /// `None` for a single column row.
    pub arg_sub_min: Option<usize>,
}

/// Find the smallest and second smallest reduced cost of a row.
///
/// Comparisons are strict, so among equal values the earliest column becomes
/// the minimum and the next one the second minimum. This fixes which of two
/// cost-equivalent columns augmenting row reduction prefers.
pub fn find_umins<T: Cost>(row_cost: &[T], v: &[T]) -> UMins<T> {
    assert_eq!(row_cost.len(), v.len());
    assert!(!row_cost.is_empty());

    let mut min = row_cost[0] - v[0];
    let mut argmin = 0;
    let mut sub_min = T::max_value();
    let mut arg_sub_min = None;
    for (j, (&c, &vj)) in zip(row_cost, v).enumerate().skip(1) {
        let h = c - vj;
        if h < sub_min {
            if h >= min {
                sub_min = h;
                arg_sub_min = Some(j);
            } else {
                sub_min = min;
                min = h;
                arg_sub_min = Some(argmin);
                argmin = j;
            }
        }
    }

    UMins {
        min,
        sub_min,
        argmin,
        arg_sub_min,
    }
}

/// Scratch buffers for [lapjv()].
///
/// A workspace grows to the largest order it has been used with and is fully
/// re-initialised by every call, so reusing one across calls only saves
/// allocations. Concurrent solves need one workspace each.
#[derive(Debug, Clone)]
pub struct Workspace<T> {
    // columns split into settled [0,low), frontier [low,up), unscanned [up,dim)
    collist: Vec<usize>,
    // number of columns each row won during column reduction
    matches: Vec<usize>,
    free: Vec<usize>,
    // shortest reduced distance from the free row to each column
    d: Vec<T>,
    // row preceding each column on the alternating path
    pred: Vec<usize>,
}

impl<T: Cost> Default for Workspace<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Cost> Workspace<T> {
    pub fn new() -> Self {
        Self {
            collist: Vec::new(),
            matches: Vec::new(),
            free: Vec::new(),
            d: Vec::new(),
            pred: Vec::new(),
        }
    }

    pub fn with_capacity(dim: usize) -> Self {
        let mut work = Self::new();
        work.reserve(dim);
        work
    }

    /// Largest order the workspace can serve without reallocating.
    pub fn capacity(&self) -> usize {
        self.d.len()
    }

    fn reserve(&mut self, dim: usize) {
        if self.d.len() >= dim {
            return;
        }
        self.collist.resize(dim, 0);
        self.matches.resize(dim, 0);
        self.free.resize(dim, 0);
        self.d.resize(dim, T::zero());
        self.pred.resize(dim, 0);
    }
}

/// Solve the dense square linear sum assignment problem.
///
/// `cost` is the row-major `dim x dim` cost matrix. On return `rowsol[i]` is
/// the column assigned to row `i`, `colsol` is its inverse, and `v` (and `u`,
/// if given) hold dual variables such that `cost[i][j] - u[i] - v[j] >= 0`
/// everywhere with equality on the assignment. The optimal total cost is
/// returned.
///
/// All entries must be finite, and differences of entries must not overflow
/// `T`. Forbidden pairs should be replaced by a large finite sentinel
/// beforehand. Other inputs give an undefined (but memory safe) result.
///
/// # Arguments
/// * `dim` - order of the matrix
/// * `cost` - cost matrix, row-major
/// * `rowsol` - output column of each row
/// * `colsol` - output row of each column
/// * `u` - optional output row duals
/// * `v` - output column duals
/// * `work` - scratch buffers, see [Workspace]
/// * `inform` - output information about the execution
pub fn lapjv<T: Cost>(
    dim: usize,
    cost: &[T],
    rowsol: &mut [usize],
    colsol: &mut [usize],
    u: Option<&mut [T]>,
    v: &mut [T],
    work: &mut Workspace<T>,
    inform: &mut LapInform,
) -> T {
    assert_eq!(cost.len(), dim * dim);
    assert_eq!(rowsol.len(), dim);
    assert_eq!(colsol.len(), dim);
    assert_eq!(v.len(), dim);

    *inform = LapInform {
        dim,
        ..LapInform::default()
    };

    if dim == 0 {
        return T::zero();
    }
    if dim == 1 {
        // No second column to reduce against.
        rowsol[0] = 0;
        colsol[0] = 0;
        v[0] = cost[0];
        if let Some(u) = u {
            assert_eq!(u.len(), 1);
            u[0] = T::zero();
        }
        return cost[0];
    }

    work.reserve(dim);
    let collist = &mut work.collist[..dim];
    let matches = &mut work.matches[..dim];
    let free = &mut work.free[..dim];
    let d = &mut work.d[..dim];
    let pred = &mut work.pred[..dim];

    column_reduction(dim, cost, rowsol, colsol, v, matches);
    trace!("lapjv: column reduction finished");

    let mut numfree = reduction_transfer(dim, cost, rowsol, v, matches, free);
    inform.free_after_transfer = numfree;
    trace!("lapjv: reduction transfer finished, {} free rows", numfree);

    for pass in 0..2 {
        numfree = augmenting_row_reduction(dim, cost, rowsol, colsol, v, free, numfree);
        trace!(
            "lapjv: augmenting row reduction {} / 2, {} free rows",
            pass + 1,
            numfree
        );
    }
    inform.free_after_reduction = numfree;

    for (f, &freerow) in free[..numfree].iter().enumerate() {
        trace!(
            "lapjv: augment solution row {} [{} / {}]",
            freerow,
            f + 1,
            numfree
        );
        augment_path(dim, cost, freerow, rowsol, colsol, v, collist, d, pred);
    }
    inform.augmented = numfree;

    let mut lapcost = T::zero();
    let mut u = u;
    if let Some(u) = u.as_deref() {
        assert_eq!(u.len(), dim);
    }
    for (i, &j) in rowsol.iter().enumerate() {
        let c = cost[i * dim + j];
        if let Some(u) = u.as_deref_mut() {
            u[i] = c - v[j];
        }
        lapcost = lapcost + c;
    }

    debug!(
        "lapjv: dim = {}, free rows {} -> {}, cost = {:?}",
        dim, inform.free_after_transfer, inform.free_after_reduction, lapcost
    );

    lapcost
}

// Take the cheapest row of every column as its dual. A row winning several
// columns keeps only the first one it won; the other columns stay open.
fn column_reduction<T: Cost>(
    dim: usize,
    cost: &[T],
    rowsol: &mut [usize],
    colsol: &mut [usize],
    v: &mut [T],
    matches: &mut [usize],
) {
    matches.fill(0);
    rowsol.fill(UNASSIGNED);

    // Reverse order gives better results.
    for j in (0..dim).rev() {
        let mut min = cost[j];
        let mut imin = 0;
        for i in 1..dim {
            let c = cost[i * dim + j];
            if c < min {
                min = c;
                imin = i;
            }
        }
        v[j] = min;

        matches[imin] += 1;
        if matches[imin] == 1 {
            rowsol[imin] = j;
            colsol[j] = imin;
        } else {
            colsol[j] = UNASSIGNED;
        }
    }
}

// Lower the dual of every column held by a row that won exactly one column,
// and collect the rows that won nothing. Returns the number of free rows.
fn reduction_transfer<T: Cost>(
    dim: usize,
    cost: &[T],
    rowsol: &[usize],
    v: &mut [T],
    matches: &[usize],
    free: &mut [usize],
) -> usize {
    let mut numfree = 0;
    for (i, &m) in matches.iter().enumerate() {
        if m == 0 {
            free[numfree] = i;
            numfree += 1;
        } else if m == 1 {
            let j1 = rowsol[i];
            let row_cost = &cost[i * dim..(i + 1) * dim];
            let mut min = T::max_value();
            for (j, (&c, &vj)) in zip(row_cost, v.iter()).enumerate() {
                if j != j1 && c - vj < min {
                    min = c - vj;
                }
            }
            v[j1] = v[j1] - min;
        }
    }
    numfree
}

// One pass of augmenting row reduction over free[..numfree]. A row displaced
// from a column whose dual dropped is retried at once; a row displaced through
// a tie is deferred to the list for the next pass. Returns the new count.
fn augmenting_row_reduction<T: Cost>(
    dim: usize,
    cost: &[T],
    rowsol: &mut [usize],
    colsol: &mut [usize],
    v: &mut [T],
    free: &mut [usize],
    numfree: usize,
) -> usize {
    let prevnumfree = numfree;
    let mut numfree = 0;
    let mut k = 0;
    while k < prevnumfree {
        let i = free[k];
        k += 1;

        let UMins {
            min: umin,
            sub_min: usubmin,
            argmin,
            arg_sub_min,
        } = find_umins(&cost[i * dim..(i + 1) * dim], v);

        let mut j1 = argmin;
        let mut i0 = colsol[j1];
        // A strict decrease is required, otherwise equal minima can cycle.
        let vj1_lowers = match arg_sub_min {
            Some(_) => {
                let vj1_new = v[j1] - (usubmin - umin);
                if vj1_new < v[j1] {
                    v[j1] = vj1_new;
                    true
                } else {
                    false
                }
            }
            None => false,
        };
        if !vj1_lowers && i0 != UNASSIGNED {
            // Minimum and second minimum are equal.
            if let Some(j2) = arg_sub_min {
                j1 = j2;
                i0 = colsol[j2];
            }
        }

        rowsol[i] = j1;
        colsol[j1] = i;

        if i0 != UNASSIGNED {
            if vj1_lowers {
                k -= 1;
                free[k] = i0;
            } else {
                free[numfree] = i0;
                numfree += 1;
            }
        }
    }
    numfree
}

// Dijkstra-like search for the shortest alternating path from `freerow` to an
// unassigned column, followed by the dual update and the path flip.
fn augment_path<T: Cost>(
    dim: usize,
    cost: &[T],
    freerow: usize,
    rowsol: &mut [usize],
    colsol: &mut [usize],
    v: &mut [T],
    collist: &mut [usize],
    d: &mut [T],
    pred: &mut [usize],
) {
    let free_cost = &cost[freerow * dim..(freerow + 1) * dim];
    for j in 0..dim {
        d[j] = free_cost[j] - v[j];
        pred[j] = freerow;
        collist[j] = j;
    }

    let mut low = 0;
    let mut up = 0;
    // columns collist[..settled] need their duals corrected afterwards
    let mut settled = 0;
    let mut min = T::zero();

    let endofpath = 'search: loop {
        if up == low {
            // Move every unscanned column at the new minimum distance into the
            // frontier.
            settled = low;
            min = d[collist[up]];
            up += 1;
            for k in up..dim {
                let j = collist[k];
                let h = d[j];
                if h <= min {
                    if h < min {
                        up = low;
                        min = h;
                    }
                    collist[k] = collist[up];
                    collist[up] = j;
                    up += 1;
                }
            }
            for &j in &collist[low..up] {
                if colsol[j] == UNASSIGNED {
                    break 'search j;
                }
            }
        }

        // Settle the next frontier column and relax through its owning row.
        let j1 = collist[low];
        low += 1;
        let i = colsol[j1];
        let row_cost = &cost[i * dim..(i + 1) * dim];
        let h = row_cost[j1] - v[j1] - min;
        for k in up..dim {
            let j = collist[k];
            let v2 = row_cost[j] - v[j] - h;
            if v2 < d[j] {
                pred[j] = i;
                if v2 == min {
                    if colsol[j] == UNASSIGNED {
                        break 'search j;
                    }
                    collist[k] = collist[up];
                    collist[up] = j;
                    up += 1;
                }
                d[j] = v2;
            }
        }
    };

    for &k in &collist[..settled] {
        v[k] = v[k] + d[k] - min;
    }

    let mut j = endofpath;
    loop {
        let i = pred[j];
        colsol[j] = i;
        let next = rowsol[i];
        rowsol[i] = j;
        if i == freerow {
            break;
        }
        j = next;
    }
}
