use crate::{Cost, Solution};
use spral::random::random_integer;


/// Generate a random row-major `m x n` matrix with entries in `[lo, lo + spread)`.
fn gen_random_matrix(m: usize, n: usize, lo: i64, spread: usize, state: &mut u32) -> Vec<i64> {
    (0..m * n)
        .map(|_| lo + (random_integer(state, spread) % spread) as i64)
        .collect()
}

fn to_f64(cost: &[i64]) -> Vec<f64> {
    cost.iter().map(|&c| c as f64).collect()
}

/// Smallest total cost over all injective maps from the rows of an `m x n`
/// matrix (`m <= n`) to its columns.
fn brute_force_min(cost: &[i64], m: usize, n: usize) -> i64 {
    fn search(cost: &[i64], n: usize, row: usize, m: usize, used: &mut [bool]) -> i64 {
        if row == m {
            return 0;
        }
        let mut best = i64::MAX;
        for j in 0..n {
            if used[j] {
                continue;
            }
            used[j] = true;
            let rest = search(cost, n, row + 1, m, used);
            used[j] = false;
            if rest != i64::MAX {
                best = best.min(cost[row * n + j] + rest);
            }
        }
        best
    }

    assert!(m <= n);
    search(cost, n, 0, m, &mut vec![false; n])
}

/// Check the bijection, the dual certificate and the reported cost of a square
/// solution. `tol` bounds the dual infeasibility accepted.
fn check_solution<T: Cost>(dim: usize, cost: &[T], sol: &Solution<T>, tol: T) {
    assert_eq!(sol.rowsol.len(), dim);
    assert_eq!(sol.colsol.len(), dim);
    assert_eq!(sol.v.len(), dim);

    let mut cnt = vec![0; dim];
    for (i, &j) in sol.rowsol.iter().enumerate() {
        assert!(j < dim, "rowsol({}) = {}", i, j);
        cnt[j] += 1;
        assert_eq!(sol.colsol[j], i, "colsol is not the inverse of rowsol");
    }
    assert!(cnt.iter().all(|&c| c == 1), "rowsol is not a permutation");

    let mut total = T::zero();
    for (i, &j) in sol.rowsol.iter().enumerate() {
        total = total + cost[i * dim + j];
    }
    assert_eq!(sol.cost, total);

    let u = sol.u.as_ref().expect("row duals requested");
    for i in 0..dim {
        for j in 0..dim {
            let reduced = cost[i * dim + j] - u[i] - sol.v[j];
            assert!(
                reduced >= -tol,
                "negative reduced cost {:?} at ({}, {})",
                reduced,
                i,
                j
            );
            if sol.rowsol[i] == j {
                assert!(
                    reduced <= tol && reduced >= -tol,
                    "assigned pair ({}, {}) has reduced cost {:?}",
                    i,
                    j,
                    reduced
                );
            }
        }
    }
}
