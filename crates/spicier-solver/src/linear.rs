//! Dense LU solve with partial pivoting via an explicit permutation vector
//! (§4.5). Factorization, forward substitution, back substitution, and the
//! final unscramble are kept as four distinct, separately testable steps
//! rather than delegated to a library solve — the exact pivoting order is
//! part of this crate's observable contract (see the LU-identity property
//! in the parser's integration tests).

use nalgebra::{DMatrix, DVector};

use spicier_core::{Error, Result};

/// In-place LU factorization of `a` with partial pivoting.
///
/// Returns the permutation vector `p`: row `p[k]` of the *original* matrix
/// holds the `k`-th logical pivot row. `a` is overwritten with L (below the
/// logical diagonal, unit diagonal implied) and U (on and above it), both
/// still indexed by *physical* row — every other routine in this module
/// reads `a` through `p`, never directly by logical row.
pub fn factorize(a: &mut DMatrix<f64>) -> Result<Vec<usize>> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            actual: a.ncols(),
        });
    }

    let mut p: Vec<usize> = (0..n).collect();

    for k in 0..n {
        let (k_max, _) = (k..n)
            .map(|l| (l, a[(p[l], k)].abs()))
            .max_by(|x, y| x.1.partial_cmp(&y.1).unwrap())
            .unwrap();
        p.swap(k, k_max);

        let pivot = a[(p[k], k)];
        if pivot == 0.0 {
            log::warn!("singular matrix: zero pivot at logical row {k}");
            return Err(Error::SingularMatrix { row: k });
        }

        for i in (k + 1)..n {
            let factor = a[(p[i], k)] / pivot;
            a[(p[i], k)] = factor;
            for j in (k + 1)..n {
                let upd = a[(p[k], j)] * factor;
                a[(p[i], j)] -= upd;
            }
        }
    }

    Ok(p)
}

/// Forward ("progressive") substitution against the unit-lower-triangular
/// part of an `lu` produced by [`factorize`]. Returns `Y`, still indexed by
/// physical row through `p`.
pub fn forward_substitute(lu: &DMatrix<f64>, p: &[usize], b: &DVector<f64>) -> DVector<f64> {
    let n = p.len();
    let mut y = DVector::zeros(n);
    for k in 0..n {
        let mut sum = b[p[k]];
        for j in 0..k {
            sum -= lu[(p[k], j)] * y[p[j]];
        }
        y[p[k]] = sum;
    }
    y
}

/// Back ("regressive") substitution against the upper-triangular part of an
/// `lu` produced by [`factorize`]. Returns `X`, still indexed by physical
/// row through `p`.
pub fn back_substitute(lu: &DMatrix<f64>, p: &[usize], y: &DVector<f64>) -> DVector<f64> {
    let n = p.len();
    let mut x = DVector::zeros(n);
    for k in (0..n).rev() {
        let mut sum = y[p[k]];
        for j in (k + 1)..n {
            sum -= lu[(p[k], j)] * x[p[j]];
        }
        x[p[k]] = sum / lu[(p[k], k)];
    }
    x
}

/// Maps a permuted solution back to logical row order.
pub fn unscramble(p: &[usize], x: &DVector<f64>) -> DVector<f64> {
    DVector::from_iterator(p.len(), p.iter().map(|&pk| x[pk]))
}

/// Solves `H * X = b` for dense `H`, returning the logically-ordered
/// solution vector.
pub fn solve_dense(h: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>> {
    if h.nrows() != h.ncols() {
        return Err(Error::DimensionMismatch {
            expected: h.nrows(),
            actual: h.ncols(),
        });
    }
    if h.nrows() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: h.nrows(),
            actual: b.len(),
        });
    }

    let mut lu = h.clone();
    let p = factorize(&mut lu)?;
    let y = forward_substitute(&lu, &p, b);
    let x = back_substitute(&lu, &p, &y);
    Ok(unscramble(&p, &x))
}
