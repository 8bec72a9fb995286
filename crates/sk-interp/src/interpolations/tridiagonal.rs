//! Symmetric tridiagonal solvers used by the cubic splines.
//!
//! Both solvers run in O(n).  The plain system is factorised as `L D Lᵀ`;
//! the cyclic one (non-zero corner elements) is reduced to two plain solves
//! with the Sherman–Morrison formula.

use sk_core::{
    ensure,
    errors::{Error, Result},
    Real,
};
use tracing::trace;

use super::try_zeros;

/// Solve `A x = rhs` for symmetric tridiagonal `A`.
///
/// `diag` has `n` entries and `offdiag` at least `n - 1`; `offdiag[i]`
/// couples rows `i` and `i + 1`.
///
/// # Errors
/// [`Error::Singular`] if a zero pivot is met.
pub fn solve_symm_tridiag(diag: &[Real], offdiag: &[Real], rhs: &[Real]) -> Result<Vec<Real>> {
    let n = diag.len();
    ensure!(n > 0, "empty tridiagonal system");
    ensure!(
        rhs.len() == n && offdiag.len() + 1 >= n,
        "tridiagonal system of size {n} with {} off-diagonal and {} right-hand side entries",
        offdiag.len(),
        rhs.len()
    );
    trace!(n, "symmetric tridiagonal solve");

    // L D Lᵀ with unit lower bidiagonal L: gamma holds L's subdiagonal,
    // alpha holds D.
    let mut alpha = try_zeros(n, "alpha")?;
    let mut gamma = try_zeros(n - 1, "gamma")?;
    alpha[0] = diag[0];
    for i in 1..n {
        if alpha[i - 1] == 0.0 {
            return Err(Error::Singular { index: i - 1 });
        }
        gamma[i - 1] = offdiag[i - 1] / alpha[i - 1];
        alpha[i] = diag[i] - offdiag[i - 1] * gamma[i - 1];
    }
    if alpha[n - 1] == 0.0 {
        return Err(Error::Singular { index: n - 1 });
    }

    // forward: L z = rhs, then D c = z, then back: Lᵀ x = c
    let mut x = try_zeros(n, "solution")?;
    x[0] = rhs[0];
    for i in 1..n {
        x[i] = rhs[i] - gamma[i - 1] * x[i - 1];
    }
    for i in 0..n {
        x[i] /= alpha[i];
    }
    for i in (0..n - 1).rev() {
        x[i] -= gamma[i] * x[i + 1];
    }
    Ok(x)
}

/// Solve `A x = rhs` for symmetric cyclic tridiagonal `A`.
///
/// `diag` and `offdiag` both have `n` entries; `offdiag[i]` couples rows `i`
/// and `i + 1`, and `offdiag[n - 1]` couples the last row with the first.
///
/// # Errors
/// [`Error::Singular`] if the system cannot be solved.
pub fn solve_symm_cyclic_tridiag(
    diag: &[Real],
    offdiag: &[Real],
    rhs: &[Real],
) -> Result<Vec<Real>> {
    let n = diag.len();
    ensure!(n > 0, "empty cyclic tridiagonal system");
    ensure!(
        rhs.len() == n && offdiag.len() == n,
        "cyclic tridiagonal system of size {n} with {} off-diagonal and {} right-hand side entries",
        offdiag.len(),
        rhs.len()
    );

    match n {
        1 => {
            if diag[0] == 0.0 {
                return Err(Error::Singular { index: 0 });
            }
            Ok(vec![rhs[0] / diag[0]])
        }
        2 => {
            // both couplings land on the same off-diagonal entry
            let off = offdiag[0] + offdiag[1];
            let det = diag[0] * diag[1] - off * off;
            if det == 0.0 {
                return Err(Error::Singular { index: 1 });
            }
            Ok(vec![
                (diag[1] * rhs[0] - off * rhs[1]) / det,
                (diag[0] * rhs[1] - off * rhs[0]) / det,
            ])
        }
        _ => {
            // A = B + u vᵀ with u = (γ, 0, …, 0, β), v = (1, 0, …, 0, β/γ)
            let beta = offdiag[n - 1];
            let gamma = -diag[0];
            let mut modified = try_zeros(n, "diag")?;
            modified.copy_from_slice(diag);
            modified[0] -= gamma;
            modified[n - 1] -= beta * beta / gamma;

            let y = solve_symm_tridiag(&modified, &offdiag[..n - 1], rhs)?;
            let mut u = try_zeros(n, "u")?;
            u[0] = gamma;
            u[n - 1] = beta;
            let z = solve_symm_tridiag(&modified, &offdiag[..n - 1], &u)?;

            let denom = 1.0 + z[0] + beta * z[n - 1] / gamma;
            if denom == 0.0 {
                return Err(Error::Singular { index: n - 1 });
            }
            let fact = (y[0] + beta * y[n - 1] / gamma) / denom;
            Ok(y.iter().zip(&z).map(|(yi, zi)| yi - fact * zi).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::{DMatrix, DVector};

    fn dense(diag: &[Real], offdiag: &[Real], cyclic: bool) -> DMatrix<Real> {
        let n = diag.len();
        let mut m = DMatrix::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = diag[i];
        }
        for i in 0..n - 1 {
            m[(i, i + 1)] += offdiag[i];
            m[(i + 1, i)] += offdiag[i];
        }
        if cyclic && n > 1 {
            m[(0, n - 1)] += offdiag[n - 1];
            m[(n - 1, 0)] += offdiag[n - 1];
        }
        m
    }

    fn reference(m: DMatrix<Real>, rhs: &[Real]) -> DVector<Real> {
        m.lu().solve(&DVector::from_column_slice(rhs)).unwrap()
    }

    #[test]
    fn plain_matches_dense_lu() {
        let diag = [4.0, 5.0, 6.0, 4.5, 3.0];
        let offdiag = [1.0, -0.5, 2.0, 1.25];
        let rhs = [1.0, 2.0, -3.0, 0.5, 7.0];
        let x = solve_symm_tridiag(&diag, &offdiag, &rhs).unwrap();
        let expected = reference(dense(&diag, &offdiag, false), &rhs);
        for i in 0..diag.len() {
            assert_abs_diff_eq!(x[i], expected[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn single_equation() {
        let x = solve_symm_tridiag(&[4.0], &[0.0], &[2.0]).unwrap();
        assert_eq!(x, vec![0.5]);
    }

    #[test]
    fn cyclic_matches_dense_lu() {
        for n in 1..=7 {
            let diag: Vec<Real> = (0..n).map(|i| 5.0 + i as Real * 0.5).collect();
            let offdiag: Vec<Real> = (0..n).map(|i| 1.0 + 0.25 * i as Real).collect();
            let rhs: Vec<Real> = (0..n).map(|i| (i as Real).sin() + 1.0).collect();
            let x = solve_symm_cyclic_tridiag(&diag, &offdiag, &rhs).unwrap();
            let expected = if n == 1 {
                DVector::from_element(1, rhs[0] / diag[0])
            } else {
                reference(dense(&diag, &offdiag, true), &rhs)
            };
            for i in 0..n {
                assert_abs_diff_eq!(x[i], expected[i], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn zero_pivot_is_reported() {
        assert_eq!(
            solve_symm_tridiag(&[0.0, 1.0], &[1.0], &[1.0, 1.0]),
            Err(Error::Singular { index: 0 })
        );
    }

    #[test]
    fn shape_mismatch_is_reported() {
        assert!(matches!(
            solve_symm_tridiag(&[1.0, 1.0], &[], &[1.0, 1.0]),
            Err(Error::Precondition(_))
        ));
        assert!(matches!(
            solve_symm_cyclic_tridiag(&[1.0, 1.0], &[1.0], &[1.0, 1.0]),
            Err(Error::Precondition(_))
        ));
    }
}
