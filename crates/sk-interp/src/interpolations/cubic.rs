//! Cubic spline interpolation with natural and periodic boundary conditions.
//!
//! Both variants solve for the curvature terms `c_i = f''(x_i) / 2` at the
//! nodes and derive the remaining per-segment coefficients from them:
//!
//! - **natural**: `f''` vanishes at both ends; the interior unknowns form a
//!   symmetric tridiagonal system.
//! - **periodic**: `f`, `f'` and `f''` match across the end points; the
//!   unknowns form a symmetric cyclic tridiagonal system.
//!
//! The interpolant is C² in both cases.

use sk_core::{errors::Result, Real};
use tracing::trace;

use super::tridiagonal::{solve_symm_cyclic_tridiag, solve_symm_tridiag};
use super::{check_table, try_zeros, InterpMethod, PiecewiseCubic};
use crate::accel::InterpAccel;

/// Store the segment cubics implied by the node curvatures `c`.
fn coefficients_from_curvature(coeffs: &mut PiecewiseCubic, xa: &[Real], ya: &[Real], c: &[Real]) {
    for i in 0..xa.len() - 1 {
        let dx = xa[i + 1] - xa[i];
        let dy = ya[i + 1] - ya[i];
        let slope = dy / dx - dx * (c[i + 1] + 2.0 * c[i]) / 3.0;
        let cubic = (c[i + 1] - c[i]) / (3.0 * dx);
        coeffs.set(i, cubic, c[i], slope, ya[i]);
    }
}

/// Row of the curvature system centred on a node with neighbouring segment
/// widths `h_lo`, `h_hi` and rises `dy_lo`, `dy_hi`: `(diag, rhs)`.
#[inline]
fn curvature_row(h_lo: Real, h_hi: Real, dy_lo: Real, dy_hi: Real) -> (Real, Real) {
    (2.0 * (h_lo + h_hi), 3.0 * (dy_hi / h_hi - dy_lo / h_lo))
}

// ── Natural ───────────────────────────────────────────────────────────────────

/// Natural cubic spline state.
#[derive(Debug, Clone, Default)]
pub struct CSpline {
    coeffs: PiecewiseCubic,
}

impl CSpline {
    /// Diagnostic name.
    pub const NAME: &'static str = "cspline";
    /// Smallest table the scheme accepts.
    pub const MIN_SIZE: usize = 3;

    /// Unfitted state for a table of `size` points.
    pub fn with_size(size: usize) -> Result<Self> {
        Ok(Self {
            coeffs: PiecewiseCubic::with_segments(size.saturating_sub(1))?,
        })
    }
}

impl InterpMethod for CSpline {
    fn init(&mut self, xa: &[Real], ya: &[Real]) -> Result<()> {
        check_table(Self::NAME, Self::MIN_SIZE, xa, ya)?;
        let n = xa.len();
        self.coeffs.resize_for(n)?;

        let sys_size = n - 2;
        let mut diag = try_zeros(sys_size, "diag")?;
        let mut offdiag = try_zeros(sys_size, "offdiag")?;
        let mut rhs = try_zeros(sys_size, "g")?;
        for i in 0..sys_size {
            let h_i = xa[i + 1] - xa[i];
            let h_ip1 = xa[i + 2] - xa[i + 1];
            let (d, g) = curvature_row(h_i, h_ip1, ya[i + 1] - ya[i], ya[i + 2] - ya[i + 1]);
            diag[i] = d;
            offdiag[i] = h_ip1;
            rhs[i] = g;
        }

        let interior = solve_symm_tridiag(&diag, &offdiag, &rhs)?;
        let mut c = try_zeros(n, "c")?;
        c[1..n - 1].copy_from_slice(&interior);
        trace!(n, "natural spline curvature solved");

        coefficients_from_curvature(&mut self.coeffs, xa, ya, &c);
        Ok(())
    }

    fn eval(&self, xa: &[Real], _ya: &[Real], x: Real, acc: Option<&mut InterpAccel>) -> Result<Real> {
        self.coeffs.eval(xa, x, acc)
    }

    fn eval_deriv(
        &self,
        xa: &[Real],
        _ya: &[Real],
        x: Real,
        acc: Option<&mut InterpAccel>,
    ) -> Result<Real> {
        self.coeffs.eval_deriv(xa, x, acc)
    }

    fn eval_deriv2(
        &self,
        xa: &[Real],
        _ya: &[Real],
        x: Real,
        acc: Option<&mut InterpAccel>,
    ) -> Result<Real> {
        self.coeffs.eval_deriv2(xa, x, acc)
    }

    fn eval_integ(
        &self,
        xa: &[Real],
        _ya: &[Real],
        acc: Option<&mut InterpAccel>,
        a: Real,
        b: Real,
    ) -> Result<Real> {
        self.coeffs.eval_integ(xa, acc, a, b)
    }
}

// ── Periodic ──────────────────────────────────────────────────────────────────

/// Periodic cubic spline state.
///
/// The table is taken to describe one period: `y[0]` and `y[n-1]` should be
/// equal.  This is not checked.
#[derive(Debug, Clone, Default)]
pub struct CSplinePeriodic {
    coeffs: PiecewiseCubic,
}

impl CSplinePeriodic {
    /// Diagnostic name.
    pub const NAME: &'static str = "cspline-periodic";
    /// Smallest table the scheme accepts.
    pub const MIN_SIZE: usize = 2;

    /// Unfitted state for a table of `size` points.
    pub fn with_size(size: usize) -> Result<Self> {
        Ok(Self {
            coeffs: PiecewiseCubic::with_segments(size.saturating_sub(1))?,
        })
    }
}

impl InterpMethod for CSplinePeriodic {
    fn init(&mut self, xa: &[Real], ya: &[Real]) -> Result<()> {
        check_table(Self::NAME, Self::MIN_SIZE, xa, ya)?;
        let n = xa.len();
        self.coeffs.resize_for(n)?;

        // unknowns c[1..=n-1]; c[0] wraps to c[n-1]
        let sys_size = n - 1;
        let mut diag = try_zeros(sys_size, "diag")?;
        let mut offdiag = try_zeros(sys_size, "offdiag")?;
        let mut rhs = try_zeros(sys_size, "g")?;
        for i in 0..sys_size - 1 {
            let h_i = xa[i + 1] - xa[i];
            let h_ip1 = xa[i + 2] - xa[i + 1];
            let (d, g) = curvature_row(h_i, h_ip1, ya[i + 1] - ya[i], ya[i + 2] - ya[i + 1]);
            diag[i] = d;
            offdiag[i] = h_ip1;
            rhs[i] = g;
        }
        // the last node's right neighbour is the first segment
        let last = sys_size - 1;
        let h_i = xa[last + 1] - xa[last];
        let h_ip1 = xa[1] - xa[0];
        let (d, g) = curvature_row(h_i, h_ip1, ya[last + 1] - ya[last], ya[1] - ya[0]);
        diag[last] = d;
        offdiag[last] = h_ip1;
        rhs[last] = g;

        let solution = solve_symm_cyclic_tridiag(&diag, &offdiag, &rhs)?;
        let mut c = try_zeros(n, "c")?;
        c[1..].copy_from_slice(&solution);
        c[0] = c[n - 1];
        trace!(n, "periodic spline curvature solved");

        coefficients_from_curvature(&mut self.coeffs, xa, ya, &c);
        Ok(())
    }

    fn eval(&self, xa: &[Real], _ya: &[Real], x: Real, acc: Option<&mut InterpAccel>) -> Result<Real> {
        self.coeffs.eval(xa, x, acc)
    }

    fn eval_deriv(
        &self,
        xa: &[Real],
        _ya: &[Real],
        x: Real,
        acc: Option<&mut InterpAccel>,
    ) -> Result<Real> {
        self.coeffs.eval_deriv(xa, x, acc)
    }

    fn eval_deriv2(
        &self,
        xa: &[Real],
        _ya: &[Real],
        x: Real,
        acc: Option<&mut InterpAccel>,
    ) -> Result<Real> {
        self.coeffs.eval_deriv2(xa, x, acc)
    }

    fn eval_integ(
        &self,
        xa: &[Real],
        _ya: &[Real],
        acc: Option<&mut InterpAccel>,
        a: Real,
        b: Real,
    ) -> Result<Real> {
        self.coeffs.eval_integ(xa, acc, a, b)
    }
}
