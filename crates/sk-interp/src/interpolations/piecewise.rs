//! Piecewise cubic polynomials.
//!
//! Segment `i` covers `[x_i, x_{i+1}]` and carries the cubic
//!
//!   `p_i(δ) = d_i + δ(c_i + δ(b_i + δ a_i))`,  `δ = x - x_i`.
//!
//! The fitting routines of the spline-family variants only produce the four
//! coefficient arrays; value, derivatives and definite integrals are all
//! evaluated here.

use sk_core::{
    ensure,
    errors::{Error, Result},
    Real,
};

use super::{locate, try_zeros};
use crate::accel::InterpAccel;

/// Per-segment cubic coefficients.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PiecewiseCubic {
    a: Vec<Real>,
    b: Vec<Real>,
    c: Vec<Real>,
    d: Vec<Real>,
}

impl PiecewiseCubic {
    /// Zeroed coefficients for `segments` segments.
    ///
    /// # Errors
    /// [`Error::AllocationFailed`] if storage cannot be obtained; arrays
    /// already allocated are released before returning.
    pub fn with_segments(segments: usize) -> Result<Self> {
        Ok(Self {
            a: try_zeros(segments, "a")?,
            b: try_zeros(segments, "b")?,
            c: try_zeros(segments, "c")?,
            d: try_zeros(segments, "d")?,
        })
    }

    /// Number of segments.
    pub fn segments(&self) -> usize {
        self.d.len()
    }

    /// Coefficients `(a, b, c, d)` of segment `i`.
    ///
    /// # Panics
    /// If `i >= self.segments()`.
    pub fn coefficients(&self, i: usize) -> (Real, Real, Real, Real) {
        (self.a[i], self.b[i], self.c[i], self.d[i])
    }

    /// Resize for a table of `n` samples, reusing the current storage.
    pub(crate) fn resize_for(&mut self, n: usize) -> Result<()> {
        let segments = n.saturating_sub(1);
        if segments != self.segments() {
            *self = Self::with_segments(segments)?;
        }
        Ok(())
    }

    /// Store the coefficients of segment `i`.
    #[inline]
    pub(crate) fn set(&mut self, i: usize, a: Real, b: Real, c: Real, d: Real) {
        self.a[i] = a;
        self.b[i] = b;
        self.c[i] = c;
        self.d[i] = d;
    }

    /// Store segment `i` as the cubic Hermite interpolant between
    /// `(x_i, y_i)` and `(x_{i+1}, y_{i+1})` with end slopes `t_lo`, `t_hi`.
    ///
    /// `h` is the segment width and `s` its secant slope.
    #[inline]
    pub(crate) fn set_hermite(&mut self, i: usize, y: Real, h: Real, s: Real, t_lo: Real, t_hi: Real) {
        self.set(
            i,
            (t_lo + t_hi - 2.0 * s) / (h * h),
            (3.0 * s - 2.0 * t_lo - t_hi) / h,
            t_lo,
            y,
        );
    }

    fn check_table(&self, xa: &[Real]) -> Result<()> {
        ensure!(
            xa.len() == self.segments() + 1 && xa.len() >= 2,
            "table of {} points does not match {} fitted segments",
            xa.len(),
            self.segments()
        );
        Ok(())
    }

    // ── Segment-local evaluation ─────────────────────────────────────────────

    /// `p_i(δ)`.
    #[inline]
    pub fn value_at(&self, i: usize, delta: Real) -> Real {
        self.d[i] + delta * (self.c[i] + delta * (self.b[i] + delta * self.a[i]))
    }

    /// `p_i'(δ)`.
    #[inline]
    pub fn deriv_at(&self, i: usize, delta: Real) -> Real {
        self.c[i] + delta * (2.0 * self.b[i] + 3.0 * delta * self.a[i])
    }

    /// `p_i''(δ)`.
    #[inline]
    pub fn deriv2_at(&self, i: usize, delta: Real) -> Real {
        2.0 * self.b[i] + 6.0 * delta * self.a[i]
    }

    /// `∫ p_i(t) dt` over the segment-local interval `[t1, t2]`.
    #[inline]
    pub fn integ_at(&self, i: usize, t1: Real, t2: Real) -> Real {
        let (a, b, c, d) = self.coefficients(i);
        let t1_2 = t1 * t1;
        let t2_2 = t2 * t2;
        0.25 * a * (t2_2 * t2_2 - t1_2 * t1_2)
            + b / 3.0 * (t2_2 * t2 - t1_2 * t1)
            + 0.5 * c * (t2_2 - t1_2)
            + d * (t2 - t1)
    }

    // ── Table-level evaluation ────────────────────────────────────────────────

    /// Value at `x`.
    pub fn eval(&self, xa: &[Real], x: Real, acc: Option<&mut InterpAccel>) -> Result<Real> {
        self.check_table(xa)?;
        let i = locate(xa, x, acc);
        Ok(self.value_at(i, x - xa[i]))
    }

    /// First derivative at `x`.
    pub fn eval_deriv(&self, xa: &[Real], x: Real, acc: Option<&mut InterpAccel>) -> Result<Real> {
        self.check_table(xa)?;
        let i = locate(xa, x, acc);
        Ok(self.deriv_at(i, x - xa[i]))
    }

    /// Second derivative at `x`.
    pub fn eval_deriv2(&self, xa: &[Real], x: Real, acc: Option<&mut InterpAccel>) -> Result<Real> {
        self.check_table(xa)?;
        let i = locate(xa, x, acc);
        Ok(self.deriv2_at(i, x - xa[i]))
    }

    /// Definite integral over `[a, b]`.
    ///
    /// The first and last segments touched contribute only the part inside
    /// `[a, b]`; segments in between contribute in full.
    ///
    /// # Errors
    /// [`Error::InvalidBounds`] if `a > b`, [`Error::ZeroWidthSegment`] if a
    /// segment of zero width lies in the range.  No partial sum is returned.
    pub fn eval_integ(
        &self,
        xa: &[Real],
        mut acc: Option<&mut InterpAccel>,
        a: Real,
        b: Real,
    ) -> Result<Real> {
        self.check_table(xa)?;
        if a > b {
            return Err(Error::InvalidBounds { a, b });
        }
        let index_a = locate(xa, a, acc.as_deref_mut());
        let index_b = locate(xa, b, acc);

        let mut result = 0.0;
        for i in index_a..=index_b {
            let x_lo = xa[i];
            let x_hi = xa[i + 1];
            if x_hi == x_lo {
                return Err(Error::ZeroWidthSegment { index: i });
            }
            let x1 = if i == index_a { a } else { x_lo };
            let x2 = if i == index_b { b } else { x_hi };
            result += self.integ_at(i, x1 - x_lo, x2 - x_lo);
        }
        Ok(result)
    }
}
