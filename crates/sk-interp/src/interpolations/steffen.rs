//! Steffen monotonic cubic interpolation.
//!
//! M. Steffen, "A simple method for monotonic interpolation in one
//! dimension", Astron. Astrophys. 239, 443-450 (1990).
//!
//! The node derivatives are limited so that the interpolant is monotonic on
//! every segment where the data is: extrema can only occur at the samples.
//! Value and first derivative are continuous, the second derivative is not.
//!
//! Boundary derivatives use the "simplest possibility" of the paper: the
//! slope of the adjacent segment.

use sk_core::{errors::Result, Real};

use super::{check_table, try_zeros, InterpMethod, PiecewiseCubic};
use crate::accel::InterpAccel;

/// Steffen interpolation state.
#[derive(Debug, Clone, Default)]
pub struct Steffen {
    coeffs: PiecewiseCubic,
}

impl Steffen {
    /// Diagnostic name.
    pub const NAME: &'static str = "steffen";
    /// Smallest table the scheme accepts.
    pub const MIN_SIZE: usize = 3;

    /// Unfitted state for a table of `size` points.
    pub fn with_size(size: usize) -> Result<Self> {
        Ok(Self {
            coeffs: PiecewiseCubic::with_segments(size.saturating_sub(1))?,
        })
    }

    /// Fitted segment coefficients.
    pub fn coefficients(&self) -> &PiecewiseCubic {
        &self.coeffs
    }
}

/// Steffen's limited derivative at an interior node.
///
/// `s_lo`, `s_hi` are the slopes of the segments left and right of the node,
/// `h_lo`, `h_hi` their widths.  Zero whenever the slopes differ in sign.
#[inline]
fn node_slope(s_lo: Real, s_hi: Real, h_lo: Real, h_hi: Real) -> Real {
    // slope at the node of the parabola through the three samples
    let p = (s_lo * h_hi + s_hi * h_lo) / (h_lo + h_hi);
    (1.0_f64.copysign(s_lo) + 1.0_f64.copysign(s_hi))
        * s_lo.abs().min(s_hi.abs()).min(0.5 * p.abs())
}

impl InterpMethod for Steffen {
    fn init(&mut self, xa: &[Real], ya: &[Real]) -> Result<()> {
        check_table(Self::NAME, Self::MIN_SIZE, xa, ya)?;
        let n = xa.len();
        self.coeffs.resize_for(n)?;

        let mut h = try_zeros(n - 1, "h")?;
        let mut s = try_zeros(n - 1, "s")?;
        for i in 0..n - 1 {
            h[i] = xa[i + 1] - xa[i];
            s[i] = (ya[i + 1] - ya[i]) / h[i];
        }

        let mut y_prime = try_zeros(n, "y'")?;
        y_prime[0] = s[0];
        for i in 1..n - 1 {
            y_prime[i] = node_slope(s[i - 1], s[i], h[i - 1], h[i]);
        }
        y_prime[n - 1] = s[n - 2];

        for i in 0..n - 1 {
            self.coeffs
                .set_hermite(i, ya[i], h[i], s[i], y_prime[i], y_prime[i + 1]);
        }
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
