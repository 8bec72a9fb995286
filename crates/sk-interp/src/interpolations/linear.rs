//! Linear interpolation.
//!
//! `f(x) = y[i] + (y[i+1] - y[i]) * (x - x[i]) / (x[i+1] - x[i])`, stored as a
//! piecewise cubic whose quadratic and cubic coefficients vanish.

use sk_core::{errors::Result, Real};

use super::{check_table, InterpMethod, PiecewiseCubic};
use crate::accel::InterpAccel;

/// Linear interpolation state.
#[derive(Debug, Clone, Default)]
pub struct Linear {
    coeffs: PiecewiseCubic,
}

impl Linear {
    /// Diagnostic name.
    pub const NAME: &'static str = "linear";
    /// Smallest table the scheme accepts.
    pub const MIN_SIZE: usize = 2;

    /// Unfitted state for a table of `size` points.
    pub fn with_size(size: usize) -> Result<Self> {
        Ok(Self {
            coeffs: PiecewiseCubic::with_segments(size.saturating_sub(1))?,
        })
    }
}

impl InterpMethod for Linear {
    fn init(&mut self, xa: &[Real], ya: &[Real]) -> Result<()> {
        check_table(Self::NAME, Self::MIN_SIZE, xa, ya)?;
        self.coeffs.resize_for(xa.len())?;
        for i in 0..xa.len() - 1 {
            let slope = (ya[i + 1] - ya[i]) / (xa[i + 1] - xa[i]);
            self.coeffs.set(i, 0.0, 0.0, slope, ya[i]);
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
