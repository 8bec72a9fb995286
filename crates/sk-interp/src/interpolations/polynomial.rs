//! Polynomial interpolation through all samples.
//!
//! The interpolating polynomial is kept in Newton form (divided differences).
//! Derivatives and integrals come from its Taylor expansion about the point
//! of interest.  High degrees oscillate badly between samples; this scheme
//! is only sensible for small tables.

use sk_core::{
    ensure,
    errors::{Error, Result},
    Real,
};

use super::{check_table, try_zeros, InterpMethod};
use crate::accel::InterpAccel;

/// Polynomial interpolation state.
#[derive(Debug, Clone, Default)]
pub struct Polynomial {
    /// Newton divided differences `f[x_0, …, x_k]`.
    dd: Vec<Real>,
}

impl Polynomial {
    /// Diagnostic name.
    pub const NAME: &'static str = "polynomial";
    /// Smallest table the scheme accepts.
    pub const MIN_SIZE: usize = 3;

    /// Unfitted state for a table of `size` points.
    pub fn with_size(size: usize) -> Result<Self> {
        Ok(Self {
            dd: try_zeros(size, "dd")?,
        })
    }

    fn check_table(&self, xa: &[Real]) -> Result<()> {
        ensure!(
            xa.len() == self.dd.len() && xa.len() >= 2,
            "table of {} points does not match {} fitted coefficients",
            xa.len(),
            self.dd.len()
        );
        Ok(())
    }

    /// Newton-form value at `x`.
    fn value(&self, xa: &[Real], x: Real) -> Real {
        let n = self.dd.len();
        let mut y = self.dd[n - 1];
        for k in (0..n - 1).rev() {
            y = self.dd[k] + (x - xa[k]) * y;
        }
        y
    }

    /// Taylor coefficients `t_k = p⁽ᵏ⁾(xp) / k!`.
    ///
    /// Expands the nested Newton form one factor `(x - x_k) = t + (xp - x_k)`
    /// at a time, innermost first.
    fn taylor(&self, xa: &[Real], xp: Real) -> Result<Vec<Real>> {
        let n = self.dd.len();
        let mut t = try_zeros(n, "taylor")?;
        t[0] = self.dd[n - 1];
        for (degree, k) in (0..n - 1).rev().enumerate() {
            let shift = xp - xa[k];
            for j in (1..=degree + 1).rev() {
                t[j] = t[j - 1] + shift * t[j];
            }
            t[0] = self.dd[k] + shift * t[0];
        }
        Ok(t)
    }
}

impl InterpMethod for Polynomial {
    fn init(&mut self, xa: &[Real], ya: &[Real]) -> Result<()> {
        check_table(Self::NAME, Self::MIN_SIZE, xa, ya)?;
        let n = xa.len();
        if self.dd.len() != n {
            self.dd = try_zeros(n, "dd")?;
        }
        self.dd.copy_from_slice(ya);
        for order in 1..n {
            for j in (order..n).rev() {
                self.dd[j] = (self.dd[j] - self.dd[j - 1]) / (xa[j] - xa[j - order]);
            }
        }
        Ok(())
    }

    fn eval(&self, xa: &[Real], _ya: &[Real], x: Real, _acc: Option<&mut InterpAccel>) -> Result<Real> {
        self.check_table(xa)?;
        Ok(self.value(xa, x))
    }

    fn eval_deriv(
        &self,
        xa: &[Real],
        _ya: &[Real],
        x: Real,
        _acc: Option<&mut InterpAccel>,
    ) -> Result<Real> {
        self.check_table(xa)?;
        Ok(self.taylor(xa, x)?[1])
    }

    fn eval_deriv2(
        &self,
        xa: &[Real],
        _ya: &[Real],
        x: Real,
        _acc: Option<&mut InterpAccel>,
    ) -> Result<Real> {
        self.check_table(xa)?;
        Ok(2.0 * self.taylor(xa, x)?[2])
    }

    fn eval_integ(
        &self,
        xa: &[Real],
        _ya: &[Real],
        _acc: Option<&mut InterpAccel>,
        a: Real,
        b: Real,
    ) -> Result<Real> {
        self.check_table(xa)?;
        if a > b {
            return Err(Error::InvalidBounds { a, b });
        }
        let t = self.taylor(xa, a)?;
        let width = b - a;
        let mut power = width;
        let mut result = 0.0;
        for (k, tk) in t.iter().enumerate() {
            result += tk * power / (k + 1) as Real;
            power *= width;
        }
        Ok(result)
    }
}
