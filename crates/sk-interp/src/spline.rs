//! Interpolant owning a copy of its table.
//!
//! [`Spline`] is the self-contained counterpart of
//! [`Interpolation`](crate::Interpolation): it copies the samples on
//! construction, so it carries no lifetime and can be stored or sent to other
//! threads freely.  The query surface and error behaviour are the same.

use sk_core::{errors::Result, Real, Size};
use tracing::debug;

use crate::accel::InterpAccel;
use crate::interp_type::InterpType;
use crate::interpolation::{check_domain, integ_bounds};
use crate::interpolations::{try_zeros, InterpMethod};

/// A fitted interpolant over its own copy of the table.
#[derive(Debug)]
pub struct Spline {
    kind: InterpType,
    x: Vec<Real>,
    y: Vec<Real>,
    state: Box<dyn InterpMethod>,
}

impl Spline {
    /// Copy `(xa, ya)` and fit `kind` to it.
    ///
    /// # Errors
    /// As [`Interpolation::new`](crate::Interpolation::new).
    pub fn new(kind: InterpType, xa: &[Real], ya: &[Real]) -> Result<Self> {
        let mut state = kind.allocate(xa.len())?;
        state.init(xa, ya)?;

        let mut x = try_zeros(xa.len(), "x")?;
        x.copy_from_slice(xa);
        let mut y = try_zeros(ya.len(), "y")?;
        y.copy_from_slice(ya);
        debug!(name = kind.name(), size = x.len(), "spline initialised");
        Ok(Self { kind, x, y, state })
    }

    /// Replace the table, keeping the algorithm.
    ///
    /// On error the spline keeps its previous table and fit.
    pub fn refit(&mut self, xa: &[Real], ya: &[Real]) -> Result<()> {
        *self = Self::new(self.kind, xa, ya)?;
        Ok(())
    }

    /// The algorithm in use.
    pub fn kind(&self) -> InterpType {
        self.kind
    }

    /// Diagnostic name of the algorithm.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Minimum table size of the algorithm.
    pub fn min_size(&self) -> Size {
        self.kind.min_size()
    }

    /// The sample abscissae.
    pub fn x(&self) -> &[Real] {
        &self.x
    }

    /// The sample values.
    pub fn y(&self) -> &[Real] {
        &self.y
    }

    /// Lower bound of the interpolation range.
    pub fn x_min(&self) -> Real {
        self.x[0]
    }

    /// Upper bound of the interpolation range.
    pub fn x_max(&self) -> Real {
        self.x[self.x.len() - 1]
    }

    /// Interpolated value at `x`.
    pub fn eval(&self, x: Real, acc: Option<&mut InterpAccel>) -> Result<Real> {
        check_domain(&self.x, x)?;
        self.state.eval(&self.x, &self.y, x, acc)
    }

    /// First derivative at `x`.
    pub fn eval_deriv(&self, x: Real, acc: Option<&mut InterpAccel>) -> Result<Real> {
        check_domain(&self.x, x)?;
        self.state.eval_deriv(&self.x, &self.y, x, acc)
    }

    /// Second derivative at `x`.
    pub fn eval_deriv2(&self, x: Real, acc: Option<&mut InterpAccel>) -> Result<Real> {
        check_domain(&self.x, x)?;
        self.state.eval_deriv2(&self.x, &self.y, x, acc)
    }

    /// Definite integral over `[a, b]`, `a <= b`.
    pub fn eval_integ(&self, a: Real, b: Real, acc: Option<&mut InterpAccel>) -> Result<Real> {
        integ_bounds(&self.x, a, b)?;
        if a == b {
            return Ok(0.0);
        }
        self.state.eval_integ(&self.x, &self.y, acc, a, b)
    }
}
