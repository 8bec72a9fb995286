//! The per-table interpolant.
//!
//! [`Interpolation`] binds one [`InterpType`] to one borrowed table.  The
//! table is validated and fitted on construction; afterwards the interpolant
//! is immutable and every query goes through the same fitted
//! [`InterpMethod`].  Queries outside `[x_min, x_max]` are rejected rather
//! than extrapolated.
//!
//! Because the table is borrowed for the lifetime of the interpolant it
//! cannot be modified while the interpolant is alive.

use std::fmt;

use sk_core::{
    errors::{Error, Result},
    Real, Size,
};
use tracing::debug;

use crate::accel::InterpAccel;
use crate::interp_type::InterpType;
use crate::interpolations::InterpMethod;

/// A fitted interpolant over a borrowed table.
pub struct Interpolation<'a> {
    kind: InterpType,
    xa: &'a [Real],
    ya: &'a [Real],
    state: Box<dyn InterpMethod>,
}

impl<'a> Interpolation<'a> {
    /// Fit `kind` to the table `(xa, ya)`.
    ///
    /// # Errors
    /// - [`Error::LengthMismatch`] if `xa` and `ya` differ in length.
    /// - [`Error::InsufficientPoints`] if the table is smaller than
    ///   `kind.min_size()`.
    /// - [`Error::NotStrictlyIncreasing`] if `xa` is not strictly increasing.
    /// - [`Error::AllocationFailed`] if the fitted state cannot be stored.
    pub fn new(kind: InterpType, xa: &'a [Real], ya: &'a [Real]) -> Result<Self> {
        let mut state = kind.allocate(xa.len())?;
        state.init(xa, ya)?;
        debug!(name = kind.name(), size = xa.len(), "interpolation initialised");
        Ok(Self { kind, xa, ya, state })
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

    /// Number of samples.
    pub fn len(&self) -> Size {
        self.xa.len()
    }

    /// Always `false`: a fitted table holds at least two samples.
    pub fn is_empty(&self) -> bool {
        self.xa.is_empty()
    }

    /// Lower bound of the interpolation range.
    pub fn x_min(&self) -> Real {
        self.xa[0]
    }

    /// Upper bound of the interpolation range.
    pub fn x_max(&self) -> Real {
        self.xa[self.xa.len() - 1]
    }

    /// The sample abscissae.
    pub fn x(&self) -> &'a [Real] {
        self.xa
    }

    /// The sample values.
    pub fn y(&self) -> &'a [Real] {
        self.ya
    }

    /// Interpolated value at `x`.
    ///
    /// # Errors
    /// [`Error::OutOfDomain`] if `x` is outside `[x_min, x_max]` or NaN.
    pub fn eval(&self, x: Real, acc: Option<&mut InterpAccel>) -> Result<Real> {
        check_domain(self.xa, x)?;
        self.state.eval(self.xa, self.ya, x, acc)
    }

    /// First derivative at `x`.
    ///
    /// # Errors
    /// [`Error::OutOfDomain`] if `x` is outside `[x_min, x_max]` or NaN.
    pub fn eval_deriv(&self, x: Real, acc: Option<&mut InterpAccel>) -> Result<Real> {
        check_domain(self.xa, x)?;
        self.state.eval_deriv(self.xa, self.ya, x, acc)
    }

    /// Second derivative at `x`.
    ///
    /// # Errors
    /// [`Error::OutOfDomain`] if `x` is outside `[x_min, x_max]` or NaN.
    pub fn eval_deriv2(&self, x: Real, acc: Option<&mut InterpAccel>) -> Result<Real> {
        check_domain(self.xa, x)?;
        self.state.eval_deriv2(self.xa, self.ya, x, acc)
    }

    /// Definite integral over `[a, b]`.
    ///
    /// # Errors
    /// - [`Error::InvalidBounds`] if `a > b`; the bounds are never swapped.
    /// - [`Error::OutOfDomain`] if either bound is outside the table.
    pub fn eval_integ(&self, a: Real, b: Real, acc: Option<&mut InterpAccel>) -> Result<Real> {
        integ_bounds(self.xa, a, b)?;
        if a == b {
            return Ok(0.0);
        }
        self.state.eval_integ(self.xa, self.ya, acc, a, b)
    }
}

impl fmt::Debug for Interpolation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpolation")
            .field("kind", &self.kind)
            .field("len", &self.xa.len())
            .field("state", &self.state)
            .finish()
    }
}

// ── Range checks shared with `Spline` ────────────────────────────────────────

/// Reject `x` outside the table (and NaN).
pub(crate) fn check_domain(xa: &[Real], x: Real) -> Result<()> {
    let x_min = xa[0];
    let x_max = xa[xa.len() - 1];
    if x >= x_min && x <= x_max {
        Ok(())
    } else {
        Err(Error::OutOfDomain { x, x_min, x_max })
    }
}

/// Validate integration bounds against the table.
pub(crate) fn integ_bounds(xa: &[Real], a: Real, b: Real) -> Result<()> {
    if a > b {
        return Err(Error::InvalidBounds { a, b });
    }
    check_domain(xa, a)?;
    check_domain(xa, b)
}
