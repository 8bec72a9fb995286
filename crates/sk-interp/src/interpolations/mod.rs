//! 1D interpolation schemes and the contract they share.
//!
//! Every algorithm variant implements [`InterpMethod`]: it is created empty
//! for a given table size by [`InterpType::allocate`](crate::InterpType::allocate),
//! fitted once by [`InterpMethod::init`] and then queried any number of times.
//! The table itself is not stored by the method; it is passed to every call
//! and must be the one the method was fitted on.
//!
//! The spline-family variants (cubic splines, Akima, Steffen and, trivially,
//! linear) reduce their table to per-segment cubic coefficients held in a
//! [`PiecewiseCubic`] which performs the evaluation.

pub mod akima;
pub mod cubic;
pub mod linear;
pub mod piecewise;
pub mod polynomial;
pub mod steffen;
pub mod tridiagonal;

use std::fmt;

use sk_core::{
    errors::{Error, Result},
    Real,
};
use tracing::debug;

use crate::accel::InterpAccel;
use crate::search::find_interval;

pub use akima::{Akima, AkimaPeriodic};
pub use cubic::{CSpline, CSplinePeriodic};
pub use linear::Linear;
pub use piecewise::PiecewiseCubic;
pub use polynomial::Polynomial;
pub use steffen::Steffen;

/// Operations shared by every interpolation algorithm.
///
/// `xa` / `ya` are always the table the state was fitted on.  Query points
/// are not range-checked here; [`Interpolation`](crate::Interpolation) and
/// [`Spline`](crate::Spline) reject points outside the table before
/// dispatching.
pub trait InterpMethod: fmt::Debug + Send + Sync {
    /// Fit the state to the table.
    ///
    /// # Errors
    /// Fails if the table is too small for the algorithm, if `xa` and `ya`
    /// differ in length or if `xa` is not strictly increasing.
    fn init(&mut self, xa: &[Real], ya: &[Real]) -> Result<()>;

    /// Interpolated value at `x`.
    ///
    /// # Errors
    /// [`Error::Precondition`] if `xa` is not the table the state was fitted
    /// on (its length differs from the fitted size).
    fn eval(&self, xa: &[Real], ya: &[Real], x: Real, acc: Option<&mut InterpAccel>)
        -> Result<Real>;

    /// First derivative at `x`.
    ///
    /// # Errors
    /// [`Error::Precondition`] if `xa` is not the table the state was fitted
    /// on (its length differs from the fitted size).
    fn eval_deriv(
        &self,
        xa: &[Real],
        ya: &[Real],
        x: Real,
        acc: Option<&mut InterpAccel>,
    ) -> Result<Real>;

    /// Second derivative at `x`.
    ///
    /// # Errors
    /// [`Error::Precondition`] if `xa` is not the table the state was fitted
    /// on (its length differs from the fitted size).
    fn eval_deriv2(
        &self,
        xa: &[Real],
        ya: &[Real],
        x: Real,
        acc: Option<&mut InterpAccel>,
    ) -> Result<Real>;

    /// Definite integral over `[a, b]`, `a <= b`.
    ///
    /// # Errors
    /// - [`Error::Precondition`] if `xa` is not the table the state was
    ///   fitted on.
    /// - [`Error::InvalidBounds`] if `a > b`.
    /// - [`Error::ZeroWidthSegment`] if a segment of zero width lies in the
    ///   range.
    fn eval_integ(
        &self,
        xa: &[Real],
        ya: &[Real],
        acc: Option<&mut InterpAccel>,
        a: Real,
        b: Real,
    ) -> Result<Real>;
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Validate a table before fitting.
pub(crate) fn check_table(name: &'static str, min: usize, xa: &[Real], ya: &[Real]) -> Result<()> {
    if xa.len() != ya.len() {
        return Err(Error::LengthMismatch {
            x_len: xa.len(),
            y_len: ya.len(),
        });
    }
    if xa.len() < min {
        debug!(name, size = xa.len(), min, "table too small");
        return Err(Error::InsufficientPoints {
            name,
            got: xa.len(),
            min,
        });
    }
    // `!(a < b)` also rejects NaN samples
    if let Some(index) = xa.windows(2).position(|w| !(w[0] < w[1])) {
        debug!(name, index, "x not strictly increasing");
        return Err(Error::NotStrictlyIncreasing { index });
    }
    Ok(())
}

/// Segment index of `x`, through the accelerator when one is supplied.
#[inline]
pub(crate) fn locate(xa: &[Real], x: Real, acc: Option<&mut InterpAccel>) -> usize {
    match acc {
        Some(acc) => acc.find(xa, x),
        None => find_interval(xa, x),
    }
}

/// Zero-filled vector, reporting allocation failure instead of aborting.
pub(crate) fn try_zeros(len: usize, what: &'static str) -> Result<Vec<Real>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed { what, len })?;
    v.resize(len, 0.0);
    Ok(v)
}
