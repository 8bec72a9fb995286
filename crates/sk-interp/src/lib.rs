//! # sk-interp
//!
//! One-dimensional interpolation of tabulated data.
//!
//! A table of strictly increasing `x` samples and matching `y` values is
//! fitted once by one of the algorithm variants listed in [`InterpType`]
//! (linear, polynomial, natural / periodic cubic spline, Akima, periodic
//! Akima, Steffen) and can then be evaluated, differentiated and integrated
//! at arbitrary points inside the sampled range.
//!
//! Repeated lookups of the interval containing a query point are amortised by
//! an [`InterpAccel`], a small cache owned by the caller and passed into each
//! query.
//!
//! ```
//! use sk_interp::{InterpAccel, InterpType, Interpolation};
//!
//! let x = [0.0, 1.0, 2.0, 3.0, 4.0];
//! let y = [0.0, 1.0, 2.0, 3.0, 4.0];
//! let interp = Interpolation::new(InterpType::Steffen, &x, &y).unwrap();
//! let mut acc = InterpAccel::new();
//!
//! assert!((interp.eval(2.5, Some(&mut acc)).unwrap() - 2.5).abs() < 1e-12);
//! assert!((interp.eval_integ(0.0, 2.0, Some(&mut acc)).unwrap() - 2.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Lookup accelerator for repeated interval searches.
pub mod accel;

/// Interpolation type descriptors.
pub mod interp_type;

/// The borrowing per-table interpolant.
pub mod interpolation;

/// 1D interpolation schemes and the contract they share.
pub mod interpolations;

/// Bounded binary search over a sorted table.
pub mod search;

/// Interpolant owning a copy of its table.
pub mod spline;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use accel::InterpAccel;
pub use interp_type::InterpType;
pub use interpolation::Interpolation;
pub use interpolations::{InterpMethod, PiecewiseCubic};
pub use search::{bsearch, find_interval};
pub use spline::Spline;
