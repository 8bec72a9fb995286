//! Error types for splinekit.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below.  Variants carry
//! the violated precondition together with the offending index or value so
//! that diagnostics can point at the bad sample directly.
//!
//! [`Error::kind`] groups the variants into the coarse classes callers usually
//! branch on: resource exhaustion, domain violations and argument violations.

use thiserror::Error;

/// The top-level error type used throughout splinekit.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// The abscissa and ordinate tables differ in length.
    #[error("x and y must have the same length (x has {x_len}, y has {y_len})")]
    LengthMismatch {
        /// Length of the abscissa table.
        x_len: usize,
        /// Length of the ordinate table.
        y_len: usize,
    },

    /// The table is smaller than the interpolation type allows.
    #[error("insufficient number of points for interpolation type {name}: got {got}, need at least {min}")]
    InsufficientPoints {
        /// Name of the interpolation type.
        name: &'static str,
        /// Number of points supplied.
        got: usize,
        /// Minimum number of points required.
        min: usize,
    },

    /// `x[index] >= x[index + 1]`.
    #[error("x values must be strictly increasing (x[{index}] >= x[{}])", .index + 1)]
    NotStrictlyIncreasing {
        /// Index of the first sample that is not below its successor.
        index: usize,
    },

    /// A segment of zero width was met while evaluating.
    #[error("segment {index} has zero width")]
    ZeroWidthSegment {
        /// Index of the degenerate segment.
        index: usize,
    },

    /// A query point lies outside the interpolation range.
    #[error("x = {x} is outside the interpolation range [{x_min}, {x_max}]")]
    OutOfDomain {
        /// The offending query point.
        x: f64,
        /// Lower bound of the range.
        x_min: f64,
        /// Upper bound of the range.
        x_max: f64,
    },

    /// Integration bounds given in the wrong order.
    #[error("integration bounds must satisfy a <= b (a = {a}, b = {b})")]
    InvalidBounds {
        /// Lower bound.
        a: f64,
        /// Upper bound.
        b: f64,
    },

    /// A linear system had a zero pivot.
    #[error("singular system: zero pivot at row {index}")]
    Singular {
        /// Row of the zero pivot.
        index: usize,
    },

    /// Storage could not be obtained.
    #[error("failed to allocate space for {what} ({len} elements)")]
    AllocationFailed {
        /// What was being allocated.
        what: &'static str,
        /// Number of elements requested.
        len: usize,
    },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Storage could not be obtained.
    ResourceExhaustion,
    /// The data or the query violates a mathematical precondition.
    Domain,
    /// The caller passed a malformed argument.
    Argument,
    /// Anything else.
    Internal,
}

impl Error {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::AllocationFailed { .. } => ErrorKind::ResourceExhaustion,
            Error::InsufficientPoints { .. }
            | Error::NotStrictlyIncreasing { .. }
            | Error::ZeroWidthSegment { .. }
            | Error::OutOfDomain { .. }
            | Error::Singular { .. } => ErrorKind::Domain,
            Error::LengthMismatch { .. } | Error::InvalidBounds { .. } | Error::Precondition(_) => {
                ErrorKind::Argument
            }
            Error::Runtime(_) => ErrorKind::Internal,
        }
    }
}

/// Shorthand `Result` type used throughout splinekit.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use sk_core::{ensure, errors::Error};
/// fn positive(x: f64) -> sk_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use sk_core::{fail, errors::Error};
/// fn always_err() -> sk_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
