//! Interpolation type descriptors.
//!
//! [`InterpType`] names one interpolation algorithm.  It carries the
//! algorithm's diagnostic name and minimum table size and acts as the factory
//! for its fitting state; everything after construction dispatches through
//! the [`InterpMethod`] the descriptor allocated.

use std::fmt;
use std::str::FromStr;

use sk_core::{
    errors::{Error, Result},
    Size,
};

use crate::interpolations::{
    Akima, AkimaPeriodic, CSpline, CSplinePeriodic, InterpMethod, Linear, Polynomial, Steffen,
};

/// The available interpolation algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "&'static str"))]
pub enum InterpType {
    /// Piecewise linear.
    Linear,
    /// Single polynomial through every sample.
    Polynomial,
    /// Cubic spline with natural boundary conditions.
    CSpline,
    /// Cubic spline with periodic boundary conditions.
    CSplinePeriodic,
    /// Akima spline.
    Akima,
    /// Akima spline with periodic boundary conditions.
    AkimaPeriodic,
    /// Steffen's monotonicity-preserving cubic.
    Steffen,
}

impl InterpType {
    /// Every variant, in declaration order.
    pub const ALL: [InterpType; 7] = [
        InterpType::Linear,
        InterpType::Polynomial,
        InterpType::CSpline,
        InterpType::CSplinePeriodic,
        InterpType::Akima,
        InterpType::AkimaPeriodic,
        InterpType::Steffen,
    ];

    /// Diagnostic name.
    pub const fn name(self) -> &'static str {
        match self {
            InterpType::Linear => Linear::NAME,
            InterpType::Polynomial => Polynomial::NAME,
            InterpType::CSpline => CSpline::NAME,
            InterpType::CSplinePeriodic => CSplinePeriodic::NAME,
            InterpType::Akima => Akima::NAME,
            InterpType::AkimaPeriodic => AkimaPeriodic::NAME,
            InterpType::Steffen => Steffen::NAME,
        }
    }

    /// Smallest number of samples for which the algorithm is defined.
    pub const fn min_size(self) -> Size {
        match self {
            InterpType::Linear => Linear::MIN_SIZE,
            InterpType::Polynomial => Polynomial::MIN_SIZE,
            InterpType::CSpline => CSpline::MIN_SIZE,
            InterpType::CSplinePeriodic => CSplinePeriodic::MIN_SIZE,
            InterpType::Akima => Akima::MIN_SIZE,
            InterpType::AkimaPeriodic => AkimaPeriodic::MIN_SIZE,
            InterpType::Steffen => Steffen::MIN_SIZE,
        }
    }

    /// Unfitted state for a table of `size` points.
    ///
    /// # Errors
    /// [`Error::AllocationFailed`] if the coefficient storage cannot be
    /// obtained.
    pub fn allocate(self, size: Size) -> Result<Box<dyn InterpMethod>> {
        Ok(match self {
            InterpType::Linear => Box::new(Linear::with_size(size)?),
            InterpType::Polynomial => Box::new(Polynomial::with_size(size)?),
            InterpType::CSpline => Box::new(CSpline::with_size(size)?),
            InterpType::CSplinePeriodic => Box::new(CSplinePeriodic::with_size(size)?),
            InterpType::Akima => Box::new(Akima::with_size(size)?),
            InterpType::AkimaPeriodic => Box::new(AkimaPeriodic::with_size(size)?),
            InterpType::Steffen => Box::new(Steffen::with_size(size)?),
        })
    }
}

impl fmt::Display for InterpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InterpType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        InterpType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| Error::Precondition(format!("unknown interpolation type {s:?}")))
    }
}

impl TryFrom<String> for InterpType {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<InterpType> for &'static str {
    fn from(t: InterpType) -> Self {
        t.name()
    }
}
