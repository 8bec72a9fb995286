//! Akima spline interpolation, with natural and periodic end treatment.
//!
//! Akima splines avoid the overshooting of cubic splines by taking the
//! tangent at each node as a weighted average of the neighbouring secant
//! slopes, the weights being the differences of the slopes further out.
//! Where those differences vanish the secant slope of the segment is used.
//!
//! The stencil reaches two slopes beyond each end of the table.  The natural
//! variant extends the slopes linearly; the periodic variant wraps around.

use sk_core::{errors::Result, Real};

use super::{check_table, try_zeros, InterpMethod, PiecewiseCubic};
use crate::accel::InterpAccel;

/// Secant slopes with two phantom entries on either side.
///
/// Entry `k + 2` is the slope of segment `k`, for `k` in `-2..=n`.
fn secant_slopes(xa: &[Real], ya: &[Real], periodic: bool) -> Result<Vec<Real>> {
    let n = xa.len();
    let mut m = try_zeros(n + 3, "m")?;
    for i in 0..n - 1 {
        m[i + 2] = (ya[i + 1] - ya[i]) / (xa[i + 1] - xa[i]);
    }
    // segment k lives at m[k + 2]
    if periodic {
        m[0] = m[n - 3 + 2];
        m[1] = m[n - 2 + 2];
        m[n + 1] = m[2];
        m[n + 2] = m[3];
    } else {
        m[0] = 3.0 * m[2] - 2.0 * m[3];
        m[1] = 2.0 * m[2] - m[3];
        m[n + 1] = 2.0 * m[n] - m[n - 1];
        m[n + 2] = 3.0 * m[n] - 2.0 * m[n - 1];
    }
    Ok(m)
}

/// Fill `coeffs` from the extended slopes.
fn akima_coefficients(coeffs: &mut PiecewiseCubic, xa: &[Real], ya: &[Real], m: &[Real]) {
    // m_at(k) is the slope of segment k, k >= -2
    let m_at = |k: isize| m[(k + 2) as usize];
    for i in 0..xa.len() - 1 {
        let k = i as isize;
        let ne = (m_at(k + 1) - m_at(k)).abs() + (m_at(k - 1) - m_at(k - 2)).abs();
        if ne == 0.0 {
            coeffs.set(i, 0.0, 0.0, m_at(k), ya[i]);
            continue;
        }
        let h = xa[i + 1] - xa[i];
        let ne_next = (m_at(k + 2) - m_at(k + 1)).abs() + (m_at(k) - m_at(k - 1)).abs();
        let alpha = (m_at(k - 1) - m_at(k - 2)).abs() / ne;
        let t_hi = if ne_next == 0.0 {
            m_at(k)
        } else {
            let alpha_next = (m_at(k) - m_at(k - 1)).abs() / ne_next;
            (1.0 - alpha_next) * m_at(k) + alpha_next * m_at(k + 1)
        };
        let t_lo = (1.0 - alpha) * m_at(k - 1) + alpha * m_at(k);
        coeffs.set_hermite(i, ya[i], h, m_at(k), t_lo, t_hi);
    }
}

macro_rules! akima_variant {
    ($name:ident, $label:literal, $periodic:literal, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            coeffs: PiecewiseCubic,
        }

        impl $name {
            /// Diagnostic name.
            pub const NAME: &'static str = $label;
            /// Smallest table the scheme accepts.
            pub const MIN_SIZE: usize = 5;

            /// Unfitted state for a table of `size` points.
            pub fn with_size(size: usize) -> Result<Self> {
                Ok(Self {
                    coeffs: PiecewiseCubic::with_segments(size.saturating_sub(1))?,
                })
            }
        }

        impl InterpMethod for $name {
            fn init(&mut self, xa: &[Real], ya: &[Real]) -> Result<()> {
                check_table(Self::NAME, Self::MIN_SIZE, xa, ya)?;
                self.coeffs.resize_for(xa.len())?;
                let m = secant_slopes(xa, ya, $periodic)?;
                akima_coefficients(&mut self.coeffs, xa, ya, &m);
                Ok(())
            }

            fn eval(
                &self,
                xa: &[Real],
                _ya: &[Real],
                x: Real,
                acc: Option<&mut InterpAccel>,
            ) -> Result<Real> {
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
    };
}

akima_variant!(Akima, "akima", false, "Akima spline state (linear slope extension at the ends).");
akima_variant!(
    AkimaPeriodic,
    "akima-periodic",
    true,
    "Akima spline state for periodic data (wrap-around slopes at the ends)."
);
