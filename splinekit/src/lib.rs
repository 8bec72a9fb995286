//! # splinekit
//!
//! One-dimensional interpolation of tabulated data.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `sk-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! splinekit = "0.1"
//! ```
//!
//! ```rust
//! use splinekit::interp::{InterpAccel, InterpType, Interpolation};
//!
//! let x = [0.0, 1.0, 2.0, 3.0];
//! let y = [0.0, 1.0, 4.0, 9.0];
//! let spline = Interpolation::new(InterpType::CSpline, &x, &y)?;
//! let mut acc = InterpAccel::new();
//!
//! assert_eq!(spline.eval(2.0, Some(&mut acc))?, 4.0);
//! assert!(spline.eval(3.5, Some(&mut acc)).is_err());
//! # Ok::<(), splinekit::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use sk_core as core;

/// Interpolation types, accelerator, and interpolants.
pub use sk_interp as interp;
