//! Blinc Spring Curves
//!
//! Closed-form damped harmonic oscillator for animation interpolation.
//!
//! # Features
//!
//! - **Analytic**: position is computed directly for any time, no integration
//! - **Regime-aware**: underdamped, critical and overdamped springs each use
//!   their own solution, chosen once at build time
//! - **Pure**: a built [`SpringCurve`] is `Copy` and gives the same value for
//!   the same time on every call
//!
//! # Example
//!
//! ```rust
//! use blinc_spring::{SpringConfig, SpringSolver};
//!
//! let curve = SpringSolver::build(SpringConfig::wobbly().with_to(100.0));
//!
//! // Time is in milliseconds
//! assert!(curve.evaluate(0.0).abs() < 1e-9);
//! assert!((curve.evaluate(5000.0) - 100.0).abs() < 1e-3);
//! ```
//!
//! # Known deviation
//!
//! The critically damped solution ignores the initial velocity and the start
//! position: it evaluates `to - e^(-ωt)·(1 + ωt)`. Existing curves depend on
//! this, so it is kept.

pub mod config;
pub mod error;
pub mod regime;
pub mod solver;

pub use config::SpringConfig;
pub use error::{Result, SpringError};
pub use regime::DampingRegime;
pub use solver::{spring, SpringCurve, SpringSolver};
