//! Closed-form spring solver
//!
//! Builds a [`SpringCurve`] from a [`SpringConfig`]. The curve evaluates the
//! analytic solution of the damped oscillator at any time, so an animation
//! driver can sample it frame by frame without integrating.
//!
//! Time is in milliseconds. Velocity is configured per second and rescaled
//! internally, as is the angular frequency.

use crate::config::SpringConfig;
use crate::error::Result;
use crate::regime::DampingRegime;

/// Builds spring curves
pub struct SpringSolver;

impl SpringSolver {
    /// Build a curve for `config`.
    ///
    /// No validation happens here. A degenerate config (e.g. stiffness ≤ 0 or
    /// mass = 0) builds fine and yields NaN or infinite samples.
    pub fn build(config: SpringConfig) -> SpringCurve {
        let initial_velocity = if config.velocity == 0.0 {
            0.0
        } else {
            -(config.velocity / 1000.0)
        };
        let damping_ratio = config.damping_ratio();
        let angular_freq = config.angular_freq();
        let regime = DampingRegime::classify(damping_ratio, angular_freq);

        tracing::trace!(
            regime = regime.name(),
            damping_ratio,
            angular_freq,
            "built spring curve"
        );

        SpringCurve {
            to: config.to,
            initial_delta: config.to - config.from,
            initial_velocity,
            damping_ratio,
            angular_freq,
            regime,
        }
    }

    /// Validate `config`, then build its curve
    pub fn try_build(config: SpringConfig) -> Result<SpringCurve> {
        if let Err(err) = config.validate() {
            tracing::debug!(%err, "rejected spring config");
            return Err(err);
        }
        Ok(Self::build(config))
    }
}

/// Position of a spring as a function of time
///
/// Holds only the constants derived at build time, so it is `Copy`, carries
/// no reference to its config, and gives the same value for the same `t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringCurve {
    to: f64,
    initial_delta: f64,
    initial_velocity: f64,
    damping_ratio: f64,
    angular_freq: f64,
    regime: DampingRegime,
}

impl SpringCurve {
    /// Position at `t` milliseconds after the start
    pub fn evaluate(&self, t: f64) -> f64 {
        let to = self.to;
        let delta = self.initial_delta;
        let zeta = self.damping_ratio;
        let omega = self.angular_freq;

        match self.regime {
            DampingRegime::Underdamped { expo_decay } => {
                let envelope = (-zeta * omega * t).exp();
                let sin_coeff = (self.initial_velocity + zeta * omega * delta) / expo_decay;
                to - envelope * (sin_coeff * (expo_decay * t).sin() + delta * (expo_decay * t).cos())
            }
            // Ignores both the initial velocity and the start position. Kept
            // as is for compatibility with existing spring curves; the
            // textbook solution is `to - e^(-ωt)·(Δ + (v + ωΔ)·t)`.
            DampingRegime::Critical => {
                let envelope = (-omega * t).exp();
                to - envelope * (1.0 + omega * t)
            }
            // e^(-ζωt)·sinh(dt) and e^(-ζωt)·cosh(dt) are formed from
            // exponents that are never positive, since d < ζω. Multiplying
            // the factors separately overflows cosh and yields 0·inf.
            DampingRegime::Overdamped { damped_angular_freq } => {
                let d = damped_angular_freq;
                let decay = zeta * omega;
                let slow = ((d - decay) * t).exp();
                let fast = (-(d + decay) * t).exp();
                let sinh_term = -slow * (-2.0 * d * t).exp_m1() / 2.0;
                let cosh_term = (slow + fast) / 2.0;
                to - ((self.initial_velocity + decay * delta) * sinh_term + d * delta * cosh_term) / d
            }
        }
    }

    /// Damping regime chosen at build time
    pub fn regime(&self) -> DampingRegime {
        self.regime
    }

    /// Ratio of actual to critical damping
    pub fn damping_ratio(&self) -> f64 {
        self.damping_ratio
    }

    /// Undamped angular frequency (rad/ms)
    pub fn angular_freq(&self) -> f64 {
        self.angular_freq
    }

    /// `to - from`
    pub fn initial_delta(&self) -> f64 {
        self.initial_delta
    }

    /// Initial velocity in internal units: per millisecond, negated
    pub fn initial_velocity(&self) -> f64 {
        self.initial_velocity
    }

    /// Rest position the curve converges to
    pub fn target(&self) -> f64 {
        self.to
    }
}

impl From<SpringConfig> for SpringCurve {
    fn from(config: SpringConfig) -> Self {
        SpringSolver::build(config)
    }
}

/// Build a spring curve and return it as a plain function of time (ms)
pub fn spring(config: SpringConfig) -> impl Fn(f64) -> f64 + Copy + Send + Sync {
    let curve = SpringSolver::build(config);
    move |t| curve.evaluate(t)
}
