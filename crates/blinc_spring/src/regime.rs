//! Damping regimes
//!
//! A spring falls into exactly one of three regimes depending on its damping
//! ratio ζ. The regime is chosen once when a curve is built and carries the
//! secondary frequency its closed form needs.

/// Damping regime of a spring, with its precomputed secondary frequency
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DampingRegime {
    /// ζ < 1: oscillating decay.
    Underdamped {
        /// Damped angular frequency, `ω·sqrt(1 - ζ²)` (rad/ms)
        expo_decay: f64,
    },
    /// ζ == 1 exactly: fastest return to rest without overshoot.
    Critical,
    /// ζ > 1: slow, non-oscillating return. Also the fallback for a NaN ratio.
    Overdamped {
        /// `ω·sqrt(ζ² - 1)` (1/ms)
        damped_angular_freq: f64,
    },
}

impl DampingRegime {
    /// Classify a damping ratio, deriving the regime's secondary frequency
    /// from the undamped angular frequency `angular_freq`.
    ///
    /// Only an exact ratio of 1.0 is critical. Anything that is neither below
    /// nor equal to 1.0, NaN included, is overdamped.
    pub fn classify(damping_ratio: f64, angular_freq: f64) -> Self {
        if damping_ratio < 1.0 {
            DampingRegime::Underdamped {
                expo_decay: angular_freq * (1.0 - damping_ratio * damping_ratio).sqrt(),
            }
        } else if damping_ratio == 1.0 {
            DampingRegime::Critical
        } else {
            DampingRegime::Overdamped {
                damped_angular_freq: angular_freq * (damping_ratio * damping_ratio - 1.0).sqrt(),
            }
        }
    }

    /// Check if the spring oscillates while settling (ζ < 1)
    pub fn is_underdamped(&self) -> bool {
        matches!(self, DampingRegime::Underdamped { .. })
    }

    /// Check if the spring is exactly critically damped (ζ == 1)
    pub fn is_critical(&self) -> bool {
        matches!(self, DampingRegime::Critical)
    }

    /// Check if the spring settles slowly without oscillation (ζ > 1)
    pub fn is_overdamped(&self) -> bool {
        matches!(self, DampingRegime::Overdamped { .. })
    }

    /// Short lowercase name, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            DampingRegime::Underdamped { .. } => "underdamped",
            DampingRegime::Critical => "critical",
            DampingRegime::Overdamped { .. } => "overdamped",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_underdamped() {
        let regime = DampingRegime::classify(0.6, 0.01);
        match regime {
            DampingRegime::Underdamped { expo_decay } => {
                assert!((expo_decay - 0.008).abs() < 1e-12);
            }
            other => panic!("expected underdamped, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_exact_one_is_critical() {
        assert_eq!(DampingRegime::classify(1.0, 0.01), DampingRegime::Critical);
        assert!(DampingRegime::classify(1.0 - f64::EPSILON, 0.01).is_underdamped());
        assert!(DampingRegime::classify(1.0 + f64::EPSILON, 0.01).is_overdamped());
    }

    #[test]
    fn test_classify_overdamped() {
        match DampingRegime::classify(2.5, 0.01) {
            DampingRegime::Overdamped { damped_angular_freq } => {
                let expected = 0.01 * (2.5f64 * 2.5 - 1.0).sqrt();
                assert!((damped_angular_freq - expected).abs() < 1e-15);
            }
            other => panic!("expected overdamped, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_nan_falls_through() {
        match DampingRegime::classify(f64::NAN, 0.01) {
            DampingRegime::Overdamped { damped_angular_freq } => {
                assert!(damped_angular_freq.is_nan());
            }
            other => panic!("expected overdamped fallback, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_damping_is_underdamped() {
        let regime = DampingRegime::classify(0.0, 0.01);
        assert_eq!(regime, DampingRegime::Underdamped { expo_decay: 0.01 });
        assert_eq!(regime.name(), "underdamped");
    }
}
