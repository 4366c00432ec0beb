//! Spring configuration
//!
//! Boundary conditions and physical parameters for a spring curve. Every
//! field is optional when parsed from TOML or JSON; missing keys take the
//! defaults below.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpringError};
use crate::regime::DampingRegime;

/// Configuration for a spring curve
///
/// | field | default |
/// |---|---|
/// | `from` | 0.0 |
/// | `to` | 0.0 |
/// | `velocity` | 0.0 (units per second) |
/// | `stiffness` | 100.0 |
/// | `damping` | 10.0 |
/// | `mass` | 1.0 |
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Start position
    pub from: f64,
    /// Target position
    pub to: f64,
    /// Initial velocity in units per second
    pub velocity: f64,
    /// Spring constant
    pub stiffness: f64,
    /// Damping coefficient
    pub damping: f64,
    /// Oscillating mass
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            velocity: 0.0,
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
        }
    }
}

impl SpringConfig {
    /// Create a configuration with the given physical parameters, resting at 0
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            ..Self::default()
        }
    }

    /// A gentle, slow spring (good for page transitions)
    pub fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// A wobbly spring with overshoot (good for playful UI)
    pub fn wobbly() -> Self {
        Self::new(180.0, 12.0, 1.0)
    }

    /// A stiff, snappy spring (good for buttons)
    pub fn stiff() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// A very stiff spring with minimal oscillation
    pub fn snappy() -> Self {
        Self::new(600.0, 40.0, 1.0)
    }

    /// A slow spring with no overshoot (exactly critically damped)
    pub fn molasses() -> Self {
        Self::new(100.0, 20.0, 1.0)
    }

    /// Set the start position
    pub fn with_from(mut self, from: f64) -> Self {
        self.from = from;
        self
    }

    /// Set the target position
    pub fn with_to(mut self, to: f64) -> Self {
        self.to = to;
        self
    }

    /// Set the initial velocity (units per second)
    pub fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the spring constant
    pub fn with_stiffness(mut self, stiffness: f64) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the damping coefficient
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the oscillating mass
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Damping coefficient at which this spring stops oscillating
    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Ratio of actual to critical damping
    pub fn damping_ratio(&self) -> f64 {
        self.damping / self.critical_damping()
    }

    /// Undamped angular frequency in radians per millisecond
    pub fn angular_freq(&self) -> f64 {
        (self.stiffness / self.mass).sqrt() / 1000.0
    }

    /// Classify this spring's damping regime
    pub fn regime(&self) -> DampingRegime {
        DampingRegime::classify(self.damping_ratio(), self.angular_freq())
    }

    /// Reject configurations whose curve would be NaN or infinite.
    ///
    /// Building a curve does not call this; it is an opt-in check for callers
    /// that would rather fail early than animate garbage.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("from", self.from),
            ("to", self.to),
            ("velocity", self.velocity),
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("mass", self.mass),
        ];
        if let Some(&(field, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SpringError::NonFinite { field, value });
        }

        if self.stiffness <= 0.0 {
            return Err(SpringError::NonPositiveStiffness(self.stiffness));
        }
        if self.mass <= 0.0 {
            return Err(SpringError::NonPositiveMass(self.mass));
        }
        if self.damping < 0.0 {
            return Err(SpringError::NegativeDamping(self.damping));
        }

        Ok(())
    }

    /// Parse a configuration from TOML, e.g. `stiffness = 180.0\ndamping = 12.0`
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Parse a configuration from a JSON object, e.g. `{"to": 100}`
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }
}
