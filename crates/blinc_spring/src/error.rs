//! Spring configuration errors
//!
//! Building a curve never fails: degenerate parameters surface as NaN or
//! infinite samples. These errors only come from the opt-in validation path
//! and from parsing configuration text.

use thiserror::Error;

/// Errors produced by [`SpringConfig::validate`](crate::SpringConfig::validate)
/// and the config parsers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpringError {
    #[error("Spring field `{field}` is not finite: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("Spring stiffness must be positive, got {0}")]
    NonPositiveStiffness(f64),

    #[error("Spring mass must be positive, got {0}")]
    NonPositiveMass(f64),

    #[error("Spring damping must not be negative, got {0}")]
    NegativeDamping(f64),

    #[error("Failed to parse spring config: {0}")]
    Parse(String),
}

/// Result type for spring operations
pub type Result<T> = std::result::Result<T, SpringError>;

impl From<toml::de::Error> for SpringError {
    fn from(err: toml::de::Error) -> Self {
        SpringError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for SpringError {
    fn from(err: serde_json::Error) -> Self {
        SpringError::Parse(err.to_string())
    }
}
