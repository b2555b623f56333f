//! Error types for the dashboard pipeline
//!
//! Every failure here is local to one session and non-fatal:
//! - Scalar statistics over an empty view
//! - Invalid configuration
//! - Unknown sessions
//! - Model-level label and criteria errors

use crate::session::SessionId;
use safedash_model::ModelError;

/// Main dashboard error type
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// A scalar statistic was requested over zero records
    #[error("{statistic} is undefined for an empty view")]
    EmptyInput {
        /// Name of the statistic
        statistic: &'static str,
    },

    /// Model value or criteria error
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Session id not registered
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),
}

impl DashboardError {
    /// Check if error only means "no data" rather than a real failure
    #[inline]
    #[must_use]
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput { .. } | Self::Model(ModelError::InvalidCriteria(_))
        )
    }
}

/// Result alias for dashboard operations
pub type Result<T, E = DashboardError> = std::result::Result<T, E>;
