//! Error types for the incident model

/// Errors raised while building or interpreting model values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Label does not name a known factory
    #[error("unknown factory: {0}")]
    UnknownFactory(String),

    /// Label does not name a known incident type
    #[error("unknown incident type: {0}")]
    UnknownIncidentType(String),

    /// Risk score outside the allowed range
    #[error("risk score {score} out of range [{min}, {max}]")]
    RiskScoreOutOfRange { score: u8, min: u8, max: u8 },

    /// Criteria cannot match anything in the dataset
    #[error("invalid criteria: {0}")]
    InvalidCriteria(String),
}

impl ModelError {
    /// Check if error came from parsing a user-supplied label
    #[inline]
    #[must_use]
    pub fn is_unknown_label(&self) -> bool {
        matches!(
            self,
            Self::UnknownFactory(_) | Self::UnknownIncidentType(_)
        )
    }
}
