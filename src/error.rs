//! Error types for pace-timer

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaceError>;

/// Everything that can go wrong between a request and the pace clock.
///
/// Validation variants are produced at the boundary before any state is
/// touched; the remaining variants are internal failures.
#[derive(Debug, Error)]
pub enum PaceError {
    #[error("Provide seconds or time query param")]
    MissingTimeParam,

    #[error("Provide count=N")]
    MissingCount,

    #[error("No JSON data provided")]
    MissingBody,

    #[error("No valid configuration fields provided")]
    EmptyUpdate,

    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("Invalid time format: {0:?}")]
    InvalidTimeFormat(String),

    #[error("total must be > 0")]
    NonPositiveTotal,

    #[error("count must be >= 1")]
    EndCountTooSmall,

    #[error("Failed to lock pace state: {0}")]
    LockPoisoned(String),

    #[error("Configuration file error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Configuration format error: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}

impl PaceError {
    /// True when the caller sent bad input and nothing was mutated
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingTimeParam
                | Self::MissingCount
                | Self::MissingBody
                | Self::EmptyUpdate
                | Self::InvalidNumber(_)
                | Self::InvalidTimeFormat(_)
                | Self::NonPositiveTotal
                | Self::EndCountTooSmall
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_variants_are_classified() {
        assert!(PaceError::MissingTimeParam.is_validation());
        assert!(PaceError::InvalidTimeFormat("1:2:3:4".into()).is_validation());
        assert!(PaceError::EndCountTooSmall.is_validation());
        assert!(!PaceError::LockPoisoned("poisoned".into()).is_validation());
        assert!(!PaceError::ConfigIo(std::io::Error::other("disk")).is_validation());
    }

    #[test]
    fn display_keeps_offending_input() {
        let err = PaceError::InvalidNumber("abc".into());
        assert!(err.to_string().contains("abc"));
    }
}
