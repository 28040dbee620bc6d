//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed or the session was rejected.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Input data could not be retrieved, so no report can be produced.
    ///
    /// Kept distinct from an empty result: a failed fetch must never be
    /// shown as a zero balance.
    #[error("Input unavailable: {0}")]
    InputUnavailable(String),

    /// External service error.
    #[error("External service error: {0}")]
    ExternalService(String),

    /// A multi-step write stopped after some of it was committed.
    ///
    /// The message names what was already written so it is not resent.
    #[error("Partial write: {0}")]
    PartialWrite(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Unauthorized(_) => 3,
            Self::NotFound(_) => 4,
            Self::Validation(_) => 65,
            Self::InputUnavailable(_) | Self::ExternalService(_) => 69,
            Self::PartialWrite(_) => 75,
            Self::Config(_) => 78,
            Self::Internal(_) => 70,
        }
    }

    /// Returns the stable error code used in machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InputUnavailable(_) => "INPUT_UNAVAILABLE",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::PartialWrite(_) => "PARTIAL_WRITE",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::Unauthorized("expired".into()), "UNAUTHORIZED", 3)]
    #[case(AppError::NotFound("employee 9".into()), "NOT_FOUND", 4)]
    #[case(AppError::Validation("row 2".into()), "VALIDATION_ERROR", 65)]
    #[case(AppError::InputUnavailable("deposits".into()), "INPUT_UNAVAILABLE", 69)]
    #[case(AppError::ExternalService("bulk".into()), "EXTERNAL_SERVICE_ERROR", 69)]
    #[case(AppError::PartialWrite("collections".into()), "PARTIAL_WRITE", 75)]
    #[case(AppError::Config("base_url".into()), "CONFIG_ERROR", 78)]
    #[case(AppError::Internal("bug".into()), "INTERNAL_ERROR", 70)]
    fn test_codes_and_exit_status(#[case] err: AppError, #[case] code: &str, #[case] exit: i32) {
        assert_eq!(err.error_code(), code);
        assert_eq!(err.exit_code(), exit);
    }

    #[test]
    fn test_unavailable_input_is_not_an_empty_result() {
        let err = AppError::InputUnavailable("GET /collections timed out".into());
        assert_eq!(
            err.to_string(),
            "Input unavailable: GET /collections timed out"
        );
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_config_error_conversion() {
        let err: AppError = config::ConfigError::NotFound("api.base_url".into()).into();
        assert!(matches!(err, AppError::Config(msg) if msg.contains("api.base_url")));
    }
}
