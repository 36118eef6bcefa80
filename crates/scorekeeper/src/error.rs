//! Error types for scorekeeper.
//!
//! The scoring core itself is total: the only failure it defines is an
//! unrecognized team identifier at the untyped call boundary. The remaining
//! variants belong to the host layers (configuration, input parsing, output).

use thiserror::Error;

/// The main error type for scorekeeper operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Scoring Errors ===
    /// A team identifier did not name team A or team B.
    ///
    /// The match state is never modified when this is returned.
    #[error("invalid team identifier '{id}' (expected 'A' or 'B')")]
    InvalidTeam {
        /// The identifier as it was received.
        id: String,
    },

    /// A textual host action could not be parsed.
    #[error("invalid action '{input}': {reason}")]
    InvalidAction {
        /// The raw input line.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Output Errors ===
    /// A date format cannot be rendered for a calendar date.
    #[error("cannot format a match date with '{format}'")]
    DateFormat {
        /// The strftime string that failed.
        format: String,
    },

    // === I/O Errors ===
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for scorekeeper operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid team error.
    #[must_use]
    pub fn invalid_team(id: impl Into<String>) -> Self {
        Self::InvalidTeam { id: id.into() }
    }

    /// Create an invalid action error.
    #[must_use]
    pub fn invalid_action(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAction {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Create a date format error.
    #[must_use]
    pub fn date_format(format: impl Into<String>) -> Self {
        Self::DateFormat {
            format: format.into(),
        }
    }

    /// Check if this error is an unrecognized team identifier.
    #[must_use]
    pub fn is_invalid_team(&self) -> bool {
        matches!(self, Self::InvalidTeam { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_team_display() {
        let err = Error::invalid_team("C");
        assert_eq!(
            err.to_string(),
            "invalid team identifier 'C' (expected 'A' or 'B')"
        );
    }

    #[test]
    fn test_is_invalid_team() {
        assert!(Error::invalid_team("x").is_invalid_team());
        assert!(!Error::invalid_action("x", "bad").is_invalid_team());
        assert!(!Error::config_validation("bad").is_invalid_team());
    }

    #[test]
    fn test_invalid_action_display() {
        let err = Error::invalid_action("a +x", "delta is not an integer");
        let msg = err.to_string();
        assert!(msg.contains("a +x"));
        assert!(msg.contains("delta is not an integer"));
    }

    #[test]
    fn test_config_validation_display() {
        let err = Error::config_validation("set_point_threshold must be greater than 0");
        assert!(err.to_string().starts_with("invalid configuration:"));
        assert!(err.to_string().contains("set_point_threshold"));
    }

    #[test]
    fn test_date_format_display() {
        let err = Error::date_format("%H:%M");
        assert_eq!(err.to_string(), "cannot format a match date with '%H:%M'");
        assert!(!err.is_invalid_team());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }
}
