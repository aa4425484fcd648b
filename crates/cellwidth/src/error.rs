//! Error types for width resolution and escape configuration.

use thiserror::Error;

/// Errors raised when a tab size or escape configuration is unusable.
///
/// Width computation itself never fails: malformed input degrades to
/// escaped or replacement text instead of aborting the cell.
#[derive(Debug, Error)]
pub enum Error {
    /// A tab size, mapping, or replacement text was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A serialized escape configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result type for cellwidth operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidConfiguration("tab size must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: tab size must be positive"
        );
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
