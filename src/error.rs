//! Error types for rayleigh.
//!
//! The animation itself is total: every frame index the driver can deliver
//! renders without failure. Errors only arise at the edges (loading
//! configuration, reading files, strict frame lookups).

use thiserror::Error;

/// Result type alias for rayleigh operations.
pub type RayleighResult<T> = Result<T, RayleighError>;

/// Unified error type for all rayleigh operations.
#[derive(Debug, Error)]
pub enum RayleighError {
    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== Animation Errors =====
    /// Frame index outside the configured run.
    #[error("Frame {frame} out of range (run has {total} frames)")]
    FrameOutOfRange {
        /// Requested frame index.
        frame: u32,
        /// Number of frames in a run.
        total: u32,
    },

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RayleighError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Whether the error was caused by user-supplied configuration.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config { .. } | Self::YamlParse(_) | Self::Validation(_)
        )
    }
}

impl From<serde_json::Error> for RayleighError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_config() {
        let err = RayleighError::config("invalid parameter");
        assert!(err.is_config_error());
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("invalid parameter"));
    }

    #[test]
    fn test_error_serialization() {
        let err = RayleighError::serialization("failed to serialize");
        assert!(!err.is_config_error());
        let msg = err.to_string();
        assert!(msg.contains("Serialization error"));
        assert!(msg.contains("failed to serialize"));
    }

    #[test]
    fn test_error_frame_out_of_range_display() {
        let err = RayleighError::FrameOutOfRange {
            frame: 120,
            total: 100,
        };
        assert!(!err.is_config_error());
        let msg = err.to_string();
        assert!(msg.contains("120"));
        assert!(msg.contains("100 frames"));
    }

    #[test]
    fn test_error_from_yaml() {
        let result: Result<u32, _> = serde_yaml::from_str("{{{{not valid yaml");
        let err: RayleighError = result.expect_err("must fail").into();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("YAML parsing error"));
    }

    #[test]
    fn test_error_from_json() {
        let result: Result<u32, _> = serde_json::from_str("not json");
        let err: RayleighError = result.expect_err("must fail").into();
        assert!(matches!(err, RayleighError::Serialization(_)));
    }

    #[test]
    fn test_error_io() {
        let err: RayleighError = std::io::Error::other("file not found").into();
        assert!(!err.is_config_error());
        let msg = err.to_string();
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_error_debug() {
        let err = RayleighError::config("test");
        let debug = format!("{err:?}");
        assert!(debug.contains("Config"));
    }
}
