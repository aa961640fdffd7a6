//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// Reading an input file failed
    #[error("Cannot read {path}: {source}")]
    Read {
        /// File being read
        path: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// Writing an output file failed
    #[error("Cannot write {path}: {source}")]
    Write {
        /// File being written
        path: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// Layerdeck library error
    #[error(transparent)]
    Slides(#[from] layerdeck::SlidesError),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let err = CliError::invalid_argument("bad arg");
        assert!(err.to_string().contains("Invalid argument"));
        assert!(err.to_string().contains("bad arg"));
    }

    #[test]
    fn test_read_error_names_path() {
        let err = CliError::Read {
            path: "talk.anim".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert!(err.to_string().contains("talk.anim"));
    }

    #[test]
    fn test_slides_error_is_transparent() {
        let inner = layerdeck::SlidesError::BadOperator {
            token: "x".to_string(),
        }
        .located("talk.anim", 3);
        let err: CliError = inner.into();
        assert_eq!(
            err.to_string(),
            "talk.anim:3: A relative line must start with + or -, not 'x'"
        );
    }
}
