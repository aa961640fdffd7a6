//! Result and error types for layerdeck.

use thiserror::Error;

/// Result type for layerdeck operations
pub type SlidesResult<T> = Result<T, SlidesError>;

/// Errors that can occur while building a layer tree or animating it
#[derive(Debug, Error)]
pub enum SlidesError {
    /// A path segment does not name an existing layer
    #[error("Unknown layer '{segment}' in path '{path}'")]
    UnknownLayer {
        /// The first segment that could not be resolved
        segment: String,
        /// The full path being resolved
        path: String,
    },

    /// A relative slide line did not start with an operator
    #[error("A relative line must start with + or -, not '{token}'")]
    BadOperator {
        /// The offending first token
        token: String,
    },

    /// Brace factorization could not make progress
    #[error("Malformed DSL: {message}")]
    MalformedDsl {
        /// 1-based line where the problem starts
        line: usize,
        /// Error message
        message: String,
    },

    /// Two layers in the hierarchy share a name
    #[error("Duplicate layer name '{name}'")]
    DuplicateLayer {
        /// The repeated name
        name: String,
    },

    /// A layer in the hierarchy has an empty name
    #[error("Layer names must not be empty")]
    EmptyLayerName,

    /// A layer name cannot be written as a path token
    #[error("Layer name '{name}' cannot be addressed: {reason}")]
    InvalidLayerName {
        /// The rejected name
        name: String,
        /// What makes it unusable
        reason: String,
    },

    /// Two animation blocks share a suffix, so their outputs would collide
    #[error("Animation block '{suffix}' is defined twice")]
    DuplicateBlock {
        /// The repeated suffix, empty for the unnamed block
        suffix: String,
    },

    /// A snapshot was applied to a tree it was not captured from
    #[error("Snapshot covers {actual} layers but the tree has {expected}")]
    SnapshotMismatch {
        /// Number of layers in the tree
        expected: usize,
        /// Number of layers recorded in the snapshot
        actual: usize,
    },

    /// The render collaborator failed on a block
    #[error("Rendering block '{block}' failed: {message}")]
    Render {
        /// Suffix of the block being rendered
        block: String,
        /// Error message
        message: String,
    },

    /// An error located in a given DSL source
    #[error("{file}:{line}: {error}")]
    Located {
        /// Identifier of the source being processed
        file: String,
        /// 1-based line number in that source
        line: usize,
        /// The underlying error
        error: Box<SlidesError>,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Pattern compilation error
    #[error("Pattern error: {0}")]
    Regex(#[from] regex::Error),
}

impl SlidesError {
    /// Create a malformed DSL error
    #[must_use]
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedDsl {
            line,
            message: message.into(),
        }
    }

    /// Create a render error for the named block
    #[must_use]
    pub fn render(block: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Render {
            block: block.into(),
            message: message.into(),
        }
    }

    /// Attach a source identifier and line number to this error
    #[must_use]
    pub fn located(self, file: impl Into<String>, line: usize) -> Self {
        Self::Located {
            file: file.into(),
            line,
            error: Box::new(self),
        }
    }

    /// Replace the source identifier of a located error.
    ///
    /// Errors without a location are returned unchanged.
    #[must_use]
    pub fn relocated(self, file: impl Into<String>) -> Self {
        match self {
            Self::Located { line, error, .. } => Self::Located {
                file: file.into(),
                line,
                error,
            },
            other => other,
        }
    }

    /// The underlying error, with any location wrappers removed
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Self::Located { error, .. } = current {
            current = error;
        }
        current
    }
}
