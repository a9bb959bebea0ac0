use thiserror::Error;

/// Unified error type for gittag operations
#[derive(Error, Debug)]
pub enum GitTagError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: '{input}' {reason}")]
    Parse { input: String, reason: String },

    #[error("Invalid prerelease: {0}")]
    InvalidPrerelease(String),

    #[error("No version selected")]
    NoSelection,

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in gittag
pub type Result<T> = std::result::Result<T, GitTagError>;

impl GitTagError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitTagError::Config(msg.into())
    }

    /// Create a parse error for the given input
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        GitTagError::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid prerelease error
    pub fn invalid_prerelease(msg: impl Into<String>) -> Self {
        GitTagError::InvalidPrerelease(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        GitTagError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        GitTagError::Remote(msg.into())
    }

    /// True when the error stands for the user backing out, not a failure
    pub fn is_cancellation(&self) -> bool {
        matches!(self, GitTagError::NoSelection)
    }
}
