use thiserror::Error;

/// Unified error type for git-latest operations
#[derive(Error, Debug)]
pub enum GitLatestError {
    #[error("Invalid method: {0}")]
    InvalidMethod(String),

    #[error("Git executable not found: {0}")]
    ToolNotFound(String),

    #[error("Cannot open repository: {0}")]
    RepositoryOpen(String),

    #[error("Cannot resolve HEAD: {0}")]
    HeadResolution(String),

    #[error("Cannot enumerate tags: {0}")]
    TagEnumeration(String),

    /// Per-tag ancestry check failure. Consumed by the resolver as a skip
    /// diagnostic; never propagated to callers.
    #[error("Cannot check ancestry: {0}")]
    Ancestry(String),

    #[error("No semver tag reachable from HEAD")]
    NoMatchingTag,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-latest
pub type Result<T> = std::result::Result<T, GitLatestError>;

impl GitLatestError {
    /// Create a repository-open error with the backend diagnostic
    pub fn open(msg: impl Into<String>) -> Self {
        GitLatestError::RepositoryOpen(msg.into())
    }

    /// Create a HEAD-resolution error with the backend diagnostic
    pub fn head(msg: impl Into<String>) -> Self {
        GitLatestError::HeadResolution(msg.into())
    }

    /// Create a tag-enumeration error with the backend diagnostic
    pub fn tags(msg: impl Into<String>) -> Self {
        GitLatestError::TagEnumeration(msg.into())
    }

    /// Create a per-tag ancestry error with the backend diagnostic
    pub fn ancestry(msg: impl Into<String>) -> Self {
        GitLatestError::Ancestry(msg.into())
    }

    /// True for the expected "repository has no releases yet" outcome,
    /// as opposed to the fatal categories.
    pub fn is_no_matching_tag(&self) -> bool {
        matches!(self, GitLatestError::NoMatchingTag)
    }
}
