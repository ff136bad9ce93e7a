// Error types for playwright-page-factory

use thiserror::Error;

/// Result type alias for page factory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving page object locators
#[derive(Debug, Error)]
pub enum Error {
    /// A descriptor's `pattern` is not a valid regular expression
    ///
    /// The declared locator is unusable, so the whole initialization fails
    /// and no field is modified.
    #[error("Invalid locator pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A resolved locator could not be written into its field
    ///
    /// Only produced by [`InitReport::into_result`](crate::InitReport::into_result);
    /// the injector itself reports slot failures per field.
    #[error("Cannot assign locator to field '{field}': {source}")]
    FieldAccess {
        field: String,
        #[source]
        source: FieldAccessError,
    },

    /// The automation session rejected a query
    ///
    /// The session's own error is kept as the source and can be recovered
    /// with `downcast_ref`.
    #[error("Session error: {0}")]
    Session(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Invalid argument provided to method
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }

    /// Returns the innermost error, skipping any [`Error::Context`] layers
    pub fn root(&self) -> &Error {
        match self {
            Error::Context(_, inner) => inner.root(),
            other => other,
        }
    }

    pub(crate) fn session<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Session(Box::new(err))
    }
}

/// Why a resolved locator could not be stored in a field slot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldAccessError {
    /// Write-once slot (`OnceLock`, `OnceCell`) already holds a locator
    #[error("field is write-once and already holds a locator")]
    AlreadySet,

    /// Custom slot refused the write
    #[error("field rejected the locator: {0}")]
    Rejected(String),
}
