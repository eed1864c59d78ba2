//! Error types for the parboost engine

use thiserror::Error;

/// Batch execution errors
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Input was neither an integer nor an array of integers
    ///
    /// **Triggered by:** Passing a string, float, bool, null, or an array
    /// with a non-integer element to `apply`
    /// **Example:** `apply(&square, &Value::String("x".into()))`
    /// **Prevention:** Only `Int` and arrays of `Int` are accepted at the
    /// dispatch boundary
    #[error("Invalid argument: expected int or array of ints, got {got}")]
    InvalidArgument {
        /// Type name of the rejected input
        got: String,
    },

    /// A task failed during parallel execution
    ///
    /// **Triggered by:** The wrapped function returning an error for some
    /// input while the batch was running on the thread pool
    /// **Recovery:** Classified as Recoverable - the dispatcher retries the
    /// whole batch sequentially; the caller only sees the function's own
    /// error if the sequential retry fails too
    #[error("Task failed for input {input} at index {index}: {source}")]
    TaskFailed {
        /// Position of the failing input in the batch
        index: usize,
        /// The input value the function rejected
        input: i64,
        /// The function's own error
        #[source]
        source: Box<Error>,
    },

    /// Worker pool construction failed
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// Failure raised by a user-supplied function
    #[error("Function error: {0}")]
    Function(String),
}

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Fatal error that cannot be recovered from
    Fatal,
    /// Recoverable error that may be retried
    Recoverable,
}

impl Error {
    /// Create a function error with a message
    pub fn function(msg: impl Into<String>) -> Self {
        Error::Function(msg.into())
    }

    /// Classify error severity
    ///
    /// Executor-level failures are recoverable: sequential fallback exists
    /// for them. A rejected input shape is fatal and skips fallback.
    pub fn classify(&self) -> ErrorSeverity {
        match self {
            Error::InvalidArgument { .. } => ErrorSeverity::Fatal,
            Error::TaskFailed { .. } => ErrorSeverity::Recoverable,
            Error::ThreadPool(_) => ErrorSeverity::Recoverable,
            Error::Function(_) => ErrorSeverity::Recoverable,
        }
    }
}

/// Result type for parboost operations
pub type Result<T> = std::result::Result<T, Error>;
