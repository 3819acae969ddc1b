//! Error types for the formatting pipeline.
//!
//! Every failure from the subprocess stage is surfaced to the caller
//! unchanged; nothing in this layer retries or suppresses an error.

use thiserror::Error;

/// Failures that can occur while running the external formatter.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The formatter binary could not be started at all (missing from PATH,
    /// permission denied, ...).
    #[error("failed to launch formatter `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The formatter ran but exited with a nonzero status. Carries the exit
    /// code (None if killed by a signal) and the captured stderr verbatim.
    #[error("formatter exited with {}: {stderr}", code.map(|c| format!("code {c}")).unwrap_or_else(|| "signal".to_string()))]
    FormatterFailed { code: Option<i32>, stderr: String },

    /// Pipe I/O towards the child process failed.
    #[error("formatter I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for formatting operations.
pub type FormatResult<T> = Result<T, FormatError>;

impl FormatError {
    /// Create a launch error for the given program.
    pub fn launch(program: impl Into<String>, source: std::io::Error) -> Self {
        FormatError::Launch {
            program: program.into(),
            source,
        }
    }

    /// Create a formatter-failed error from an exit code and stderr text.
    pub fn failed(code: Option<i32>, stderr: impl Into<String>) -> Self {
        FormatError::FormatterFailed {
            code,
            stderr: stderr.into(),
        }
    }
}
