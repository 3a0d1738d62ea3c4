//! Error types for OS operations.

use std::io;

use thiserror::Error;

/// Error from an OS-level operation.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// File or process I/O failed.
    #[error("I/O error in {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: io::Error,
    },

    /// A helper command ran but reported failure.
    #[error("{command} failed with exit code {}: {message}", display_code(.exit_code))]
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
        message: String,
    },

    /// The operation has no implementation on this OS.
    #[error("{0} is not supported on this platform")]
    Unsupported(String),

    /// The per-user startup folder could not be located.
    #[error("Could not determine the startup folder")]
    NoStartupFolder,
}

impl PlatformError {
    /// Create an I/O error with context.
    pub fn io(operation: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Create a command failed error.
    pub fn command_failed(
        command: impl Into<String>,
        exit_code: Option<i32>,
        message: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            command: command.into(),
            exit_code,
            message: message.into(),
        }
    }

    /// Create an unsupported-operation error.
    pub fn unsupported(what: impl Into<String>) -> Self {
        Self::Unsupported(what.into())
    }
}

fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}

/// Result type for OS operations.
pub type PlatformResult<T> = Result<T, PlatformError>;
