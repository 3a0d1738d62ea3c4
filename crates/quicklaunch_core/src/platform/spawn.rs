//! Spawn request description.

use std::fmt;
use std::path::PathBuf;

/// A request to start one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnRequest {
    /// Executable to start.
    pub program: PathBuf,
    /// Single argument passed verbatim, already quoted if needed.
    pub argument: Option<String>,
    /// Ask the OS for administrative rights.
    pub elevated: bool,
}

impl SpawnRequest {
    /// Request to start `program` with no arguments, not elevated.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            argument: None,
            elevated: false,
        }
    }

    /// Pass `value` as the single argument, wrapped in double quotes.
    pub fn with_quoted_argument(mut self, value: &str) -> Self {
        self.argument = Some(quote_argument(value));
        self
    }

    /// Set whether elevation is requested.
    pub fn elevated(mut self, elevated: bool) -> Self {
        self.elevated = elevated;
        self
    }

    /// Argument with any surrounding double quotes removed.
    ///
    /// Used where the OS API quotes arguments itself.
    pub fn unquoted_argument(&self) -> Option<&str> {
        self.argument.as_deref().map(|a| {
            a.strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(a)
        })
    }
}

impl fmt::Display for SpawnRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        if let Some(arg) = &self.argument {
            write!(f, " {}", arg)?;
        }
        if self.elevated {
            write!(f, " (elevated)")?;
        }
        Ok(())
    }
}

/// Wrap a path in double quotes for use as a single command-line argument.
pub fn quote_argument(value: &str) -> String {
    format!("\"{}\"", value)
}
