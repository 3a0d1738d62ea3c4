//! Error types for the launch orchestrator.
//!
//! Failures carry context that chains through layers:
//! Step → Target → Platform detail

use thiserror::Error;

use crate::platform::PlatformError;

/// A single spawn that failed during a launch run.
///
/// Failures are collected, never propagated: the run continues with the
/// next target.
#[derive(Error, Debug)]
#[error("{step} could not start {target}: {source}")]
pub struct LaunchFailure {
    /// Name of the step that issued the spawn.
    pub step: String,
    /// Title shown to the user for this step's errors.
    pub title: String,
    /// The target as displayed to the user.
    pub target: String,
    /// Underlying OS error.
    #[source]
    pub source: PlatformError,
}

impl LaunchFailure {
    /// Create a failure record.
    pub fn new(
        step: impl Into<String>,
        title: impl Into<String>,
        target: impl Into<String>,
        source: PlatformError,
    ) -> Self {
        Self {
            step: step.into(),
            title: title.into(),
            target: target.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_displays_context() {
        let err = LaunchFailure::new(
            "Solutions",
            "Error Launching Solution",
            r"C:\VS\devenv.exe",
            PlatformError::command_failed("Start-Process", Some(1), "canceled by user"),
        );
        let msg = err.to_string();
        assert!(msg.contains("Solutions"));
        assert!(msg.contains("devenv.exe"));
        assert!(msg.contains("canceled by user"));
    }
}
