//! Types shared between the launch pipeline and its steps.

use std::path::Path;

use crate::models::Settings;
use crate::platform::{PlatformServices, SpawnRequest};

use super::errors::LaunchFailure;

/// Read-only inputs for a launch run.
pub struct LaunchContext<'a> {
    /// Settings snapshot for this run.
    pub settings: &'a Settings,
    /// OS services used for existence checks, process lookup and spawning.
    pub services: &'a dyn PlatformServices,
}

impl<'a> LaunchContext<'a> {
    /// Create a context.
    pub fn new(settings: &'a Settings, services: &'a dyn PlatformServices) -> Self {
        Self { settings, services }
    }

    /// `path` if it is set and names an existing file.
    pub fn existing<'p>(&self, path: Option<&'p Path>) -> Option<&'p Path> {
        path.filter(|p| self.services.file_exists(p))
    }

    /// Base spawn request honoring the global elevation flag.
    pub fn request(&self, program: &Path) -> SpawnRequest {
        SpawnRequest::new(program).elevated(self.settings.launch_as_administrator)
    }
}

/// What a step decided to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Spawn these processes, in order.
    Launch(Vec<SpawnRequest>),
    /// Nothing to do, with the reason.
    Skipped(String),
}

impl StepOutcome {
    /// Skip with a reason.
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped(reason.into())
    }
}

/// Record of what a launch run did.
#[derive(Debug, Default)]
pub struct LaunchReport {
    /// Requests the OS accepted.
    pub spawned: Vec<SpawnRequest>,
    /// Steps that had nothing to do: (step name, reason).
    pub skipped: Vec<(String, String)>,
    /// Requests the OS rejected.
    pub failures: Vec<LaunchFailure>,
}

impl LaunchReport {
    /// Whether every attempted spawn succeeded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// One-line summary for the status bar.
    pub fn summary(&self) -> String {
        match (self.spawned.len(), self.failures.len()) {
            (0, 0) => "Nothing to launch".to_string(),
            (n, 0) => format!("Launched {} process(es)", n),
            (n, f) => format!("Launched {} process(es), {} failed", n, f),
        }
    }
}
