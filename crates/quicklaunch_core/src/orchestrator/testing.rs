//! Recording fakes for orchestrator tests.

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::platform::{Notifier, PlatformError, PlatformResult, PlatformServices, SpawnRequest};

/// Platform fake with a configurable file system and process table.
#[derive(Default)]
pub struct FakePlatform {
    pub files: HashSet<PathBuf>,
    pub running: HashSet<String>,
    pub failing: HashSet<PathBuf>,
    pub spawns: RefCell<Vec<SpawnRequest>>,
    pub running_queries: RefCell<Vec<String>>,
}

impl FakePlatform {
    pub fn with_files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn running(mut self, base_name: &str) -> Self {
        self.running.insert(base_name.to_string());
        self
    }

    pub fn failing(mut self, program: &str) -> Self {
        self.failing.insert(PathBuf::from(program));
        self
    }

    pub fn spawned_programs(&self) -> Vec<PathBuf> {
        self.spawns.borrow().iter().map(|r| r.program.clone()).collect()
    }
}

impl PlatformServices for FakePlatform {
    fn spawn(&self, request: &SpawnRequest) -> PlatformResult<()> {
        self.spawns.borrow_mut().push(request.clone());
        if self.failing.contains(&request.program) {
            return Err(PlatformError::command_failed(
                "Start-Process",
                Some(1),
                "The system cannot find the file specified.",
            ));
        }
        Ok(())
    }

    fn is_process_running(&self, base_name: &str) -> bool {
        self.running_queries.borrow_mut().push(base_name.to_string());
        self.running.contains(base_name)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.contains(path)
    }
}

/// Notifier that records every error shown.
#[derive(Default)]
pub struct RecordingNotifier {
    pub errors: RefCell<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn titles(&self) -> Vec<String> {
        self.errors.borrow().iter().map(|(t, _)| t.clone()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, title: &str, message: &str) {
        self.errors
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
    }
}
