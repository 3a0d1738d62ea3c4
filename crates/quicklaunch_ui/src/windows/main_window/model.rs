//! Main window state model

use quicklaunch_core::models::Settings;

/// Main window state - the live settings plus list selection
#[derive(Debug, Clone, Default)]
pub struct MainWindowModel {
    /// The live settings record
    pub settings: Settings,
    /// Selected solution files
    pub selected: Vec<String>,
    /// Last status line
    pub status: Option<String>,
}

impl MainWindowModel {
    /// Create from loaded settings
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            selected: Vec::new(),
            status: None,
        }
    }

    pub fn is_selected(&self, solution: &str) -> bool {
        self.selected.iter().any(|s| s == solution)
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Toggle a solution in or out of the selection
    pub fn toggle_selected(&mut self, solution: &str) {
        if let Some(idx) = self.selected.iter().position(|s| s == solution) {
            self.selected.remove(idx);
        } else {
            self.selected.push(solution.to_string());
        }
    }

    /// Drop selected entries that are no longer listed
    pub fn prune_selection(&mut self) {
        let listed = &self.settings.solution_files;
        self.selected.retain(|s| listed.contains(s));
    }
}
