//! Main window messages (events)

use std::path::PathBuf;

use quicklaunch_core::models::Settings;

/// Messages for the main window
#[derive(Debug, Clone)]
pub enum MainMsg {
    /// Files picked in the "Add Solution" dialog
    AddSolutions(Vec<PathBuf>),
    /// Click on a list entry
    ToggleSelected(String),
    RemoveSelected,
    /// Open one solution in the IDE
    LaunchSolution(String),
    LaunchSelected,
    /// Run the full launch sequence
    StartAll,
    OpenSettings,
    /// Settings dialog closed; `Some` when confirmed
    SettingsClosed(Option<Settings>),
}
