//! Settings dialog messages

use std::path::PathBuf;

/// Which executable path field a message targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathField {
    VisualStudio,
    SqlServerManagementStudio,
    TextEditor,
}

/// Which checkbox a message targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    LaunchTextEditor,
    DisableSsmsIfOpen,
    LaunchOnStartup,
    LaunchAsAdministrator,
}

/// Messages for the settings dialog
#[derive(Debug, Clone)]
pub enum SettingsMsg {
    SetPath(PathField, String),
    SetFlag(Flag, bool),
    /// Executables picked for the additional applications list
    AddApplications(Vec<PathBuf>),
    SelectApplication(String),
    RemoveSelectedApplication,
    Ok,
    Cancel,
}
