//! The persisted settings record.
//!
//! One flat record holds every user choice. It maps 1:1 onto the JSON
//! settings file (camelCase keys). Keys written by the earlier PascalCase
//! format are accepted as aliases on read.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// User settings for the launcher.
///
/// Path fields are stored exactly as the user chose them; existence is only
/// checked at launch time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Solution files, in display and launch order.
    #[serde(alias = "SolutionFiles")]
    pub solution_files: Vec<String>,

    /// IDE executable used to open each solution.
    #[serde(alias = "VisualStudioPath")]
    pub visual_studio_path: Option<String>,

    /// Database management tool executable.
    #[serde(alias = "SqlServerManagementStudioPath")]
    pub sql_server_management_studio_path: Option<String>,

    /// Text editor executable.
    #[serde(alias = "TextEditorPath")]
    pub text_editor_path: Option<String>,

    /// Start the text editor as part of the batch.
    #[serde(alias = "LaunchTextEditor")]
    pub launch_text_editor: bool,

    /// Skip the database tool when an instance is already running.
    #[serde(rename = "disableSSMSIfOpen", alias = "DisableSSMSIfOpen")]
    pub disable_ssms_if_open: bool,

    /// Keep a shortcut to the launcher in the startup folder.
    #[serde(alias = "LaunchOnStartup")]
    pub launch_on_startup: bool,

    /// Extra executables started after everything else.
    #[serde(alias = "AdditionalApplications")]
    pub additional_applications: Vec<String>,

    /// Request elevation for every spawn.
    #[serde(alias = "LaunchAsAdministrator")]
    pub launch_as_administrator: bool,
}

impl Settings {
    /// Add a solution file unless it is already listed.
    ///
    /// Returns `true` if the list changed.
    pub fn add_solution_file(&mut self, path: impl Into<String>) -> bool {
        push_unique(&mut self.solution_files, path.into())
    }

    /// Add several solution files, skipping ones already listed.
    ///
    /// Returns the number of paths appended.
    pub fn add_solution_files<I, S>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = 0;
        for path in paths {
            if self.add_solution_file(path) {
                added += 1;
            }
        }
        added
    }

    /// Remove a solution file. Returns `true` if it was listed.
    pub fn remove_solution_file(&mut self, path: &str) -> bool {
        remove_entry(&mut self.solution_files, path)
    }

    /// Remove every listed path in `paths`. Returns the number removed.
    pub fn remove_solution_files<'a>(&mut self, paths: impl IntoIterator<Item = &'a str>) -> usize {
        paths
            .into_iter()
            .filter(|p| self.remove_solution_file(p))
            .count()
    }

    /// Add an additional application unless it is already listed.
    pub fn add_additional_application(&mut self, path: impl Into<String>) -> bool {
        push_unique(&mut self.additional_applications, path.into())
    }

    /// Remove an additional application. Returns `true` if it was listed.
    pub fn remove_additional_application(&mut self, path: &str) -> bool {
        remove_entry(&mut self.additional_applications, path)
    }

    /// IDE path, if set to something non-blank.
    pub fn visual_studio_path(&self) -> Option<&Path> {
        non_blank(&self.visual_studio_path)
    }

    /// Database tool path, if set to something non-blank.
    pub fn sql_server_management_studio_path(&self) -> Option<&Path> {
        non_blank(&self.sql_server_management_studio_path)
    }

    /// Text editor path, if set to something non-blank.
    pub fn text_editor_path(&self) -> Option<&Path> {
        non_blank(&self.text_editor_path)
    }
}

/// Convert free text from an input box into an optional path value.
///
/// Blank input clears the field.
pub fn optional_path(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn non_blank(value: &Option<String>) -> Option<&Path> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(Path::new)
}

fn push_unique(list: &mut Vec<String>, path: String) -> bool {
    if list.contains(&path) {
        return false;
    }
    list.push(path);
    true
}

fn remove_entry(list: &mut Vec<String>, path: &str) -> bool {
    match list.iter().position(|p| p == path) {
        Some(idx) => {
            list.remove(idx);
            true
        }
        None => false,
    }
}
