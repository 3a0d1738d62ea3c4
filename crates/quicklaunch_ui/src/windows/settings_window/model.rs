//! Settings dialog state model

use quicklaunch_core::models::{optional_path, Settings};

/// Working copy edited by the settings dialog.
///
/// Path fields are kept as plain text buffers; blank text means "not set"
/// once the edit is confirmed. The live settings are never touched here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsModel {
    pub visual_studio_path: String,
    pub sql_server_management_studio_path: String,
    pub text_editor_path: String,
    pub launch_text_editor: bool,
    pub disable_ssms_if_open: bool,
    pub launch_on_startup: bool,
    pub launch_as_administrator: bool,
    /// Highlighted entry in the additional applications list
    pub selected_app: Option<String>,
    /// Carries the solution list and the additional applications being edited
    base: Settings,
}

impl SettingsModel {
    /// Build a working copy from the live settings
    pub fn from_settings(settings: &Settings) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            visual_studio_path: text(&settings.visual_studio_path),
            sql_server_management_studio_path: text(&settings.sql_server_management_studio_path),
            text_editor_path: text(&settings.text_editor_path),
            launch_text_editor: settings.launch_text_editor,
            disable_ssms_if_open: settings.disable_ssms_if_open,
            launch_on_startup: settings.launch_on_startup,
            launch_as_administrator: settings.launch_as_administrator,
            selected_app: None,
            base: settings.clone(),
        }
    }

    /// Produce the edited settings record
    pub fn to_settings(&self) -> Settings {
        Settings {
            visual_studio_path: optional_path(&self.visual_studio_path),
            sql_server_management_studio_path: optional_path(
                &self.sql_server_management_studio_path,
            ),
            text_editor_path: optional_path(&self.text_editor_path),
            launch_text_editor: self.launch_text_editor,
            disable_ssms_if_open: self.disable_ssms_if_open,
            launch_on_startup: self.launch_on_startup,
            launch_as_administrator: self.launch_as_administrator,
            ..self.base.clone()
        }
    }

    pub fn additional_applications(&self) -> &[String] {
        &self.base.additional_applications
    }

    /// Add an application unless already listed
    pub fn add_application(&mut self, path: impl Into<String>) -> bool {
        self.base.add_additional_application(path)
    }

    /// Remove the highlighted application, if any
    pub fn remove_selected_application(&mut self) -> bool {
        match self.selected_app.take() {
            Some(app) => self.base.remove_additional_application(&app),
            None => false,
        }
    }

    pub fn is_app_selected(&self, app: &str) -> bool {
        self.selected_app.as_deref() == Some(app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Settings {
        Settings {
            solution_files: vec!["A.sln".into()],
            visual_studio_path: Some("devenv.exe".into()),
            text_editor_path: None,
            launch_as_administrator: true,
            additional_applications: vec!["extra.exe".into()],
            ..Default::default()
        }
    }

    #[test]
    fn unchanged_copy_gives_back_same_settings() {
        let settings = sample();
        assert_eq!(SettingsModel::from_settings(&settings).to_settings(), settings);
    }

    #[test]
    fn blank_text_clears_path() {
        let mut model = SettingsModel::from_settings(&sample());
        model.visual_studio_path = "   ".into();
        assert_eq!(model.to_settings().visual_studio_path, None);
    }

    #[test]
    fn solution_list_is_carried_through() {
        let mut model = SettingsModel::from_settings(&sample());
        model.launch_on_startup = true;
        model.add_application("second.exe");
        let edited = model.to_settings();
        assert_eq!(edited.solution_files, vec!["A.sln"]);
        assert_eq!(edited.additional_applications, vec!["extra.exe", "second.exe"]);
        assert!(edited.launch_on_startup);
    }
}
