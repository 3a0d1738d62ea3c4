//! Settings dialog update logic

use quicklaunch_core::models::Settings;

use super::messages::{Flag, PathField, SettingsMsg};
use super::model::SettingsModel;

/// How the dialog was closed
#[derive(Debug, Clone, PartialEq)]
pub enum DialogResult {
    Confirmed(Settings),
    Cancelled,
}

/// Apply a message to the working copy; `Some` once the dialog closes
pub fn update(model: &mut SettingsModel, msg: SettingsMsg) -> Option<DialogResult> {
    match msg {
        SettingsMsg::SetPath(field, text) => *path_mut(model, field) = text,
        SettingsMsg::SetFlag(flag, value) => *flag_mut(model, flag) = value,
        SettingsMsg::AddApplications(paths) => {
            for path in paths {
                model.add_application(path.display().to_string());
            }
        }
        SettingsMsg::SelectApplication(app) => model.selected_app = Some(app),
        SettingsMsg::RemoveSelectedApplication => {
            model.remove_selected_application();
        }
        SettingsMsg::Ok => {
            tracing::debug!("Settings dialog confirmed");
            return Some(DialogResult::Confirmed(model.to_settings()));
        }
        SettingsMsg::Cancel => {
            tracing::debug!("Settings dialog cancelled");
            return Some(DialogResult::Cancelled);
        }
    }
    None
}

fn path_mut(model: &mut SettingsModel, field: PathField) -> &mut String {
    match field {
        PathField::VisualStudio => &mut model.visual_studio_path,
        PathField::SqlServerManagementStudio => &mut model.sql_server_management_studio_path,
        PathField::TextEditor => &mut model.text_editor_path,
    }
}

fn flag_mut(model: &mut SettingsModel, flag: Flag) -> &mut bool {
    match flag {
        Flag::LaunchTextEditor => &mut model.launch_text_editor,
        Flag::DisableSsmsIfOpen => &mut model.disable_ssms_if_open,
        Flag::LaunchOnStartup => &mut model.launch_on_startup,
        Flag::LaunchAsAdministrator => &mut model.launch_as_administrator,
    }
}
