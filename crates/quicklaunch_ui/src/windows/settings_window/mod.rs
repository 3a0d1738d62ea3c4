//! Settings dialog: executable paths, launch options and extra applications.

mod logic;
mod messages;
mod model;

pub use logic::{update, DialogResult};
pub use messages::{Flag, PathField, SettingsMsg};
pub use model::SettingsModel;

use eframe::egui;

/// Render the dialog as a centered window; returns the messages it produced.
pub fn view(ctx: &egui::Context, model: &SettingsModel) -> Vec<SettingsMsg> {
    let mut msgs = Vec::new();

    egui::Window::new("Settings")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Grid::new("settings_paths")
                .num_columns(3)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    path_row(ui, "Visual Studio", PathField::VisualStudio, &model.visual_studio_path, &mut msgs);
                    path_row(
                        ui,
                        "SQL Server Management Studio",
                        PathField::SqlServerManagementStudio,
                        &model.sql_server_management_studio_path,
                        &mut msgs,
                    );
                    path_row(ui, "Text editor", PathField::TextEditor, &model.text_editor_path, &mut msgs);
                });

            ui.add_space(8.0);
            flag(ui, "Launch text editor", Flag::LaunchTextEditor, model.launch_text_editor, &mut msgs);
            flag(
                ui,
                "Don't launch SSMS if it is already open",
                Flag::DisableSsmsIfOpen,
                model.disable_ssms_if_open,
                &mut msgs,
            );
            flag(ui, "Launch on startup", Flag::LaunchOnStartup, model.launch_on_startup, &mut msgs);
            flag(
                ui,
                "Launch as administrator",
                Flag::LaunchAsAdministrator,
                model.launch_as_administrator,
                &mut msgs,
            );

            ui.add_space(8.0);
            additional_apps(ui, model, &mut msgs);

            ui.add_space(8.0);
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    msgs.push(SettingsMsg::Ok);
                }
                if ui.button("Cancel").clicked() {
                    msgs.push(SettingsMsg::Cancel);
                }
            });
        });

    msgs
}

fn path_row(
    ui: &mut egui::Ui,
    label: &str,
    field: PathField,
    current: &str,
    msgs: &mut Vec<SettingsMsg>,
) {
    ui.label(label);

    let mut text = current.to_string();
    if ui
        .add(
            egui::TextEdit::singleline(&mut text)
                .hint_text("Path to executable")
                .desired_width(320.0),
        )
        .changed()
    {
        msgs.push(SettingsMsg::SetPath(field, text));
    }

    if ui.button("Browse...").clicked() {
        if let Some(path) = pick_executable(label).pick_file() {
            msgs.push(SettingsMsg::SetPath(field, path.display().to_string()));
        }
    }
    ui.end_row();
}

fn flag(ui: &mut egui::Ui, label: &str, flag: Flag, current: bool, msgs: &mut Vec<SettingsMsg>) {
    let mut value = current;
    if ui.checkbox(&mut value, label).changed() {
        msgs.push(SettingsMsg::SetFlag(flag, value));
    }
}

fn additional_apps(ui: &mut egui::Ui, model: &SettingsModel, msgs: &mut Vec<SettingsMsg>) {
    ui.label("Additional applications");

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(480.0);
        if model.additional_applications().is_empty() {
            ui.label(
                egui::RichText::new("None")
                    .small()
                    .color(egui::Color32::from_gray(110)),
            );
        }
        egui::ScrollArea::vertical()
            .max_height(120.0)
            .show(ui, |ui| {
                for app in model.additional_applications() {
                    let button = egui::Button::new(app.as_str())
                        .selected(model.is_app_selected(app))
                        .frame(false);
                    if ui.add(button).clicked() {
                        msgs.push(SettingsMsg::SelectApplication(app.clone()));
                    }
                }
            });
    });

    ui.horizontal(|ui| {
        if ui.button("Add...").clicked() {
            if let Some(files) = pick_executable("Additional applications").pick_files() {
                msgs.push(SettingsMsg::AddApplications(files));
            }
        }
        if ui
            .add_enabled(model.selected_app.is_some(), egui::Button::new("Remove"))
            .on_disabled_hover_text("Select an application first")
            .clicked()
        {
            msgs.push(SettingsMsg::RemoveSelectedApplication);
        }
    });
}

fn pick_executable(title: &str) -> rfd::FileDialog {
    rfd::FileDialog::new()
        .set_title(title)
        .add_filter("Executables", &["exe"])
}
