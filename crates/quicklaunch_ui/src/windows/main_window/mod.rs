//! Main window: solution list plus the launch controls.

mod logic;
mod messages;
mod model;

pub use logic::{sync_startup_shortcut, update, MainEffect, Services};
pub use messages::MainMsg;
pub use model::MainWindowModel;

use eframe::egui;

/// Render the action bar; returns the messages it produced.
pub fn toolbar(ui: &mut egui::Ui, model: &MainWindowModel) -> Vec<MainMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        if ui.button("Add Solution...").clicked() {
            if let Some(files) = rfd::FileDialog::new()
                .set_title("Add solution files")
                .add_filter("Solution files", &["sln"])
                .pick_files()
            {
                msgs.push(MainMsg::AddSolutions(files));
            }
        }

        let has_selection = model.has_selection();
        if ui
            .add_enabled(has_selection, egui::Button::new("Remove Selected"))
            .on_disabled_hover_text("Select one or more solutions first")
            .clicked()
        {
            msgs.push(MainMsg::RemoveSelected);
        }
        if ui
            .add_enabled(has_selection, egui::Button::new("Launch Selected"))
            .on_disabled_hover_text("Select one or more solutions first")
            .clicked()
        {
            msgs.push(MainMsg::LaunchSelected);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Start").clicked() {
                msgs.push(MainMsg::StartAll);
            }
            if ui.button("Settings").clicked() {
                msgs.push(MainMsg::OpenSettings);
            }
        });
    });

    msgs
}

/// Render the solution list. Click toggles selection, double-click opens it.
pub fn solution_list(ui: &mut egui::Ui, model: &MainWindowModel) -> Vec<MainMsg> {
    let mut msgs = Vec::new();

    ui.label("Solutions");
    ui.add_space(4.0);

    if model.settings.solution_files.is_empty() {
        ui.label(
            egui::RichText::new("No solutions yet. Use \"Add Solution...\" to pick .sln files.")
                .small()
                .color(egui::Color32::from_gray(110)),
        );
        return msgs;
    }

    egui::Frame::group(ui.style()).show(ui, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            for solution in &model.settings.solution_files {
                let response = ui.add(
                    egui::Button::new(solution.as_str())
                        .selected(model.is_selected(solution))
                        .frame(false),
                );
                if response.double_clicked() {
                    msgs.push(MainMsg::LaunchSolution(solution.clone()));
                } else if response.clicked() {
                    msgs.push(MainMsg::ToggleSelected(solution.clone()));
                }
            }
        });
    });

    msgs
}

/// Render the status line.
pub fn status(ui: &mut egui::Ui, model: &MainWindowModel) {
    let text = model.status.as_deref().unwrap_or("Ready");
    ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
}
