//! Top-level egui application shell.

use eframe::egui;

use quicklaunch_core::config::SettingsStore;
use quicklaunch_core::models::Settings;
use quicklaunch_core::platform::SystemPlatform;

use crate::notifier::DialogNotifier;
use crate::windows::main_window::{self, MainEffect, MainMsg, MainWindowModel, Services};
use crate::windows::settings_window::{self, DialogResult, SettingsModel};

/// Main window plus the optional settings dialog.
pub struct QuicklaunchApp {
    main: MainWindowModel,
    /// Open settings dialog, if any
    settings_dialog: Option<SettingsModel>,
    store: SettingsStore,
    platform: SystemPlatform,
    notifier: DialogNotifier,
    inbox: Vec<MainMsg>,
}

impl QuicklaunchApp {
    pub fn new(settings: Settings, store: SettingsStore, platform: SystemPlatform) -> Self {
        Self {
            main: MainWindowModel::new(settings),
            settings_dialog: None,
            store,
            platform,
            notifier: DialogNotifier,
            inbox: Vec::new(),
        }
    }

    /// Bring the startup shortcut in line with the loaded settings.
    pub fn sync_startup_shortcut(&self) {
        main_window::sync_startup_shortcut(self.main.settings.launch_on_startup, &self.services());
    }

    fn services(&self) -> Services<'_> {
        Services {
            store: &self.store,
            platform: &self.platform,
            startup: &self.platform,
            notifier: &self.notifier,
        }
    }

    fn process_inbox(&mut self) {
        let services = Services {
            store: &self.store,
            platform: &self.platform,
            startup: &self.platform,
            notifier: &self.notifier,
        };

        for msg in std::mem::take(&mut self.inbox) {
            tracing::debug!("main window: {:?}", msg);
            if let Some(MainEffect::OpenSettings(settings)) =
                main_window::update(&mut self.main, msg, &services)
            {
                self.settings_dialog = Some(SettingsModel::from_settings(&settings));
            }
        }
    }

    fn render_settings_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.settings_dialog.as_mut() else {
            return;
        };

        let mut closed = None;
        for msg in settings_window::view(ctx, dialog) {
            if let Some(result) = settings_window::update(dialog, msg) {
                closed = Some(result);
                break;
            }
        }

        if let Some(result) = closed {
            self.settings_dialog = None;
            let edited = match result {
                DialogResult::Confirmed(settings) => Some(settings),
                DialogResult::Cancelled => None,
            };
            self.inbox.push(MainMsg::SettingsClosed(edited));
        }
    }
}

impl eframe::App for QuicklaunchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_inbox();

        let dialog_open = self.settings_dialog.is_some();
        let mut msgs = Vec::new();

        // The dialog is modal; the main window controls are inert while it is open.
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            if dialog_open {
                ui.disable();
            }
            ui.add_space(6.0);
            ui.heading("Development Environment Quicklaunch");
            ui.add_space(4.0);
            msgs.extend(main_window::toolbar(ui, &self.main));
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                main_window::status(ui, &self.main);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if dialog_open {
                ui.disable();
            }
            ui.add_space(8.0);
            msgs.extend(main_window::solution_list(ui, &self.main));
        });

        self.inbox.extend(msgs);

        self.render_settings_dialog(ctx);

        if !self.inbox.is_empty() {
            ctx.request_repaint();
        }
    }
}
