//! Development Environment Quicklaunch - main entry point
//!
//! Handles:
//! - Application-level logging initialization
//! - Settings loading
//! - Startup shortcut sync
//! - Window launch

use std::path::PathBuf;

use anyhow::anyhow;
use eframe::egui;

use quicklaunch_core::config::{SettingsStore, SETTINGS_FILE_NAME};
use quicklaunch_core::logging::{default_logs_dir, init_tracing, init_tracing_with_file, LogLevel};
use quicklaunch_core::platform::SystemPlatform;

mod app;
mod notifier;
mod windows;

use app::QuicklaunchApp;

fn main() -> anyhow::Result<()> {
    let _log_guard = match default_logs_dir() {
        Ok(dir) => init_tracing_with_file(LogLevel::Info, &dir),
        Err(e) => {
            init_tracing(LogLevel::Info);
            tracing::warn!("No app data folder for logs: {}", e);
            None
        }
    };

    tracing::info!("Development Environment Quicklaunch {}", quicklaunch_core::version());

    let store = SettingsStore::default_location().unwrap_or_else(|e| {
        tracing::warn!("{}; using settings file in working directory", e);
        SettingsStore::new(PathBuf::from(SETTINGS_FILE_NAME))
    });
    tracing::info!("Settings file: {}", store.path().display());

    let settings = store.load();
    let app = QuicklaunchApp::new(settings, store, SystemPlatform::new());
    app.sync_startup_shortcut();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 480.0])
            .with_min_inner_size([520.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Development Environment Quicklaunch",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow!("UI event loop failed: {}", e))
}
