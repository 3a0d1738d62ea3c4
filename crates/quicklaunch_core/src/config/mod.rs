//! Settings persistence for Development Environment Quicklaunch.
//!
//! This module provides:
//! - A JSON settings file at a fixed per-user location
//! - Default fallback when the file is missing or unreadable
//! - Whole-record saves with parent directory creation
//!
//! # Example
//!
//! ```no_run
//! use quicklaunch_core::config::SettingsStore;
//!
//! let store = SettingsStore::default_location().unwrap();
//! let mut settings = store.load();
//!
//! settings.add_solution_file(r"C:\src\App.sln");
//! store.save(&settings).unwrap();
//! ```

mod manager;

pub use manager::{app_data_dir, ConfigError, ConfigResult, SettingsStore, SETTINGS_FILE_NAME};
