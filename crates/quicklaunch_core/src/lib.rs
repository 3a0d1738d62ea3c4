//! Quicklaunch Core - Backend logic for Development Environment Quicklaunch
//!
//! This crate contains the settings record, its JSON persistence, and the
//! launch orchestrator, with zero UI dependencies. OS specifics live behind
//! the traits in [`platform`].

pub mod config;
pub mod logging;
pub mod models;
pub mod orchestrator;
pub mod platform;

/// Directory name used under the per-user application-data folder.
pub const APP_DIR_NAME: &str = "DevelopmentEnvironmentQuicklaunch";

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
