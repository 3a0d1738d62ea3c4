//! Data models shared by the store, the orchestrator and the UI.

mod settings;

pub use settings::{optional_path, Settings};
