//! Application windows, each split into model / messages / logic / view.

pub mod main_window;
pub mod settings_window;
