//! Launch step implementations.

mod additional_apps;
mod database_tool;
mod solutions;
mod text_editor;

pub use additional_apps::AdditionalAppsStep;
pub use database_tool::{base_name, DatabaseToolStep};
pub use solutions::SolutionsStep;
pub use text_editor::TextEditorStep;
