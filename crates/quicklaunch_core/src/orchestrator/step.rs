//! Launch step trait definition.
//!
//! All launch steps implement this trait, providing a consistent
//! interface for deciding what to spawn.

use super::types::{LaunchContext, StepOutcome};

/// Trait for launch steps.
///
/// A step only decides; the pipeline performs the spawns so that failure
/// handling and reporting live in one place.
///
/// # Example
///
/// ```ignore
/// struct TextEditorStep;
///
/// impl LaunchStep for TextEditorStep {
///     fn name(&self) -> &str { "Text Editor" }
///     fn error_title(&self) -> &str { "Error Launching Text Editor" }
///
///     fn plan(&self, ctx: &LaunchContext) -> StepOutcome {
///         match ctx.existing(ctx.settings.text_editor_path()) {
///             Some(editor) => StepOutcome::Launch(vec![ctx.request(editor)]),
///             None => StepOutcome::skipped("Text editor not found"),
///         }
///     }
/// }
/// ```
pub trait LaunchStep {
    /// Step name, for logging and failure records.
    fn name(&self) -> &str;

    /// Title of the error dialog shown when one of this step's spawns fails.
    fn error_title(&self) -> &str;

    /// Decide which processes to start.
    fn plan(&self, ctx: &LaunchContext) -> StepOutcome;

    /// Human-readable description of what this step does.
    fn description(&self) -> &str {
        self.name()
    }
}
