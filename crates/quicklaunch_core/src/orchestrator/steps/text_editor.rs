//! Text editor step.

use crate::orchestrator::step::LaunchStep;
use crate::orchestrator::types::{LaunchContext, StepOutcome};

/// Starts the text editor when enabled.
#[derive(Debug, Default)]
pub struct TextEditorStep;

impl TextEditorStep {
    pub fn new() -> Self {
        Self
    }
}

impl LaunchStep for TextEditorStep {
    fn name(&self) -> &str {
        "Text Editor"
    }

    fn error_title(&self) -> &str {
        "Error Launching Text Editor"
    }

    fn plan(&self, ctx: &LaunchContext) -> StepOutcome {
        if !ctx.settings.launch_text_editor {
            return StepOutcome::skipped("Text editor launch disabled");
        }

        match ctx.existing(ctx.settings.text_editor_path()) {
            Some(editor) => StepOutcome::Launch(vec![ctx.request(editor)]),
            None => StepOutcome::skipped("Text editor path not set or not found"),
        }
    }
}
