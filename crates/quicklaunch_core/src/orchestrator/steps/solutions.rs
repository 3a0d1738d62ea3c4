//! Solutions step - open every listed solution in the IDE.

use crate::orchestrator::step::LaunchStep;
use crate::orchestrator::types::{LaunchContext, StepOutcome};

/// Starts the IDE once per solution file, in list order.
///
/// Each spawn gets the solution path as a single quoted argument. Solution
/// files are passed through as listed; the IDE reports missing ones itself.
#[derive(Debug, Default)]
pub struct SolutionsStep;

impl SolutionsStep {
    pub fn new() -> Self {
        Self
    }
}

impl LaunchStep for SolutionsStep {
    fn name(&self) -> &str {
        "Solutions"
    }

    fn error_title(&self) -> &str {
        "Error Launching Solution"
    }

    fn description(&self) -> &str {
        "Open each solution file in the IDE"
    }

    fn plan(&self, ctx: &LaunchContext) -> StepOutcome {
        let Some(ide) = ctx.existing(ctx.settings.visual_studio_path()) else {
            return StepOutcome::skipped("IDE path not set or not found");
        };

        if ctx.settings.solution_files.is_empty() {
            return StepOutcome::skipped("No solution files listed");
        }

        StepOutcome::Launch(
            ctx.settings
                .solution_files
                .iter()
                .map(|sln| ctx.request(ide).with_quoted_argument(sln))
                .collect(),
        )
    }
}
