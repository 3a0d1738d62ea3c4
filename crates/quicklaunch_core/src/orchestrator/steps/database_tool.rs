//! Database tool step - start the database management studio.

use std::path::Path;

use crate::orchestrator::step::LaunchStep;
use crate::orchestrator::types::{LaunchContext, StepOutcome};

/// Starts the database tool with no arguments.
///
/// When `disable_ssms_if_open` is set and a process with the tool's
/// executable base name is already running, the step is skipped. The match
/// is by base name only, so an unrelated program with the same name also
/// counts as running.
#[derive(Debug, Default)]
pub struct DatabaseToolStep;

impl DatabaseToolStep {
    pub fn new() -> Self {
        Self
    }
}

impl LaunchStep for DatabaseToolStep {
    fn name(&self) -> &str {
        "Database Tool"
    }

    fn error_title(&self) -> &str {
        "Error Launching SSMS"
    }

    fn description(&self) -> &str {
        "Start the database management studio unless it is already open"
    }

    fn plan(&self, ctx: &LaunchContext) -> StepOutcome {
        let Some(tool) = ctx.existing(ctx.settings.sql_server_management_studio_path()) else {
            return StepOutcome::skipped("Database tool path not set or not found");
        };

        if ctx.settings.disable_ssms_if_open {
            if let Some(base) = base_name(tool) {
                if ctx.services.is_process_running(base) {
                    return StepOutcome::skipped(format!("{} is already running", base));
                }
            }
        }

        StepOutcome::Launch(vec![ctx.request(tool)])
    }
}

/// Executable file name without extension (`C:\SSMS\Ssms.exe` → `Ssms`).
///
/// Both `\` and `/` separate directories, whatever the host OS.
pub fn base_name(path: &Path) -> Option<&str> {
    let text = path.to_str()?;
    let file = match text.rfind(|c: char| c == '\\' || c == '/') {
        Some(idx) => &text[idx + 1..],
        None => text,
    };
    let stem = match file.rfind('.') {
        Some(idx) if idx > 0 => &file[..idx],
        _ => file,
    };
    (!stem.is_empty()).then_some(stem)
}
