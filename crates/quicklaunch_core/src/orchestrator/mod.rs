//! Launch orchestrator for starting the configured tools.
//!
//! A launch run is a fixed sequence of steps. Each step inspects the
//! settings and decides which processes to start; the pipeline performs the
//! spawns, reports each failure to the user and moves on.
//!
//! # Architecture
//!
//! ```text
//! LaunchPipeline
//!     ├── Step: Solutions                (IDE once per solution file)
//!     ├── Step: Database Tool            (unless already open)
//!     ├── Step: Text Editor              (when enabled)
//!     └── Step: Additional Applications  (each existing entry)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use quicklaunch_core::config::SettingsStore;
//! use quicklaunch_core::orchestrator::launch_all;
//! use quicklaunch_core::platform::{LogNotifier, SystemPlatform};
//!
//! let settings = SettingsStore::default_location().unwrap().load();
//! let report = launch_all(&settings, &SystemPlatform::new(), &LogNotifier);
//! println!("{}", report.summary());
//! ```

mod errors;
mod pipeline;
mod step;
pub mod steps;
#[cfg(test)]
pub(crate) mod testing;
mod types;

pub use errors::LaunchFailure;
pub use pipeline::LaunchPipeline;
pub use step::LaunchStep;
pub use steps::{AdditionalAppsStep, DatabaseToolStep, SolutionsStep, TextEditorStep};
pub use types::{LaunchContext, LaunchReport, StepOutcome};

use crate::models::Settings;
use crate::platform::{Notifier, PlatformServices};

/// Create the standard pipeline with all steps in the correct order.
///
/// 1. Solutions - open each solution in the IDE
/// 2. Database Tool - start the database tool unless already open
/// 3. Text Editor - start the text editor if enabled
/// 4. Additional Applications - start each extra executable
pub fn create_standard_pipeline() -> LaunchPipeline {
    LaunchPipeline::new()
        .with_step(SolutionsStep::new())
        .with_step(DatabaseToolStep::new())
        .with_step(TextEditorStep::new())
        .with_step(AdditionalAppsStep::new())
}

/// Run the standard pipeline for the given settings.
pub fn launch_all(
    settings: &Settings,
    services: &dyn PlatformServices,
    notifier: &dyn Notifier,
) -> LaunchReport {
    let ctx = LaunchContext::new(settings, services);
    create_standard_pipeline().run(&ctx, notifier)
}

/// Open a single solution in the IDE.
///
/// Nothing is started unless the IDE and the solution file both exist.
/// Returns `true` if the IDE was started.
pub fn launch_solution(
    settings: &Settings,
    solution: &str,
    services: &dyn PlatformServices,
    notifier: &dyn Notifier,
) -> bool {
    let step = SolutionsStep::new();
    let ctx = LaunchContext::new(settings, services);

    let Some(ide) = ctx.existing(settings.visual_studio_path()) else {
        tracing::info!("Cannot open {}: IDE path not set or not found", solution);
        return false;
    };
    if !services.file_exists(std::path::Path::new(solution)) {
        tracing::info!("Cannot open {}: solution file not found", solution);
        return false;
    }

    let request = ctx.request(ide).with_quoted_argument(solution);
    match services.spawn(&request) {
        Ok(()) => {
            tracing::info!("Started {}", request);
            true
        }
        Err(e) => {
            tracing::error!("Failed to start {}: {}", request, e);
            notifier.error(step.error_title(), &e.to_string());
            false
        }
    }
}
