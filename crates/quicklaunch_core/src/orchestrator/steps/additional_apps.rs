//! Additional applications step.

use std::path::Path;

use crate::orchestrator::step::LaunchStep;
use crate::orchestrator::types::{LaunchContext, StepOutcome};

/// Starts every listed additional application that exists on disk.
#[derive(Debug, Default)]
pub struct AdditionalAppsStep;

impl AdditionalAppsStep {
    pub fn new() -> Self {
        Self
    }
}

impl LaunchStep for AdditionalAppsStep {
    fn name(&self) -> &str {
        "Additional Applications"
    }

    fn error_title(&self) -> &str {
        "Error Launching Additional Application"
    }

    fn plan(&self, ctx: &LaunchContext) -> StepOutcome {
        let requests: Vec<_> = ctx
            .settings
            .additional_applications
            .iter()
            .map(Path::new)
            .filter(|app| {
                let exists = ctx.services.file_exists(app);
                if !exists {
                    tracing::debug!("Skipping missing application {}", app.display());
                }
                exists
            })
            .map(|app| ctx.request(app))
            .collect();

        if requests.is_empty() {
            StepOutcome::skipped("No additional applications found")
        } else {
            StepOutcome::Launch(requests)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Settings;
    use crate::orchestrator::testing::FakePlatform;

    #[test]
    fn only_existing_apps_are_launched() {
        let platform = FakePlatform::with_files(["a.exe", "c.exe"]);
        let settings = Settings {
            additional_applications: vec!["a.exe".into(), "b.exe".into(), "c.exe".into()],
            ..Default::default()
        };
        let ctx = LaunchContext::new(&settings, &platform);

        let StepOutcome::Launch(requests) = AdditionalAppsStep::new().plan(&ctx) else {
            panic!("expected launch");
        };
        let programs: Vec<_> = requests.iter().map(|r| r.program.clone()).collect();
        assert_eq!(programs, vec![Path::new("a.exe"), Path::new("c.exe")]);
    }

    #[test]
    fn empty_list_skips() {
        let platform = FakePlatform::default();
        let settings = Settings::default();
        let ctx = LaunchContext::new(&settings, &platform);

        assert!(matches!(
            AdditionalAppsStep::new().plan(&ctx),
            StepOutcome::Skipped(_)
        ));
    }
}
