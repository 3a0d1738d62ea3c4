//! Pipeline runner that executes launch steps in sequence.

use crate::platform::Notifier;

use super::errors::LaunchFailure;
use super::step::LaunchStep;
use super::types::{LaunchContext, LaunchReport, StepOutcome};

/// Pipeline that runs a sequence of launch steps.
///
/// Every step runs regardless of earlier failures, and every spawn within a
/// step is attempted regardless of earlier spawns. Each failure is shown to
/// the user through the notifier and recorded in the report.
pub struct LaunchPipeline {
    /// Steps to execute in order.
    steps: Vec<Box<dyn LaunchStep>>,
}

impl LaunchPipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Add a step to the pipeline.
    pub fn add_step<S: LaunchStep + 'static>(&mut self, step: S) -> &mut Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Add a step (builder pattern).
    pub fn with_step<S: LaunchStep + 'static>(mut self, step: S) -> Self {
        self.add_step(step);
        self
    }

    /// Run every step against the context.
    pub fn run(&self, ctx: &LaunchContext, notifier: &dyn Notifier) -> LaunchReport {
        let mut report = LaunchReport::default();

        for step in &self.steps {
            let step_name = step.name();
            tracing::debug!("Planning '{}': {}", step_name, step.description());

            match step.plan(ctx) {
                StepOutcome::Launch(requests) => {
                    for request in requests {
                        match ctx.services.spawn(&request) {
                            Ok(()) => {
                                tracing::info!("{}: started {}", step_name, request);
                                report.spawned.push(request);
                            }
                            Err(e) => {
                                tracing::error!("{}: failed to start {}: {}", step_name, request, e);
                                notifier.error(step.error_title(), &e.to_string());
                                report.failures.push(LaunchFailure::new(
                                    step_name,
                                    step.error_title(),
                                    request.to_string(),
                                    e,
                                ));
                            }
                        }
                    }
                }
                StepOutcome::Skipped(reason) => {
                    tracing::info!("{} skipped: {}", step_name, reason);
                    report.skipped.push((step_name.to_string(), reason));
                }
            }
        }

        tracing::info!("{}", report.summary());
        report
    }

    /// Get step names in order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }
}

impl Default for LaunchPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Settings;
    use crate::orchestrator::testing::{FakePlatform, RecordingNotifier};
    use crate::platform::SpawnRequest;

    struct FixedStep {
        name: &'static str,
        programs: Vec<&'static str>,
    }

    impl LaunchStep for FixedStep {
        fn name(&self) -> &str {
            self.name
        }

        fn error_title(&self) -> &str {
            "Fixed Error"
        }

        fn plan(&self, _ctx: &LaunchContext) -> StepOutcome {
            if self.programs.is_empty() {
                StepOutcome::skipped("empty")
            } else {
                StepOutcome::Launch(self.programs.iter().map(SpawnRequest::new).collect())
            }
        }
    }

    #[test]
    fn builder_keeps_order() {
        let pipeline = LaunchPipeline::new()
            .with_step(FixedStep { name: "one", programs: vec![] })
            .with_step(FixedStep { name: "two", programs: vec![] });

        assert_eq!(pipeline.step_names(), vec!["one", "two"]);
    }

    #[test]
    fn description_defaults_to_name() {
        let step = FixedStep { name: "one", programs: vec![] };
        assert_eq!(step.description(), "one");
    }

    #[test]
    fn failure_does_not_stop_later_spawns() {
        crate::logging::init_test_tracing();

        let platform = FakePlatform::default().failing("bad.exe");
        let notifier = RecordingNotifier::default();
        let settings = Settings::default();
        let ctx = LaunchContext::new(&settings, &platform);

        let pipeline = LaunchPipeline::new()
            .with_step(FixedStep { name: "first", programs: vec!["bad.exe", "good.exe"] })
            .with_step(FixedStep { name: "second", programs: vec!["later.exe"] });

        let report = pipeline.run(&ctx, &notifier);

        assert_eq!(
            platform.spawned_programs(),
            vec![
                std::path::PathBuf::from("bad.exe"),
                "good.exe".into(),
                "later.exe".into()
            ]
        );
        assert_eq!(report.spawned.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].step, "first");
        assert_eq!(notifier.titles(), vec!["Fixed Error"]);
    }

    #[test]
    fn skipped_steps_are_reported() {
        let platform = FakePlatform::default();
        let notifier = RecordingNotifier::default();
        let settings = Settings::default();
        let ctx = LaunchContext::new(&settings, &platform);

        let report = LaunchPipeline::new()
            .with_step(FixedStep { name: "idle", programs: vec![] })
            .run(&ctx, &notifier);

        assert_eq!(report.skipped, vec![("idle".to_string(), "empty".to_string())]);
        assert!(report.is_clean());
        assert!(notifier.errors.borrow().is_empty());
    }
}
