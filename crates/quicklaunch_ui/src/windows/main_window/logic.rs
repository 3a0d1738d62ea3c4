//! Main window update logic

use quicklaunch_core::config::SettingsStore;
use quicklaunch_core::models::Settings;
use quicklaunch_core::orchestrator::{launch_all, launch_solution};
use quicklaunch_core::platform::{Notifier, PlatformServices, StartupRegistrar};

use super::messages::MainMsg;
use super::model::MainWindowModel;

/// Error dialog titles
pub const SAVE_ERROR_TITLE: &str = "Error Saving Settings";
pub const STARTUP_ERROR_TITLE: &str = "Startup Shortcut Error";

/// Everything the main window talks to outside its own state
pub struct Services<'a> {
    pub store: &'a SettingsStore,
    pub platform: &'a dyn PlatformServices,
    pub startup: &'a dyn StartupRegistrar,
    pub notifier: &'a dyn Notifier,
}

/// Follow-up the app shell has to perform
#[derive(Debug, Clone, PartialEq)]
pub enum MainEffect {
    /// Show the settings dialog on this working copy
    OpenSettings(Settings),
}

/// Apply a message to the main window model
pub fn update(model: &mut MainWindowModel, msg: MainMsg, services: &Services) -> Option<MainEffect> {
    match msg {
        MainMsg::AddSolutions(files) => {
            let added = model
                .settings
                .add_solution_files(files.iter().map(|p| p.display().to_string()));
            tracing::info!("Added {} solution file(s)", added);
            save(model, services);
        }
        MainMsg::ToggleSelected(solution) => model.toggle_selected(&solution),
        MainMsg::RemoveSelected => {
            let selected = std::mem::take(&mut model.selected);
            let removed = model
                .settings
                .remove_solution_files(selected.iter().map(String::as_str));
            tracing::info!("Removed {} solution file(s)", removed);
            save(model, services);
        }
        MainMsg::LaunchSolution(solution) => {
            launch_solution(&model.settings, &solution, services.platform, services.notifier);
        }
        MainMsg::LaunchSelected => {
            let selected: Vec<String> = model
                .settings
                .solution_files
                .iter()
                .filter(|s| model.is_selected(s))
                .cloned()
                .collect();
            for solution in selected {
                launch_solution(&model.settings, &solution, services.platform, services.notifier);
            }
        }
        MainMsg::StartAll => {
            let report = launch_all(&model.settings, services.platform, services.notifier);
            model.status = Some(report.summary());
        }
        MainMsg::OpenSettings => return Some(MainEffect::OpenSettings(model.settings.clone())),
        MainMsg::SettingsClosed(Some(settings)) => {
            model.settings = settings;
            model.prune_selection();
            save(model, services);
            sync_startup_shortcut(model.settings.launch_on_startup, services);
        }
        MainMsg::SettingsClosed(None) => {}
    }
    None
}

/// Create or remove the startup shortcut, reporting failure to the user
pub fn sync_startup_shortcut(enable: bool, services: &Services) {
    if let Err(e) = services.startup.set_launch_on_startup(enable) {
        tracing::error!("Failed to update startup shortcut: {}", e);
        services.notifier.error(STARTUP_ERROR_TITLE, &e.to_string());
    }
}

fn save(model: &mut MainWindowModel, services: &Services) {
    match services.store.save(&model.settings) {
        Ok(()) => model.status = Some("Settings saved".to_string()),
        Err(e) => {
            tracing::error!("{}", e);
            services.notifier.error(SAVE_ERROR_TITLE, &e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    use quicklaunch_core::platform::{PlatformError, PlatformResult, SpawnRequest};
    use tempfile::tempdir;

    #[derive(Default)]
    struct FakeOs {
        files: Vec<PathBuf>,
        spawns: RefCell<Vec<SpawnRequest>>,
        startup_calls: RefCell<Vec<bool>>,
        startup_fails: bool,
    }

    impl PlatformServices for FakeOs {
        fn spawn(&self, request: &SpawnRequest) -> PlatformResult<()> {
            self.spawns.borrow_mut().push(request.clone());
            Ok(())
        }

        fn is_process_running(&self, _base_name: &str) -> bool {
            false
        }

        fn file_exists(&self, path: &Path) -> bool {
            self.files.iter().any(|f| f == path)
        }
    }

    impl StartupRegistrar for FakeOs {
        fn set_launch_on_startup(&self, enable: bool) -> PlatformResult<()> {
            self.startup_calls.borrow_mut().push(enable);
            if self.startup_fails {
                Err(PlatformError::unsupported("Startup shortcut creation"))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct Errors(RefCell<Vec<String>>);

    impl Notifier for Errors {
        fn error(&self, title: &str, _message: &str) {
            self.0.borrow_mut().push(title.to_string());
        }
    }

    fn services<'a>(store: &'a SettingsStore, os: &'a FakeOs, errors: &'a Errors) -> Services<'a> {
        Services {
            store,
            platform: os,
            startup: os,
            notifier: errors,
        }
    }

    #[test]
    fn adding_solutions_dedups_and_saves() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("usersettings.json"));
        let (os, errors) = (FakeOs::default(), Errors::default());
        let mut model = MainWindowModel::default();

        let msg = MainMsg::AddSolutions(vec!["A.sln".into(), "B.sln".into(), "A.sln".into()]);
        update(&mut model, msg, &services(&store, &os, &errors));

        assert_eq!(model.settings.solution_files, vec!["A.sln", "B.sln"]);
        assert_eq!(store.load(), model.settings);
    }

    #[test]
    fn picked_solutions_are_kept_while_settings_are_open() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("usersettings.json"));
        let (os, errors) = (FakeOs::default(), Errors::default());
        let mut model = MainWindowModel::default();
        let svc = services(&store, &os, &errors);

        update(&mut model, MainMsg::OpenSettings, &svc);
        update(&mut model, MainMsg::AddSolutions(vec!["A.sln".into()]), &svc);
        update(&mut model, MainMsg::SettingsClosed(None), &svc);

        assert_eq!(model.settings.solution_files, vec!["A.sln"]);
        assert_eq!(store.load().solution_files, vec!["A.sln"]);
    }

    #[test]
    fn remove_selected_clears_selection() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("usersettings.json"));
        let (os, errors) = (FakeOs::default(), Errors::default());
        let mut model = MainWindowModel::new(Settings {
            solution_files: vec!["A.sln".into(), "B.sln".into()],
            ..Default::default()
        });
        let svc = services(&store, &os, &errors);

        update(&mut model, MainMsg::ToggleSelected("A.sln".into()), &svc);
        update(&mut model, MainMsg::RemoveSelected, &svc);

        assert_eq!(model.settings.solution_files, vec!["B.sln"]);
        assert!(!model.has_selection());
        assert_eq!(store.load().solution_files, vec!["B.sln"]);
    }

    #[test]
    fn save_failure_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("usersettings.json");
        std::fs::create_dir_all(&path).unwrap();
        let store = SettingsStore::new(&path);
        let (os, errors) = (FakeOs::default(), Errors::default());
        let mut model = MainWindowModel::default();

        update(
            &mut model,
            MainMsg::AddSolutions(vec!["A.sln".into()]),
            &services(&store, &os, &errors),
        );

        assert_eq!(*errors.0.borrow(), vec![SAVE_ERROR_TITLE.to_string()]);
        assert_eq!(model.settings.solution_files, vec!["A.sln"]);
    }

    #[test]
    fn open_settings_hands_out_a_copy() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("usersettings.json"));
        let (os, errors) = (FakeOs::default(), Errors::default());
        let mut model = MainWindowModel::new(Settings {
            launch_text_editor: true,
            ..Default::default()
        });

        let effect = update(&mut model, MainMsg::OpenSettings, &services(&store, &os, &errors));
        assert_eq!(effect, Some(MainEffect::OpenSettings(model.settings.clone())));
    }

    #[test]
    fn confirmed_settings_are_saved_and_shortcut_synced() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("usersettings.json"));
        let (os, errors) = (FakeOs::default(), Errors::default());
        let mut model = MainWindowModel::default();
        let edited = Settings {
            launch_on_startup: true,
            ..Default::default()
        };

        update(
            &mut model,
            MainMsg::SettingsClosed(Some(edited.clone())),
            &services(&store, &os, &errors),
        );

        assert_eq!(model.settings, edited);
        assert_eq!(store.load(), edited);
        assert_eq!(*os.startup_calls.borrow(), vec![true]);
    }

    #[test]
    fn cancelled_settings_change_nothing() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("usersettings.json"));
        let (os, errors) = (FakeOs::default(), Errors::default());
        let mut model = MainWindowModel::default();

        update(&mut model, MainMsg::SettingsClosed(None), &services(&store, &os, &errors));

        assert!(!store.path().exists());
        assert!(os.startup_calls.borrow().is_empty());
    }

    #[test]
    fn shortcut_failure_is_reported() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("usersettings.json"));
        let os = FakeOs {
            startup_fails: true,
            ..Default::default()
        };
        let errors = Errors::default();

        sync_startup_shortcut(true, &services(&store, &os, &errors));

        assert_eq!(*errors.0.borrow(), vec![STARTUP_ERROR_TITLE.to_string()]);
    }

    #[test]
    fn start_all_sets_status() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("usersettings.json"));
        let os = FakeOs {
            files: vec![PathBuf::from("devenv.exe")],
            ..Default::default()
        };
        let errors = Errors::default();
        let mut model = MainWindowModel::new(Settings {
            visual_studio_path: Some("devenv.exe".into()),
            solution_files: vec!["A.sln".into()],
            ..Default::default()
        });

        update(&mut model, MainMsg::StartAll, &services(&store, &os, &errors));

        assert_eq!(os.spawns.borrow().len(), 1);
        assert_eq!(model.status.as_deref(), Some("Launched 1 process(es)"));
    }

    #[test]
    fn launch_selected_uses_list_order() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("usersettings.json"));
        let os = FakeOs {
            files: vec!["devenv.exe".into(), "A.sln".into(), "B.sln".into()],
            ..Default::default()
        };
        let errors = Errors::default();
        let mut model = MainWindowModel::new(Settings {
            visual_studio_path: Some("devenv.exe".into()),
            solution_files: vec!["A.sln".into(), "B.sln".into()],
            ..Default::default()
        });
        model.selected = vec!["B.sln".into(), "A.sln".into()];

        update(&mut model, MainMsg::LaunchSelected, &services(&store, &os, &errors));

        let args: Vec<_> = os
            .spawns
            .borrow()
            .iter()
            .map(|r| r.argument.clone().unwrap_or_default())
            .collect();
        assert_eq!(args, vec!["\"A.sln\"", "\"B.sln\""]);
    }
}
