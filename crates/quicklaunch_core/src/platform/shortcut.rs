//! Startup-folder shortcut management.

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use super::errors::{PlatformError, PlatformResult};

/// File name of the shortcut placed in the startup folder.
pub const SHORTCUT_FILE_NAME: &str = "DevelopmentEnvironmentQuicklaunch.lnk";

/// The per-user startup folder.
///
/// `%APPDATA%\Microsoft\Windows\Start Menu\Programs\Startup`
pub fn startup_folder() -> PlatformResult<PathBuf> {
    let dirs = BaseDirs::new().ok_or(PlatformError::NoStartupFolder)?;
    Ok(dirs
        .data_dir()
        .join("Microsoft")
        .join("Windows")
        .join("Start Menu")
        .join("Programs")
        .join("Startup"))
}

/// A shortcut file pointing at an executable.
#[derive(Debug, Clone)]
pub struct StartupShortcut {
    lnk_path: PathBuf,
    target: PathBuf,
}

impl StartupShortcut {
    /// Shortcut at `folder/DevelopmentEnvironmentQuicklaunch.lnk` targeting `target`.
    pub fn new(folder: &Path, target: impl Into<PathBuf>) -> Self {
        Self {
            lnk_path: folder.join(SHORTCUT_FILE_NAME),
            target: target.into(),
        }
    }

    /// Path of the `.lnk` file.
    pub fn path(&self) -> &Path {
        &self.lnk_path
    }

    /// Whether the shortcut file is present.
    pub fn exists(&self) -> bool {
        self.lnk_path.exists()
    }

    /// Write the shortcut, with the target's folder as working directory.
    #[cfg(windows)]
    pub fn create(&self) -> PlatformResult<()> {
        if let Some(parent) = self.lnk_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| PlatformError::io(format!("create {}", parent.display()), e))?;
        }
        let working_dir = self.target.parent().unwrap_or_else(|| Path::new(""));
        super::windows::create_shortcut(&self.lnk_path, &self.target, working_dir)?;
        tracing::info!("Created startup shortcut {}", self.lnk_path.display());
        Ok(())
    }

    /// Write the shortcut, with the target's folder as working directory.
    #[cfg(not(windows))]
    pub fn create(&self) -> PlatformResult<()> {
        Err(PlatformError::unsupported(format!(
            "Startup shortcut creation for {}",
            self.target.display()
        )))
    }

    /// Delete the shortcut if it exists.
    pub fn remove(&self) -> PlatformResult<()> {
        if !self.exists() {
            return Ok(());
        }
        fs::remove_file(&self.lnk_path).map_err(|e| {
            PlatformError::io(format!("remove {}", self.lnk_path.display()), e)
        })?;
        tracing::info!("Removed startup shortcut {}", self.lnk_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn shortcut_path_adds_lnk() {
        let base = PathBuf::from(r"C:\Startup");
        let sc = StartupShortcut::new(&base, r"C:\Apps\dev-quicklaunch.exe");
        assert_eq!(sc.path(), base.join("DevelopmentEnvironmentQuicklaunch.lnk"));
    }

    #[test]
    fn remove_deletes_existing_file() {
        let dir = tempdir().unwrap();
        let sc = StartupShortcut::new(dir.path(), "app.exe");
        fs::write(sc.path(), b"lnk").unwrap();

        sc.remove().unwrap();
        assert!(!sc.exists());
    }

    #[test]
    fn remove_without_file_is_ok() {
        let dir = tempdir().unwrap();
        let sc = StartupShortcut::new(dir.path(), "app.exe");
        assert!(sc.remove().is_ok());
    }

    #[test]
    fn startup_folder_ends_with_startup() {
        if let Ok(folder) = startup_folder() {
            assert!(folder.ends_with(Path::new("Programs").join("Startup")));
        }
    }
}
