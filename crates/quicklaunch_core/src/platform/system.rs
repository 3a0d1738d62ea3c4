//! The real OS implementation of the platform traits.

use std::path::{Path, PathBuf};

use super::errors::{PlatformError, PlatformResult};
use super::shortcut::{startup_folder, StartupShortcut};
use super::spawn::SpawnRequest;
use super::{PlatformServices, StartupRegistrar};

/// Platform services backed by the running OS.
#[derive(Debug, Clone, Default)]
pub struct SystemPlatform {
    /// Executable the startup shortcut points at.
    exe_path: Option<PathBuf>,
}

impl SystemPlatform {
    /// Create services for the current process.
    ///
    /// The startup shortcut will target the running executable.
    pub fn new() -> Self {
        let exe_path = match std::env::current_exe() {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("Could not resolve the running executable: {}", e);
                None
            }
        };
        Self { exe_path }
    }

    /// Create services whose startup shortcut targets `exe_path`.
    pub fn with_executable(exe_path: impl Into<PathBuf>) -> Self {
        Self {
            exe_path: Some(exe_path.into()),
        }
    }
}

impl PlatformServices for SystemPlatform {
    #[cfg(windows)]
    fn spawn(&self, request: &SpawnRequest) -> PlatformResult<()> {
        tracing::info!("Starting {}", request);
        super::windows::start_process(request)
    }

    #[cfg(not(windows))]
    fn spawn(&self, request: &SpawnRequest) -> PlatformResult<()> {
        use std::process::{Command, Stdio};

        if request.elevated {
            return Err(PlatformError::unsupported("Launching as administrator"));
        }

        tracing::info!("Starting {}", request);
        let mut cmd = Command::new(&request.program);
        if let Some(arg) = request.unquoted_argument() {
            cmd.arg(arg);
        }
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_child| ())
            .map_err(|e| PlatformError::io(format!("start {}", request.program.display()), e))
    }

    #[cfg(windows)]
    fn is_process_running(&self, base_name: &str) -> bool {
        match super::windows::running_image_names() {
            Ok(csv) => parse_tasklist_csv(&csv)
                .iter()
                .any(|image| matches_base_name(image, base_name)),
            Err(e) => {
                tracing::warn!("Could not list running processes: {}", e);
                false
            }
        }
    }

    #[cfg(not(windows))]
    fn is_process_running(&self, base_name: &str) -> bool {
        use std::process::{Command, Stdio};

        Command::new("pgrep")
            .arg("-x")
            .arg(base_name)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or_else(|e| {
                tracing::warn!("Could not run pgrep: {}", e);
                false
            })
    }
}

impl StartupRegistrar for SystemPlatform {
    fn set_launch_on_startup(&self, enable: bool) -> PlatformResult<()> {
        let folder = startup_folder()?;
        if enable {
            let target = self
                .exe_path
                .clone()
                .ok_or_else(|| PlatformError::unsupported("Locating the running executable"))?;
            StartupShortcut::new(&folder, target).create()
        } else {
            StartupShortcut::new(&folder, self.exe_path.clone().unwrap_or_default()).remove()
        }
    }
}

/// Extract image names from `tasklist /FO CSV /NH` output.
///
/// Each line looks like `"devenv.exe","1234","Console","1","250,000 K"`.
pub fn parse_tasklist_csv(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let rest = line.strip_prefix('"')?;
            let end = rest.find('"')?;
            Some(rest[..end].to_string())
        })
        .filter(|name| !name.is_empty())
        .collect()
}

/// Whether an image name (`Ssms.exe`) has the given base name (`Ssms`).
///
/// Case-insensitive, as Windows file names are.
#[cfg_attr(not(windows), allow(dead_code))]
fn matches_base_name(image: &str, base_name: &str) -> bool {
    Path::new(image)
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.eq_ignore_ascii_case(base_name))
}
