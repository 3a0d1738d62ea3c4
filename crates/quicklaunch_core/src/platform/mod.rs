//! OS services used by the launcher.
//!
//! Everything OS-specific sits behind the traits in this module so that
//! the store and the orchestrator stay platform neutral:
//!
//! - [`PlatformServices`] - spawn processes, look up running ones, check files
//! - [`StartupRegistrar`] - manage the login shortcut
//! - [`Notifier`] - report a titled error to the user
//!
//! [`SystemPlatform`] is the single real implementation, with per-OS code
//! selected at compile time. Tests substitute recording fakes.

mod errors;
mod notify;
mod shortcut;
mod spawn;
mod system;
#[cfg(windows)]
mod windows;

use std::path::Path;

pub use errors::{PlatformError, PlatformResult};
pub use notify::{LogNotifier, Notifier};
pub use shortcut::{startup_folder, StartupShortcut, SHORTCUT_FILE_NAME};
pub use spawn::{quote_argument, SpawnRequest};
pub use system::{parse_tasklist_csv, SystemPlatform};

/// Process-level OS operations needed by the orchestrator.
pub trait PlatformServices {
    /// Start a process and return without waiting for it.
    ///
    /// The executable is resolved the way the OS shell would resolve it.
    /// When `request.elevated` is set the OS is asked for administrative
    /// rights, which the user may decline.
    fn spawn(&self, request: &SpawnRequest) -> PlatformResult<()>;

    /// Whether any running process has the given executable base name
    /// (file name without extension).
    fn is_process_running(&self, base_name: &str) -> bool;

    /// Whether `path` names an existing regular file.
    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Registration of the launcher with the OS login sequence.
pub trait StartupRegistrar {
    /// Create the startup shortcut when `enable` is set, remove it otherwise.
    fn set_launch_on_startup(&self, enable: bool) -> PlatformResult<()>;
}
