//! Windows helpers built on PowerShell and `tasklist`.

use std::os::windows::process::CommandExt;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use super::errors::{PlatformError, PlatformResult};
use super::spawn::SpawnRequest;

const CREATE_NO_WINDOW: u32 = 0x08000000;

/// Start a process through `Start-Process`, which uses the shell's
/// executable resolution and handles the `RunAs` elevation prompt.
pub(super) fn start_process(request: &SpawnRequest) -> PlatformResult<()> {
    run_powershell("Start-Process", &start_process_script(request)).map(|_| ())
}

/// Build the `Start-Process` invocation for a request.
pub(super) fn start_process_script(request: &SpawnRequest) -> String {
    let mut script = format!(
        "Start-Process -FilePath {}",
        ps_quote(&request.program.display().to_string())
    );
    if let Some(arg) = &request.argument {
        script.push_str(&format!(" -ArgumentList {}", ps_quote(arg)));
    }
    if request.elevated {
        script.push_str(" -Verb RunAs");
    }
    script.push_str(" -ErrorAction Stop");
    script
}

/// Create a `.lnk` file via the WScript.Shell COM object.
pub(super) fn create_shortcut(lnk: &Path, target: &Path, working_dir: &Path) -> PlatformResult<()> {
    let script = format!(
        "$WshShell = New-Object -ComObject WScript.Shell; \
         $Shortcut = $WshShell.CreateShortcut({}); \
         $Shortcut.TargetPath = {}; \
         $Shortcut.WorkingDirectory = {}; \
         $Shortcut.Save();",
        ps_quote(&lnk.display().to_string()),
        ps_quote(&target.display().to_string()),
        ps_quote(&working_dir.display().to_string()),
    );
    run_powershell("CreateShortcut", &script).map(|_| ())
}

/// Image names of all running processes, as reported by `tasklist`.
pub(super) fn running_image_names() -> PlatformResult<String> {
    let output = Command::new("tasklist")
        .args(["/FO", "CSV", "/NH"])
        .stdin(Stdio::null())
        .creation_flags(CREATE_NO_WINDOW)
        .output()
        .map_err(|e| PlatformError::io("run tasklist", e))?;

    if !output.status.success() {
        return Err(failure("tasklist", &output));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn run_powershell(what: &str, script: &str) -> PlatformResult<Output> {
    tracing::debug!("powershell: {}", script);

    let output = Command::new("powershell")
        .args(["-NoProfile", "-NonInteractive", "-Command"])
        .arg(script)
        .stdin(Stdio::null())
        .creation_flags(CREATE_NO_WINDOW)
        .output()
        .map_err(|e| PlatformError::io("run powershell", e))?;

    if !output.status.success() {
        return Err(failure(what, &output));
    }
    Ok(output)
}

/// Single-quote a value for PowerShell, doubling embedded quotes.
fn ps_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn failure(what: &str, output: &Output) -> PlatformError {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let message = stderr
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("no error output")
        .to_string();
    PlatformError::command_failed(what, output.status.code(), message)
}
