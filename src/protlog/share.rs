use crate::error::{ProtlogError, Result};
use std::path::Path;
use std::process::Command;

/// Hands a file to the system's share mechanism in an OS-specific way.
/// - macOS: uses `open`
/// - Linux: uses xdg-open
/// - Windows: uses `start`
///
/// The hand-off is fire-and-forget: once the opener accepts the path, what
/// the user does with it is outside this program.
pub fn share_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ProtlogError::NotFound(format!(
            "{} does not exist. Export the data first.",
            path.display()
        )));
    }

    #[cfg(target_os = "macos")]
    {
        share_macos(path)
    }

    #[cfg(target_os = "linux")]
    {
        share_linux(path)
    }

    #[cfg(target_os = "windows")]
    {
        share_windows(path)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Err(ProtlogError::Api(
            "Sharing not supported on this platform".to_string(),
        ))
    }
}

#[cfg(target_os = "macos")]
fn share_macos(path: &Path) -> Result<()> {
    let status = Command::new("open")
        .arg(path)
        .status()
        .map_err(|e| ProtlogError::Api(format!("Failed to spawn open: {}", e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(ProtlogError::Api("open exited with error".to_string()))
    }
}

#[cfg(target_os = "linux")]
fn share_linux(path: &Path) -> Result<()> {
    let status = Command::new("xdg-open")
        .arg(path)
        .status()
        .map_err(|e| {
            ProtlogError::Api(format!(
                "Failed to spawn xdg-open: {}. Install xdg-utils.",
                e
            ))
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(ProtlogError::Api("xdg-open exited with error".to_string()))
    }
}

#[cfg(target_os = "windows")]
fn share_windows(path: &Path) -> Result<()> {
    let status = Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .status()
        .map_err(|e| ProtlogError::Api(format!("Failed to spawn start: {}", e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(ProtlogError::Api("start exited with error".to_string()))
    }
}
