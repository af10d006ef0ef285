//! External tool detection.

use crate::recipe::{Error, Result};
use std::path::{Path, PathBuf};

/// Executable name of the build system generator.
pub const CMAKE_PROGRAM: &str = "cmake";

/// Locate the `cmake` executable.
///
/// An explicit path wins over the `PATH` lookup. The tool's version is
/// logged when it can be queried.
pub async fn find_cmake(explicit: Option<&Path>) -> Result<PathBuf> {
    let path = match explicit {
        Some(path) => which::which(path).map_err(|e| {
            log::debug!("{} is not executable: {}", path.display(), e);
            Error::ToolNotFound(path.display().to_string())
        })?,
        None => which::which(CMAKE_PROGRAM).map_err(|e| {
            log::debug!("{CMAKE_PROGRAM} not found in PATH: {e}");
            Error::ToolNotFound(CMAKE_PROGRAM.to_string())
        })?,
    };

    log::debug!("Found cmake at: {}", path.display());
    match cmake_version(&path).await {
        Some(version) => log::info!("✓ {version}"),
        None => log::warn!(
            "cmake found at {} but --version check failed",
            path.display()
        ),
    }

    Ok(path)
}

/// First line of `cmake --version`, e.g. `cmake version 3.22.3`.
pub async fn cmake_version(program: &Path) -> Option<String> {
    let output = tokio::process::Command::new(program)
        .arg("--version")
        .output()
        .await
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(|line| line.trim().to_string())
}
