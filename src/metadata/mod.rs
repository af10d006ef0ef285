//! Recipe identity and the version file next to it.

use crate::recipe::{Error, Result};
use std::path::{Path, PathBuf};

/// Name of the library target the recipe packages.
pub const LIBRARY_NAME: &str = "daiex";

/// File holding the package version, next to the recipe.
pub const VERSION_FILE: &str = "Version.txt";

/// Static metadata describing the recipe.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RecipeMetadata {
    /// Package reference name
    pub name: &'static str,

    /// SPDX license identifier
    pub license: &'static str,

    /// One-line description
    pub description: &'static str,

    /// Project homepage
    pub url: &'static str,

    /// Maintainers
    pub author: &'static str,

    /// Minimum package-manager protocol version the recipe targets
    pub required_version: &'static str,

    /// Whether the build reads the source tree in place instead of a copy
    pub no_copy_source: bool,
}

impl RecipeMetadata {
    /// Metadata of the daiex recipe.
    pub const fn daiex() -> Self {
        Self {
            name: "rs_daiex",
            license: "Apache-2.0",
            description: "I/Q Data Import Export library (daiex)",
            url: "https://code.rsint.net/SWP/daiex",
            author: "R&S developers",
            required_version: ">=1.43.0",
            no_copy_source: true,
        }
    }
}

impl Default for RecipeMetadata {
    fn default() -> Self {
        Self::daiex()
    }
}

/// Path of the version file inside `source_folder`.
pub fn version_file(source_folder: &Path) -> PathBuf {
    source_folder.join(VERSION_FILE)
}

/// Read the package version from `Version.txt` in `source_folder`.
///
/// The file is the single source of truth; its trimmed contents are the
/// version. A missing, unreadable or blank file is fatal.
pub fn read_version(source_folder: &Path) -> Result<String> {
    let path = version_file(source_folder);
    let content = std::fs::read_to_string(&path).map_err(|source| Error::VersionFile {
        path: path.clone(),
        source,
    })?;

    let version = content.trim();
    if version.is_empty() {
        return Err(Error::EmptyVersion(path));
    }

    if semver::Version::parse(version).is_err() {
        log::warn!(
            "Version '{}' in {} is not a semantic version",
            version,
            path.display()
        );
    }

    Ok(version.to_string())
}
