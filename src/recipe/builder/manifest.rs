//! Package metadata written next to the installed tree.

use crate::metadata::RecipeMetadata;
use crate::recipe::{
    Result,
    error::ErrorExt,
    identity::PackageId,
    package_info::PackageInfo,
};
use chrono::{DateTime, Utc};
use std::{collections::BTreeMap, path::Path};

/// File name of the manifest inside the package folder.
pub const MANIFEST_FILE: &str = "package_info.json";

/// Everything a consumer needs to know about an installed package.
#[derive(Clone, Debug, serde::Serialize)]
pub struct PackageManifest {
    /// `name/version`
    pub reference: String,

    /// Binary-cache fingerprint
    pub package_id: PackageId,

    /// Recipe metadata
    pub metadata: RecipeMetadata,

    /// Settings the package was built with
    pub settings: BTreeMap<&'static str, &'static str>,

    /// Options the package was built with
    pub options: BTreeMap<&'static str, bool>,

    /// Runtime requirements as `name/version`
    pub requires: Vec<String>,

    /// Exported components
    pub package_info: PackageInfo,

    /// SHA-256 of the installed tree, manifest excluded
    pub tree_sha256: String,

    /// When the manifest was written
    pub created_at: DateTime<Utc>,
}

impl PackageManifest {
    /// Write the manifest as pretty JSON into `package_folder`.
    pub async fn write(&self, package_folder: &Path) -> Result<()> {
        let path = package_folder.join(MANIFEST_FILE);
        let json = serde_json::to_vec_pretty(self)?;
        tokio::fs::write(&path, json)
            .await
            .fs_context("writing package manifest", &path)?;
        log::info!("Wrote {}", path.display());
        Ok(())
    }
}
