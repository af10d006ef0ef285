//! Source checkout information.

use anyhow::{Context, bail};
use std::path::Path;
use tokio::process::Command;

/// Placeholder used when a field cannot be determined from the checkout.
pub const AUTO: &str = "auto";

/// Source-control coordinates of the recipe's source folder.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ScmInfo {
    /// Always `git`
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Remote URL of `origin`, or `auto`
    pub url: String,
    /// Commit of `HEAD`, or `auto`
    pub revision: String,
}

impl ScmInfo {
    /// Query git for the checkout at `source_folder`.
    ///
    /// Never fails: fields that cannot be determined stay `auto`.
    pub async fn detect(source_folder: &Path) -> Self {
        let revision = git(source_folder, &["rev-parse", "HEAD"])
            .await
            .unwrap_or_else(|e| {
                log::debug!("No git revision for {}: {e:#}", source_folder.display());
                AUTO.to_string()
            });
        let url = git(source_folder, &["remote", "get-url", "origin"])
            .await
            .unwrap_or_else(|e| {
                log::debug!("No git remote for {}: {e:#}", source_folder.display());
                AUTO.to_string()
            });

        Self {
            kind: "git",
            url,
            revision,
        }
    }
}

async fn git(dir: &Path, args: &[&str]) -> anyhow::Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .await
        .with_context(|| format!("running git {}", args.join(" ")))?;

    if !output.status.success() {
        bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if value.is_empty() {
        bail!("git {} printed nothing", args.join(" "));
    }
    Ok(value)
}
