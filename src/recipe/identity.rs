//! Package identity used for binary-cache reuse.
//!
//! The fingerprint covers every setting, every option except `with_test`,
//! and the runtime requirements. Test-only toggles never fragment the
//! binary cache: a package built with tests is interchangeable with one
//! built without.

use super::{
    requirements::RUNTIME_REQUIREMENTS,
    settings::{RecipeOption, RecipeOptions, Settings},
};
use sha1::{Digest, Sha1};
use std::{collections::BTreeMap, fmt};

/// Options removed from the identity before hashing.
const NON_IDENTITY_OPTIONS: [RecipeOption; 1] = [RecipeOption::WithTest];

/// Hex-encoded SHA-1 fingerprint of a binary package.
#[derive(Clone, Debug, Eq, PartialEq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct PackageId(String);

impl PackageId {
    /// The 40-character hex id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the fingerprint is computed over, in canonical order.
#[derive(Debug)]
struct IdentityInfo {
    settings: BTreeMap<&'static str, &'static str>,
    options: BTreeMap<&'static str, bool>,
    requires: Vec<String>,
}

impl IdentityInfo {
    fn new(options: &RecipeOptions, settings: &Settings) -> Self {
        let mut option_map: BTreeMap<_, _> = options.iter().collect();
        for option in NON_IDENTITY_OPTIONS {
            option_map.remove(option.name());
        }

        Self {
            settings: settings.iter().into_iter().collect(),
            options: option_map,
            requires: RUNTIME_REQUIREMENTS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Compute the package fingerprint for a variant.
pub fn compute_fingerprint(options: &RecipeOptions, settings: &Settings) -> PackageId {
    let info = IdentityInfo::new(options, settings);
    let mut hasher = Sha1::new();
    for (name, value) in &info.settings {
        hasher.update(format!("[settings]{name}={value}\n"));
    }
    for (name, value) in &info.options {
        hasher.update(format!("[options]{name}={value}\n"));
    }
    for reference in &info.requires {
        hasher.update(format!("[requires]{reference}\n"));
    }
    PackageId(format!("{:x}", hasher.finalize()))
}
