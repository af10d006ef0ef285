//! TOML profiles holding `[settings]` and `[options]` tables.

use super::{RecipeOptions, Settings};
use crate::recipe::{Error, Result};
use std::{collections::BTreeMap, path::Path};

/// A parsed profile file.
///
/// ```toml
/// [settings]
/// build_type = "debug"
///
/// [options]
/// with_doc = true
/// with_dotNet = "True"
/// ```
#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Setting overrides, by setting name.
    #[serde(default)]
    pub settings: BTreeMap<String, String>,

    /// Option overrides, by option name. Values may be TOML booleans or strings.
    #[serde(default)]
    pub options: BTreeMap<String, toml::Value>,
}

impl Profile {
    /// Read and parse a profile from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Profile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&content).map_err(|reason| Error::Profile {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Apply this profile on top of `options` and `settings`.
    pub fn apply(&self, options: &mut RecipeOptions, settings: &mut Settings) -> Result<()> {
        for (name, value) in &self.settings {
            settings.set_named(name, value)?;
        }
        for (name, value) in &self.options {
            let text = match value {
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::String(s) => s.clone(),
                toml::Value::Integer(i) => i.to_string(),
                other => {
                    return Err(Error::InvalidOption {
                        name: name.clone(),
                        reason: format!("unsupported value type {}", other.type_str()),
                    });
                }
            };
            options.set_named(name, &text)?;
        }
        Ok(())
    }
}
