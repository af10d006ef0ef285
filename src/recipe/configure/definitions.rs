//! CMake cache definitions derived from options and settings.

use crate::metadata::LIBRARY_NAME;
use crate::recipe::settings::{BuildType, RecipeOptions, Settings};
use std::{collections::BTreeMap, fmt};

/// `CMAKE_BUILD_TYPE`
pub const BUILD_TYPE: &str = "CMAKE_BUILD_TYPE";
/// Documentation generation switch.
pub const BUILD_DOC: &str = "BUILD_DOC";
/// Test suite switch.
pub const BUILD_TEST: &str = "BUILD_TEST";
/// .NET wrapper switch.
pub const BUILD_DOT_NET_WRAPPER: &str = "BUILD_DOT_NET_WRAPPER";
/// Public include directory, relative to the install prefix.
pub const INSTALL_INCLUDEDIR: &str = "CMAKE_INSTALL_INCLUDEDIR";

/// Value of one definition.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum DefinitionValue {
    /// Boolean switch, passed as `ON`/`OFF`.
    Bool(bool),
    /// Plain string.
    String(String),
}

impl fmt::Display for DefinitionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionValue::Bool(true) => f.write_str("ON"),
            DefinitionValue::Bool(false) => f.write_str("OFF"),
            DefinitionValue::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for DefinitionValue {
    fn from(value: bool) -> Self {
        DefinitionValue::Bool(value)
    }
}

impl From<&str> for DefinitionValue {
    fn from(value: &str) -> Self {
        DefinitionValue::String(value.to_string())
    }
}

/// Resolved build configuration: CMake definitions for one variant.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct BuildConfiguration {
    build_type: BuildType,
    definitions: BTreeMap<String, DefinitionValue>,
    /// Cache entries removed with `-U` so a reused build folder falls back
    /// to CMake's default.
    unset: Vec<String>,
}

impl BuildConfiguration {
    /// Derive the definitions for a variant.
    ///
    /// The include-directory override is present only when
    /// `inject_library_name_in_include` is set; otherwise the cache entry is
    /// unset so CMake's default applies, even in a build folder that was
    /// configured with the override before.
    pub fn resolve(options: &RecipeOptions, settings: &Settings) -> Self {
        let mut definitions = BTreeMap::new();
        let mut unset = Vec::new();
        definitions.insert(
            BUILD_TYPE.to_string(),
            settings.build_type.as_str().into(),
        );
        definitions.insert(BUILD_DOC.to_string(), options.with_doc.into());
        definitions.insert(BUILD_TEST.to_string(), options.with_test.into());
        definitions.insert(
            BUILD_DOT_NET_WRAPPER.to_string(),
            options.with_dot_net.into(),
        );
        if options.inject_library_name_in_include {
            definitions.insert(
                INSTALL_INCLUDEDIR.to_string(),
                DefinitionValue::String(format!("include/{LIBRARY_NAME}")),
            );
        } else {
            unset.push(INSTALL_INCLUDEDIR.to_string());
        }

        Self {
            build_type: settings.build_type,
            definitions,
            unset,
        }
    }

    /// Build type the configuration was resolved for.
    pub fn build_type(&self) -> BuildType {
        self.build_type
    }

    /// Value of a definition, if present.
    pub fn get(&self, key: &str) -> Option<&DefinitionValue> {
        self.definitions.get(key)
    }

    /// All definitions in key order.
    pub fn definitions(&self) -> impl Iterator<Item = (&str, &DefinitionValue)> {
        self.definitions.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Cache entries to remove before applying the definitions.
    pub fn unset(&self) -> &[String] {
        &self.unset
    }

    /// `-UKEY` for removed entries, then `-DKEY=VALUE` for each definition.
    pub fn cmake_args(&self) -> Vec<String> {
        self.unset
            .iter()
            .map(|key| format!("-U{key}"))
            .chain(
                self.definitions()
                    .map(|(key, value)| format!("-D{key}={value}")),
            )
            .collect()
    }
}
