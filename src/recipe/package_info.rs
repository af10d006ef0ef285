//! Exported component metadata consumed by downstream packages.

use super::requirements::RUNTIME_REQUIREMENTS;
use crate::metadata::LIBRARY_NAME;
use std::collections::BTreeMap;

/// Generator whose target name is recorded for each component.
pub const FIND_PACKAGE_GENERATOR: &str = "cmake_find_package";

/// One independently linkable unit exported by the package.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize)]
pub struct Component {
    /// Target names per generator.
    pub names: BTreeMap<String, String>,

    /// Library artifacts to link.
    pub libs: Vec<String>,

    /// Include directories relative to the package root.
    pub includedirs: Vec<String>,

    /// Library directories relative to the package root.
    pub libdirs: Vec<String>,

    /// Components of other packages this one links against (`pkg::comp`).
    pub requires: Vec<String>,
}

/// Export descriptor of the whole package.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize)]
pub struct PackageInfo {
    /// Components by name.
    pub components: BTreeMap<String, Component>,
}

impl PackageInfo {
    /// Look up a component.
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }
}

/// Export descriptor of the daiex package.
///
/// A single `daiex` component exporting the `daiex` library, with the
/// runtime dependencies' components attached directly so consumers link
/// them transitively. Headers are always found below `include`; with
/// `inject_library_name_in_include` they sit one level deeper and are
/// included as `<daiex/header.h>`.
pub fn package_info() -> PackageInfo {
    let component = Component {
        names: BTreeMap::from([(
            FIND_PACKAGE_GENERATOR.to_string(),
            LIBRARY_NAME.to_string(),
        )]),
        libs: vec![LIBRARY_NAME.to_string()],
        includedirs: vec!["include".to_string()],
        libdirs: vec!["lib".to_string()],
        requires: RUNTIME_REQUIREMENTS.iter().map(|r| r.component()).collect(),
    };

    PackageInfo {
        components: BTreeMap::from([(LIBRARY_NAME.to_string(), component)]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_component_carries_transitive_requirements() {
        let info = package_info();
        assert_eq!(info.components.len(), 1);
        assert!(info.component("dummy").is_none());

        let daiex = info.component("daiex").unwrap();
        assert_eq!(daiex.libs, ["daiex"]);
        assert_eq!(daiex.names[FIND_PACKAGE_GENERATOR], "daiex");
        assert_eq!(
            daiex.requires,
            [
                "zlib::zlib",
                "libarchive::libarchive",
                "hdf5::hdf5",
                "matio::matio",
                "pugixml::pugixml"
            ]
        );
    }

    #[test]
    fn test_framework_is_never_exported() {
        let info = package_info();
        assert!(
            info.components
                .values()
                .flat_map(|c| &c.requires)
                .all(|r| !r.starts_with("gtest"))
        );
    }
}
