//! Declared dependencies of the package.

use super::settings::RecipeOptions;
use std::fmt;

/// A `name/version` package reference.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize)]
pub struct Requirement {
    /// Package name
    pub name: &'static str,
    /// Exact version
    pub version: &'static str,
}

impl Requirement {
    const fn new(name: &'static str, version: &'static str) -> Self {
        Self { name, version }
    }

    /// The package's main exported component, `name::name`.
    pub fn component(&self) -> String {
        format!("{0}::{0}", self.name)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

/// Libraries the package always links against.
pub const RUNTIME_REQUIREMENTS: [Requirement; 5] = [
    Requirement::new("zlib", "1.2.12"),
    Requirement::new("libarchive", "3.5.1"),
    Requirement::new("hdf5", "1.12.1"),
    Requirement::new("matio", "1.5.23"),
    Requirement::new("pugixml", "1.11"),
];

/// Test framework, required only when the test suite is built.
pub const TEST_REQUIREMENT: Requirement = Requirement::new("gtest", "1.10.0");

/// Build system generator needed at build time.
pub const CMAKE_TOOL_REQUIREMENT: Requirement = Requirement::new("cmake", "3.22.3");

/// Packages required for the variant described by `options`.
pub fn requirements(options: &RecipeOptions) -> Vec<Requirement> {
    let mut requires = RUNTIME_REQUIREMENTS.to_vec();
    if options.with_test {
        requires.push(TEST_REQUIREMENT);
    }
    requires
}

/// Tools required to build, independent of the variant.
pub fn build_requirements() -> Vec<Requirement> {
    vec![CMAKE_TOOL_REQUIREMENT]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gtest_required_only_with_tests() {
        let mut options = RecipeOptions::default();
        assert!(!requirements(&options).contains(&TEST_REQUIREMENT));

        options.with_test = true;
        let requires = requirements(&options);
        assert!(requires.contains(&TEST_REQUIREMENT));
        assert_eq!(requires.len(), RUNTIME_REQUIREMENTS.len() + 1);
    }

    #[test]
    fn other_options_do_not_change_requirements() {
        let options = RecipeOptions {
            with_doc: true,
            with_dot_net: true,
            inject_library_name_in_include: true,
            developer_mode: true,
            ..Default::default()
        };
        assert_eq!(requirements(&options), RUNTIME_REQUIREMENTS.to_vec());
    }

    #[test]
    fn references_and_components() {
        assert_eq!(RUNTIME_REQUIREMENTS[1].to_string(), "libarchive/3.5.1");
        assert_eq!(RUNTIME_REQUIREMENTS[1].component(), "libarchive::libarchive");
        assert_eq!(build_requirements()[0].to_string(), "cmake/3.22.3");
    }
}
