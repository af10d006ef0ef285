//! Build-system generator seam.
//!
//! The recipe only ever talks to a [`BuildGenerator`]; [`CMake`] drives the
//! real tool, tests substitute a recorder.

mod cmake;
pub mod tool_detection;

pub use cmake::CMake;

use crate::recipe::{Result, configure::ConfiguredBuild, settings::RecipeOptions};

/// Aggregate target that produces install-ready artifacts during the build.
pub const PACKAGE_TARGET: &str = "package";

/// Target the build phase requests for a variant: `package` in developer
/// mode, otherwise the generator's default.
pub fn build_target(options: &RecipeOptions) -> Option<&'static str> {
    options.developer_mode.then_some(PACKAGE_TARGET)
}

/// External tool that configures, builds and installs the sources.
///
/// Every call blocks until the tool exits; failures propagate unchanged.
#[allow(async_fn_in_trait)]
pub trait BuildGenerator {
    /// Generate the build system for `build` in its build folder.
    async fn configure(&mut self, build: &ConfiguredBuild) -> Result<()>;

    /// Build `target`, or the default target when `None`.
    async fn build(&mut self, build: &ConfiguredBuild, target: Option<&str>) -> Result<()>;

    /// Install into the package folder.
    async fn install(&mut self, build: &ConfiguredBuild) -> Result<()>;
}
