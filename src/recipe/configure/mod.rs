//! Build configuration resolution.
//!
//! [`BuildConfiguration`] turns options and settings into CMake
//! definitions; [`ConfigurationCache`] makes sure the generator is
//! configured with them exactly once per package instance.

mod cache;
pub mod definitions;

pub use cache::{ConfigurationCache, ConfiguredBuild};
pub use definitions::{BuildConfiguration, DefinitionValue};
