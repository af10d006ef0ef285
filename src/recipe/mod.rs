//! Packaging recipe for the daiex library.
//!
//! The recipe declares the library's dependencies, resolves a CMake build
//! configuration from [`RecipeOptions`] and [`Settings`], drives CMake
//! through configure, build and install, and exports the package's
//! component metadata and binary-cache fingerprint.
//!
//! # Example
//!
//! ```no_run
//! use daiex_recipe::recipe::{
//!     CMake, ConfigurationCache, FolderOverrides, Recipe, VariantBuilder,
//! };
//!
//! # async fn example() -> daiex_recipe::recipe::Result<()> {
//! let variant = VariantBuilder::new()
//!     .option("inject_library_name_in_include=True")
//!     .setting("build_type=debug")
//!     .build()?;
//! let recipe = Recipe::load("path/to/daiex".as_ref(), variant, FolderOverrides::default())?;
//!
//! let mut cmake = CMake::locate(None).await?;
//! let mut cache = ConfigurationCache::new();
//! let manifest = recipe.create(&mut cache, &mut cmake).await?;
//! println!("Packaged {} as {}", manifest.reference, manifest.package_id);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod configure;
pub mod error;
pub mod generator;
pub mod identity;
pub mod package_info;
pub mod requirements;
pub mod settings;

pub use builder::{FolderOverrides, Layout, PackageManifest, Recipe};
pub use configure::{BuildConfiguration, ConfigurationCache, ConfiguredBuild, DefinitionValue};
pub use error::{Error, Result};
pub use generator::{BuildGenerator, CMake};
pub use identity::{PackageId, compute_fingerprint};
pub use package_info::{Component, PackageInfo};
pub use requirements::Requirement;
pub use settings::{
    Arch, BuildType, Compiler, Os, RecipeOption, RecipeOptions, Settings, Variant, VariantBuilder,
};
