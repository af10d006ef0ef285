//! Recipe orchestration: configure, build and package phases.
//!
//! This module provides the [`Recipe`] orchestrator that ties the resolved
//! variant, the folder layout and a [`BuildGenerator`] together.

use super::{
    checksum::calculate_tree_sha256,
    layout::Layout,
    manifest::{MANIFEST_FILE, PackageManifest},
};
use crate::metadata::{self, RecipeMetadata};
use crate::recipe::{
    Result,
    configure::{ConfigurationCache, ConfiguredBuild},
    generator::{BuildGenerator, build_target},
    identity::{PackageId, compute_fingerprint},
    package_info::{PackageInfo, package_info},
    requirements::{self, Requirement},
    settings::{RecipeOptions, Settings, Variant},
};
use std::path::{Path, PathBuf};

/// Folder overrides; unset folders take their defaults.
#[derive(Clone, Debug, Default)]
pub struct FolderOverrides {
    /// Build folder, default `<source>/build/<build_type>`
    pub build_folder: Option<PathBuf>,
    /// Package folder, default `<source>/package/<package_id>`
    pub package_folder: Option<PathBuf>,
}

/// One package instance of the daiex recipe.
///
/// Holds no generator state of its own: the [`ConfigurationCache`] is
/// owned by the caller and passed into every phase.
///
/// # Examples
///
/// ```no_run
/// use daiex_recipe::recipe::{
///     CMake, ConfigurationCache, FolderOverrides, Recipe, VariantBuilder,
/// };
///
/// # async fn example() -> daiex_recipe::recipe::Result<()> {
/// let variant = VariantBuilder::new().option("developer_mode=True").build()?;
/// let recipe = Recipe::load(".".as_ref(), variant, FolderOverrides::default())?;
///
/// let mut cmake = CMake::locate(None).await?;
/// let mut cache = ConfigurationCache::new();
/// recipe.build(&mut cache, &mut cmake).await?;
/// let manifest = recipe.package(&mut cache, &mut cmake).await?;
/// println!("{} -> {}", manifest.reference, manifest.package_id);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Recipe {
    metadata: RecipeMetadata,
    version: String,
    variant: Variant,
    package_id: PackageId,
    layout: Layout,
}

impl Recipe {
    /// Load the recipe rooted at `source_folder`.
    ///
    /// Reads the version file first; nothing else happens if it is missing.
    pub fn load(source_folder: &Path, variant: Variant, folders: FolderOverrides) -> Result<Self> {
        let version = metadata::read_version(source_folder)?;
        let package_id = compute_fingerprint(&variant.options, &variant.settings);
        let layout = Layout::new(
            source_folder,
            folders.build_folder.as_deref(),
            folders.package_folder.as_deref(),
            variant.settings.build_type,
            &package_id,
        )?;

        Ok(Self {
            metadata: RecipeMetadata::daiex(),
            version,
            variant,
            package_id,
            layout,
        })
    }

    /// Static recipe metadata.
    pub fn metadata(&self) -> &RecipeMetadata {
        &self.metadata
    }

    /// Package version from the version file.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// `name/version`
    pub fn reference(&self) -> String {
        format!("{}/{}", self.metadata.name, self.version)
    }

    /// Recipe options of this instance.
    pub fn options(&self) -> &RecipeOptions {
        &self.variant.options
    }

    /// Settings of this instance.
    pub fn settings(&self) -> &Settings {
        &self.variant.settings
    }

    /// Binary-cache fingerprint.
    pub fn package_id(&self) -> &PackageId {
        &self.package_id
    }

    /// Source, build and package folders.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Runtime requirements of this variant.
    pub fn requirements(&self) -> Vec<Requirement> {
        requirements::requirements(&self.variant.options)
    }

    /// Build-time tool requirements.
    pub fn build_requirements(&self) -> Vec<Requirement> {
        requirements::build_requirements()
    }

    /// Exported components.
    pub fn package_info(&self) -> PackageInfo {
        package_info()
    }

    /// Resolve the configuration and configure the generator, once.
    pub async fn configure<'c, G: BuildGenerator>(
        &self,
        cache: &'c mut ConfigurationCache,
        generator: &mut G,
    ) -> Result<&'c ConfiguredBuild> {
        if !cache.is_configured() {
            log::info!(
                "Configuring {} ({})",
                self.reference(),
                self.variant.settings.build_type
            );
        }
        cache
            .resolve(
                generator,
                &self.variant.options,
                &self.variant.settings,
                &self.layout,
            )
            .await
    }

    /// Build phase: the `package` target in developer mode, the default
    /// target otherwise.
    pub async fn build<G: BuildGenerator>(
        &self,
        cache: &mut ConfigurationCache,
        generator: &mut G,
    ) -> Result<()> {
        let configured = self.configure(cache, generator).await?;
        let target = build_target(&self.variant.options);
        log::info!(
            "Building {} (target: {})",
            self.reference(),
            target.unwrap_or("default")
        );
        generator.build(configured, target).await
    }

    /// Package phase: install into the package folder and write the
    /// package manifest.
    pub async fn package<G: BuildGenerator>(
        &self,
        cache: &mut ConfigurationCache,
        generator: &mut G,
    ) -> Result<PackageManifest> {
        let configured = self.configure(cache, generator).await?;
        log::info!(
            "Installing {} into {}",
            self.reference(),
            self.layout.package_folder().display()
        );
        generator.install(configured).await?;
        self.layout.ensure_package_folder().await?;

        let tree_sha256 =
            calculate_tree_sha256(self.layout.package_folder(), &[MANIFEST_FILE]).await?;
        let manifest = self.manifest(tree_sha256);
        manifest.write(self.layout.package_folder()).await?;
        Ok(manifest)
    }

    /// Build then package, sharing one configuration.
    pub async fn create<G: BuildGenerator>(
        &self,
        cache: &mut ConfigurationCache,
        generator: &mut G,
    ) -> Result<PackageManifest> {
        self.build(cache, generator).await?;
        self.package(cache, generator).await
    }

    fn manifest(&self, tree_sha256: String) -> PackageManifest {
        PackageManifest {
            reference: self.reference(),
            package_id: self.package_id.clone(),
            metadata: self.metadata.clone(),
            settings: self.variant.settings.iter().into_iter().collect(),
            options: self.variant.options.iter().collect(),
            requires: self.requirements().iter().map(ToString::to_string).collect(),
            package_info: self.package_info(),
            tree_sha256,
            created_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{
        Error,
        configure::definitions::INSTALL_INCLUDEDIR,
        generator::testing::{Call, RecordingGenerator},
        settings::RecipeOption,
    };

    fn source_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Version.txt"), "1.4.0\n").unwrap();
        dir
    }

    fn recipe(dir: &Path, options: RecipeOptions) -> Recipe {
        let variant = Variant {
            options,
            settings: Settings::host(),
        };
        Recipe::load(dir, variant, FolderOverrides::default()).unwrap()
    }

    fn all_option_sets() -> impl Iterator<Item = RecipeOptions> {
        (0u8..32).map(|bits| {
            let mut options = RecipeOptions::default();
            for (i, option) in RecipeOption::ALL.into_iter().enumerate() {
                options.set(option, bits & (1 << i) != 0);
            }
            options
        })
    }

    #[tokio::test]
    async fn build_then_package_configures_once_for_every_variant() {
        for options in all_option_sets() {
            let dir = source_dir();
            let recipe = recipe(dir.path(), options);
            let mut generator = RecordingGenerator::default();
            let mut cache = ConfigurationCache::new();

            recipe.build(&mut cache, &mut generator).await.unwrap();
            recipe.package(&mut cache, &mut generator).await.unwrap();

            assert_eq!(generator.configure_calls(), 1, "options: {options:?}");
            assert_eq!(generator.calls.first(), Some(&Call::Configure));
            assert_eq!(generator.calls.last(), Some(&Call::Install));
        }
    }

    #[tokio::test]
    async fn package_alone_configures_on_demand() {
        let dir = source_dir();
        let recipe = recipe(dir.path(), RecipeOptions::default());
        let mut generator = RecordingGenerator::default();
        let mut cache = ConfigurationCache::new();

        recipe.package(&mut cache, &mut generator).await.unwrap();
        assert_eq!(generator.calls, [Call::Configure, Call::Install]);
    }

    #[tokio::test]
    async fn developer_mode_builds_package_target() {
        let dir = source_dir();
        let options = RecipeOptions {
            developer_mode: true,
            ..Default::default()
        };
        let recipe = recipe(dir.path(), options);
        let mut generator = RecordingGenerator::default();
        recipe
            .build(&mut ConfigurationCache::new(), &mut generator)
            .await
            .unwrap();
        assert_eq!(generator.calls[1], Call::Build(Some("package".into())));

        let plain = self::recipe(dir.path(), RecipeOptions::default());
        let mut generator = RecordingGenerator::default();
        plain
            .build(&mut ConfigurationCache::new(), &mut generator)
            .await
            .unwrap();
        assert_eq!(generator.calls[1], Call::Build(None));
    }

    #[tokio::test]
    async fn build_failure_propagates_and_stops() {
        let dir = source_dir();
        let recipe = recipe(dir.path(), RecipeOptions::default());
        let mut generator = RecordingGenerator::failing_build();
        let mut cache = ConfigurationCache::new();

        let err = recipe.create(&mut cache, &mut generator).await.unwrap_err();
        assert!(matches!(err, Error::ToolFailed { code: Some(2), .. }));
        assert!(!generator.calls.contains(&Call::Install));
    }

    #[tokio::test]
    async fn cached_configuration_matches_variant() {
        let dir = source_dir();
        let options = RecipeOptions {
            inject_library_name_in_include: true,
            ..Default::default()
        };
        let recipe = recipe(dir.path(), options);
        let mut cache = ConfigurationCache::new();
        let configured = recipe
            .configure(&mut cache, &mut RecordingGenerator::default())
            .await
            .unwrap();
        assert_eq!(
            configured
                .configuration()
                .get(INSTALL_INCLUDEDIR)
                .map(ToString::to_string)
                .as_deref(),
            Some("include/daiex")
        );
    }

    #[tokio::test]
    async fn package_writes_manifest() {
        let dir = source_dir();
        let recipe = recipe(dir.path(), RecipeOptions::default());
        let manifest = recipe
            .create(&mut ConfigurationCache::new(), &mut RecordingGenerator::default())
            .await
            .unwrap();

        assert_eq!(manifest.reference, "rs_daiex/1.4.0");
        assert_eq!(&manifest.package_id, recipe.package_id());

        let written = recipe.layout().package_folder().join(MANIFEST_FILE);
        let json: serde_json::Value =
            serde_json::from_slice(&std::fs::read(written).unwrap()).unwrap();
        assert_eq!(json["package_id"], recipe.package_id().as_str());
        assert_eq!(json["package_info"]["components"]["daiex"]["libs"][0], "daiex");
        assert_eq!(json["tree_sha256"], manifest.tree_sha256);
    }

    #[test]
    fn load_without_version_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let variant = Variant {
            options: RecipeOptions::default(),
            settings: Settings::host(),
        };
        let err = Recipe::load(dir.path(), variant, FolderOverrides::default()).unwrap_err();
        assert!(matches!(err, Error::VersionFile { .. }));
    }

    #[test]
    fn test_option_shares_package_folder() {
        let dir = source_dir();
        let with_tests = recipe(
            dir.path(),
            RecipeOptions {
                with_test: true,
                ..Default::default()
            },
        );
        let without = recipe(dir.path(), RecipeOptions::default());
        assert_eq!(with_tests.package_id(), without.package_id());
        assert_eq!(
            with_tests.layout().package_folder(),
            without.layout().package_folder()
        );
        assert_ne!(with_tests.requirements(), without.requirements());
    }
}
