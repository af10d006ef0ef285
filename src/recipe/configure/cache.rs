//! Memoized build configuration, owned by the caller.

use super::BuildConfiguration;
use crate::recipe::{
    Result,
    builder::Layout,
    generator::BuildGenerator,
    settings::{RecipeOptions, Settings},
};

/// A configuration the generator has already been configured with.
///
/// Handed to the build and install steps of the same generator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfiguredBuild {
    configuration: BuildConfiguration,
    layout: Layout,
}

impl ConfiguredBuild {
    /// Definitions the generator was configured with.
    pub fn configuration(&self) -> &BuildConfiguration {
        &self.configuration
    }

    /// Folders the build reads and writes.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}

/// Holds at most one [`ConfiguredBuild`] per package instance.
///
/// The orchestrator owns the cache and passes it to every phase, so the
/// generator's configure step runs once however many phases follow.
#[derive(Debug, Default)]
pub struct ConfigurationCache {
    configured: Option<ConfiguredBuild>,
}

impl ConfigurationCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the configure step has already run.
    pub fn is_configured(&self) -> bool {
        self.configured.is_some()
    }

    /// The cached configuration, if any.
    pub fn get(&self) -> Option<&ConfiguredBuild> {
        self.configured.as_ref()
    }

    /// Return the cached configuration, resolving it and running the
    /// generator's configure step on first use.
    ///
    /// A failed configure step leaves the cache empty.
    pub async fn resolve<G: BuildGenerator>(
        &mut self,
        generator: &mut G,
        options: &RecipeOptions,
        settings: &Settings,
        layout: &Layout,
    ) -> Result<&ConfiguredBuild> {
        let configured = match self.configured.take() {
            Some(configured) => {
                log::debug!("Reusing cached build configuration");
                configured
            }
            None => {
                let configured = ConfiguredBuild {
                    configuration: BuildConfiguration::resolve(options, settings),
                    layout: layout.clone(),
                };
                for (key, value) in configured.configuration.definitions() {
                    log::debug!("  {key} = {value}");
                }
                generator.configure(&configured).await?;
                configured
            }
        };
        let configured: &ConfiguredBuild = self.configured.insert(configured);
        Ok(configured)
    }
}
