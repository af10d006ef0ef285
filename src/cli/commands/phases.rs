//! Generator-driven phases: configure, build, package, create.

use crate::cli::{Args, RuntimeConfig};
use crate::error::Result;
use crate::recipe::{CMake, ConfigurationCache, Recipe};

/// Recipe phase that runs CMake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Resolve the configuration and run CMake configure
    Configure,
    /// Configure (once) and build
    Build,
    /// Configure (once), install and write the package manifest
    Package,
    /// Build then package
    Create,
}

/// Run `phase` against a real CMake.
pub async fn run(args: &Args, phase: Phase, recipe: &Recipe, runtime: &RuntimeConfig) -> Result<()> {
    let out = runtime.output();
    let mut cmake = CMake::locate(args.cmake.as_deref())
        .await?
        .with_generator(args.generator.clone());
    if let Some(jobs) = args.jobs {
        cmake = cmake.with_jobs(jobs);
    }

    let mut cache = ConfigurationCache::new();
    out.progress(&format!(
        "{} [{}]",
        recipe.reference(),
        recipe.package_id()
    ))?;

    let manifest = match phase {
        Phase::Configure => {
            recipe.configure(&mut cache, &mut cmake).await?;
            out.success(&format!(
                "Configured in {}",
                recipe.layout().build_folder().display()
            ))?;
            return Ok(());
        }
        Phase::Build => {
            recipe.build(&mut cache, &mut cmake).await?;
            out.success("Build finished")?;
            return Ok(());
        }
        Phase::Package => recipe.package(&mut cache, &mut cmake).await?,
        Phase::Create => recipe.create(&mut cache, &mut cmake).await?,
    };

    out.success(&format!(
        "Packaged {} into {}",
        manifest.reference,
        recipe.layout().package_folder().display()
    ))?;
    out.indent(&format!("sha256: {}", manifest.tree_sha256))?;
    Ok(())
}
