//! Command execution.

mod info;
mod phases;

pub use phases::Phase;

use super::{Args, Command, RuntimeConfig};
use crate::error::Result;
use crate::recipe::{FolderOverrides, Recipe, VariantBuilder};

/// Load the recipe described by `args`.
pub fn load_recipe(args: &Args) -> Result<Recipe> {
    let mut variant = VariantBuilder::new()
        .settings(args.settings().map(str::to_string))
        .options(args.options().map(str::to_string));
    if let Some(profile) = &args.profile {
        variant = variant.profile(profile);
    }
    let variant = variant.build()?;

    let folders = FolderOverrides {
        build_folder: args.build_folder.clone(),
        package_folder: args.package_folder.clone(),
    };
    Ok(Recipe::load(&args.source_folder, variant, folders)?)
}

/// Run the command selected in `args`.
pub async fn execute(args: &Args, runtime: &RuntimeConfig) -> Result<()> {
    let recipe = load_recipe(args)?;
    log::debug!(
        "Loaded {} with package id {}",
        recipe.reference(),
        recipe.package_id()
    );

    match &args.command {
        Command::Info { json, .. } => info::info(&recipe, runtime, *json).await,
        Command::Requirements { json, .. } => info::requirements(&recipe, runtime, *json),
        Command::Id(_) => info::id(&recipe, runtime),
        Command::Configure(_) => phases::run(args, Phase::Configure, &recipe, runtime).await,
        Command::Build(_) => phases::run(args, Phase::Build, &recipe, runtime).await,
        Command::Package(_) => phases::run(args, Phase::Package, &recipe, runtime).await,
        Command::Create(_) => phases::run(args, Phase::Create, &recipe, runtime).await,
    }
}
