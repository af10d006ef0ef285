//! Read-only queries: info, requirements, id.

use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::metadata::RecipeMetadata;
use crate::recipe::{BuildConfiguration, PackageId, PackageInfo, Recipe};
use crate::source::ScmInfo;
use std::collections::BTreeMap;

#[derive(Debug, serde::Serialize)]
struct InfoReport<'a> {
    reference: String,
    metadata: &'a RecipeMetadata,
    version: &'a str,
    scm: ScmInfo,
    package_id: &'a PackageId,
    settings: BTreeMap<&'static str, &'static str>,
    options: BTreeMap<&'static str, bool>,
    requires: Vec<String>,
    build_requires: Vec<String>,
    configuration: BuildConfiguration,
    package_info: PackageInfo,
}

#[derive(Debug, serde::Serialize)]
struct RequirementsReport {
    requires: Vec<String>,
    build_requires: Vec<String>,
}

fn references(recipe: &Recipe) -> RequirementsReport {
    RequirementsReport {
        requires: recipe.requirements().iter().map(ToString::to_string).collect(),
        build_requires: recipe
            .build_requirements()
            .iter()
            .map(ToString::to_string)
            .collect(),
    }
}

/// `info`
pub async fn info(recipe: &Recipe, runtime: &RuntimeConfig, json: bool) -> Result<()> {
    let scm = ScmInfo::detect(recipe.layout().source_folder()).await;
    let refs = references(recipe);
    let report = InfoReport {
        reference: recipe.reference(),
        metadata: recipe.metadata(),
        version: recipe.version(),
        scm,
        package_id: recipe.package_id(),
        settings: recipe.settings().iter().into_iter().collect(),
        options: recipe.options().iter().collect(),
        requires: refs.requires,
        build_requires: refs.build_requires,
        configuration: BuildConfiguration::resolve(recipe.options(), recipe.settings()),
        package_info: recipe.package_info(),
    };

    let out = runtime.output();
    if json {
        out.result(&serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    out.section(&report.reference)?;
    out.field("description", report.metadata.description)?;
    out.field("license", report.metadata.license)?;
    out.field("author", report.metadata.author)?;
    out.field("url", report.metadata.url)?;
    out.field("required version", report.metadata.required_version)?;
    out.field(
        "scm",
        &format!("{} {} @ {}", report.scm.kind, report.scm.url, report.scm.revision),
    )?;
    out.field("package id", report.package_id.as_str())?;

    out.section("settings")?;
    for (name, value) in &report.settings {
        out.field(name, value)?;
    }
    out.section("options")?;
    for (name, value) in &report.options {
        out.field(name, &value.to_string())?;
    }
    out.section("requires")?;
    for reference in &report.requires {
        out.indent(reference)?;
    }
    out.section("build requires")?;
    for reference in &report.build_requires {
        out.indent(reference)?;
    }
    out.section("cmake definitions")?;
    for (key, value) in report.configuration.definitions() {
        out.field(key, &value.to_string())?;
    }
    out.section("components")?;
    for (name, component) in &report.package_info.components {
        out.indent(name)?;
        out.field("libs", &component.libs.join(", "))?;
        out.field("requires", &component.requires.join(", "))?;
    }
    Ok(())
}

/// `requirements`
pub fn requirements(recipe: &Recipe, runtime: &RuntimeConfig, json: bool) -> Result<()> {
    let report = references(recipe);
    let out = runtime.output();
    if json {
        out.result(&serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }
    for reference in &report.requires {
        out.result(reference)?;
    }
    for reference in &report.build_requires {
        out.result(&format!("{reference} (build)"))?;
    }
    Ok(())
}

/// `id`
pub fn id(recipe: &Recipe, runtime: &RuntimeConfig) -> Result<()> {
    runtime.output().result(recipe.package_id().as_str())?;
    Ok(())
}
