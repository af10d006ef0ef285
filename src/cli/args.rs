//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with environment
//! fallbacks for the folder and tool locations.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Packaging recipe for the daiex I/Q data import/export library
#[derive(Parser, Debug)]
#[command(
    name = "daiex-recipe",
    version,
    about = "Packaging recipe for the daiex I/Q data import/export library",
    long_about = "Declares the dependencies of the daiex library, configures it with CMake,
builds it and installs it into a package folder with exported metadata.

Usage:
  daiex-recipe info
  daiex-recipe id -o with_test=True -s build_type=debug
  daiex-recipe create --profile profiles/release.toml -o inject_library_name_in_include=True

Exit code 0 = every requested phase succeeded."
)]
pub struct Args {
    /// Phase or query to run
    #[command(subcommand)]
    pub command: Command,

    /// Folder holding CMakeLists.txt and Version.txt
    #[arg(
        long,
        global = true,
        env = "DAIEX_SOURCE_FOLDER",
        default_value = ".",
        value_name = "PATH"
    )]
    pub source_folder: PathBuf,

    /// Build folder (default: <source>/build/<build_type>)
    #[arg(long, global = true, env = "DAIEX_BUILD_FOLDER", value_name = "PATH")]
    pub build_folder: Option<PathBuf>,

    /// Package folder / install prefix (default: <source>/package/<package_id>)
    #[arg(long, global = true, env = "DAIEX_PACKAGE_FOLDER", value_name = "PATH")]
    pub package_folder: Option<PathBuf>,

    /// TOML profile with [settings] and [options] tables
    #[arg(short = 'p', long, global = true, env = "DAIEX_PROFILE", value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// Overrides given before the subcommand
    #[command(flatten)]
    pub overrides: Overrides,

    /// cmake executable (default: looked up in PATH)
    #[arg(long, global = true, env = "DAIEX_CMAKE", value_name = "PATH")]
    pub cmake: Option<PathBuf>,

    /// CMake generator, e.g. Ninja
    #[arg(short = 'G', long, global = true, env = "DAIEX_CMAKE_GENERATOR")]
    pub generator: Option<String>,

    /// Parallel build jobs (default: number of CPUs)
    #[arg(short = 'j', long, global = true)]
    pub jobs: Option<usize>,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Repeatable `-o`/`-s` overrides.
///
/// Accepted both before and after the subcommand. The two sets are kept
/// apart and concatenated, so later occurrences win when applied in order.
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Option override, e.g. -o with_doc=True (repeatable)
    #[arg(short = 'o', long = "option", value_name = "NAME=VALUE")]
    pub options: Vec<String>,

    /// Setting override, e.g. -s build_type=Debug (repeatable)
    #[arg(short = 's', long = "setting", value_name = "NAME=VALUE")]
    pub settings: Vec<String>,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print recipe metadata, variant, requirements and package id
    Info {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        overrides: Overrides,
    },
    /// Print the runtime and build requirements
    Requirements {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        overrides: Overrides,
    },
    /// Print the package id
    Id(Overrides),
    /// Resolve the configuration and run CMake configure
    Configure(Overrides),
    /// Configure (once) and build
    Build(Overrides),
    /// Configure (once), install and write the package manifest
    Package(Overrides),
    /// Build then package with a single configure
    Create(Overrides),
}

impl Command {
    /// Overrides given after the subcommand.
    pub fn overrides(&self) -> &Overrides {
        match self {
            Command::Info { overrides, .. } | Command::Requirements { overrides, .. } => overrides,
            Command::Id(overrides)
            | Command::Configure(overrides)
            | Command::Build(overrides)
            | Command::Package(overrides)
            | Command::Create(overrides) => overrides,
        }
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Option overrides in application order: before the subcommand, then
    /// after it.
    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.overrides
            .options
            .iter()
            .chain(&self.command.overrides().options)
            .map(String::as_str)
    }

    /// Setting overrides in application order.
    pub fn settings(&self) -> impl Iterator<Item = &str> {
        self.overrides
            .settings
            .iter()
            .chain(&self.command.overrides().settings)
            .map(String::as_str)
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.source_folder.is_dir() {
            return Err(format!(
                "Source folder does not exist: {}",
                self.source_folder.display()
            ));
        }

        if let Some(profile) = &self.profile {
            if !profile.is_file() {
                return Err(format!("Profile not found: {}", profile.display()));
            }
        }

        if self.jobs == Some(0) {
            return Err("--jobs must be at least 1".to_string());
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_are_repeatable_and_global() {
        let args = Args::try_parse_from([
            "daiex-recipe",
            "-o",
            "with_doc=True",
            "id",
            "-o",
            "with_test=True",
            "-s",
            "build_type=debug",
        ])
        .unwrap();
        assert!(matches!(args.command, Command::Id(_)));
        assert_eq!(
            args.options().collect::<Vec<_>>(),
            ["with_doc=True", "with_test=True"]
        );
        assert_eq!(args.settings().collect::<Vec<_>>(), ["build_type=debug"]);
    }

    #[test]
    fn overrides_on_both_sides_keep_order() {
        let args = Args::try_parse_from([
            "daiex-recipe",
            "-o",
            "with_doc=True",
            "-o",
            "developer_mode=True",
            "-s",
            "build_type=Release",
            "create",
            "-o",
            "with_doc=False",
            "-s",
            "build_type=Debug",
            "-s",
            "arch=x86_64",
        ])
        .unwrap();
        assert!(matches!(args.command, Command::Create(_)));
        assert_eq!(
            args.options().collect::<Vec<_>>(),
            ["with_doc=True", "developer_mode=True", "with_doc=False"]
        );
        assert_eq!(
            args.settings().collect::<Vec<_>>(),
            ["build_type=Release", "build_type=Debug", "arch=x86_64"]
        );
    }

    #[test]
    fn info_accepts_json_flag() {
        let args = Args::try_parse_from(["daiex-recipe", "info", "--json"]).unwrap();
        assert!(matches!(args.command, Command::Info { json: true, .. }));
            }

    #[test]
    fn missing_source_folder_fails_validation() {
        let args = Args::try_parse_from([
            "daiex-recipe",
            "build",
            "--source-folder",
            "/definitely/not/here",
        ])
        .unwrap();
        assert!(matches!(args.command, Command::Build(_)));
        assert!(args.validate().is_err());
    }
}
