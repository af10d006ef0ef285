//! Package orchestration.
//!
//! This module provides the main [`Recipe`] orchestrator that drives a
//! [`BuildGenerator`](crate::recipe::BuildGenerator) through the packaging
//! phases.
//!
//! # Overview
//!
//! A packaging run:
//! 1. Reads the version file and fixes the variant
//! 2. Derives the package id and the folder [`Layout`]
//! 3. Configures the generator once, through a caller-owned cache
//! 4. Builds, then installs into the package folder
//! 5. Writes a [`PackageManifest`] with the tree digest
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA-256 digest of the installed tree
//! - [`layout`] - Source, build and package folders
//! - [`manifest`] - Package metadata file
//! - [`orchestrator`] - Main [`Recipe`] struct and phases

mod checksum;
mod layout;
mod manifest;
mod orchestrator;

pub use layout::Layout;
pub use manifest::{MANIFEST_FILE, PackageManifest};
pub use orchestrator::{FolderOverrides, Recipe};
