//! Packaging recipe for the I/Q Data Import Export library (daiex).
//!
//! This library provides:
//! - Dependency declaration for the daiex package
//! - CMake build-configuration resolution with a single, memoized configure
//! - Build and install phases driven through CMake
//! - Package fingerprinting and exported component metadata
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod metadata;
pub mod recipe;
pub mod source;

// Re-export commonly used types
pub use error::{CliError, RecipeError, Result};
