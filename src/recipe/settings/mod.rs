//! Options and settings that select a package variant.
//!
//! [`RecipeOptions`] are the recipe's own boolean toggles, [`Settings`] the
//! ambient build matrix. [`VariantBuilder`] layers defaults, a profile and
//! command-line overrides into one immutable [`Variant`].

mod arch;
mod builder;
mod matrix;
mod options;
mod profile;

pub use arch::Arch;
pub use builder::{Variant, VariantBuilder};
pub use matrix::{BuildType, Compiler, Os, Settings};
pub use options::{RecipeOption, RecipeOptions, parse_bool};
pub use profile::Profile;
