//! Builder for resolving the requested variant.

use super::{Profile, RecipeOptions, Settings};
use std::path::{Path, PathBuf};

/// Options and settings of one package variant, fixed once resolved.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Variant {
    /// Recipe options.
    pub options: RecipeOptions,
    /// Build settings.
    pub settings: Settings,
}

/// Builder for a [`Variant`].
///
/// Layers, lowest precedence first: option defaults and host settings, an
/// optional profile file, then individual `name=value` overrides.
///
/// # Examples
///
/// ```no_run
/// use daiex_recipe::recipe::VariantBuilder;
///
/// # fn example() -> daiex_recipe::recipe::Result<()> {
/// let variant = VariantBuilder::new()
///     .profile("profiles/debug.toml")
///     .option("with_doc=True")
///     .setting("arch=armv8")
///     .build()?;
/// assert!(variant.options.with_doc);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct VariantBuilder {
    base_settings: Option<Settings>,
    profile: Option<PathBuf>,
    option_overrides: Vec<String>,
    setting_overrides: Vec<String>,
}

impl VariantBuilder {
    /// Creates a new variant builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Replaces the host-derived base settings.
    ///
    /// Default: [`Settings::host`]
    pub fn base_settings(mut self, settings: Settings) -> Self {
        self.base_settings = Some(settings);
        self
    }

    /// Sets a profile file to apply before the individual overrides.
    pub fn profile<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.profile = Some(path.as_ref().to_path_buf());
        self
    }

    /// Adds one `name=value` option override.
    pub fn option(mut self, assignment: impl Into<String>) -> Self {
        self.option_overrides.push(assignment.into());
        self
    }

    /// Adds several `name=value` option overrides.
    pub fn options<I, S>(mut self, assignments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.option_overrides
            .extend(assignments.into_iter().map(Into::into));
        self
    }

    /// Adds one `name=value` setting override.
    pub fn setting(mut self, assignment: impl Into<String>) -> Self {
        self.setting_overrides.push(assignment.into());
        self
    }

    /// Adds several `name=value` setting overrides.
    pub fn settings<I, S>(mut self, assignments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.setting_overrides
            .extend(assignments.into_iter().map(Into::into));
        self
    }

    /// Resolves the variant.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be read or any option or
    /// setting name or value is invalid.
    pub fn build(self) -> crate::recipe::Result<Variant> {
        let mut options = RecipeOptions::default();
        let mut settings = self.base_settings.unwrap_or_else(Settings::host);

        if let Some(path) = &self.profile {
            log::debug!("Applying profile {}", path.display());
            Profile::load(path)?.apply(&mut options, &mut settings)?;
        }

        for assignment in &self.setting_overrides {
            settings.apply_override(assignment)?;
        }
        for assignment in &self.option_overrides {
            options.apply_override(assignment)?;
        }

        Ok(Variant { options, settings })
    }
}
