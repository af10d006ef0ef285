//! Recipe options: the package-specific boolean toggles.

use crate::recipe::{Error, Result};
use std::fmt;

/// One of the recipe's named options.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RecipeOption {
    /// Build the documentation.
    WithDoc,
    /// Build the test suite.
    WithTest,
    /// Build the .NET wrapper.
    WithDotNet,
    /// Install public headers under `include/daiex`.
    InjectLibraryNameInInclude,
    /// Build the aggregate `package` target instead of the default one.
    DeveloperMode,
}

impl RecipeOption {
    /// All options in declaration order.
    pub const ALL: [RecipeOption; 5] = [
        RecipeOption::WithDoc,
        RecipeOption::WithTest,
        RecipeOption::WithDotNet,
        RecipeOption::InjectLibraryNameInInclude,
        RecipeOption::DeveloperMode,
    ];

    /// Option name as used in profiles and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            RecipeOption::WithDoc => "with_doc",
            RecipeOption::WithTest => "with_test",
            RecipeOption::WithDotNet => "with_dotNet",
            RecipeOption::InjectLibraryNameInInclude => "inject_library_name_in_include",
            RecipeOption::DeveloperMode => "developer_mode",
        }
    }

    /// Look an option up by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.name() == name)
    }
}

impl fmt::Display for RecipeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The full option set. Every option defaults to `false`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct RecipeOptions {
    /// Build the documentation.
    pub with_doc: bool,
    /// Build the test suite. Never part of the package id.
    pub with_test: bool,
    /// Build the .NET wrapper.
    pub with_dot_net: bool,
    /// Nest public headers under a directory named after the library.
    pub inject_library_name_in_include: bool,
    /// Build the aggregate `package` target.
    pub developer_mode: bool,
}

impl RecipeOptions {
    /// Current value of `option`.
    pub fn get(&self, option: RecipeOption) -> bool {
        match option {
            RecipeOption::WithDoc => self.with_doc,
            RecipeOption::WithTest => self.with_test,
            RecipeOption::WithDotNet => self.with_dot_net,
            RecipeOption::InjectLibraryNameInInclude => self.inject_library_name_in_include,
            RecipeOption::DeveloperMode => self.developer_mode,
        }
    }

    /// Set `option` to `value`.
    pub fn set(&mut self, option: RecipeOption, value: bool) {
        let slot = match option {
            RecipeOption::WithDoc => &mut self.with_doc,
            RecipeOption::WithTest => &mut self.with_test,
            RecipeOption::WithDotNet => &mut self.with_dot_net,
            RecipeOption::InjectLibraryNameInInclude => &mut self.inject_library_name_in_include,
            RecipeOption::DeveloperMode => &mut self.developer_mode,
        };
        *slot = value;
    }

    /// Set an option from its name and a textual value.
    pub fn set_named(&mut self, name: &str, value: &str) -> Result<()> {
        let option = RecipeOption::from_name(name).ok_or_else(|| Error::InvalidOption {
            name: name.to_string(),
            reason: format!(
                "unknown option; expected one of {}",
                RecipeOption::ALL.map(RecipeOption::name).join(", ")
            ),
        })?;
        self.set(option, parse_bool(name, value)?);
        Ok(())
    }

    /// Apply a `name=value` override as given on the command line.
    pub fn apply_override(&mut self, assignment: &str) -> Result<()> {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| Error::InvalidOption {
                name: assignment.to_string(),
                reason: "expected NAME=VALUE".into(),
            })?;
        self.set_named(name.trim(), value.trim())
    }

    /// `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        RecipeOption::ALL
            .into_iter()
            .map(move |option| (option.name(), self.get(option)))
    }
}

/// Parse the boolean spellings accepted for option values.
pub fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidOption {
            name: name.to_string(),
            reason: format!("'{value}' is not a boolean"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_false() {
        assert!(RecipeOptions::default().iter().all(|(_, value)| !value));
    }

    #[test]
    fn override_accepts_python_style_booleans() {
        let mut options = RecipeOptions::default();
        options.apply_override("with_dotNet=True").unwrap();
        options.apply_override("developer_mode = yes").unwrap();
        assert!(options.with_dot_net);
        assert!(options.developer_mode);

        options.apply_override("with_dotNet=False").unwrap();
        assert!(!options.with_dot_net);
    }

    #[test]
    fn plural_test_option_is_unknown() {
        let mut options = RecipeOptions::default();
        let err = options.apply_override("with_tests=True").unwrap_err();
        assert!(matches!(err, Error::InvalidOption { ref name, .. } if name == "with_tests"));
    }

    #[test]
    fn malformed_override_is_rejected() {
        let mut options = RecipeOptions::default();
        assert!(options.apply_override("with_doc").is_err());
        assert!(options.apply_override("with_doc=maybe").is_err());
    }

    #[test]
    fn set_and_get_cover_every_option() {
        for option in RecipeOption::ALL {
            let mut options = RecipeOptions::default();
            options.set(option, true);
            assert!(options.get(option));
            assert_eq!(options.iter().filter(|(_, v)| *v).count(), 1);
            assert_eq!(RecipeOption::from_name(option.name()), Some(option));
        }
    }
}
