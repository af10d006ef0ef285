//! Build settings: the ambient build-matrix parameters.

use super::Arch;
use crate::recipe::{Error, Result};
use std::{fmt, str::FromStr};

/// Target operating system.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize)]
pub enum Os {
    /// Linux
    Linux,
    /// Microsoft Windows
    Windows,
    /// Apple macOS
    Macos,
}

impl Os {
    /// Operating system of the running host.
    pub fn host() -> Self {
        if cfg!(target_os = "windows") {
            Os::Windows
        } else if cfg!(target_os = "macos") {
            Os::Macos
        } else {
            Os::Linux
        }
    }

    /// Setting value as written in profiles.
    pub fn as_str(self) -> &'static str {
        match self {
            Os::Linux => "Linux",
            Os::Windows => "Windows",
            Os::Macos => "Macos",
        }
    }
}

impl FromStr for Os {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "linux" => Ok(Os::Linux),
            "windows" => Ok(Os::Windows),
            "macos" | "darwin" => Ok(Os::Macos),
            other => Err(Error::InvalidSetting {
                name: "os".into(),
                reason: format!("unknown operating system '{other}'"),
            }),
        }
    }
}

/// C++ compiler family.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize)]
pub enum Compiler {
    /// GNU g++
    Gcc,
    /// LLVM clang++
    Clang,
    /// Apple's clang
    AppleClang,
    /// Microsoft Visual C++
    Msvc,
}

impl Compiler {
    /// Default compiler for `os`.
    pub fn default_for(os: Os) -> Self {
        match os {
            Os::Linux => Compiler::Gcc,
            Os::Macos => Compiler::AppleClang,
            Os::Windows => Compiler::Msvc,
        }
    }

    /// Setting value as written in profiles.
    pub fn as_str(self) -> &'static str {
        match self {
            Compiler::Gcc => "gcc",
            Compiler::Clang => "clang",
            Compiler::AppleClang => "apple-clang",
            Compiler::Msvc => "msvc",
        }
    }
}

impl FromStr for Compiler {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "gcc" => Ok(Compiler::Gcc),
            "clang" => Ok(Compiler::Clang),
            "apple-clang" => Ok(Compiler::AppleClang),
            "msvc" | "visual studio" => Ok(Compiler::Msvc),
            other => Err(Error::InvalidSetting {
                name: "compiler".into(),
                reason: format!("unknown compiler '{other}'"),
            }),
        }
    }
}

/// CMake build type.
///
/// Input is case-insensitive; [`BuildType::as_str`] yields the canonical
/// capitalization CMake expects.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, serde::Serialize)]
pub enum BuildType {
    /// Unoptimized with debug info
    Debug,
    /// Optimized
    #[default]
    Release,
    /// Optimized with debug info
    RelWithDebInfo,
    /// Optimized for size
    MinSizeRel,
}

impl BuildType {
    /// Canonical CMake spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Release => "Release",
            BuildType::RelWithDebInfo => "RelWithDebInfo",
            BuildType::MinSizeRel => "MinSizeRel",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(BuildType::Debug),
            "release" => Ok(BuildType::Release),
            "relwithdebinfo" => Ok(BuildType::RelWithDebInfo),
            "minsizerel" => Ok(BuildType::MinSizeRel),
            other => Err(Error::InvalidSetting {
                name: "build_type".into(),
                reason: format!("unknown build type '{other}'"),
            }),
        }
    }
}

/// The four settings that distinguish binary variants.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Settings {
    /// Target operating system.
    pub os: Os,
    /// Compiler family.
    pub compiler: Compiler,
    /// CMake build type.
    pub build_type: BuildType,
    /// Target architecture.
    pub arch: Arch,
}

impl Settings {
    /// Settings describing the running host with a `Release` build.
    pub fn host() -> Self {
        let os = Os::host();
        Self {
            os,
            compiler: Compiler::default_for(os),
            build_type: BuildType::Release,
            arch: Arch::host(),
        }
    }

    /// Set a setting by name from its textual value.
    pub fn set_named(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "os" => self.os = value.parse()?,
            "compiler" => self.compiler = value.parse()?,
            "build_type" => self.build_type = value.parse()?,
            "arch" => self.arch = value.parse()?,
            _ => {
                return Err(Error::InvalidSetting {
                    name: name.to_string(),
                    reason: "unknown setting; expected one of os, compiler, build_type, arch"
                        .into(),
                });
            }
        }
        Ok(())
    }

    /// Apply a `name=value` override as given on the command line.
    pub fn apply_override(&mut self, assignment: &str) -> Result<()> {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| Error::InvalidSetting {
                name: assignment.to_string(),
                reason: "expected NAME=VALUE".into(),
            })?;
        self.set_named(name.trim(), value.trim())
    }

    /// `(name, value)` pairs in a fixed order.
    pub fn iter(&self) -> [(&'static str, &'static str); 4] {
        [
            ("arch", self.arch.as_str()),
            ("build_type", self.build_type.as_str()),
            ("compiler", self.compiler.as_str()),
            ("os", self.os.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_type_is_canonicalized() {
        for (input, expected) in [
            ("debug", "Debug"),
            ("RELEASE", "Release"),
            ("relwithdebinfo", "RelWithDebInfo"),
            ("MinSizeRel", "MinSizeRel"),
        ] {
            assert_eq!(input.parse::<BuildType>().unwrap().as_str(), expected);
        }
    }

    #[test]
    fn overrides_replace_individual_settings() {
        let mut settings = Settings::host();
        settings.apply_override("build_type=debug").unwrap();
        settings.apply_override("os=Windows").unwrap();
        settings.apply_override("compiler=msvc").unwrap();
        assert_eq!(settings.build_type, BuildType::Debug);
        assert_eq!(settings.os, Os::Windows);
        assert_eq!(settings.compiler, Compiler::Msvc);
    }

    #[test]
    fn unknown_setting_is_rejected() {
        let mut settings = Settings::host();
        let err = settings.apply_override("cppstd=17").unwrap_err();
        assert!(matches!(err, Error::InvalidSetting { ref name, .. } if name == "cppstd"));
    }

    #[test]
    fn host_compiler_follows_os() {
        let settings = Settings::host();
        assert_eq!(settings.compiler, Compiler::default_for(settings.os));
    }
}
