//! CPU architecture setting.

use crate::recipe::Error;
use std::{fmt, str::FromStr};

/// Target CPU architecture of the package binaries.
///
/// Names follow the package manager's settings vocabulary (`armv8` rather
/// than Rust's `aarch64`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    /// x86_64 / AMD64 (64-bit)
    #[serde(rename = "x86_64")]
    X86_64,
    /// x86 / i686 (32-bit)
    X86,
    /// ARMv8 / AArch64 (64-bit)
    Armv8,
    /// ARMv7 hard-float (32-bit)
    Armv7,
    /// RISC-V (64-bit)
    Riscv64,
}

impl Arch {
    /// Architecture of the running host.
    pub fn host() -> Self {
        match std::env::consts::ARCH {
            "x86" => Arch::X86,
            "aarch64" => Arch::Armv8,
            "arm" => Arch::Armv7,
            "riscv64" => Arch::Riscv64,
            _ => Arch::X86_64,
        }
    }

    /// Setting value as written in profiles.
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::X86 => "x86",
            Arch::Armv8 => "armv8",
            Arch::Armv7 => "armv7",
            Arch::Riscv64 => "riscv64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Arch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x86_64" | "amd64" => Ok(Arch::X86_64),
            "x86" | "i686" => Ok(Arch::X86),
            "armv8" | "aarch64" | "arm64" => Ok(Arch::Armv8),
            "armv7" | "armv7hf" => Ok(Arch::Armv7),
            "riscv64" => Ok(Arch::Riscv64),
            other => Err(Error::InvalidSetting {
                name: "arch".into(),
                reason: format!("unknown architecture '{other}'"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_map_to_canonical_names() {
        assert_eq!("aarch64".parse::<Arch>().unwrap(), Arch::Armv8);
        assert_eq!("AMD64".parse::<Arch>().unwrap(), Arch::X86_64);
        assert_eq!(Arch::Armv8.to_string(), "armv8");
    }

    #[test]
    fn unknown_arch_is_rejected() {
        assert!(matches!(
            "sparc".parse::<Arch>(),
            Err(Error::InvalidSetting { .. })
        ));
    }
}
