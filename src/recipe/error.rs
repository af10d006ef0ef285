//! Error types for recipe operations.
//!
//! Every failure is terminal for the current packaging invocation; nothing
//! in here is retried. The [`Context`] and [`ErrorExt`] traits attach
//! human-readable context the same way across all phases.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

/// Result type alias for recipe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving, configuring, building or packaging.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The version file next to the recipe could not be read.
    #[error("failed to read version file {}: {source}", .path.display())]
    VersionFile {
        /// Path of the version file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The version file exists but holds no version.
    #[error("version file {} is empty", .0.display())]
    EmptyVersion(PathBuf),

    /// Unknown option name or unparsable option value.
    #[error("invalid option `{name}`: {reason}")]
    InvalidOption {
        /// Option name as given
        name: String,
        /// What was wrong with it
        reason: String,
    },

    /// Unknown setting name or unparsable setting value.
    #[error("invalid setting `{name}`: {reason}")]
    InvalidSetting {
        /// Setting name as given
        name: String,
        /// What was wrong with it
        reason: String,
    },

    /// A profile file could not be parsed.
    #[error("invalid profile {}: {reason}", .path.display())]
    Profile {
        /// Path of the profile
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// A required external tool is not installed.
    #[error("`{0}` was not found in PATH")]
    ToolNotFound(String),

    /// An external command could not be spawned.
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        /// Command line that was attempted
        command: String,
        /// Spawn error
        #[source]
        error: std::io::Error,
    },

    /// An external command ran and reported failure.
    #[error("`{command}` failed ({}){}", describe_exit(.code), format_stderr(.stderr))]
    ToolFailed {
        /// Command line that failed
        command: String,
        /// Exit code, `None` when killed by a signal
        code: Option<i32>,
        /// Tail of the captured stderr
        stderr: String,
    },

    /// Filesystem error with the operation and path that caused it.
    #[error("{context} {}: {error}", .path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying IO error
        #[source]
        error: std::io::Error,
    },

    /// IO errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Directory traversal errors
    #[error("directory walk failed: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Errors with a plain message
    #[error("{0}")]
    GenericError(String),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

fn format_stderr(stderr: &str) -> String {
    if stderr.trim().is_empty() {
        String::new()
    } else {
        format!(":\n{}", stderr.trim_end())
    }
}

/// Attach a message to a failed `Result` or an empty `Option`.
pub trait Context<T> {
    /// Wrap the error (or absence) into [`Error::GenericError`] with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

impl<T, E> Context<T> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::GenericError(format!("{context}: {e}")))
    }
}

/// Filesystem context for IO results.
pub trait ErrorExt<T> {
    /// Convert an IO error into [`Error::Fs`] naming the operation and path.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Return early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::recipe::Error::GenericError(format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_failure_includes_exit_code_and_stderr() {
        let err = Error::ToolFailed {
            command: "cmake --build build".into(),
            code: Some(2),
            stderr: "make: *** [all] Error 2\n".into(),
        };
        let message = err.to_string();
        assert!(message.contains("exit code 2"));
        assert!(message.ends_with("make: *** [all] Error 2"));
    }

    #[test]
    fn tool_failure_without_stderr_has_no_trailer() {
        let err = Error::ToolFailed {
            command: "cmake --install build".into(),
            code: None,
            stderr: "  \n".into(),
        };
        assert_eq!(
            err.to_string(),
            "`cmake --install build` failed (terminated by signal)"
        );
    }

    #[test]
    fn fs_context_names_operation_and_path() {
        let io: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        let err = io.fs_context("creating build folder", "/tmp/x").unwrap_err();
        assert_eq!(err.to_string(), "creating build folder /tmp/x: gone");
    }

    #[test]
    fn option_context_becomes_generic_error() {
        let missing: Option<u8> = None;
        let err = missing.context("nothing here").unwrap_err();
        assert!(matches!(err, Error::GenericError(ref m) if m == "nothing here"));
    }
}
