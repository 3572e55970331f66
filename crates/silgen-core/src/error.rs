//! Error types for silgen-core.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for silgen-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Phase of the external build that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolPhase {
    /// `cmake -S .. -B ..`
    Configure,
    /// `cmake --build ..`
    Build,
}

impl std::fmt::Display for ToolPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configure => write!(f, "configure"),
            Self::Build => write!(f, "build"),
        }
    }
}

/// Errors that can occur in silgen-core.
#[derive(Debug, Error)]
pub enum Error {
    /// A required file was not found.
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    /// Source file failed to parse.
    #[error("failed to parse {}: {message}", .path.display())]
    Malformed { path: PathBuf, message: String },

    /// The source file defines no class, so there is nothing to wrap.
    #[error("no classes found in {}, cannot generate binding stub", .0.display())]
    NoClass(PathBuf),

    /// The source file defines more than one class.
    #[error("{count} classes found in {}, only one class is supported", .path.display())]
    MultipleClasses { path: PathBuf, count: usize },

    /// A naming precondition was violated.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The external cmake binary is missing or unusable.
    #[error("toolchain error: {0}")]
    Toolchain(String),

    /// A cmake phase exited non-zero.
    #[error("cmake {phase} failed:\n{output}")]
    Tool { phase: ToolPhase, output: String },

    /// The expected build artifact was absent after a successful build.
    #[error("relocation failed: {0}")]
    Relocation(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
