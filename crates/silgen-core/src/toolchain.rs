//! External toolchain boundary.
//!
//! Wraps the two-phase cmake invocation (configure, then build). The
//! toolchain is a black box here; non-zero exit is surfaced with the
//! process's captured output as diagnostic context and never retried.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result, ToolPhase};

/// Build profile handed to the external toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildProfile {
    /// Symbols, no optimization. The default during development.
    #[default]
    Debug,
    /// Optimization plus link-time optimization.
    Release,
}

impl BuildProfile {
    /// The profile name as cmake spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Release => "Release",
        }
    }
}

/// Manages the external cmake toolchain.
#[derive(Debug, Clone)]
pub struct CmakeToolchain {
    /// Path to the cmake binary.
    cmake_path: PathBuf,

    /// Probed version string.
    version: String,
}

impl CmakeToolchain {
    /// Locate cmake and probe its version.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Toolchain`] if cmake is not on PATH or cannot report
    /// its version.
    pub fn new() -> Result<Self> {
        let cmake_path = which::which("cmake")
            .map_err(|_| Error::Toolchain("cmake not found in PATH".to_string()))?;
        let version = Self::probe_version(&cmake_path)?;

        Ok(Self {
            cmake_path,
            version,
        })
    }

    /// The probed toolchain version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Run the configure phase against `source_dir` into `build_dir`.
    pub fn configure(
        &self,
        source_dir: &Path,
        build_dir: &Path,
        profile: BuildProfile,
    ) -> Result<()> {
        self.run(
            ToolPhase::Configure,
            &[
                "-S".as_ref(),
                source_dir.as_os_str(),
                "-B".as_ref(),
                build_dir.as_os_str(),
                format!("-DCMAKE_BUILD_TYPE={}", profile.as_str()).as_ref(),
            ],
        )
    }

    /// Run the build phase in `build_dir`.
    pub fn build(&self, build_dir: &Path, profile: BuildProfile) -> Result<()> {
        self.run(
            ToolPhase::Build,
            &[
                "--build".as_ref(),
                build_dir.as_os_str(),
                "--config".as_ref(),
                profile.as_str().as_ref(),
            ],
        )
    }

    fn run(&self, phase: ToolPhase, args: &[&std::ffi::OsStr]) -> Result<()> {
        tracing::debug!(%phase, ?args, "invoking cmake");

        let output = Command::new(&self.cmake_path)
            .args(args)
            .output()
            .map_err(|e| Error::Toolchain(format!("failed to run cmake: {e}")))?;

        if !output.status.success() {
            let mut diagnostic = String::from_utf8_lossy(&output.stdout).into_owned();
            diagnostic.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(Error::Tool {
                phase,
                output: diagnostic,
            });
        }

        Ok(())
    }

    fn probe_version(cmake: &Path) -> Result<String> {
        let output = Command::new(cmake)
            .arg("--version")
            .output()
            .map_err(|e| Error::Toolchain(format!("failed to run cmake: {e}")))?;

        if !output.status.success() {
            return Err(Error::Toolchain("failed to get cmake version".to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().next().unwrap_or_default().trim().to_string())
    }
}
