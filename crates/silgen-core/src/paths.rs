//! Output directory management.
//!
//! Provides the layout of the target output directory: the generated
//! manifest lives at its top level and the transient build scratch directory
//! underneath it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Directory layout for one scaffolding run.
///
/// ```text
/// <output>/
/// ├── CMakeLists.txt   # generated manifest, overwritten each run
/// └── build/           # toolchain scratch, wiped and recreated each run
/// ```
#[derive(Debug, Clone)]
pub struct OutputDirs {
    /// The target output directory itself.
    pub output_dir: PathBuf,

    /// Scratch directory handed to the external toolchain.
    pub scratch_dir: PathBuf,
}

impl OutputDirs {
    /// Create the layout, creating the output directory if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir)?;

        let scratch_dir = output_dir.join("build");

        Ok(Self {
            output_dir,
            scratch_dir,
        })
    }

    /// Path of the generated manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.output_dir.join("CMakeLists.txt")
    }

    /// Wipe and recreate the scratch directory.
    ///
    /// Stale artifacts must not leak into the relocation step, so every run
    /// starts from an empty scratch tree.
    pub fn reset_scratch(&self) -> Result<()> {
        if self.scratch_dir.exists() {
            fs::remove_dir_all(&self.scratch_dir)?;
        }
        fs::create_dir_all(&self.scratch_dir)?;

        Ok(())
    }
}
