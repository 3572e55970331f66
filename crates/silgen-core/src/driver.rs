//! End-to-end build driver.
//!
//! Orchestrates discovery, extraction and generation, then hands the
//! generated manifest to the external toolchain and relocates the produced
//! artifact. Single-threaded and single-shot: every failure terminates the
//! run and requires caller intervention; generated text artifacts are left
//! in place for inspection.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::discover;
use crate::error::{Error, Result};
use crate::extract;
use crate::generate;
use crate::naming::ModuleName;
use crate::paths::OutputDirs;
use crate::toolchain::{BuildProfile, CmakeToolchain};

/// Extensions a built extension module may carry, per platform.
const ARTIFACT_EXTENSIONS: [&str; 3] = ["so", "dylib", "pyd"];

/// Text artifacts produced by the scaffolding phase.
#[derive(Debug, Clone)]
pub struct Scaffold {
    /// Derived module name.
    pub module: ModuleName,

    /// Resolved path of the target Python source.
    pub source_path: PathBuf,

    /// Path of the binding stub next to the Python source.
    pub stub_path: PathBuf,

    /// Path of the written manifest.
    pub manifest_path: PathBuf,
}

/// Drives the scaffolding pipeline for one target file.
#[derive(Debug)]
pub struct BuildDriver {
    /// Project root anchoring discovery; absolute, passed in explicitly.
    root: PathBuf,

    /// Output directory layout.
    dirs: OutputDirs,

    /// Profile handed to the toolchain.
    profile: BuildProfile,
}

impl BuildDriver {
    /// Create a driver rooted at `root`, writing into `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `root` does not exist, or an IO error
    /// if the output directory cannot be created.
    pub fn new(
        root: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
        profile: BuildProfile,
    ) -> Result<Self> {
        let root = root
            .as_ref()
            .canonicalize()
            .map_err(|_| Error::NotFound(root.as_ref().to_path_buf()))?;
        let dirs = OutputDirs::new(output_dir)?;

        Ok(Self {
            root,
            dirs,
            profile,
        })
    }

    /// Run the full pipeline: scaffold, external build, artifact relocation.
    ///
    /// Returns the relocated artifact path.
    pub fn run(&self, target_file_name: &str) -> Result<PathBuf> {
        let scaffold = self.scaffold(target_file_name)?;

        self.dirs.reset_scratch()?;

        let toolchain = CmakeToolchain::new()?;
        tracing::info!(version = toolchain.version(), "configuring build");
        toolchain.configure(&self.dirs.output_dir, &self.dirs.scratch_dir, self.profile)?;
        toolchain.build(&self.dirs.scratch_dir, self.profile)?;

        self.relocate_artifact(&scaffold.module)
    }

    /// Generate the text artifacts without touching the toolchain.
    ///
    /// The stub is generated only if absent; regeneration is opt-in by
    /// deleting the existing file. The manifest is always rewritten since
    /// the discovered tree may have changed.
    pub fn scaffold(&self, target_file_name: &str) -> Result<Scaffold> {
        let module = ModuleName::from_target(target_file_name)?;
        let source_path = find_file(&self.root, target_file_name)?;
        let stub_path = stub_path_for(&source_path);

        if stub_path.exists() {
            tracing::info!(stub = %stub_path.display(), "stub exists, skipping generation");
        } else {
            let interface = extract::extract(&source_path)?;
            tracing::info!(
                class = %interface.class_name,
                methods = interface.methods.len(),
                "extracted class interface"
            );
            fs::write(&stub_path, generate::stub::render(&interface, &module))?;
        }

        let include_roots =
            discover::discover_include_roots(&self.root, &discover::HEADER_EXTENSIONS);
        let source_files =
            discover::discover_source_files(&self.root, &discover::SOURCE_EXTENSIONS);
        tracing::debug!(
            include_roots = include_roots.len(),
            source_files = source_files.len(),
            "discovered native tree"
        );

        let manifest = generate::cmake::render(
            &module,
            &stub_path,
            &source_files,
            &include_roots,
            &self.root,
        );
        let manifest_path = self.dirs.manifest_path();
        fs::write(&manifest_path, manifest)?;

        Ok(Scaffold {
            module,
            source_path,
            stub_path,
            manifest_path,
        })
    }

    /// Move the built artifact from the scratch directory into the output
    /// directory.
    ///
    /// The artifact is matched by exact module-name prefix plus a known
    /// platform extension; no globbing. The platform tag between the two is
    /// toolchain-dependent and ignored.
    fn relocate_artifact(&self, module: &ModuleName) -> Result<PathBuf> {
        let prefix = format!("{module}.");

        let mut entries: Vec<_> = fs::read_dir(&self.dirs.scratch_dir)?
            .filter_map(std::result::Result::ok)
            .collect();
        entries.sort_by_key(std::fs::DirEntry::file_name);

        for entry in entries {
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_artifact = name.strip_prefix(&prefix).is_some_and(|rest| {
                ARTIFACT_EXTENSIONS
                    .iter()
                    .any(|ext| rest == *ext || rest.ends_with(&format!(".{ext}")))
            });

            if !is_artifact {
                continue;
            }

            let src = entry.path();
            let dest = self.dirs.output_dir.join(&name);

            // rename fails across filesystems; fall back to copy + remove.
            if fs::rename(&src, &dest).is_err() {
                fs::copy(&src, &dest)?;
                fs::remove_file(&src)?;
            }

            tracing::info!(artifact = %dest.display(), "relocated build artifact");
            return Ok(dest);
        }

        Err(Error::Relocation(format!(
            "no artifact named {module}.* with a known extension in {}",
            self.dirs.scratch_dir.display()
        )))
    }
}

/// Locate the first file with the exact name `file_name` under `root`.
///
/// Depth-first in sorted order, stopping at the first match.
fn find_file(root: &Path, file_name: &str) -> Result<PathBuf> {
    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        if entry.file_type().is_file() && entry.file_name().to_string_lossy() == file_name {
            return Ok(entry.into_path());
        }
    }

    Err(Error::NotFound(root.join(file_name)))
}

/// Stub path for a Python source: `<stem>_SIL.cpp` next to it.
fn stub_path_for(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{stem}_SIL.cpp"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_find_file_first_match() {
        let temp = TempDir::new().unwrap();
        write(&temp.path().join("a/thing.py"), "");
        write(&temp.path().join("z/thing.py"), "");

        let found = find_file(temp.path(), "thing.py").unwrap();
        assert!(found.ends_with("a/thing.py"));
    }

    #[test]
    fn test_find_file_missing() {
        let temp = TempDir::new().unwrap();
        let err = find_file(temp.path(), "absent.py").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_stub_path_for() {
        let stub = stub_path_for(Path::new("/proj/mod/sample_matrix.py"));
        assert_eq!(stub, Path::new("/proj/mod/sample_matrix_SIL.cpp"));
    }

    #[test]
    fn test_scaffold_generates_stub_and_manifest() {
        let temp = TempDir::new().unwrap();
        write(
            &temp.path().join("mod/thing.py"),
            "class Thing:\n    def run(self):\n        pass\n\n    def __repr__(self):\n        return ''\n",
        );
        let output = temp.path().join("out");

        let driver = BuildDriver::new(temp.path(), &output, BuildProfile::Debug).unwrap();
        let scaffold = driver.scaffold("thing.py").unwrap();

        assert_eq!(scaffold.module.as_str(), "ThingSIL");
        let stub = fs::read_to_string(&scaffold.stub_path).unwrap();
        assert!(stub.contains("m.def(\"initialize\""));
        assert!(stub.contains("m.def(\"run\""));
        assert!(!stub.contains("__repr__"));

        let manifest = fs::read_to_string(&scaffold.manifest_path).unwrap();
        assert!(manifest.contains("project(ThingSIL)"));
        assert!(manifest.contains("thing_SIL.cpp"));
    }

    #[test]
    fn test_scaffold_preserves_existing_stub() {
        let temp = TempDir::new().unwrap();
        write(
            &temp.path().join("thing.py"),
            "class Thing:\n    def run(self):\n        pass\n",
        );
        let output = temp.path().join("out");
        let driver = BuildDriver::new(temp.path(), &output, BuildProfile::Debug).unwrap();

        let first = driver.scaffold("thing.py").unwrap();
        fs::write(&first.stub_path, "// hand-edited\n").unwrap();

        driver.scaffold("thing.py").unwrap();
        assert_eq!(
            fs::read_to_string(&first.stub_path).unwrap(),
            "// hand-edited\n"
        );
    }

    #[test]
    fn test_scaffold_rejects_bad_target_name() {
        let temp = TempDir::new().unwrap();
        let driver =
            BuildDriver::new(temp.path(), temp.path().join("out"), BuildProfile::Debug).unwrap();

        let err = driver.scaffold("thing.cpp").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_relocate_artifact_matches_platform_tag() {
        let temp = TempDir::new().unwrap();
        let driver =
            BuildDriver::new(temp.path(), temp.path().join("out"), BuildProfile::Debug).unwrap();
        driver.dirs.reset_scratch().unwrap();

        let artifact = driver
            .dirs
            .scratch_dir
            .join("ThingSIL.cpython-311-x86_64-linux-gnu.so");
        fs::write(&artifact, "binary").unwrap();
        fs::write(driver.dirs.scratch_dir.join("CMakeCache.txt"), "").unwrap();

        let module = ModuleName::from_target("thing.py").unwrap();
        let dest = driver.relocate_artifact(&module).unwrap();

        assert!(dest.ends_with("ThingSIL.cpython-311-x86_64-linux-gnu.so"));
        assert!(dest.exists());
        assert!(!artifact.exists());
    }

    #[test]
    fn test_relocate_artifact_missing() {
        let temp = TempDir::new().unwrap();
        let driver =
            BuildDriver::new(temp.path(), temp.path().join("out"), BuildProfile::Debug).unwrap();
        driver.dirs.reset_scratch().unwrap();

        let module = ModuleName::from_target("thing.py").unwrap();
        let err = driver.relocate_artifact(&module).unwrap_err();
        assert!(matches!(err, Error::Relocation(_)));
    }
}
