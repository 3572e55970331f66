//! Static extraction of a class's public interface from Python source.
//!
//! The parser sits behind the [`SourceAnalyzer`] trait so a different source
//! language can be wrapped without touching the generators.

mod python;

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};

pub use python::PythonAnalyzer;

/// One method of the extracted class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodDescriptor {
    /// Method name as declared.
    pub name: String,

    /// 1-based declaration line of the `def` itself.
    pub line: usize,

    /// Decorator names attached to the declaration, in source order.
    pub decorators: Vec<String>,
}

impl MethodDescriptor {
    /// Whether the name follows the dunder convention (`__name__`).
    ///
    /// Dunder methods are recorded here but never emitted into the stub or
    /// its registration block.
    pub fn is_dunder(&self) -> bool {
        self.name.starts_with("__") && self.name.ends_with("__")
    }
}

/// The public interface of exactly one class in one source file.
#[derive(Debug, Clone, Serialize)]
pub struct ClassInterface {
    /// Name of the single top-level class.
    pub class_name: String,

    /// Methods in declaration order, dunders included.
    pub methods: Vec<MethodDescriptor>,
}

impl ClassInterface {
    /// Methods eligible for stub emission, in declaration order.
    pub fn exported_methods(&self) -> impl Iterator<Item = &MethodDescriptor> {
        self.methods.iter().filter(|m| !m.is_dunder())
    }
}

/// Capability seam for interface extraction.
///
/// Implementations parse one source text into a [`ClassInterface`] and fail
/// on anything other than exactly one top-level class.
pub trait SourceAnalyzer {
    /// Analyze `source`; `path` is carried for error context only.
    fn analyze(&self, source: &str, path: &Path) -> Result<ClassInterface>;
}

/// Extract the class interface from the Python file at `path`.
///
/// # Errors
///
/// [`Error::NotFound`] if the file is missing, [`Error::Malformed`] if it
/// fails to parse, [`Error::NoClass`] / [`Error::MultipleClasses`] if the
/// file does not define exactly one top-level class.
pub fn extract(path: &Path) -> Result<ClassInterface> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let source = fs::read_to_string(path)?;
    PythonAnalyzer::new().analyze(&source, path)
}
