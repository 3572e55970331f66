//! Module naming for generated extension builds.
//!
//! The module name is the single source of truth shared by the CMake project,
//! the generated stub translation unit and the built binary artifact.

use serde::Serialize;

use crate::error::{Error, Result};

/// Fixed suffix appended to every generated module name.
const MODULE_SUFFIX: &str = "SIL";

/// Convert a snake_case string to CamelCase.
///
/// Splits on underscores and title-cases each segment, so `sample_matrix`
/// becomes `SampleMatrix`.
pub fn snake_to_camel(snake: &str) -> String {
    snake.split('_').map(title_case).collect()
}

/// Title-case one segment: a letter that follows a letter is lowercased,
/// any other letter is uppercased. Non-alphabetic characters pass through
/// and reset the word boundary.
fn title_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut prev_alpha = false;
    for ch in segment.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

/// Deterministic name for a generated extension module.
///
/// Derived once per invocation from the target file's base name and immutable
/// afterwards. Names the CMake project, the `PYBIND11_MODULE` block and the
/// produced shared library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleName(String);

impl ModuleName {
    /// Derive the module name from a target Python file name.
    ///
    /// `sample_matrix.py` yields `SampleMatrixSIL`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the name does not end in `.py`.
    pub fn from_target(target_file_name: &str) -> Result<Self> {
        let stem = target_file_name.strip_suffix(".py").ok_or_else(|| {
            Error::InvalidInput(format!(
                "target file name must end with .py, got '{target_file_name}'"
            ))
        })?;

        Ok(Self(format!("{}{}", snake_to_camel(stem), MODULE_SUFFIX)))
    }

    /// The module name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_to_camel() {
        assert_eq!(snake_to_camel("sample_matrix"), "SampleMatrix");
        assert_eq!(snake_to_camel("my_func"), "MyFunc");
        assert_eq!(snake_to_camel("single"), "Single");
        assert_eq!(snake_to_camel("a__b"), "AB");
    }

    #[test]
    fn test_module_name_derivation() {
        let name = ModuleName::from_target("sample_matrix.py").unwrap();
        assert_eq!(name.as_str(), "SampleMatrixSIL");
    }

    #[test]
    fn test_module_name_requires_py_extension() {
        let err = ModuleName::from_target("sample_matrix.cpp").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_title_case_resets_after_digits() {
        // Mirrors str.title() word boundaries from the reference derivation.
        assert_eq!(snake_to_camel("mat4x4_ops"), "Mat4X4Ops");
    }
}
