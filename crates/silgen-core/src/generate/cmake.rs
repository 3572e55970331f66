//! CMake manifest generation.
//!
//! Renders the `CMakeLists.txt` consumed by the external toolchain. Output
//! is deterministic text; the driver overwrites any previous manifest.

use std::path::{Path, PathBuf};

use crate::naming::ModuleName;

/// Minimum CMake version the generated manifest requires.
const CMAKE_MINIMUM_VERSION: &str = "3.14";

/// Render a CMake manifest for a pybind11 extension module.
///
/// The primary stub translation unit comes first; every discovered source
/// file follows except exact string matches of the primary path. Include
/// roots are resolved to absolute paths against `root`; the root's own empty
/// entry is skipped since the project root is not a header search path.
pub fn render(
    module: &ModuleName,
    primary_stub: &Path,
    source_files: &[PathBuf],
    include_roots: &[String],
    root: &Path,
) -> String {
    let mut text = String::new();

    text.push_str(&format!(
        "cmake_minimum_required(VERSION {CMAKE_MINIMUM_VERSION})\n"
    ));
    text.push_str("cmake_policy(SET CMP0148 NEW)\n\n");

    text.push_str(&format!("project({module})\n\n"));

    text.push_str("set(CMAKE_CXX_STANDARD 11)\n");
    text.push_str("set(CMAKE_CXX_STANDARD_REQUIRED ON)\n");
    text.push_str("if(NOT CMAKE_BUILD_TYPE)\n");
    text.push_str("  set(CMAKE_BUILD_TYPE Debug CACHE STRING \"Build type\" FORCE)\n");
    text.push_str("endif()\n\n");

    text.push_str("set(CMAKE_CXX_FLAGS_DEBUG \"-g -O0\")\n");
    text.push_str("set(CMAKE_CXX_FLAGS_RELEASE \"-O2\")\n");
    text.push_str("set(CMAKE_CXX_FLAGS_RELEASE \"${CMAKE_CXX_FLAGS_RELEASE} -flto=auto\")\n\n");

    text.push_str("find_package(pybind11 REQUIRED)\n\n");

    text.push_str(&format!("pybind11_add_module({module}\n"));
    text.push_str(&format!("    {}\n", primary_stub.display()));

    let primary = primary_stub.display().to_string();
    for source_file in source_files {
        if source_file.display().to_string() != primary {
            text.push_str(&format!("    {}\n", source_file.display()));
        }
    }
    text.push_str(")\n\n");

    text.push_str("if(CMAKE_BUILD_TYPE STREQUAL \"Release\")\n");
    text.push_str(&format!(
        "  target_compile_options({module} PRIVATE -Werror)\n"
    ));
    text.push_str("endif()\n\n");

    text.push_str(&format!("target_include_directories({module} PRIVATE\n"));
    for dir in include_roots {
        if !dir.is_empty() {
            text.push_str(&format!("    {}\n", root.join(dir).display()));
        }
    }
    text.push_str(")\n");

    text
}
