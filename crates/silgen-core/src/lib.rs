//! Core engine for silgen native-extension scaffolding.
//!
//! This crate provides:
//! - Native-source discovery with sample/build filtering
//! - Class-interface extraction from Python source
//! - CMake manifest and pybind11 stub generation
//! - The build driver orchestrating the external toolchain

pub mod discover;
pub mod driver;
pub mod error;
pub mod extract;
pub mod generate;
pub mod naming;
pub mod paths;
pub mod toolchain;

pub use driver::{BuildDriver, Scaffold};
pub use error::{Error, Result, ToolPhase};
pub use extract::{ClassInterface, MethodDescriptor, PythonAnalyzer, SourceAnalyzer};
pub use naming::{snake_to_camel, ModuleName};
pub use paths::OutputDirs;
pub use toolchain::{BuildProfile, CmakeToolchain};
