//! Native-source discovery.
//!
//! Walks a project tree and classifies directories as include roots and
//! files as translation units, excluding vendored sample/test subtrees and
//! build-output directories.

pub mod filter;
pub mod scanner;

pub use filter::{exclude_build_dirs, exclude_vendored_samples};
pub use scanner::{
    discover_include_roots, discover_source_files, HEADER_EXTENSIONS, SOURCE_EXTENSIONS,
};
