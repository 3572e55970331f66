//! Discover command: print the native tree as the scanner sees it.

use std::path::Path;

use silgen_core::discover::{
    discover_include_roots, discover_source_files, HEADER_EXTENSIONS, SOURCE_EXTENSIONS,
};

use crate::build::CliResult;
use crate::colors;

/// Print include roots and source files discovered under `root`.
pub fn execute(root: &str) -> CliResult {
    let root = Path::new(root);

    let include_roots = discover_include_roots(root, &HEADER_EXTENSIONS);
    let source_files = discover_source_files(root, &SOURCE_EXTENSIONS);

    println!("{}Include roots:{}", colors::BOLD, colors::RESET);
    for dir in &include_roots {
        if dir.is_empty() {
            println!("  . (project root)");
        } else {
            println!("  {dir}");
        }
    }

    println!("\n{}Source files:{}", colors::BOLD, colors::RESET);
    for file in &source_files {
        println!("  {}", file.display());
    }

    println!(
        "\n{}{} include root(s), {} source file(s){}",
        colors::DIM,
        include_roots.len(),
        source_files.len(),
        colors::RESET
    );

    Ok(())
}
