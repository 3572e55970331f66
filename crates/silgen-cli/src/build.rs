//! Build command implementation for the silgen CLI.
//!
//! Runs the full pipeline: scaffold the stub and manifest, invoke the
//! external toolchain and relocate the built module.

use std::path::PathBuf;
use std::time::Instant;

use silgen_core::{BuildDriver, BuildProfile};

use crate::colors;

/// Result type for CLI operations.
pub type CliResult = anyhow::Result<()>;

/// Scaffold and build one target file.
pub fn execute(
    target: &str,
    output: &str,
    root: Option<&str>,
    release: bool,
    no_build: bool,
) -> CliResult {
    let start = Instant::now();

    let root = match root {
        Some(r) => PathBuf::from(r),
        None => std::env::current_dir()?,
    };

    let profile = if release {
        BuildProfile::Release
    } else {
        BuildProfile::Debug
    };

    println!(
        "\n{}silgen{} - Building {}{}{}\n",
        colors::BOLD,
        colors::RESET,
        colors::CYAN,
        target,
        colors::RESET
    );

    let driver = BuildDriver::new(&root, output, profile)?;

    if no_build {
        let scaffold = driver.scaffold(target)?;
        println!(
            "{}Generated:{} {}",
            colors::GREEN,
            colors::RESET,
            scaffold.stub_path.display()
        );
        println!(
            "{}Generated:{} {}",
            colors::GREEN,
            colors::RESET,
            scaffold.manifest_path.display()
        );
        return Ok(());
    }

    let artifact = driver.run(target)?;
    let duration = start.elapsed();

    println!(
        "{}Built:{} {}",
        colors::GREEN,
        colors::RESET,
        artifact.display()
    );
    println!(
        "{}Mode:{} {}",
        colors::DIM,
        colors::RESET,
        if release {
            "release (optimized)"
        } else {
            "debug"
        }
    );
    println!(
        "{}Time:{} {:.2}s",
        colors::DIM,
        colors::RESET,
        duration.as_secs_f64()
    );

    Ok(())
}
