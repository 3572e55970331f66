//! Inspect command: print the extracted class interface of a Python file.

use std::path::Path;

use silgen_core::extract;

use crate::build::CliResult;
use crate::colors;

/// Extract and print the interface of one Python file.
pub fn execute(file: &str, json: bool) -> CliResult {
    let interface = extract::extract(Path::new(file))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&interface)?);
        return Ok(());
    }

    println!(
        "{}class {}{}",
        colors::BOLD,
        interface.class_name,
        colors::RESET
    );

    for method in &interface.methods {
        let marker = if method.is_dunder() {
            format!("{}skipped{}", colors::DIM, colors::RESET)
        } else {
            format!("{}exported{}", colors::GREEN, colors::RESET)
        };

        let decorators = if method.decorators.is_empty() {
            String::new()
        } else {
            format!(" [@{}]", method.decorators.join(", @"))
        };

        println!(
            "  {}: {}{} ({})",
            method.line, method.name, decorators, marker
        );
    }

    Ok(())
}
