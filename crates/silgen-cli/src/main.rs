//! silgen CLI - native-extension build scaffolding for Python classes.

mod build;
mod colors;
mod discover;
mod inspect;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "silgen")]
#[command(about = "Scaffold and build native extension modules for Python classes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate stub and manifest for a target file, then build it
    Build {
        /// Target Python file name (e.g. sample_matrix.py)
        target: String,

        /// Output directory for the manifest and built module
        #[arg(short, long)]
        output: String,

        /// Project root to scan (defaults to the current directory)
        #[arg(long)]
        root: Option<String>,

        /// Build with optimizations and link-time optimization
        #[arg(long)]
        release: bool,

        /// Generate the text artifacts but skip the external build
        #[arg(long)]
        no_build: bool,
    },

    /// Print the extracted class interface of a Python file
    Inspect {
        /// Path to the Python file
        file: String,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Print discovered include roots and source files under a project root
    Discover {
        /// Project root to scan
        root: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::DEBUG.into())
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Build {
            target,
            output,
            root,
            release,
            no_build,
        } => build::execute(&target, &output, root.as_deref(), release, no_build)?,

        Commands::Inspect { file, json } => inspect::execute(&file, json)?,

        Commands::Discover { root } => discover::execute(&root)?,
    }

    Ok(())
}
