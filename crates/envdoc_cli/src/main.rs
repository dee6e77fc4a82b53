//! `envdoc` — generate markdown documentation for environment configuration
//! structs.
//!
//! Thin wrapper around the `envdoc` library: parse arguments, run the
//! load → aggregate → render pipeline, and report failures through miette.
//! On success the rendered markdown is on stdout (or in `--output`) and the
//! process exits 0; any load, parse, or render failure exits non-zero.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};
use tracing_subscriber::EnvFilter;

/// Generate markdown documentation for configuration structs annotated with
/// `#[env(...)]` attributes.
#[derive(Debug, Parser)]
#[command(name = "envdoc", version, about)]
struct Cli {
    /// Package or source directory to document (a single .rs file also works)
    path: PathBuf,

    /// Write the rendered markdown to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let packages = envdoc::load_packages(&cli.path)?;
    let configs = envdoc::aggregate(&packages);
    tracing::debug!(
        packages = packages.len(),
        types = configs.len(),
        "rendering configuration documentation"
    );

    match cli.output {
        Some(path) => {
            let file = File::create(&path)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to create `{}`", path.display()))?;
            let mut out = BufWriter::new(file);
            envdoc::render_markdown(&mut out, &configs)?;
            out.flush().into_diagnostic()?;
        }
        None => {
            let stdout = io::stdout();
            envdoc::render_markdown(&mut stdout.lock(), &configs)?;
        }
    }

    Ok(())
}
