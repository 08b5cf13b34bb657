//! clipdown CLI - clip HTML selections to Markdown.
//!
//! Provides commands for:
//! - `convert`: Convert an HTML fragment to Markdown, optionally with a
//!   metadata header
//! - `export`: Join saved clips (JSON) into one Markdown document

mod commands;
mod error;

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConvertArgs, ExportArgs};
use error::CliError;

/// clipdown - clip HTML selections to Markdown.
#[derive(Parser)]
#[command(name = "clipdown", version, about)]
struct Cli {
    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an HTML fragment to Markdown.
    Convert(ConvertArgs),
    /// Export saved clips as one Markdown document.
    Export(ExportArgs),
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(cli.command) {
        let _ = writeln!(io::stderr(), "Error: {err}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    let markdown = match command {
        Commands::Convert(args) => args.execute()?,
        Commands::Export(args) => args.execute()?,
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(markdown.as_bytes())?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["clipdown", "convert", "--verbose", "page.html"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Convert(_)));
    }

    #[test]
    fn test_export_requires_file() {
        assert!(Cli::try_parse_from(["clipdown", "export"]).is_err());
    }
}
