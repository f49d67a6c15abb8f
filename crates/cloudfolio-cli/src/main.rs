//! Cloudfolio CLI
//!
//! Thin wrapper around cloudfolio-core and cloudfolio-ui for command-line
//! usage.
//!
//! ## Usage
//!
//! ```bash
//! # Render the portfolio page as a standalone HTML document
//! cloudfolio render --out index.html
//!
//! # Render custom content
//! cloudfolio --content portfolio.json render
//!
//! # Print the content as JSON (a starting point for a custom file)
//! cloudfolio content
//!
//! # Show section sizes and entries with empty text
//! cloudfolio --content portfolio.json check
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cloudfolio_core::{HeadStyles, Portfolio, Section};

/// Cloudfolio - Cloud Engineering Portfolio
#[derive(Parser)]
#[command(name = "cloudfolio")]
#[command(version = "0.1.0")]
#[command(about = "Cloudfolio - render and inspect the portfolio page")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Portfolio content JSON file (default: built-in content)
    #[arg(short, long, global = true)]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page as a standalone HTML document
    Render {
        /// Output file (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Year shown in the footer (default: current year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Print the content as pretty JSON
    Content,

    /// Show section sizes and entries with empty text
    Check,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_portfolio(path: Option<&Path>) -> Result<Portfolio> {
    match path {
        Some(path) => Portfolio::from_json_path(path)
            .with_context(|| format!("Failed to load content from {}", path.display())),
        None => Ok(Portfolio::canonical()),
    }
}

/// Write `html` to `out`. A closed pipe comes back as an error.
fn write_html(out: &mut impl Write, html: &str) -> Result<()> {
    out.write_all(html.as_bytes())
        .and_then(|()| out.flush())
        .context("Failed to write document to stdout")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let portfolio = load_portfolio(cli.content.as_deref())?;

    match cli.command {
        Commands::Render { out, year } => {
            let styles = HeadStyles::for_portfolio();
            let html = cloudfolio_ui::render_document(&portfolio, &styles, year);

            match out {
                Some(path) => {
                    std::fs::write(&path, &html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), bytes = html.len(), "Rendered document");
                    println!("Wrote {} ({} bytes)", path.display(), html.len());
                }
                None => write_html(&mut std::io::stdout().lock(), &html)?,
            }
        }

        Commands::Content => {
            println!("{}", portfolio.to_json_pretty()?);
        }

        Commands::Check => {
            let source = cli
                .content
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in".to_string());

            println!("Cloudfolio content check");
            println!("  Source: {}", source);
            println!("  Name: {}", portfolio.profile.name);
            println!();
            println!("Sections:");
            for section in Section::ALL {
                println!("  {:<16} {}", section.anchor(), portfolio.count(section));
            }

            let warnings = portfolio.lint();
            println!();
            if warnings.is_empty() {
                println!("Warnings: none");
            } else {
                println!("Warnings: {}", warnings.len());
                for warning in &warnings {
                    tracing::warn!(%warning, "Content entry has empty text");
                    println!("  - {}", warning);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer whose reader has gone away
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_pipe_is_an_error() {
        let err = write_html(&mut ClosedPipe, "<!DOCTYPE html>").unwrap_err();
        assert!(err.to_string().contains("Failed to write document"));
        let io = err.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn html_is_written_verbatim() {
        let mut out = Vec::new();
        write_html(&mut out, "<p>hi</p>").unwrap();
        assert_eq!(out, b"<p>hi</p>");
    }

    #[test]
    fn verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["cloudfolio", "check", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Check));
    }
}
