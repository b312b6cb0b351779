//! Love Lens export CLI
//!
//! Boundary adapter around the library pipeline: reads the analysis JSON
//! from stdin, writes one base64 line to stdout, maps every failure to a
//! non-zero exit with a description on stderr. Nothing is ever written to
//! stdout on a failure path.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;

use lovelens_export::{export_analysis, export_analysis_bytes};

#[derive(Parser)]
#[command(name = "lovelens-export")]
#[command(about = "Render a relationship analysis as a base64-encoded Word document", long_about = None)]
#[command(version)]
struct Cli {
    /// Write the raw .docx bytes to a file instead of printing base64
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", "❌ Export failed!".red().bold());
        eprintln!("{}", format!("Error: {e}").red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read standard input")?;

    match cli.output {
        Some(path) => {
            let bytes = export_analysis_bytes(&input)?;
            std::fs::write(&path, bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("{}", format!("📄 Document written to {}", path.display()).green());
        }
        None => {
            let encoded = export_analysis(&input)?;
            println!("{encoded}");
        }
    }

    Ok(())
}
