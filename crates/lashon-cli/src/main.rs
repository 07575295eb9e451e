//! Lashon CLI
//!
//! Thin wrapper around lashon-core for command-line usage: resolve
//! multi-gender Hebrew text to a specific inflection, or list the gendered
//! tokens a text contains.
//!
//! ## Usage
//!
//! ```bash
//! # Genderize a file to the feminine inflection
//! lashon genderize --gender female welcome.txt
//!
//! # Genderize stdin
//! echo "ברוך/ה הבא/ה" | lashon genderize -g male
//!
//! # List recognized tokens with all three resolutions
//! lashon scan welcome.txt
//! ```

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lashon_core::{genderize, scan, Gender};

/// Lashon - gender-aware Hebrew text tool
#[derive(Parser)]
#[command(name = "lashon")]
#[command(version = "0.1.0")]
#[command(about = "Resolve multi-gender Hebrew text to a specific inflection")]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite text to the given gender's inflection
    Genderize {
        /// Target gender: male, female or neutral
        #[arg(short, long)]
        gender: Gender,

        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// List the gendered tokens a text contains
    Scan {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Genderize { gender, file } => {
            let text = read_input(file)?;
            tracing::debug!("genderizing {} bytes as {}", text.len(), gender);
            print!("{}", genderize(&text, Some(gender)));
        }
        Commands::Scan { file } => {
            let text = read_input(file)?;
            let tokens = scan(&text);
            if tokens.is_empty() {
                println!("No gendered tokens found");
                return Ok(());
            }
            println!(
                "{} token{}",
                tokens.len(),
                if tokens.len() == 1 { "" } else { "s" }
            );
            for token in tokens {
                println!("  [{}..{}] {}", token.span.start, token.span.end, token.neutral);
                println!("    male:    {}", token.male);
                println!("    female:  {}", token.female);
                println!("    neutral: {}", token.neutral);
            }
        }
    }

    Ok(())
}

/// Read the whole input, from a file or stdin when no path is given.
fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}
