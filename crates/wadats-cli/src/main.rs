//! `wadats` CLI — what's that timestamp?
//!
//! ## Usage
//!
//! ```sh
//! # Convert a timestamp given as an argument
//! wadats convert 1700000000
//!
//! # Or piped via stdin
//! echo "2023-11-14T22:13:20Z" | wadats convert
//!
//! # Render calendar output in a specific timezone
//! wadats convert 1700000000 --timezone America/New_York
//!
//! # Machine-readable output
//! wadats convert 1700000000 --json
//!
//! # Just the classification
//! wadats classify "Nov 14, 2023"
//!
//! # The current moment, in every representation
//! wadats now
//! ```

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use wadats_core::{classify, convert_with, ConversionResult, FormatConfig};

#[derive(Parser)]
#[command(
    name = "wadats",
    version,
    about = "Wadats — recognize a timestamp and print its other representations"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recognize a timestamp and print equivalent representations
    Convert {
        /// Candidate text (reads from stdin if omitted)
        text: Option<String>,
        /// IANA timezone for calendar-style output (default UTC)
        #[arg(long)]
        timezone: Option<String>,
        /// Emit the result list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print only the detected representation of the input
    Classify {
        /// Candidate text (reads from stdin if omitted)
        text: Option<String>,
    },
    /// Convert the current moment
    Now {
        /// IANA timezone for calendar-style output (default UTC)
        #[arg(long)]
        timezone: Option<String>,
        /// Emit the result list as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            text,
            timezone,
            json,
        } => {
            let text = read_text(text)?;
            let config = build_config(timezone.as_deref())?;
            let now = Utc::now();

            let variant = classify(text.trim(), &config);
            let results = convert_with(&text, now, &config);
            if results.is_empty() {
                bail!("no recognizable timestamp in input: '{}'", text.trim());
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                println!("Detected: {}", variant);
                println!();
                print_table(&results);
            }
        }
        Commands::Classify { text } => {
            let text = read_text(text)?;
            let config = FormatConfig::new();
            println!("{}", classify(text.trim(), &config));
        }
        Commands::Now { timezone, json } => {
            let config = build_config(timezone.as_deref())?;
            let now = Utc::now();

            let results = convert_with(&now.timestamp().to_string(), now, &config);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                println!("Unix Seconds: {}", now.timestamp());
                println!();
                print_table(&results);
            }
        }
    }

    Ok(())
}

fn build_config(timezone: Option<&str>) -> Result<FormatConfig> {
    match timezone {
        Some(name) => FormatConfig::with_timezone(name)
            .with_context(|| format!("invalid --timezone '{}'", name)),
        None => Ok(FormatConfig::new()),
    }
}

fn read_text(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn print_table(results: &[ConversionResult]) {
    let label_width = results.iter().map(|r| r.label.len()).max().unwrap_or(0);
    let value_width = results.iter().map(|r| r.value.len()).max().unwrap_or(0);
    for r in results {
        println!(
            "{:<label_width$}  {:<value_width$}  {}",
            r.label, r.value, r.description
        );
    }
}
