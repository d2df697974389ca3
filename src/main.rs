//! Namescan CLI - extract variable-binding names from Python source

use clap::{Parser, Subcommand};
use namescan::config::{self, NamescanConfig};
use namescan::scan;
use namescan::ui::{self, Icons};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "namescan")]
#[command(version = "0.1.0")]
#[command(about = "Extract variable-binding names from Python source")]
#[command(long_about = r#"
Namescan walks Python files and extracts every variable binding,
together with the location that introduced it:
  • Assignment targets, including tuple and starred destructuring
  • Annotated assignments
  • Function positional parameters
  • Loop targets

The output feeds naming-convention checkers.

Example usage:
  namescan scan --path ./src
  namescan scan --path app.py --format json
  namescan stats --path ./src
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract bindings from a file or directory
    Scan {
        /// File or directory to scan
        #[arg(short, long)]
        path: PathBuf,

        /// Output format (table, plain, json)
        #[arg(short, long)]
        format: Option<String>,

        /// Extra gitignore-style exclude patterns
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// Show binding statistics for a file or directory
    Stats {
        /// File or directory to scan
        #[arg(short, long)]
        path: PathBuf,
    },

    /// Write a starter namescan.toml
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = config::load_config(None)?.unwrap_or_default();

    match cli.command {
        Commands::Scan {
            path,
            format,
            exclude,
        } => {
            let format = format
                .or(config.format)
                .unwrap_or_else(|| "table".to_string());
            if !matches!(format.as_str(), "table" | "plain" | "json") {
                anyhow::bail!("unknown format '{}' (expected table, plain, or json)", format);
            }
            let mut excludes = config.excludes.unwrap_or_default();
            excludes.extend(exclude);

            if format != "json" {
                ui::header("Scanning for variable names");
                let icon = if path.is_file() {
                    Icons::FILE
                } else {
                    Icons::FOLDER
                };
                ui::status(icon, "Path", &path.display().to_string());
            }

            let records = scan::scan_path(&path, Some(&excludes))?;

            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&records)?),
                "plain" => {
                    for record in &records {
                        println!(
                            "{}:{}:{} {}",
                            record.path, record.line, record.column, record.name
                        );
                    }
                }
                _ => {
                    if records.is_empty() {
                        ui::warn("No bindings found.");
                    } else {
                        println!("{}", ui::bindings_table(&records));
                        ui::success(&format!("{} bindings", records.len()));
                    }
                }
            }
        }

        Commands::Stats { path } => {
            let records = scan::scan_path(&path, config.excludes.as_deref())?;

            let files: BTreeSet<&str> = records.iter().map(|r| r.path.as_str()).collect();
            let distinct: BTreeSet<&str> = records.iter().map(|r| r.name.as_str()).collect();

            println!("{} Namescan statistics ({})", Icons::STATS, path.display());
            println!(
                "{}",
                ui::stats_table(&[
                    ("Files with bindings", files.len().to_string()),
                    ("Bindings", records.len().to_string()),
                    ("Distinct names", distinct.len().to_string()),
                ])
            );
        }

        Commands::Init { force } => {
            let path = config::default_config_path();
            let starter = NamescanConfig {
                format: Some("table".to_string()),
                excludes: Some(vec!["migrations/".to_string()]),
            };
            ui::status(Icons::GEAR, "Config", &path.display().to_string());
            config::write_config(&path, &starter, force)?;
            ui::success(&format!("Wrote {}", path.display()));
        }
    }

    Ok(())
}
