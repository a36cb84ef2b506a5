//! `roster` — interactive contact book over a CSV backing file.
//!
//! # Usage
//!
//! ```
//! roster                          # contacts.csv in the working directory
//! roster --file ~/people.csv
//! roster --config ~/.config/roster/config.toml
//! ```

mod app;
mod ui;

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use roster_core::ContactBook;
use roster_store_csv::CsvStore;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "roster", about = "Interactive contact book")]
struct Args {
  /// Path to a TOML config file (`file = "..."`).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Path to the contacts CSV file (default: contacts.csv).
  #[arg(short, long, value_name = "FILE")]
  file: Option<PathBuf>,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  file: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Default to WARN so diagnostics never interleave with menu output;
  // RUST_LOG overrides.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides the default path.
  let path = args
    .file
    .or_else(|| (!file_cfg.file.is_empty()).then(|| PathBuf::from(&file_cfg.file)))
    .unwrap_or_else(|| PathBuf::from("contacts.csv"));

  tracing::debug!(path = %path.display(), "opening contact book");

  let mut book = ContactBook::open(CsvStore::new(&path))
    .with_context(|| format!("failed to open contact book at {}", path.display()))?;

  let stdin = io::stdin();
  let stdout = io::stdout();
  app::run(&mut book, stdin.lock(), stdout.lock()).context("terminal i/o")?;

  Ok(())
}
