use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Search local business listings through a `/search` backend.
///
/// With no query flags the interactive UI starts. With both `--location` and
/// `--term`, one search runs and the rendered result goes to stdout.
#[derive(Debug, Parser)]
#[command(name = "bizscout", version)]
pub struct Cli {
    /// Config file (defaults to ./bizscout.yaml if present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Location to search in, e.g. "San Francisco, California".
    #[arg(long)]
    pub location: Option<String>,

    /// What to search for, e.g. "tacos".
    #[arg(long)]
    pub term: Option<String>,

    /// Output encoding for one-shot searches.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Log directory override.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Text,
    Html,
}
