//! Command line argument parsing for the Marquee CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Marquee - venue-name normalization and near-duplicate grouping
#[derive(Parser, Debug, Clone)]
#[command(name = "marquee")]
#[command(about = "Normalize and deduplicate free-text venue names")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct MarqueeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl MarqueeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Group near-duplicate venue names from a file
    Group(GroupArgs),

    /// List the canonical (deduplicated) venue names from a file
    Canonical(CanonicalArgs),

    /// Show every raw spelling grouped with a canonical name
    Variants(VariantsArgs),

    /// Normalize a single venue name
    Normalize(NormalizeArgs),

    /// Edit distance between two strings
    Distance(DistanceArgs),
}

/// Arguments for grouping venues
#[derive(Parser, Debug, Clone)]
pub struct GroupArgs {
    /// File with one raw venue name per line (blank lines skipped)
    #[arg(value_name = "VENUES_FILE")]
    pub venues_file: PathBuf,
}

/// Arguments for listing canonical venues
#[derive(Parser, Debug, Clone)]
pub struct CanonicalArgs {
    /// File with one raw venue name per line (blank lines skipped)
    #[arg(value_name = "VENUES_FILE")]
    pub venues_file: PathBuf,
}

/// Arguments for the reverse lookup
#[derive(Parser, Debug, Clone)]
pub struct VariantsArgs {
    /// File with one raw venue name per line (blank lines skipped)
    #[arg(value_name = "VENUES_FILE")]
    pub venues_file: PathBuf,

    /// Canonical name (or any member of its group) to look up
    #[arg(value_name = "CANONICAL")]
    pub canonical: String,
}

/// Arguments for normalizing a name
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Raw venue name
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for the distance command
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// First string
    #[arg(value_name = "A")]
    pub a: String,

    /// Second string
    #[arg(value_name = "B")]
    pub b: String,

    /// Compare normalized keys instead of the raw strings
    #[arg(short, long)]
    pub normalized: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
