//! Command implementations for the Marquee CLI.

use std::fs;
use std::path::Path;

use crate::canonical::{canonical_venues, group_similar_venues, venues_for_canonical};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::levenshtein::levenshtein_distance;
use crate::normalize::normalize;

/// Execute a CLI command.
pub fn execute_command(args: MarqueeArgs) -> Result<()> {
    match &args.command {
        Command::Group(group_args) => group_venues(group_args.clone(), &args),
        Command::Canonical(canonical_args) => list_canonical(canonical_args.clone(), &args),
        Command::Variants(variants_args) => show_variants(variants_args.clone(), &args),
        Command::Normalize(normalize_args) => normalize_name(normalize_args.clone(), &args),
        Command::Distance(distance_args) => show_distance(distance_args.clone(), &args),
    }
}

/// Read raw venue names from a file, one per line. Blank lines are skipped;
/// everything else is kept verbatim, surrounding whitespace included, since
/// the raw spelling is what grouping reports back.
fn read_venues(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect())
}

/// Group near-duplicate venue names from a file.
fn group_venues(args: GroupArgs, cli_args: &MarqueeArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Reading venues from: {}", args.venues_file.display());
    }

    let venues = read_venues(&args.venues_file)?;
    let groups = group_similar_venues(&venues);

    output_result(
        "Grouped venues",
        &GroupingResults {
            groups,
            total_venues: venues.len(),
        },
        cli_args,
    )
}

/// List canonical venue names from a file.
fn list_canonical(args: CanonicalArgs, cli_args: &MarqueeArgs) -> Result<()> {
    let venues = read_venues(&args.venues_file)?;
    let canonical = canonical_venues(&venues);

    output_result(
        "Canonical venues",
        &CanonicalResults {
            canonical,
            total_venues: venues.len(),
        },
        cli_args,
    )
}

/// Show every raw spelling grouped with a canonical name.
fn show_variants(args: VariantsArgs, cli_args: &MarqueeArgs) -> Result<()> {
    let venues = read_venues(&args.venues_file)?;
    let variants = venues_for_canonical(&venues, &args.canonical);

    output_result(
        "Venue variants",
        &VariantsResults {
            canonical: args.canonical,
            variants,
        },
        cli_args,
    )
}

/// Normalize a single venue name.
fn normalize_name(args: NormalizeArgs, cli_args: &MarqueeArgs) -> Result<()> {
    let normalized = normalize(&args.name);

    output_result(
        "Normalized name",
        &NormalizeResult {
            raw: args.name,
            normalized,
        },
        cli_args,
    )
}

/// Edit distance between two strings, optionally over their normalized keys.
fn show_distance(args: DistanceArgs, cli_args: &MarqueeArgs) -> Result<()> {
    let (a, b) = if args.normalized {
        (normalize(&args.a), normalize(&args.b))
    } else {
        (args.a.clone(), args.b.clone())
    };
    let distance = levenshtein_distance(&a, &b);

    output_result("Edit distance", &DistanceResult { a, b, distance }, cli_args)
}
