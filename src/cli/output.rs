//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::canonical::VenueGroup;
use crate::cli::args::{MarqueeArgs, OutputFormat};
use crate::error::Result;

/// Result structure for the group command.
#[derive(Debug, Serialize, Deserialize)]
pub struct GroupingResults {
    pub groups: Vec<VenueGroup>,
    pub total_venues: usize,
}

/// Result structure for the canonical command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CanonicalResults {
    pub canonical: Vec<String>,
    pub total_venues: usize,
}

/// Result structure for the variants command.
#[derive(Debug, Serialize, Deserialize)]
pub struct VariantsResults {
    pub canonical: String,
    pub variants: Vec<String>,
}

/// Result structure for the normalize command.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizeResult {
    pub raw: String,
    pub normalized: String,
}

/// Result structure for the distance command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub a: String,
    pub b: String,
    pub distance: usize,
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize + HumanDisplay>(
    message: &str,
    result: &T,
    args: &MarqueeArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &MarqueeArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Human-readable rendering for a command result.
pub trait HumanDisplay {
    fn print_human(&self);
}

impl HumanDisplay for GroupingResults {
    fn print_human(&self) {
        for (i, group) in self.groups.iter().enumerate() {
            println!("Group {}: {}", i + 1, group.representative());
            for member in group.members() {
                println!("  {member}");
            }
        }
        println!();
        println!(
            "{} venues in {} groups",
            self.total_venues,
            self.groups.len()
        );
    }
}

impl HumanDisplay for CanonicalResults {
    fn print_human(&self) {
        for name in &self.canonical {
            println!("{name}");
        }
        println!();
        println!(
            "{} canonical venues from {} raw names",
            self.canonical.len(),
            self.total_venues
        );
    }
}

impl HumanDisplay for VariantsResults {
    fn print_human(&self) {
        println!("Variants of {}:", self.canonical);
        for variant in &self.variants {
            println!("  {variant}");
        }
    }
}

impl HumanDisplay for NormalizeResult {
    fn print_human(&self) {
        println!("{}", self.normalized);
    }
}

impl HumanDisplay for DistanceResult {
    fn print_human(&self) {
        println!("{}", self.distance);
    }
}
