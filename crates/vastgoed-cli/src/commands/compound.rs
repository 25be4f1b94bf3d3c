use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use vastgoed_core::compound_growth::{self, CompoundGrowthInput};

use crate::input;

/// Arguments for the compound growth projection
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CompoundArgs {
    /// Starting principal in euros
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual growth rate in percent (e.g. 7)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Number of years to project
    #[arg(long)]
    pub years: Option<u32>,

    /// Contribution added at the start of each year, in euros
    #[arg(long, default_value = "0")]
    pub contribution: Decimal,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_compound(args: CompoundArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let growth_input: CompoundGrowthInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        CompoundGrowthInput {
            starting_principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_growth_pct: args.rate.ok_or("--rate is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
            annual_contribution: args.contribution,
        }
    };

    compound_growth::validate_input(&growth_input)?;
    let output = compound_growth::compute_compound(&growth_input);
    Ok(serde_json::to_value(output)?)
}
