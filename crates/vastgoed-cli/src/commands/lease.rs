use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use vastgoed_core::lease::{self, LeaseInput, LeaseMode};

use crate::input;

/// Arguments for the lease payment calculation
#[derive(Args)]
pub struct LeaseArgs {
    /// Purchase price of the asset in euros
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Down payment or trade-in value in euros
    #[arg(long, default_value = "0")]
    pub down_payment: Decimal,

    /// Annual interest rate in percent (e.g. 6)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Lease term in months
    #[arg(long, conflicts_with = "term_years")]
    pub term_months: Option<u32>,

    /// Lease term in years (converted to months)
    #[arg(long)]
    pub term_years: Option<u32>,

    /// Residual value at the end of the term, in euros
    #[arg(long, default_value = "0")]
    pub residual: Decimal,

    /// Payment formula: simple (residual is informational) or balloon
    /// (residual outstanding at term end)
    #[arg(long, default_value = "simple", value_parser = parse_mode)]
    pub mode: LeaseMode,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

fn parse_mode(s: &str) -> Result<LeaseMode, String> {
    match s {
        "simple" => Ok(LeaseMode::Simple),
        "balloon" => Ok(LeaseMode::Balloon),
        other => Err(format!("unknown mode '{other}' (expected simple or balloon)")),
    }
}

pub fn run_lease(args: LeaseArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let lease_input: LeaseInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let term_months = match (args.term_months, args.term_years) {
            (Some(months), _) => months,
            (None, Some(years)) => years * 12,
            (None, None) => {
                return Err("--term-months or --term-years is required (or provide --input)".into())
            }
        };
        LeaseInput {
            asset_price: args.price.ok_or("--price is required (or provide --input)")?,
            down_payment: args.down_payment,
            annual_rate_pct: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_months,
            residual_value: args.residual,
        }
    };

    lease::validate_input(&lease_input)?;
    let output = lease::compute_lease(&lease_input, args.mode);
    Ok(serde_json::to_value(output)?)
}
