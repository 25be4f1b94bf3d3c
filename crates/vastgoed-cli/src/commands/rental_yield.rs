use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use vastgoed_core::rental_yield::{self, QuickScanInput, TaxRegime, YieldInput};

use crate::input;

/// Arguments for the buy-to-let yield analysis
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct YieldArgs {
    /// Purchase price in euros
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Mortgage principal in euros
    #[arg(long)]
    pub mortgage: Option<Decimal>,

    /// Annual mortgage interest rate in percent (e.g. 4.5)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Acquisition costs as a percent of the purchase price (e.g. 10)
    #[arg(long, default_value = "0")]
    pub acquisition_costs: Decimal,

    /// Monthly rental income in euros
    #[arg(long)]
    pub rent: Option<Decimal>,

    /// Monthly operating costs in euros (maintenance, VvE, insurance, OZB)
    #[arg(long, default_value = "0")]
    pub costs: Decimal,

    /// Expected annual appreciation in percent
    #[arg(long, default_value = "0")]
    pub appreciation: Decimal,

    /// WOZ value in euros (falls back to the purchase price when omitted)
    #[arg(long, default_value = "0")]
    pub woz: Decimal,

    /// Tax regime: box3, box1, or bv
    #[arg(long, default_value = "box3", value_parser = parse_regime)]
    pub regime: TaxRegime,

    /// Annual taxable income in euros (Box 1 bracket selection)
    #[arg(long, default_value = "0")]
    pub income: Decimal,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

fn parse_regime(s: &str) -> Result<TaxRegime, String> {
    match s {
        "box3" => Ok(TaxRegime::Box3),
        "box1" => Ok(TaxRegime::Box1),
        "bv" => Ok(TaxRegime::Bv),
        other => Err(format!("unknown regime '{other}' (expected box3, box1, or bv)")),
    }
}

pub fn run_yield(args: YieldArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let yield_input: YieldInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        YieldInput {
            purchase_price: args.price.ok_or("--price is required (or provide --input)")?,
            mortgage_principal: args
                .mortgage
                .ok_or("--mortgage is required (or provide --input)")?,
            annual_mortgage_rate_pct: args
                .rate
                .ok_or("--rate is required (or provide --input)")?,
            acquisition_cost_pct: args.acquisition_costs,
            monthly_rent: args.rent.ok_or("--rent is required (or provide --input)")?,
            monthly_operating_costs: args.costs,
            annual_appreciation_pct: args.appreciation,
            woz_value: args.woz,
            tax_regime: args.regime,
            annual_taxable_income: args.income,
        }
    };

    rental_yield::validate_input(&yield_input)?;
    let output = rental_yield::compute_yield(&yield_input);
    Ok(serde_json::to_value(output)?)
}

/// Arguments for the quick buy-to-let scan
#[derive(Args)]
pub struct QuickScanArgs {
    /// Purchase price in euros
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Monthly rental income in euros
    #[arg(long)]
    pub rent: Option<Decimal>,

    /// Monthly operating costs in euros
    #[arg(long, default_value = "0")]
    pub costs: Decimal,

    /// Equity put in by the investor, in euros
    #[arg(long, default_value = "0")]
    pub equity: Decimal,

    /// Mortgage principal in euros
    #[arg(long, default_value = "0")]
    pub mortgage: Decimal,

    /// Annual mortgage interest rate in percent (e.g. 4.5)
    #[arg(long, default_value = "0")]
    pub rate: Decimal,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_quick_scan(args: QuickScanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let scan_input: QuickScanInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        QuickScanInput {
            purchase_price: args.price.ok_or("--price is required (or provide --input)")?,
            monthly_rent: args.rent.ok_or("--rent is required (or provide --input)")?,
            monthly_operating_costs: args.costs,
            equity_contribution: args.equity,
            mortgage_principal: args.mortgage,
            annual_mortgage_rate_pct: args.rate,
        }
    };

    rental_yield::validate_quick_scan(&scan_input)?;
    let output = rental_yield::compute_quick_scan(&scan_input);
    Ok(serde_json::to_value(output)?)
}
