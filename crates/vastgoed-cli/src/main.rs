mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::compound::CompoundArgs;
use commands::lease::LeaseArgs;
use commands::rent_points::RentPointsArgs;
use commands::rental_yield::{QuickScanArgs, YieldArgs};

/// Dutch real-estate and savings calculators
#[derive(Parser)]
#[command(
    name = "vgr",
    version,
    about = "Dutch real-estate and savings calculators",
    long_about = "Calculators for Dutch property investors with decimal precision. \
                  Supports buy-to-let yield analysis, the WWS 2024 rent-point \
                  valuation, compound growth projections, and lease payments."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Buy-to-let return analysis (cashflow, tax, yield, payback)
    Yield(YieldArgs),
    /// Quick buy-to-let scan (gross yield, cashflow, payback; no taxes)
    QuickScan(QuickScanArgs),
    /// WWS 2024 rent-point valuation and maximum legal rent
    RentPoints(RentPointsArgs),
    /// Compound growth projection with annual contributions
    Compound(CompoundArgs),
    /// Lease payment calculation (simple or balloon mode)
    Lease(LeaseArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Yield(args) => commands::rental_yield::run_yield(args),
        Commands::QuickScan(args) => commands::rental_yield::run_quick_scan(args),
        Commands::RentPoints(args) => commands::rent_points::run_rent_points(args),
        Commands::Compound(args) => commands::compound::run_compound(args),
        Commands::Lease(args) => commands::lease::run_lease(args),
        Commands::Version => {
            println!("vgr {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
