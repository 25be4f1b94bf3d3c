use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use vastgoed_core::rent_points::{
    self, EnergyLabel, HeatingType, KitchenFlags, OutdoorFlags, RentPointInput, SanitaryFlags,
};

use crate::input;

/// Arguments for the WWS 2024 rent-point valuation
#[derive(Args)]
pub struct RentPointsArgs {
    /// Living floor area in m²
    #[arg(long)]
    pub area: Option<Decimal>,

    /// WOZ value in euros
    #[arg(long, default_value = "0")]
    pub woz: Decimal,

    /// Energy label (A++++ down to G)
    #[arg(long, default_value = "G", value_parser = parse_energy_label)]
    pub label: EnergyLabel,

    /// Kitchen counter length in cm
    #[arg(long, default_value = "0")]
    pub counter: Decimal,

    /// Kitchen has a refrigerator
    #[arg(long)]
    pub refrigerator: bool,

    /// Kitchen has an oven
    #[arg(long)]
    pub oven: bool,

    /// Kitchen has a dishwasher
    #[arg(long)]
    pub dishwasher: bool,

    /// Kitchen has an extractor hood
    #[arg(long)]
    pub extractor: bool,

    /// Number of toilets
    #[arg(long, default_value = "0")]
    pub toilets: u32,

    /// Number of bathrooms
    #[arg(long, default_value = "0")]
    pub bathrooms: u32,

    /// Extra sink
    #[arg(long)]
    pub sink: bool,

    /// Second shower
    #[arg(long)]
    pub second_shower: bool,

    /// Balcony
    #[arg(long)]
    pub balcony: bool,

    /// Garden
    #[arg(long)]
    pub garden: bool,

    /// Roof terrace
    #[arg(long)]
    pub roof_terrace: bool,

    /// Heating type: none, central, or high_efficiency
    #[arg(long, default_value = "none", value_parser = parse_heating)]
    pub heating: HeatingType,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

fn parse_energy_label(s: &str) -> Result<EnergyLabel, String> {
    serde_json::from_value(Value::String(s.to_string()))
        .map_err(|_| format!("unknown energy label '{s}' (expected A++++ down to G)"))
}

fn parse_heating(s: &str) -> Result<HeatingType, String> {
    serde_json::from_value(Value::String(s.to_string()))
        .map_err(|_| format!("unknown heating type '{s}' (expected none, central, or high_efficiency)"))
}

pub fn run_rent_points(args: RentPointsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let point_input: RentPointInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        RentPointInput {
            floor_area_m2: args.area.unwrap_or(Decimal::ZERO),
            woz_value: args.woz,
            energy_label: args.label,
            counter_length_cm: args.counter,
            kitchen: KitchenFlags {
                refrigerator: args.refrigerator,
                oven: args.oven,
                dishwasher: args.dishwasher,
                extractor: args.extractor,
            },
            toilet_count: args.toilets,
            bathroom_count: args.bathrooms,
            sanitary: SanitaryFlags {
                sink: args.sink,
                second_shower: args.second_shower,
            },
            outdoor: OutdoorFlags {
                balcony: args.balcony,
                garden: args.garden,
                roof_terrace: args.roof_terrace,
            },
            heating: args.heating,
        }
    };

    rent_points::validate_input(&point_input)?;

    // A missing floor area is not an error: the valuation is simply
    // underdetermined.
    match rent_points::compute_points(&point_input) {
        Some(output) => Ok(serde_json::to_value(output)?),
        None => Ok(json!({
            "result": Value::Null,
            "warnings": ["Floor area is required to run the valuation"],
        })),
    }
}
