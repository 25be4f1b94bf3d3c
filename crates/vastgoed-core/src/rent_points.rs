//! WWS 2024 dwelling valuation (woningwaarderingsstelsel).
//!
//! Scores a dwelling on the regulated point system, maps the point total to
//! the maximum legal monthly rent through the official breakpoint table, and
//! classifies the rental sector. The point weights, breakpoint table, and
//! sector thresholds are regulatory constants and must match the published
//! 2024 figures exactly.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::VastgoedError;
use crate::lookup::floor_lookup;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::VastgoedResult;

// ---------------------------------------------------------------------------
// Regulatory constants (WWS 2024)
// ---------------------------------------------------------------------------

/// Maximum legal rent per point bracket: (point threshold, monthly rent).
/// Floor lookup, no interpolation between rows.
const WWS_RENT_TABLE: [(i64, Decimal); 16] = [
    (0, dec!(0)),
    (136, dec!(879.66)),
    (143, dec!(972.87)),
    (144, dec!(979.12)),
    (145, dec!(985.37)),
    (146, dec!(991.62)),
    (147, dec!(997.87)),
    (148, dec!(1004.12)),
    (149, dec!(1010.37)),
    (150, dec!(1016.62)),
    (160, dec!(1089.12)),
    (170, dec!(1161.62)),
    (180, dec!(1234.12)),
    (186, dec!(1276.87)),
    (200, dec!(1371.62)),
    (250, dec!(1704.12)),
];

/// Below this point total the dwelling is social housing.
const SOCIAL_SECTOR_BELOW: i64 = 143;
/// Up to and including this point total the dwelling is regulated mid-rent.
const MID_RENT_MAX: i64 = 186;

/// WOZ value per m² divided by this yields the WOZ point contribution.
const WOZ_POINT_DIVISOR: Decimal = dec!(242);

const COUNTER_SHORT_CM: Decimal = dec!(100);
const COUNTER_LONG_CM: Decimal = dec!(150);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Energy label, ordered best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyLabel {
    #[serde(rename = "A++++")]
    APlusPlusPlusPlus,
    #[serde(rename = "A+++")]
    APlusPlusPlus,
    #[serde(rename = "A++")]
    APlusPlus,
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl EnergyLabel {
    /// WWS 2024 point value for the label.
    pub fn points(self) -> u32 {
        match self {
            EnergyLabel::APlusPlusPlusPlus => 56,
            EnergyLabel::APlusPlusPlus => 54,
            EnergyLabel::APlusPlus => 52,
            EnergyLabel::APlus => 50,
            EnergyLabel::A => 44,
            EnergyLabel::B => 32,
            EnergyLabel::C => 20,
            EnergyLabel::D => 10,
            EnergyLabel::E => 6,
            EnergyLabel::F => 2,
            EnergyLabel::G => 0,
        }
    }
}

/// Heating installation of the dwelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatingType {
    None,
    Central,
    HighEfficiency,
}

impl HeatingType {
    pub fn points(self) -> u32 {
        match self {
            HeatingType::None => 0,
            HeatingType::Central => 2,
            HeatingType::HighEfficiency => 4,
        }
    }
}

/// Kitchen appliance flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitchenFlags {
    pub refrigerator: bool,
    pub oven: bool,
    pub dishwasher: bool,
    pub extractor: bool,
}

/// Sanitary extras beyond the counted toilets and bathrooms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitaryFlags {
    pub sink: bool,
    pub second_shower: bool,
}

/// Private outdoor spaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutdoorFlags {
    pub balcony: bool,
    pub garden: bool,
    pub roof_terrace: bool,
}

/// Dwelling attributes entering the point valuation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentPointInput {
    /// Living floor area in m²; zero means the valuation cannot run
    pub floor_area_m2: Decimal,
    /// Government-assessed (WOZ) value
    pub woz_value: Money,
    /// Energy label
    pub energy_label: EnergyLabel,
    /// Kitchen counter length in cm
    pub counter_length_cm: Decimal,
    /// Kitchen appliances
    #[serde(default)]
    pub kitchen: KitchenFlags,
    /// Number of toilets
    pub toilet_count: u32,
    /// Number of bathrooms
    pub bathroom_count: u32,
    /// Sanitary extras
    #[serde(default)]
    pub sanitary: SanitaryFlags,
    /// Outdoor spaces
    #[serde(default)]
    pub outdoor: OutdoorFlags,
    /// Heating installation
    pub heating: HeatingType,
}

/// Rental sector the point total places the dwelling in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentSector {
    Social,
    RegulatedMid,
    FreeMarket,
}

/// Outcome of the WWS valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentPointResult {
    /// Rounded point total
    pub points: i64,
    /// Maximum legal monthly rent for the point total
    pub max_rent: Money,
    /// Rental sector classification
    pub sector: RentSector,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Validate a [`RentPointInput`] before computation.
pub fn validate_input(input: &RentPointInput) -> VastgoedResult<()> {
    for (field, value) in [
        ("floor_area_m2", input.floor_area_m2),
        ("woz_value", input.woz_value),
        ("counter_length_cm", input.counter_length_cm),
    ] {
        if value < Decimal::ZERO {
            return Err(VastgoedError::InvalidInput {
                field: field.into(),
                reason: "must be >= 0".into(),
            });
        }
    }
    Ok(())
}

/// Run the WWS 2024 valuation.
///
/// Returns `None` when the floor area is zero or unset: the valuation is
/// underdetermined, which callers treat as "insufficient input" rather than
/// an error.
pub fn compute_points(input: &RentPointInput) -> Option<ComputationOutput<RentPointResult>> {
    let floor_area = input.floor_area_m2.max(Decimal::ZERO);
    let woz_value = input.woz_value.max(Decimal::ZERO);
    let counter_length = input.counter_length_cm.max(Decimal::ZERO);

    if floor_area.is_zero() {
        return None;
    }

    // 1 point per m² of floor area
    let mut points = floor_area;

    points += Decimal::from(input.energy_label.points());
    points += Decimal::from(counter_points(counter_length));
    points += Decimal::from(kitchen_points(&input.kitchen));
    points += Decimal::from(input.toilet_count * 2);
    points += Decimal::from(input.bathroom_count * 3);
    points += Decimal::from(sanitary_points(&input.sanitary));
    points += Decimal::from(outdoor_points(&input.outdoor));
    points += Decimal::from(input.heating.points());

    // WOZ contribution, capped at half of the points accumulated so far.
    // The cap applies before rounding.
    if woz_value > Decimal::ZERO {
        let woz_points = woz_value / floor_area / WOZ_POINT_DIVISOR;
        let cap = points / dec!(2);
        points += woz_points.min(cap);
    }

    let total = points
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0);

    let max_rent = floor_lookup(&WWS_RENT_TABLE, total).unwrap_or(Decimal::ZERO);
    let sector = classify_sector(total);

    Some(with_metadata(
        "WWS 2024 point valuation with floor lookup over the rent table",
        Vec::new(),
        RentPointResult {
            points: total,
            max_rent,
            sector,
        },
    ))
}

/// Sector thresholds: below 143 social, up to 186 regulated mid-rent,
/// above that free market.
pub fn classify_sector(points: i64) -> RentSector {
    if points < SOCIAL_SECTOR_BELOW {
        RentSector::Social
    } else if points <= MID_RENT_MAX {
        RentSector::RegulatedMid
    } else {
        RentSector::FreeMarket
    }
}

// ---------------------------------------------------------------------------
// Point helpers
// ---------------------------------------------------------------------------

fn counter_points(length_cm: Decimal) -> u32 {
    if length_cm > COUNTER_LONG_CM {
        2
    } else if length_cm >= COUNTER_SHORT_CM {
        1
    } else {
        0
    }
}

fn kitchen_points(kitchen: &KitchenFlags) -> u32 {
    let mut points = 0;
    if kitchen.refrigerator {
        points += 1;
    }
    if kitchen.oven {
        points += 2;
    }
    if kitchen.dishwasher {
        points += 2;
    }
    if kitchen.extractor {
        points += 1;
    }
    points
}

fn sanitary_points(sanitary: &SanitaryFlags) -> u32 {
    let mut points = 0;
    if sanitary.sink {
        points += 1;
    }
    if sanitary.second_shower {
        points += 1;
    }
    points
}

fn outdoor_points(outdoor: &OutdoorFlags) -> u32 {
    let mut points = 0;
    if outdoor.balcony {
        points += 2;
    }
    if outdoor.garden {
        points += 2;
    }
    if outdoor.roof_terrace {
        points += 2;
    }
    points
}
