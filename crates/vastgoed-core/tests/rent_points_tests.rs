use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use vastgoed_core::rent_points::{
    compute_points, validate_input, EnergyLabel, HeatingType, KitchenFlags, OutdoorFlags,
    RentPointInput, RentSector, SanitaryFlags,
};

/// Bare dwelling: the point total equals the floor area.
fn bare_dwelling(floor_area_m2: Decimal) -> RentPointInput {
    RentPointInput {
        floor_area_m2,
        woz_value: Decimal::ZERO,
        energy_label: EnergyLabel::G,
        counter_length_cm: Decimal::ZERO,
        kitchen: KitchenFlags::default(),
        toilet_count: 0,
        bathroom_count: 0,
        sanitary: SanitaryFlags::default(),
        outdoor: OutdoorFlags::default(),
        heating: HeatingType::None,
    }
}

// ===========================================================================
// Insufficient input
// ===========================================================================

#[test]
fn test_zero_floor_area_yields_no_result() {
    assert!(compute_points(&bare_dwelling(Decimal::ZERO)).is_none());
}

// ===========================================================================
// Regulatory breakpoints
// ===========================================================================

#[test]
fn test_136_points_social_sector_rent() {
    let output = compute_points(&bare_dwelling(dec!(136))).unwrap();
    assert_eq!(output.result.points, 136);
    assert_eq!(output.result.max_rent, dec!(879.66));
    assert_eq!(output.result.sector, RentSector::Social);
}

#[test]
fn test_143_points_crosses_into_mid_rent() {
    let output = compute_points(&bare_dwelling(dec!(143))).unwrap();
    assert_eq!(output.result.points, 143);
    assert_eq!(output.result.max_rent, dec!(972.87));
    assert_eq!(output.result.sector, RentSector::RegulatedMid);
}

#[test]
fn test_186_points_is_last_mid_rent_step() {
    let output = compute_points(&bare_dwelling(dec!(186))).unwrap();
    assert_eq!(output.result.max_rent, dec!(1276.87));
    assert_eq!(output.result.sector, RentSector::RegulatedMid);
}

#[test]
fn test_187_points_is_free_market() {
    let output = compute_points(&bare_dwelling(dec!(187))).unwrap();
    // No 187 row: the 186 rent still applies
    assert_eq!(output.result.max_rent, dec!(1276.87));
    assert_eq!(output.result.sector, RentSector::FreeMarket);
}

#[test]
fn test_points_between_rows_take_lower_row() {
    let output = compute_points(&bare_dwelling(dec!(155))).unwrap();
    assert_eq!(output.result.max_rent, dec!(1016.62));
}

#[test]
fn test_points_below_first_paid_row_have_zero_rent() {
    let output = compute_points(&bare_dwelling(dec!(110))).unwrap();
    assert_eq!(output.result.max_rent, Decimal::ZERO);
    assert_eq!(output.result.sector, RentSector::Social);
}

// ===========================================================================
// Point accumulation
// ===========================================================================

#[test]
fn test_fully_equipped_dwelling_accumulates_all_categories() {
    let input = RentPointInput {
        floor_area_m2: dec!(50),
        woz_value: Decimal::ZERO,
        energy_label: EnergyLabel::A,
        counter_length_cm: dec!(120),
        kitchen: KitchenFlags {
            refrigerator: true,
            oven: true,
            dishwasher: false,
            extractor: false,
        },
        toilet_count: 1,
        bathroom_count: 1,
        sanitary: SanitaryFlags {
            sink: true,
            second_shower: false,
        },
        outdoor: OutdoorFlags {
            balcony: true,
            garden: false,
            roof_terrace: false,
        },
        heating: HeatingType::HighEfficiency,
    };
    // 50 area + 44 label + 1 counter + 3 kitchen + 2 toilet + 3 bathroom
    // + 1 sink + 2 balcony + 4 heating = 110
    let output = compute_points(&input).unwrap();
    assert_eq!(output.result.points, 110);
}

#[test]
fn test_woz_points_added_when_cap_not_binding() {
    let mut input = bare_dwelling(dec!(100));
    input.energy_label = EnergyLabel::A;
    input.woz_value = dec!(400000);
    // Base 144; WOZ adds 400,000/100/242 = 16.53, well under the cap of 72.
    // 160.53 rounds to 161.
    let output = compute_points(&input).unwrap();
    assert_eq!(output.result.points, 161);
    assert_eq!(output.result.max_rent, dec!(1089.12));
    assert_eq!(output.result.sector, RentSector::RegulatedMid);
}

#[test]
fn test_woz_points_capped_at_half_of_base() {
    let mut input = bare_dwelling(dec!(30));
    input.woz_value = dec!(500000);
    // Uncapped WOZ points would be 68.87; the cap holds them to 30/2 = 15.
    let output = compute_points(&input).unwrap();
    assert_eq!(output.result.points, 45);
}

#[test]
fn test_fractional_total_rounds_half_away_from_zero() {
    // 40.5 m² bare dwelling: 40.5 rounds to 41, not 40
    let output = compute_points(&bare_dwelling(dec!(40.5))).unwrap();
    assert_eq!(output.result.points, 41);
}

// ===========================================================================
// Properties
// ===========================================================================

#[test]
fn test_floor_area_monotonicity() {
    let mut previous_points = i64::MIN;
    let mut previous_rent = Decimal::MIN;
    for area in 1..=300 {
        let mut input = bare_dwelling(Decimal::from(area));
        input.woz_value = dec!(250000);
        input.energy_label = EnergyLabel::B;
        let output = compute_points(&input).unwrap();
        assert!(
            output.result.points >= previous_points,
            "points dropped at area {area}"
        );
        assert!(
            output.result.max_rent >= previous_rent,
            "max rent dropped at area {area}"
        );
        previous_points = output.result.points;
        previous_rent = output.result.max_rent;
    }
}

#[test]
fn test_idempotence() {
    let mut input = bare_dwelling(dec!(75));
    input.woz_value = dec!(310000);
    input.heating = HeatingType::Central;
    let first = compute_points(&input).unwrap();
    let second = compute_points(&input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_validation_rejects_negative_area() {
    let mut input = bare_dwelling(dec!(50));
    input.floor_area_m2 = dec!(-10);
    assert!(validate_input(&input).is_err());
}
