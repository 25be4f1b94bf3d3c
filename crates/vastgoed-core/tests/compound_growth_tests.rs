use pretty_assertions::assert_eq;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use vastgoed_core::compound_growth::{compute_compound, validate_input, CompoundGrowthInput};

#[test]
fn test_single_year_no_contribution() {
    let input = CompoundGrowthInput {
        starting_principal: dec!(1000),
        annual_growth_pct: dec!(10),
        years: 1,
        annual_contribution: Decimal::ZERO,
    };
    let output = compute_compound(&input);
    assert_eq!(output.result.ending_value, dec!(1100.00));
    assert_eq!(output.result.total_contributed, dec!(1000.00));
    assert_eq!(output.result.profit, dec!(100.00));
}

#[test]
fn test_contribution_only_schedule_matches_manual_recurrence() {
    let input = CompoundGrowthInput {
        starting_principal: Decimal::ZERO,
        annual_growth_pct: dec!(5),
        years: 3,
        annual_contribution: dec!(100),
    };
    let output = compute_compound(&input);

    // Recurrence run by hand: contribution in, then growth
    let factor = dec!(1.05);
    let mut value = Decimal::ZERO;
    for _ in 0..3 {
        value = (value + dec!(100)) * factor;
    }
    let expected = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    assert_eq!(output.result.ending_value, expected);
    assert_eq!(output.result.ending_value, dec!(331.01));
    assert_eq!(output.result.total_contributed, dec!(300.00));
    assert_eq!(output.result.profit, dec!(31.01));
}

#[test]
fn test_long_horizon_rounds_at_the_end_only() {
    let input = CompoundGrowthInput {
        starting_principal: dec!(10000),
        annual_growth_pct: dec!(7),
        years: 30,
        annual_contribution: dec!(1200),
    };
    let output = compute_compound(&input);

    // Full-precision recurrence, rounded once
    let factor = dec!(1.07);
    let mut value = dec!(10000);
    for _ in 0..30 {
        value = (value + dec!(1200)) * factor;
    }
    let expected = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    assert_eq!(output.result.ending_value, expected);
    assert_eq!(output.result.total_contributed, dec!(46000.00));
    assert_eq!(
        output.result.profit,
        output.result.ending_value - output.result.total_contributed
    );
}

#[test]
fn test_zero_growth_accumulates_contributions_only() {
    let input = CompoundGrowthInput {
        starting_principal: dec!(500),
        annual_growth_pct: Decimal::ZERO,
        years: 4,
        annual_contribution: dec!(250),
    };
    let output = compute_compound(&input);
    assert_eq!(output.result.ending_value, dec!(1500.00));
    assert_eq!(output.result.profit, dec!(0.00));
}

#[test]
fn test_negative_growth_produces_negative_profit() {
    let input = CompoundGrowthInput {
        starting_principal: dec!(1000),
        annual_growth_pct: dec!(-10),
        years: 2,
        annual_contribution: Decimal::ZERO,
    };
    let output = compute_compound(&input);
    assert_eq!(output.result.ending_value, dec!(810.00));
    assert_eq!(output.result.profit, dec!(-190.00));
}

#[test]
fn test_idempotence() {
    let input = CompoundGrowthInput {
        starting_principal: dec!(2500),
        annual_growth_pct: dec!(6.5),
        years: 12,
        annual_contribution: dec!(300),
    };
    assert_eq!(compute_compound(&input), compute_compound(&input));
}

#[test]
fn test_validation_rejects_negative_contribution() {
    let input = CompoundGrowthInput {
        starting_principal: dec!(1000),
        annual_growth_pct: dec!(5),
        years: 5,
        annual_contribution: dec!(-100),
    };
    assert!(validate_input(&input).is_err());
}
