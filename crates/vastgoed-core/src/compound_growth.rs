//! Compound growth projection with periodic contributions.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::VastgoedError;
use crate::time_value::annual_rate;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::VastgoedResult;

const RESULT_DECIMALS: u32 = 2;

/// Input parameters for the compound growth projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundGrowthInput {
    /// Starting principal
    pub starting_principal: Money,
    /// Annual growth rate in percent (7 = 7%)
    pub annual_growth_pct: Percent,
    /// Number of years to project
    pub years: u32,
    /// Contribution added at the start of each year
    #[serde(default)]
    pub annual_contribution: Money,
}

/// Result of the compound growth projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundGrowthResult {
    /// Value at the end of the projection
    pub ending_value: Money,
    /// Principal plus all contributions
    pub total_contributed: Money,
    /// Ending value minus total contributed
    pub profit: Money,
}

/// Validate a [`CompoundGrowthInput`] before computation.
pub fn validate_input(input: &CompoundGrowthInput) -> VastgoedResult<()> {
    if input.starting_principal < Decimal::ZERO {
        return Err(VastgoedError::InvalidInput {
            field: "starting_principal".into(),
            reason: "must be >= 0".into(),
        });
    }
    if input.annual_contribution < Decimal::ZERO {
        return Err(VastgoedError::InvalidInput {
            field: "annual_contribution".into(),
            reason: "must be >= 0".into(),
        });
    }
    if input.years == 0 {
        return Err(VastgoedError::InvalidInput {
            field: "years".into(),
            reason: "projection needs at least one year".into(),
        });
    }
    if input.annual_growth_pct.abs() > dec!(100) {
        return Err(VastgoedError::InvalidInput {
            field: "annual_growth_pct".into(),
            reason: "growth must be between -100 and 100 percent".into(),
        });
    }
    Ok(())
}

/// Project compound growth year by year.
///
/// Deliberately iterative rather than closed-form: each year the
/// contribution is added first, then the growth factor applies. Results are
/// rounded to 2 decimals at the end only, so intermediate values carry full
/// precision.
pub fn compute_compound(
    input: &CompoundGrowthInput,
) -> ComputationOutput<CompoundGrowthResult> {
    let growth_factor = Decimal::ONE + annual_rate(input.annual_growth_pct);

    let mut ending_value = input.starting_principal;
    let mut total_contributed = input.starting_principal;

    for _ in 0..input.years {
        ending_value = (ending_value + input.annual_contribution) * growth_factor;
        total_contributed += input.annual_contribution;
    }

    let profit = ending_value - total_contributed;

    with_metadata(
        "year-by-year compounding, contributions before growth",
        Vec::new(),
        CompoundGrowthResult {
            ending_value: round_result(ending_value),
            total_contributed: round_result(total_contributed),
            profit: round_result(profit),
        },
    )
}

fn round_result(value: Money) -> Money {
    value.round_dp_with_strategy(RESULT_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_contribution_added_before_growth() {
        let input = CompoundGrowthInput {
            starting_principal: dec!(1000),
            annual_growth_pct: dec!(10),
            years: 1,
            annual_contribution: dec!(500),
        };
        let output = compute_compound(&input);
        // (1000 + 500) * 1.10 = 1650, not 1000 * 1.10 + 500
        assert_eq!(output.result.ending_value, dec!(1650.00));
        assert_eq!(output.result.total_contributed, dec!(1500.00));
    }

    #[test]
    fn test_validation_rejects_zero_years() {
        let input = CompoundGrowthInput {
            starting_principal: dec!(1000),
            annual_growth_pct: dec!(5),
            years: 0,
            annual_contribution: Decimal::ZERO,
        };
        assert!(validate_input(&input).is_err());
    }
}
