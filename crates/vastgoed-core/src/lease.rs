//! Lease payment calculation.
//!
//! Two computation modes exist side by side. `Simple` prices a plain
//! annuity on the financed amount and reports the residual value as an
//! informational figure only. `Balloon` solves the annuity-with-future-value
//! formula so the residual is left outstanding at the end of the term. Both
//! are kept as named modes; neither silently replaces the other.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::VastgoedError;
use crate::time_value::{annuity_payment, annuity_payment_with_residual, monthly_rate};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::VastgoedResult;

const RESULT_DECIMALS: u32 = 2;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Payment formula variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaseMode {
    /// Plain annuity on the financed amount; residual is pass-through
    Simple,
    /// Annuity with the residual value outstanding at the end of the term
    Balloon,
}

/// Input parameters for the lease calculation. The term is always in
/// months in the core; callers working in years convert before building
/// the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaseInput {
    /// Purchase price of the asset
    pub asset_price: Money,
    /// Down payment or trade-in value
    #[serde(default)]
    pub down_payment: Money,
    /// Annual interest rate in percent (6 = 6%)
    pub annual_rate_pct: Percent,
    /// Lease term in months
    pub term_months: u32,
    /// Residual value at the end of the term
    #[serde(default)]
    pub residual_value: Money,
}

/// Result of the lease calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseResult {
    /// Monthly lease payment
    pub monthly_payment: Money,
    /// Payments summed over the full term
    pub total_paid: Money,
    /// Total cost of the lease including the down payment (and, in balloon
    /// mode, the residual still to be settled)
    pub total_cost: Money,
    /// Asset price minus down payment
    pub financed_amount: Money,
    /// Interest portion of the total payments
    pub financing_cost: Money,
    /// Residual value, passed through for reporting
    pub residual_value: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Validate a [`LeaseInput`] before computation.
pub fn validate_input(input: &LeaseInput) -> VastgoedResult<()> {
    for (field, value) in [
        ("asset_price", input.asset_price),
        ("down_payment", input.down_payment),
        ("residual_value", input.residual_value),
    ] {
        if value < Decimal::ZERO {
            return Err(VastgoedError::InvalidInput {
                field: field.into(),
                reason: "monetary amounts must be >= 0".into(),
            });
        }
    }
    if input.down_payment > input.asset_price {
        return Err(VastgoedError::InvalidInput {
            field: "down_payment".into(),
            reason: "cannot exceed the asset price".into(),
        });
    }
    if input.annual_rate_pct < Decimal::ZERO || input.annual_rate_pct > dec!(100) {
        return Err(VastgoedError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "rate must be between 0 and 100 percent".into(),
        });
    }
    if input.term_months == 0 {
        return Err(VastgoedError::InvalidInput {
            field: "term_months".into(),
            reason: "term must be at least one month".into(),
        });
    }
    Ok(())
}

/// Compute the lease payment and cost breakdown for the selected mode.
pub fn compute_lease(input: &LeaseInput, mode: LeaseMode) -> ComputationOutput<LeaseResult> {
    let mut warnings: Vec<String> = Vec::new();

    let rate = monthly_rate(input.annual_rate_pct);
    let periods = Decimal::from(input.term_months);
    let financed_amount = input.asset_price - input.down_payment;

    let monthly_payment = match mode {
        LeaseMode::Simple => annuity_payment(financed_amount, rate, input.term_months),
        LeaseMode::Balloon => {
            if input.residual_value > financed_amount {
                warnings.push(
                    "Residual value exceeds the financed amount; the computed payment is negative"
                        .to_string(),
                );
            }
            annuity_payment_with_residual(
                financed_amount,
                input.residual_value,
                rate,
                input.term_months,
            )
        }
    };

    let total_paid = monthly_payment * periods;
    let (total_cost, financing_cost) = match mode {
        // Residual stays informational: the lessee pays the full financed
        // amount through the annuity.
        LeaseMode::Simple => (total_paid + input.down_payment, total_paid - financed_amount),
        // Residual is still outstanding at the end of the term, so it counts
        // toward both the total cost of ownership and the interest split.
        LeaseMode::Balloon => (
            total_paid + input.down_payment + input.residual_value,
            total_paid - financed_amount + input.residual_value,
        ),
    };

    let methodology = match mode {
        LeaseMode::Simple => "monthly annuity over the term; residual value pass-through",
        LeaseMode::Balloon => "monthly annuity with residual value outstanding at term end",
    };

    with_metadata(
        methodology,
        warnings,
        LeaseResult {
            monthly_payment: round_result(monthly_payment),
            total_paid: round_result(total_paid),
            total_cost: round_result(total_cost),
            financed_amount: round_result(financed_amount),
            financing_cost: round_result(financing_cost),
            residual_value: round_result(input.residual_value),
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

    fn base_input() -> LeaseInput {
        LeaseInput {
            asset_price: dec!(30000),
            down_payment: dec!(5000),
            annual_rate_pct: dec!(6),
            term_months: 60,
            residual_value: dec!(10000),
        }
    }

    #[test]
    fn test_simple_mode_ignores_residual_in_payment() {
        let with_residual = compute_lease(&base_input(), LeaseMode::Simple);
        let mut no_residual = base_input();
        no_residual.residual_value = Decimal::ZERO;
        let without = compute_lease(&no_residual, LeaseMode::Simple);
        assert_eq!(
            with_residual.result.monthly_payment,
            without.result.monthly_payment
        );
        assert_eq!(with_residual.result.residual_value, dec!(10000.00));
    }

    #[test]
    fn test_balloon_payment_below_simple_payment() {
        let simple = compute_lease(&base_input(), LeaseMode::Simple);
        let balloon = compute_lease(&base_input(), LeaseMode::Balloon);
        assert!(balloon.result.monthly_payment < simple.result.monthly_payment);
    }

    #[test]
    fn test_balloon_residual_above_financed_warns() {
        let mut input = base_input();
        input.residual_value = dec!(26000);
        let output = compute_lease(&input, LeaseMode::Balloon);
        assert!(!output.warnings.is_empty());
        assert!(output.result.monthly_payment < Decimal::ZERO);
    }

    #[test]
    fn test_validation_rejects_down_payment_above_price() {
        let mut input = base_input();
        input.down_payment = dec!(31000);
        assert!(validate_input(&input).is_err());
    }
}
