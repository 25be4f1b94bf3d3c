//! Buy-to-let return analysis for Dutch residential property.
//!
//! Computes the total investment, annuity mortgage payment, monthly net
//! cashflow after tax, net yield on equity, payback period, and the
//! five-year total return including appreciation. Taxation follows the
//! regime the investor rents under: Box 3 (wealth tax on a notional
//! return), Box 1 (progressive income tax on net rent), or BV (corporate,
//! reported as zero with an advisory).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::VastgoedError;
use crate::time_value::{annual_rate, annuity_payment, compound_factor, monthly_rate};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate};
use crate::VastgoedResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const MORTGAGE_TERM_MONTHS: u32 = 360;
const APPRECIATION_HORIZON_YEARS: u32 = 5;

/// Box 3 notional annual return on net property value (2024).
const NOTIONAL_RETURN_RATE: Rate = dec!(0.0588);
/// Box 3 tax rate on the notional return (2024).
const WEALTH_TAX_RATE: Rate = dec!(0.36);

/// Box 1 bracket rates and the top-bracket floor (2023 figures). Income
/// strictly above the floor is taxed at the high rate.
const INCOME_TAX_LOW_RATE: Rate = dec!(0.37);
const INCOME_TAX_HIGH_RATE: Rate = dec!(0.495);
const TOP_BRACKET_FLOOR: Money = dec!(73031);

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT_SCALE: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Tax regime the rental income falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxRegime {
    /// Private investor: wealth tax on a notional return (Box 3)
    Box3,
    /// Active letting taxed as income (Box 1)
    Box1,
    /// Corporate ownership (BV); not modelled, reported as zero
    Bv,
}

/// Input parameters for the buy-to-let return analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldInput {
    /// Purchase price of the property
    pub purchase_price: Money,
    /// Mortgage principal
    pub mortgage_principal: Money,
    /// Annual mortgage interest rate in percent (4.5 = 4.5%)
    pub annual_mortgage_rate_pct: Percent,
    /// Acquisition costs (transfer tax, notary, advice) as a percent of the
    /// purchase price
    pub acquisition_cost_pct: Percent,
    /// Monthly rental income
    pub monthly_rent: Money,
    /// Monthly operating costs (maintenance, VvE, insurance, OZB)
    pub monthly_operating_costs: Money,
    /// Expected annual appreciation in percent
    pub annual_appreciation_pct: Percent,
    /// Government-assessed (WOZ) value; zero falls back to the purchase
    /// price in the Box 3 base
    pub woz_value: Money,
    /// Tax regime the rental income falls under
    pub tax_regime: TaxRegime,
    /// Annual taxable income, used for Box 1 bracket selection
    pub annual_taxable_income: Money,
}

/// Input for the quick scan: the pared-down analysis with no taxes, no
/// acquisition costs and no appreciation horizon. Equity is supplied
/// directly instead of being derived from the investment total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickScanInput {
    /// Purchase price of the property
    pub purchase_price: Money,
    /// Monthly rental income
    pub monthly_rent: Money,
    /// Monthly operating costs
    #[serde(default)]
    pub monthly_operating_costs: Money,
    /// Equity put in by the investor
    #[serde(default)]
    pub equity_contribution: Money,
    /// Mortgage principal
    #[serde(default)]
    pub mortgage_principal: Money,
    /// Annual mortgage interest rate in percent
    #[serde(default)]
    pub annual_mortgage_rate_pct: Percent,
}

/// Result of the quick scan. Equity-based figures are absent rather than
/// zero when no equity is supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickScanResult {
    /// Annual rent as a percent of the purchase price
    pub gross_yield_pct: Decimal,
    /// Monthly annuity mortgage payment (360-month term)
    pub monthly_mortgage_payment: Money,
    /// Monthly rent minus costs and mortgage payment
    pub monthly_net_cashflow: Money,
    /// Annualised net cashflow as a percent of the supplied equity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_yield_pct: Option<Decimal>,
    /// Years until cumulative cashflow repays the equity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payback_years: Option<Decimal>,
}

/// Result of the buy-to-let return analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldResult {
    /// Purchase price plus acquisition costs
    pub total_investment: Money,
    /// Equity contribution: total investment minus mortgage principal
    pub equity_contribution: Money,
    /// Monthly annuity mortgage payment (360-month term)
    pub monthly_mortgage_payment: Money,
    /// Monthly rent minus costs, tax and mortgage payment
    pub monthly_net_cashflow: Money,
    /// Monthly tax under the selected regime
    pub monthly_tax: Money,
    /// Annualised net cashflow as a percent of equity
    pub net_yield_pct: Decimal,
    /// Years until cumulative cashflow repays the equity; absent when the
    /// net cashflow is not positive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payback_years: Option<Decimal>,
    /// Property value after five years of appreciation
    pub value_after_5_years: Money,
    /// Five-year return on equity including appreciation, in percent
    pub total_return_pct: Decimal,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Validate a [`YieldInput`] before computation.
///
/// The engine itself assumes sanitized numeric input; this is the boundary
/// check the CLI and bindings run first.
pub fn validate_input(input: &YieldInput) -> VastgoedResult<()> {
    let monetary = [
        ("purchase_price", input.purchase_price),
        ("mortgage_principal", input.mortgage_principal),
        ("monthly_rent", input.monthly_rent),
        ("monthly_operating_costs", input.monthly_operating_costs),
        ("woz_value", input.woz_value),
        ("annual_taxable_income", input.annual_taxable_income),
    ];
    for (field, value) in monetary {
        if value < Decimal::ZERO {
            return Err(VastgoedError::InvalidInput {
                field: field.into(),
                reason: "monetary amounts must be >= 0".into(),
            });
        }
    }

    for (field, value) in [
        ("annual_mortgage_rate_pct", input.annual_mortgage_rate_pct),
        ("acquisition_cost_pct", input.acquisition_cost_pct),
    ] {
        if value < Decimal::ZERO || value > PERCENT_SCALE {
            return Err(VastgoedError::InvalidInput {
                field: field.into(),
                reason: "rate must be between 0 and 100 percent".into(),
            });
        }
    }

    if input.annual_appreciation_pct.abs() > PERCENT_SCALE {
        return Err(VastgoedError::InvalidInput {
            field: "annual_appreciation_pct".into(),
            reason: "appreciation must be between -100 and 100 percent".into(),
        });
    }

    Ok(())
}

/// Compute the full buy-to-let return analysis.
///
/// Pure and deterministic; every division is guarded, so any sanitized
/// numeric input yields a result rather than an error.
pub fn compute_yield(input: &YieldInput) -> ComputationOutput<YieldResult> {
    let mut warnings: Vec<String> = Vec::new();

    // Percent fields cross the fraction boundary exactly once.
    let acquisition_rate = annual_rate(input.acquisition_cost_pct);
    let mortgage_rate_monthly = monthly_rate(input.annual_mortgage_rate_pct);
    let appreciation_rate = annual_rate(input.annual_appreciation_pct);

    let total_investment = input.purchase_price * (Decimal::ONE + acquisition_rate);
    let equity_contribution = total_investment - input.mortgage_principal;

    if equity_contribution <= Decimal::ZERO && !total_investment.is_zero() {
        warnings.push(
            "Mortgage principal covers the full investment; equity-based returns are reported as zero"
                .to_string(),
        );
    }

    let monthly_mortgage_payment = annuity_payment(
        input.mortgage_principal,
        mortgage_rate_monthly,
        MORTGAGE_TERM_MONTHS,
    );

    let monthly_tax = match input.tax_regime {
        TaxRegime::Box3 => box3_monthly_tax(input),
        TaxRegime::Box1 => box1_monthly_tax(input),
        TaxRegime::Bv => {
            warnings.push(
                "Corporate (BV) rental taxation is not modelled; tax is reported as zero"
                    .to_string(),
            );
            Decimal::ZERO
        }
    };

    let monthly_net_cashflow = input.monthly_rent
        - input.monthly_operating_costs
        - monthly_tax
        - monthly_mortgage_payment;
    let annual_net_cashflow = monthly_net_cashflow * MONTHS_PER_YEAR;

    let net_yield_pct = if equity_contribution > Decimal::ZERO {
        annual_net_cashflow / equity_contribution * PERCENT_SCALE
    } else {
        Decimal::ZERO
    };

    let payback_years = if monthly_net_cashflow > Decimal::ZERO {
        Some(equity_contribution / annual_net_cashflow)
    } else {
        None
    };

    let value_after_5_years = input.purchase_price
        * compound_factor(appreciation_rate, APPRECIATION_HORIZON_YEARS);
    let appreciation_gain = value_after_5_years - input.purchase_price;

    let total_return_pct = if equity_contribution > Decimal::ZERO {
        let horizon = Decimal::from(APPRECIATION_HORIZON_YEARS);
        (annual_net_cashflow * horizon + appreciation_gain) / equity_contribution
            * PERCENT_SCALE
    } else {
        Decimal::ZERO
    };

    with_metadata(
        "annuity mortgage (360m), Dutch rental taxation, 5-year appreciation horizon",
        warnings,
        YieldResult {
            total_investment,
            equity_contribution,
            monthly_mortgage_payment,
            monthly_net_cashflow,
            monthly_tax,
            net_yield_pct,
            payback_years,
            value_after_5_years,
            total_return_pct,
        },
    )
}

/// Validate a [`QuickScanInput`] before computation.
pub fn validate_quick_scan(input: &QuickScanInput) -> VastgoedResult<()> {
    let monetary = [
        ("purchase_price", input.purchase_price),
        ("monthly_rent", input.monthly_rent),
        ("monthly_operating_costs", input.monthly_operating_costs),
        ("equity_contribution", input.equity_contribution),
        ("mortgage_principal", input.mortgage_principal),
    ];
    for (field, value) in monetary {
        if value < Decimal::ZERO {
            return Err(VastgoedError::InvalidInput {
                field: field.into(),
                reason: "monetary amounts must be >= 0".into(),
            });
        }
    }

    if input.annual_mortgage_rate_pct < Decimal::ZERO
        || input.annual_mortgage_rate_pct > PERCENT_SCALE
    {
        return Err(VastgoedError::InvalidInput {
            field: "annual_mortgage_rate_pct".into(),
            reason: "rate must be between 0 and 100 percent".into(),
        });
    }

    for (field, value) in [
        ("equity_contribution", input.equity_contribution),
        ("mortgage_principal", input.mortgage_principal),
    ] {
        if value > input.purchase_price {
            return Err(VastgoedError::InvalidInput {
                field: field.into(),
                reason: "cannot exceed the purchase price".into(),
            });
        }
    }

    Ok(())
}

/// Run the quick buy-to-let scan: gross yield, mortgage payment, cashflow,
/// and the equity-based figures when equity is supplied.
pub fn compute_quick_scan(input: &QuickScanInput) -> ComputationOutput<QuickScanResult> {
    let mortgage_rate_monthly = monthly_rate(input.annual_mortgage_rate_pct);
    let annual_rent = input.monthly_rent * MONTHS_PER_YEAR;

    let gross_yield_pct = if input.purchase_price > Decimal::ZERO {
        annual_rent / input.purchase_price * PERCENT_SCALE
    } else {
        Decimal::ZERO
    };

    let monthly_mortgage_payment = annuity_payment(
        input.mortgage_principal,
        mortgage_rate_monthly,
        MORTGAGE_TERM_MONTHS,
    );

    let monthly_net_cashflow =
        input.monthly_rent - input.monthly_operating_costs - monthly_mortgage_payment;
    let annual_net_cashflow = monthly_net_cashflow * MONTHS_PER_YEAR;

    let net_yield_pct = if input.equity_contribution > Decimal::ZERO {
        Some(annual_net_cashflow / input.equity_contribution * PERCENT_SCALE)
    } else {
        None
    };

    let payback_years =
        if input.equity_contribution > Decimal::ZERO && monthly_net_cashflow > Decimal::ZERO {
            Some(input.equity_contribution / annual_net_cashflow)
        } else {
            None
        };

    with_metadata(
        "gross yield on price, annuity mortgage (360m), cashflow against supplied equity",
        Vec::new(),
        QuickScanResult {
            gross_yield_pct,
            monthly_mortgage_payment,
            monthly_net_cashflow,
            net_yield_pct,
            payback_years,
        },
    )
}

// ---------------------------------------------------------------------------
// Tax helpers
// ---------------------------------------------------------------------------

/// Box 3: tax on a notional monthly return over the net property value.
/// The WOZ value drives the base; the purchase price stands in when the
/// base would otherwise exceed it or no WOZ value is known.
fn box3_monthly_tax(input: &YieldInput) -> Money {
    let property_base = input.woz_value.max(input.purchase_price);
    let notional_monthly_return =
        (property_base - input.mortgage_principal) * NOTIONAL_RETURN_RATE / MONTHS_PER_YEAR;
    notional_monthly_return * WEALTH_TAX_RATE
}

/// Box 1: net rent taxed at the marginal bracket rate. The boundary is
/// strict: income of exactly the floor stays in the low bracket, which is
/// why this is a comparison and not a threshold-table lookup.
fn box1_monthly_tax(input: &YieldInput) -> Money {
    let bracket_rate = if input.annual_taxable_income > TOP_BRACKET_FLOOR {
        INCOME_TAX_HIGH_RATE
    } else {
        INCOME_TAX_LOW_RATE
    };
    (input.monthly_rent - input.monthly_operating_costs) * bracket_rate
}
