use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Money, Percent, Rate};

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT_SCALE: Decimal = dec!(100);

/// Convert a whole-number annual percent (4.5 = 4.5%) to a monthly rate
/// fraction. This is the single percent-to-fraction boundary for monthly
/// annuities.
pub fn monthly_rate(annual_pct: Percent) -> Rate {
    annual_pct / PERCENT_SCALE / MONTHS_PER_YEAR
}

/// Convert a whole-number percent to an annual rate fraction.
pub fn annual_rate(pct: Percent) -> Rate {
    pct / PERCENT_SCALE
}

/// Compute (1 + rate)^periods via iterative multiplication (avoids
/// Decimal::powd drift).
pub fn compound_factor(rate: Rate, periods: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..periods {
        result *= factor;
    }
    result
}

/// Fixed periodic payment amortizing `principal` at `rate` per period over
/// `periods` periods: P * r(1+r)^n / ((1+r)^n - 1).
///
/// Degrades instead of failing: zero principal or zero periods yield a zero
/// payment, and a zero rate falls back to straight-line P/n.
pub fn annuity_payment(principal: Money, rate: Rate, periods: u32) -> Money {
    if principal.is_zero() || periods == 0 {
        return Decimal::ZERO;
    }
    if rate.is_zero() {
        return principal / Decimal::from(periods);
    }

    let factor = compound_factor(rate, periods);
    principal * (rate * factor) / (factor - Decimal::ONE)
}

/// Annuity payment with a residual (balloon) value due at the end of the
/// term: (PV*r*(1+r)^n - FV*r) / ((1+r)^n - 1).
///
/// Same guards as [`annuity_payment`]; a zero rate falls back to
/// (PV - FV) / n.
pub fn annuity_payment_with_residual(
    principal: Money,
    residual: Money,
    rate: Rate,
    periods: u32,
) -> Money {
    if periods == 0 {
        return Decimal::ZERO;
    }
    if rate.is_zero() {
        return (principal - residual) / Decimal::from(periods);
    }

    let factor = compound_factor(rate, periods);
    (principal * rate * factor - residual * rate) / (factor - Decimal::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_monthly_rate_conversion() {
        assert_eq!(monthly_rate(dec!(6)), dec!(0.005));
        assert_eq!(monthly_rate(dec!(0)), Decimal::ZERO);
    }

    #[test]
    fn test_compound_factor_basic() {
        assert_eq!(compound_factor(dec!(0.10), 1), dec!(1.10));
        assert_eq!(compound_factor(dec!(0.10), 2), dec!(1.21));
        assert_eq!(compound_factor(dec!(0.05), 0), Decimal::ONE);
    }

    #[test]
    fn test_annuity_payment_reference() {
        // 25,000 at 6% annual over 60 months ≈ 483.32
        let payment = annuity_payment(dec!(25000), dec!(0.005), 60);
        assert!(
            (payment - dec!(483.32)).abs() < dec!(0.01),
            "expected ~483.32, got {payment}"
        );
    }

    #[test]
    fn test_annuity_payment_zero_rate_is_straight_line() {
        assert_eq!(annuity_payment(dec!(12000), Decimal::ZERO, 48), dec!(250));
    }

    #[test]
    fn test_annuity_payment_zero_principal() {
        assert_eq!(annuity_payment(Decimal::ZERO, dec!(0.005), 360), Decimal::ZERO);
    }

    #[test]
    fn test_annuity_payment_zero_periods() {
        assert_eq!(annuity_payment(dec!(1000), dec!(0.005), 0), Decimal::ZERO);
    }

    #[test]
    fn test_residual_payment_below_plain_annuity() {
        let plain = annuity_payment(dec!(30000), dec!(0.005), 60);
        let with_residual =
            annuity_payment_with_residual(dec!(30000), dec!(10000), dec!(0.005), 60);
        assert!(with_residual < plain);
        assert!(with_residual > Decimal::ZERO);
    }

    #[test]
    fn test_residual_payment_zero_rate() {
        let payment =
            annuity_payment_with_residual(dec!(18000), dec!(6000), Decimal::ZERO, 48);
        assert_eq!(payment, dec!(250));
    }

    #[test]
    fn test_residual_payment_recovers_present_value() {
        // PV of payments plus PV of residual must equal the principal
        let rate = dec!(0.005);
        let periods = 60u32;
        let principal = dec!(30000);
        let residual = dec!(10000);
        let payment = annuity_payment_with_residual(principal, residual, rate, periods);

        let mut pv = Decimal::ZERO;
        let mut discount = Decimal::ONE;
        for _ in 0..periods {
            discount *= Decimal::ONE + rate;
            pv += payment / discount;
        }
        pv += residual / discount;

        assert!(
            (pv - principal).abs() < dec!(0.01),
            "expected PV ~{principal}, got {pv}"
        );
    }
}
