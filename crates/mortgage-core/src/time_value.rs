use chrono::{Months, NaiveDate};
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::error::MortgageError;
use crate::types::{Money, Rate};
use crate::MortgageResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Nominal annual rate to monthly rate.
pub fn monthly_rate(annual_interest_rate: Rate) -> Rate {
    annual_interest_rate / MONTHS_PER_YEAR
}

/// Round to cents, midpoints going up (toward positive infinity).
///
/// Matches `round((x + ε) * 100) / 100`: 1.005 -> 1.01, -1.005 -> -1.00.
pub fn round_to_fixed_two(x: Decimal) -> Decimal {
    if x.is_sign_negative() {
        x.round_dp_with_strategy(2, RoundingStrategy::MidpointTowardZero)
    } else {
        x.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// Annuity installment for the remaining balance over the remaining term.
///
/// payment = P * r * (1+r)^n / ((1+r)^n - 1). A zero rate falls back to
/// straight-line repayment, P / n.
pub fn monthly_payment_fixed(
    remaining_principal: Money,
    monthly_interest_rate: Rate,
    remaining_term_in_months: u32,
) -> MortgageResult<Money> {
    if remaining_term_in_months == 0 {
        return Err(MortgageError::InvalidArgument {
            field: "remaining_term_in_months".into(),
            reason: "Remaining term must be greater than zero".into(),
        });
    }
    if monthly_interest_rate < Decimal::ZERO {
        return Err(MortgageError::InvalidArgument {
            field: "monthly_interest_rate".into(),
            reason: "Monthly interest rate cannot be negative".into(),
        });
    }

    let n = Decimal::from(remaining_term_in_months);
    if monthly_interest_rate.is_zero() {
        return Ok(remaining_principal / n);
    }

    let factor = match (Decimal::ONE + monthly_interest_rate)
        .checked_powu(u64::from(remaining_term_in_months))
    {
        Some(f) => f,
        // Past the decimal range (1+r)^n / ((1+r)^n - 1) is 1 to full precision.
        None => return Ok(remaining_principal * monthly_interest_rate),
    };

    let denom = factor - Decimal::ONE;
    if denom.is_zero() {
        return Err(MortgageError::ArithmeticDegenerate {
            context: format!(
                "annuity factor for rate {monthly_interest_rate} over {remaining_term_in_months} months"
            ),
        });
    }

    Ok(remaining_principal * monthly_interest_rate * (factor / denom))
}

/// Due date of a payment: the starting date advanced by `payment_number - 1`
/// months. Days past the end of a shorter month clamp to its last day.
pub fn payment_date(starting_date: NaiveDate, payment_number: u32) -> MortgageResult<NaiveDate> {
    let offset = payment_number.saturating_sub(1);
    starting_date
        .checked_add_months(Months::new(offset))
        .ok_or_else(|| {
            MortgageError::DateError(format!(
                "payment {payment_number} falls outside the supported calendar range"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_to_fixed_two_truncates_down() {
        assert_eq!(round_to_fixed_two(dec!(1.2345)), dec!(1.23));
    }

    #[test]
    fn test_round_to_fixed_two_midpoint_goes_up() {
        assert_eq!(round_to_fixed_two(dec!(1.005)), dec!(1.01));
        assert_eq!(round_to_fixed_two(dec!(-1.005)), dec!(-1.00));
        assert_eq!(round_to_fixed_two(dec!(2.675)), dec!(2.68));
    }

    #[test]
    fn test_monthly_payment_reference() {
        let pmt = monthly_payment_fixed(dec!(10000), dec!(0.01), 12).unwrap();
        // 10000 * 0.01 * 1.01^12 / (1.01^12 - 1) = 888.4878...
        assert!((pmt - dec!(888.49)).abs() < dec!(0.005), "got {pmt}");
    }

    #[test]
    fn test_monthly_payment_single_period_repays_with_interest() {
        let pmt = monthly_payment_fixed(dec!(1000), dec!(0.01), 1).unwrap();
        assert!((pmt - dec!(1010)).abs() < dec!(0.0000001));
    }

    #[test]
    fn test_monthly_payment_zero_rate_is_straight_line() {
        let pmt = monthly_payment_fixed(dec!(1200), Decimal::ZERO, 12).unwrap();
        assert_eq!(pmt, dec!(100));
    }

    #[test]
    fn test_monthly_payment_huge_term_tends_to_interest_only() {
        let pmt = monthly_payment_fixed(dec!(100000), dec!(0.5), 5000).unwrap();
        assert_eq!(pmt, dec!(50000));
    }

    #[test]
    fn test_monthly_payment_zero_term_rejected() {
        let err = monthly_payment_fixed(dec!(1000), dec!(0.01), 0).unwrap_err();
        assert!(matches!(err, MortgageError::InvalidArgument { .. }));
    }

    #[test]
    fn test_monthly_payment_negative_rate_rejected() {
        let err = monthly_payment_fixed(dec!(1000), dec!(-0.01), 12).unwrap_err();
        assert!(matches!(err, MortgageError::InvalidArgument { .. }));
    }

    #[test]
    fn test_monthly_rate() {
        assert_eq!(monthly_rate(dec!(0.12)), dec!(0.01));
    }

    #[test]
    fn test_payment_date_offsets() {
        let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        assert_eq!(payment_date(start, 1).unwrap(), start);
        assert_eq!(
            payment_date(start, 12).unwrap(),
            NaiveDate::from_ymd_opt(2022, 12, 1).unwrap()
        );
        assert_eq!(
            payment_date(start, 13).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_payment_date_clamps_month_end() {
        let start = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
        assert_eq!(
            payment_date(start, 2).unwrap(),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
        assert_eq!(
            payment_date(start, 3).unwrap(),
            NaiveDate::from_ymd_opt(2023, 3, 31).unwrap()
        );
    }
}
