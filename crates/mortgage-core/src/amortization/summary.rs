use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::time_value::round_to_fixed_two;
use crate::types::{Money, ScheduleRow};

/// Split of a single payment, rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentStructure {
    pub principal_payment: Money,
    pub interest_payment: Money,
    pub additional_payment: Money,
}

/// Aggregates over a schedule, rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub number_of_payments: u32,
    /// Contractual payments not needed because extras paid the loan off early.
    pub payments_saved: u32,
    pub total_payment: Money,
    pub total_principal_payment: Money,
    pub total_additional_payment: Money,
    pub total_interest_payment: Money,
    pub first_payment: Option<PaymentStructure>,
    pub payoff_date: Option<NaiveDate>,
}

pub fn summarize(schedule: &[ScheduleRow], loan_term_in_months: u32) -> ScheduleSummary {
    let total = |f: fn(&ScheduleRow) -> Money| -> Money {
        round_to_fixed_two(schedule.iter().map(f).fold(Decimal::ZERO, |acc, x| acc + x))
    };

    let number_of_payments = schedule.len() as u32;

    ScheduleSummary {
        number_of_payments,
        payments_saved: loan_term_in_months.saturating_sub(number_of_payments),
        total_payment: total(|r| r.payment),
        total_principal_payment: total(|r| r.principal_payment),
        total_additional_payment: total(|r| r.additional_payment),
        total_interest_payment: total(|r| r.interest_payment),
        first_payment: schedule.first().map(|r| PaymentStructure {
            principal_payment: round_to_fixed_two(r.principal_payment),
            interest_payment: round_to_fixed_two(r.interest_payment),
            additional_payment: round_to_fixed_two(r.additional_payment),
        }),
        payoff_date: schedule.last().map(|r| r.date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn row(n: u32, principal: Money, extra: Money, interest: Money) -> ScheduleRow {
        ScheduleRow {
            payment_number: n,
            date: NaiveDate::from_ymd_opt(2024, n, 1).unwrap(),
            payment: principal + extra + interest,
            principal_payment: principal,
            additional_payment: extra,
            interest_payment: interest,
            remaining_principal: Decimal::ZERO,
        }
    }

    #[test]
    fn test_totals_and_first_payment() {
        let schedule = vec![
            row(1, dec!(100.004), dec!(50), dec!(10.125)),
            row(2, dec!(99.996), Decimal::ZERO, dec!(5.5)),
        ];
        let s = summarize(&schedule, 6);

        assert_eq!(s.number_of_payments, 2);
        assert_eq!(s.payments_saved, 4);
        assert_eq!(s.total_principal_payment, dec!(200.00));
        assert_eq!(s.total_additional_payment, dec!(50.00));
        assert_eq!(s.total_interest_payment, dec!(15.63));
        assert_eq!(s.total_payment, dec!(265.63));
        assert_eq!(
            s.first_payment,
            Some(PaymentStructure {
                principal_payment: dec!(100.00),
                interest_payment: dec!(10.13),
                additional_payment: dec!(50.00),
            })
        );
        assert_eq!(s.payoff_date, NaiveDate::from_ymd_opt(2024, 2, 1));
    }

    #[test]
    fn test_empty_schedule() {
        let s = summarize(&[], 12);
        assert_eq!(s.number_of_payments, 0);
        assert_eq!(s.total_payment, Decimal::ZERO);
        assert!(s.first_payment.is_none());
        assert!(s.payoff_date.is_none());
    }
}
