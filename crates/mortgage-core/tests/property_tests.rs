use chrono::NaiveDate;
use mortgage_core::time_value::{monthly_rate, payment_date};
use mortgage_core::{
    monthly_payment_fixed, schedule_decreasing_installment, schedule_fixed_installment,
    AdditionalPayment, AdditionalPayments, LoanParameters, Schedule,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn arb_loan() -> impl Strategy<Value = LoanParameters> {
    (
        1_000i64..5_000_000_00,
        0i64..=2_000,
        1u32..=480,
        2000i32..2040,
        1u32..=12,
        1u32..=28,
    )
        .prop_map(|(cents, bp, term, y, m, d)| LoanParameters {
            principal: Decimal::new(cents, 2),
            annual_interest_rate: Decimal::new(bp, 4),
            loan_term_in_months: term,
            starting_date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        })
}

fn arb_loan_with_extras() -> impl Strategy<Value = (LoanParameters, AdditionalPayments)> {
    arb_loan().prop_flat_map(|loan| {
        let term = loan.loan_term_in_months;
        let extras = prop::collection::vec((1..=term, 0i64..50_000_00), 0..8).prop_map(|v| {
            v.into_iter()
                .map(|(n, cents)| (n, AdditionalPayment::new(Decimal::new(cents, 2))))
                .collect::<AdditionalPayments>()
        });
        (Just(loan), extras)
    })
}

fn repaid(schedule: &Schedule) -> Decimal {
    schedule
        .iter()
        .map(|r| r.principal_payment + r.additional_payment)
        .sum()
}

fn check_common_invariants(loan: &LoanParameters, schedule: &Schedule) -> Result<(), TestCaseError> {
    prop_assert!(!schedule.is_empty());
    prop_assert!(schedule.len() <= loan.loan_term_in_months as usize);

    let mut previous = loan.principal;
    for (k, row) in schedule.iter().enumerate() {
        prop_assert!(row.remaining_principal >= Decimal::ZERO);
        prop_assert!(row.remaining_principal <= previous);
        prop_assert_eq!(row.payment_number as usize, k + 1);
        prop_assert_eq!(row.date, payment_date(loan.starting_date, k as u32 + 1).unwrap());
        prop_assert_eq!(
            row.payment,
            row.principal_payment + row.interest_payment + row.additional_payment
        );
        previous = row.remaining_principal;
    }

    prop_assert_eq!(schedule.last().unwrap().remaining_principal, Decimal::ZERO);
    prop_assert!((repaid(schedule) - loan.principal).abs() <= Decimal::new(1, 2));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fixed_schedule_invariants((loan, extras) in arb_loan_with_extras()) {
        let schedule = schedule_fixed_installment(&loan, &extras).unwrap();
        check_common_invariants(&loan, &schedule)?;
    }

    #[test]
    fn decreasing_schedule_invariants((loan, extras) in arb_loan_with_extras()) {
        let schedule = schedule_decreasing_installment(&loan, &extras).unwrap();
        check_common_invariants(&loan, &schedule)?;
    }

    #[test]
    fn fixed_without_extras_pays_constant_annuity(loan in arb_loan()) {
        let schedule = schedule_fixed_installment(&loan, &AdditionalPayments::new()).unwrap();
        let annuity = monthly_payment_fixed(
            loan.principal,
            monthly_rate(loan.annual_interest_rate),
            loan.loan_term_in_months,
        )
        .unwrap();

        prop_assert_eq!(schedule.len(), loan.loan_term_in_months as usize);
        for row in &schedule {
            prop_assert!((row.payment - annuity).abs() < Decimal::new(1, 4));
        }
    }

    #[test]
    fn decreasing_without_extras_has_constant_principal(loan in arb_loan()) {
        let schedule = schedule_decreasing_installment(&loan, &AdditionalPayments::new()).unwrap();
        let scheduled = loan.principal / Decimal::from(loan.loan_term_in_months);

        prop_assert_eq!(schedule.len(), loan.loan_term_in_months as usize);
        let (last, rest) = schedule.split_last().unwrap();
        for row in rest {
            prop_assert_eq!(row.principal_payment, scheduled);
        }
        prop_assert!((last.principal_payment - scheduled).abs() < Decimal::new(1, 6));
        for pair in schedule.windows(2) {
            prop_assert!(pair[1].remaining_principal < pair[0].remaining_principal);
        }
    }

    #[test]
    fn schedules_are_deterministic((loan, extras) in arb_loan_with_extras()) {
        prop_assert_eq!(
            schedule_fixed_installment(&loan, &extras).unwrap(),
            schedule_fixed_installment(&loan, &extras).unwrap()
        );
        prop_assert_eq!(
            schedule_decreasing_installment(&loan, &extras).unwrap(),
            schedule_decreasing_installment(&loan, &extras).unwrap()
        );
    }
}
