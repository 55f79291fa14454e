//! Fixed-installment (annuity) schedule.
//!
//! The installment is recast every period from the current balance and the
//! remaining term, so extra payments lower the following installments
//! rather than only shortening the loan.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use super::additional::additional_payment_value;
use super::validation::{validate_additional_payments, validate_desired_payment, validate_loan};
use crate::time_value::{monthly_payment_fixed, monthly_rate, payment_date, round_to_fixed_two};
use crate::types::{AdditionalPayments, LoanParameters, Money, Schedule, ScheduleRow};
use crate::MortgageResult;

/// Build a fixed-installment schedule.
pub fn schedule_fixed_installment(
    loan: &LoanParameters,
    additional_payments: &AdditionalPayments,
) -> MortgageResult<Schedule> {
    schedule_fixed_installment_with_desired_payment(loan, additional_payments, None)
}

/// Build a fixed-installment schedule, topping each installment up to
/// `desired_monthly_payment` when it exceeds the computed installment.
///
/// An explicit additional payment for a period takes precedence over the
/// desired-payment top-up.
pub fn schedule_fixed_installment_with_desired_payment(
    loan: &LoanParameters,
    additional_payments: &AdditionalPayments,
    desired_monthly_payment: Option<Money>,
) -> MortgageResult<Schedule> {
    validate_loan(loan)?;
    validate_additional_payments(additional_payments, loan.loan_term_in_months)?;
    validate_desired_payment(desired_monthly_payment)?;

    let term = loan.loan_term_in_months;
    let rate = monthly_rate(loan.annual_interest_rate);
    let mut remaining = loan.principal;
    let mut schedule = Vec::with_capacity(term as usize);

    debug!(
        principal = %loan.principal,
        annual_interest_rate = %loan.annual_interest_rate,
        term,
        "computing fixed installment schedule"
    );

    for payment_number in 1..=term {
        if remaining <= Decimal::ZERO {
            break;
        }

        let remaining_term = term - payment_number + 1;
        let installment = monthly_payment_fixed(remaining, rate, remaining_term)?;

        let interest_payment = remaining * rate;
        let principal_payment = if remaining_term == 1 {
            remaining
        } else {
            installment - interest_payment
        };

        let requested = additional_payment_value(additional_payments, payment_number);
        let mut additional_payment = if requested > Decimal::ZERO {
            requested
        } else {
            desired_top_up(desired_monthly_payment, installment)
        };

        if additional_payment > Decimal::ZERO {
            if principal_payment + additional_payment >= remaining {
                additional_payment = round_to_fixed_two(remaining - principal_payment);
                remaining = Decimal::ZERO;
                trace!(payment_number, "loan paid off early");
            } else {
                remaining -= principal_payment + additional_payment;
            }
        } else {
            remaining -= principal_payment;
        }

        schedule.push(ScheduleRow {
            payment_number,
            date: payment_date(loan.starting_date, payment_number)?,
            payment: principal_payment + interest_payment + additional_payment,
            principal_payment,
            additional_payment,
            interest_payment,
            remaining_principal: remaining.max(Decimal::ZERO),
        });
    }

    debug!(rows = schedule.len(), "fixed installment schedule complete");
    Ok(schedule)
}

fn desired_top_up(desired_monthly_payment: Option<Money>, installment: Money) -> Money {
    match desired_monthly_payment {
        Some(desired) if desired > installment => round_to_fixed_two(desired - installment),
        _ => Decimal::ZERO,
    }
}
