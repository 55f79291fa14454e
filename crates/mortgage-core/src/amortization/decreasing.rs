//! Decreasing-installment (equal principal) schedule.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use super::additional::additional_payment_value;
use super::validation::{validate_additional_payments, validate_loan};
use crate::time_value::{monthly_rate, payment_date};
use crate::types::{AdditionalPayments, LoanParameters, Schedule, ScheduleRow};
use crate::MortgageResult;

/// Build a decreasing-installment schedule.
///
/// The scheduled principal portion is `principal / loan_term_in_months`
/// every period. The period in which scheduled principal plus any extra
/// payment covers the balance settles it: the whole balance is booked as
/// principal and no extra payment is recorded.
pub fn schedule_decreasing_installment(
    loan: &LoanParameters,
    additional_payments: &AdditionalPayments,
) -> MortgageResult<Schedule> {
    validate_loan(loan)?;
    validate_additional_payments(additional_payments, loan.loan_term_in_months)?;

    let term = loan.loan_term_in_months;
    let rate = monthly_rate(loan.annual_interest_rate);
    let scheduled_principal = loan.principal / Decimal::from(term);
    let mut remaining = loan.principal;
    let mut schedule = Vec::with_capacity(term as usize);

    debug!(
        principal = %loan.principal,
        annual_interest_rate = %loan.annual_interest_rate,
        term,
        "computing decreasing installment schedule"
    );

    for payment_number in 1..=term {
        if remaining <= Decimal::ZERO {
            break;
        }

        let requested = additional_payment_value(additional_payments, payment_number);
        let interest_payment = remaining * rate;

        let (principal_payment, additional_payment) =
            if payment_number == term || scheduled_principal + requested >= remaining {
                if payment_number < term {
                    trace!(payment_number, "loan paid off early");
                }
                let settled = remaining;
                remaining = Decimal::ZERO;
                (settled, Decimal::ZERO)
            } else {
                remaining -= scheduled_principal + requested;
                (scheduled_principal, requested)
            };

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

    debug!(rows = schedule.len(), "decreasing installment schedule complete");
    Ok(schedule)
}
