use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::MortgageError;
use crate::types::{AdditionalPayments, LoanParameters, Money, Rate};
use crate::MortgageResult;

/// Longest accepted loan term (100 years).
pub const MAX_TERM_IN_MONTHS: u32 = 1200;

/// Ceiling for any single monetary input. Keeps every schedule sum well
/// inside the decimal range.
pub const MAX_AMOUNT: Money = dec!(1000000000000000);

pub fn validate_loan(loan: &LoanParameters) -> MortgageResult<()> {
    validate_terms(
        loan.principal,
        loan.annual_interest_rate,
        loan.loan_term_in_months,
    )
}

/// Principal, annual rate and term checks shared by schedules and quotes.
pub fn validate_terms(
    principal: Money,
    annual_interest_rate: Rate,
    loan_term_in_months: u32,
) -> MortgageResult<()> {
    if principal <= Decimal::ZERO {
        return Err(MortgageError::InvalidArgument {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
        });
    }
    if principal > MAX_AMOUNT {
        return Err(MortgageError::InvalidArgument {
            field: "principal".into(),
            reason: format!("Principal must not exceed {MAX_AMOUNT}"),
        });
    }
    if annual_interest_rate < Decimal::ZERO || annual_interest_rate > Decimal::ONE {
        return Err(MortgageError::InvalidArgument {
            field: "annual_interest_rate".into(),
            reason: "Annual interest rate must be between 0 and 1".into(),
        });
    }
    if loan_term_in_months == 0 || loan_term_in_months > MAX_TERM_IN_MONTHS {
        return Err(MortgageError::InvalidArgument {
            field: "loan_term_in_months".into(),
            reason: format!("Loan term must be between 1 and {MAX_TERM_IN_MONTHS} months"),
        });
    }
    Ok(())
}

/// Reject an amount outside `[0, MAX_AMOUNT]`.
pub fn validate_amount(field: String, value: Money) -> MortgageResult<()> {
    if value < Decimal::ZERO {
        return Err(MortgageError::InvalidArgument {
            field,
            reason: "Amount cannot be negative".into(),
        });
    }
    if value > MAX_AMOUNT {
        return Err(MortgageError::InvalidArgument {
            field,
            reason: format!("Amount must not exceed {MAX_AMOUNT}"),
        });
    }
    Ok(())
}

pub fn validate_additional_payments(
    additional_payments: &AdditionalPayments,
    loan_term_in_months: u32,
) -> MortgageResult<()> {
    for (&payment_number, payment) in additional_payments {
        if payment_number == 0 || payment_number > loan_term_in_months {
            return Err(MortgageError::InvalidArgument {
                field: format!("additional_payments[{payment_number}]"),
                reason: format!("Payment number must be between 1 and {loan_term_in_months}"),
            });
        }
        validate_amount(
            format!("additional_payments[{payment_number}].value"),
            payment.value,
        )?;
    }
    Ok(())
}

pub fn validate_desired_payment(desired_monthly_payment: Option<Money>) -> MortgageResult<()> {
    match desired_monthly_payment {
        Some(d) => validate_amount("desired_monthly_payment".into(), d),
        None => Ok(()),
    }
}
