//! Lookup and construction of the sparse additional-payment map.

use rust_decimal::Decimal;

use crate::error::MortgageError;
use super::validation::validate_amount;
use crate::types::{AdditionalPayment, AdditionalPaymentRange, AdditionalPayments, Money};
use crate::MortgageResult;

/// Extra payment scheduled for `payment_number`, zero when absent.
pub fn additional_payment_value(additional_payments: &AdditionalPayments, payment_number: u32) -> Money {
    additional_payments
        .get(&payment_number)
        .map(|p| p.value)
        .unwrap_or(Decimal::ZERO)
}

/// Merge ranged extra payments into a keyed map.
///
/// Amounts landing on the same payment number accumulate; the overpayment
/// effect of the entry applied last wins.
pub fn merge_ranges(
    base: &AdditionalPayments,
    ranges: &[AdditionalPaymentRange],
    loan_term_in_months: u32,
) -> MortgageResult<AdditionalPayments> {
    let mut merged = base.clone();

    for (idx, range) in ranges.iter().enumerate() {
        validate_range(idx, range, loan_term_in_months)?;
        for payment_number in range.payment_number_from..=range.payment_number_to {
            let entry = merged
                .entry(payment_number)
                .or_insert_with(|| AdditionalPayment::new(Decimal::ZERO));
            let value = entry
                .value
                .checked_add(range.value)
                .ok_or_else(|| MortgageError::InvalidArgument {
                    field: format!("additional_payments[{payment_number}].value"),
                    reason: "Accumulated additional payment overflows".into(),
                })?;
            validate_amount(format!("additional_payments[{payment_number}].value"), value)?;
            entry.value = value;
            entry.overpayment_effect = range.overpayment_effect;
        }
    }

    Ok(merged)
}

fn validate_range(
    idx: usize,
    range: &AdditionalPaymentRange,
    loan_term_in_months: u32,
) -> MortgageResult<()> {
    if range.payment_number_from == 0 || range.payment_number_to > loan_term_in_months {
        return Err(MortgageError::InvalidArgument {
            field: format!("additional_payment_ranges[{idx}]"),
            reason: format!("Payment numbers must be between 1 and {loan_term_in_months}"),
        });
    }
    if range.payment_number_to < range.payment_number_from {
        return Err(MortgageError::InvalidArgument {
            field: format!("additional_payment_ranges[{idx}]"),
            reason: "payment_number_to must not precede payment_number_from".into(),
        });
    }
    validate_amount(format!("additional_payment_ranges[{idx}].value"), range.value)
}
