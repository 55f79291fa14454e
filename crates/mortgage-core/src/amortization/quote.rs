//! Stand-alone installment quote for a fixed-installment loan.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::validation::validate_terms;
use crate::time_value::{monthly_payment_fixed, monthly_rate};
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::MortgageResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentQuoteInput {
    pub principal: Money,
    pub annual_interest_rate: Rate,
    pub loan_term_in_months: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentQuote {
    pub monthly_interest_rate: Rate,
    pub monthly_payment: Money,
    /// Installment times term, without extra payments.
    pub total_of_payments: Money,
    pub total_interest: Money,
}

/// Quote the annuity installment for a loan with no extra payments.
pub fn quote_monthly_payment(
    input: &PaymentQuoteInput,
) -> MortgageResult<ComputationOutput<PaymentQuote>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_terms(
        input.principal,
        input.annual_interest_rate,
        input.loan_term_in_months,
    )?;
    if input.annual_interest_rate.is_zero() {
        warnings.push("Zero interest rate: installment is principal / term".into());
    }

    let rate = monthly_rate(input.annual_interest_rate);
    let monthly_payment = monthly_payment_fixed(input.principal, rate, input.loan_term_in_months)?;
    let total_of_payments = monthly_payment * Decimal::from(input.loan_term_in_months);

    let output = PaymentQuote {
        monthly_interest_rate: rate,
        monthly_payment,
        total_of_payments,
        total_interest: total_of_payments - input.principal,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Annuity installment (closed form)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MortgageError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_reference_loan() {
        let out = quote_monthly_payment(&PaymentQuoteInput {
            principal: dec!(100000),
            annual_interest_rate: dec!(0.12),
            loan_term_in_months: 12,
        })
        .unwrap();
        let q = out.result;
        assert_eq!(q.monthly_interest_rate, dec!(0.01));
        assert!((q.monthly_payment - dec!(8884.88)).abs() < dec!(0.005));
        assert!((q.total_interest - dec!(6618.55)).abs() < dec!(0.01));
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_quote_zero_rate_warns() {
        let out = quote_monthly_payment(&PaymentQuoteInput {
            principal: dec!(1200),
            annual_interest_rate: Decimal::ZERO,
            loan_term_in_months: 12,
        })
        .unwrap();
        assert_eq!(out.result.monthly_payment, dec!(100));
        assert_eq!(out.result.total_interest, Decimal::ZERO);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_quote_zero_term_rejected() {
        let err = quote_monthly_payment(&PaymentQuoteInput {
            principal: dec!(1200),
            annual_interest_rate: dec!(0.05),
            loan_term_in_months: 0,
        })
        .unwrap_err();
        assert!(matches!(err, MortgageError::InvalidArgument { .. }));
    }

    #[test]
    fn test_quote_term_above_ceiling_rejected() {
        let err = quote_monthly_payment(&PaymentQuoteInput {
            principal: dec!(1200),
            annual_interest_rate: dec!(0.05),
            loan_term_in_months: u32::MAX,
        })
        .unwrap_err();
        assert!(matches!(
            err,
            MortgageError::InvalidArgument { ref field, .. } if field == "loan_term_in_months"
        ));
    }
}
