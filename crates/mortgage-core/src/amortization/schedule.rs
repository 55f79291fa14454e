//! Top-level schedule computation: validation, strategy dispatch, summary
//! and the standard output envelope.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::additional::merge_ranges;
use super::decreasing::schedule_decreasing_installment;
use super::fixed::schedule_fixed_installment_with_desired_payment;
use super::summary::{summarize, ScheduleSummary};
use super::validation::{validate_additional_payments, validate_desired_payment, validate_loan};
use crate::types::{
    with_metadata, AdditionalPaymentRange, AdditionalPayments, ComputationOutput,
    InstallmentType, LoanParameters, Money, OverpaymentEffect, Schedule,
};
use crate::MortgageResult;

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

/// Everything needed to compute one schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub loan: LoanParameters,
    #[serde(default)]
    pub installment_type: InstallmentType,
    #[serde(default)]
    pub additional_payments: AdditionalPayments,
    #[serde(default)]
    pub additional_payment_ranges: Vec<AdditionalPaymentRange>,
    /// Target total installment for Fixed schedules; the excess over the
    /// computed installment is paid as an extra payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_monthly_payment: Option<Money>,
}

impl ScheduleInput {
    pub fn new(loan: LoanParameters, installment_type: InstallmentType) -> Self {
        Self {
            loan,
            installment_type,
            additional_payments: AdditionalPayments::new(),
            additional_payment_ranges: Vec::new(),
            desired_monthly_payment: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOutput {
    pub installment_type: InstallmentType,
    pub rows: Schedule,
    pub summary: ScheduleSummary,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute an amortization schedule with summary and warnings.
pub fn build_schedule(input: &ScheduleInput) -> MortgageResult<ComputationOutput<ScheduleOutput>> {
    let start = Instant::now();
    let loan = &input.loan;

    validate_loan(loan)?;
    validate_additional_payments(&input.additional_payments, loan.loan_term_in_months)?;
    validate_desired_payment(input.desired_monthly_payment)?;

    let additional_payments = merge_ranges(
        &input.additional_payments,
        &input.additional_payment_ranges,
        loan.loan_term_in_months,
    )?;

    let mut warnings: Vec<String> = Vec::new();

    if loan.annual_interest_rate.is_zero() {
        warnings.push("Zero interest rate: principal is repaid in equal parts".into());
    }

    if additional_payments
        .values()
        .any(|p| p.value > Decimal::ZERO && p.overpayment_effect == OverpaymentEffect::LowerInstallment)
    {
        warnings.push(
            "LowerInstallment overpayments are applied as a direct principal reduction".into(),
        );
    }

    let (rows, methodology) = match input.installment_type {
        InstallmentType::Fixed => (
            schedule_fixed_installment_with_desired_payment(
                loan,
                &additional_payments,
                input.desired_monthly_payment,
            )?,
            "Fixed Installment (recast annuity) Amortization",
        ),
        InstallmentType::Decreasing => {
            if input.desired_monthly_payment.is_some() {
                warnings.push(
                    "Desired monthly payment applies to Fixed schedules only; ignored".into(),
                );
            }
            (
                schedule_decreasing_installment(loan, &additional_payments)?,
                "Decreasing Installment (equal principal) Amortization",
            )
        }
    };

    // Extras past the payoff row, or dropped by the settling row, never reach
    // the balance.
    let paid_off_at = rows.len() as u32;
    let unused: Vec<u32> = additional_payments
        .iter()
        .filter(|(n, p)| {
            p.value > Decimal::ZERO
                && rows
                    .get(**n as usize - 1)
                    .map_or(true, |row| row.additional_payment.is_zero())
        })
        .map(|(n, _)| *n)
        .collect();
    if !unused.is_empty() {
        warnings.push(format!(
            "Loan paid off after payment {paid_off_at}; additional payments for {} ignored",
            unused
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    let summary = summarize(&rows, loan.loan_term_in_months);
    let output = ScheduleOutput {
        installment_type: input.installment_type,
        rows,
        summary,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(methodology, input, warnings, elapsed, output))
}
