use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use mortgage_core::time_value::monthly_rate;
use mortgage_core::{AdditionalPayments, LoanParameters};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Input accepted by the single-strategy entry points.
#[derive(Deserialize)]
struct StrategyInput {
    loan: LoanParameters,
    #[serde(default)]
    additional_payments: AdditionalPayments,
    #[serde(default)]
    desired_monthly_payment: Option<Decimal>,
}

#[derive(Serialize)]
struct MonthlyPaymentOutput {
    monthly_payment: Decimal,
}

// ---------------------------------------------------------------------------
// Schedules
// ---------------------------------------------------------------------------

#[napi]
pub fn build_schedule(input_json: String) -> NapiResult<String> {
    let input: mortgage_core::ScheduleInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = mortgage_core::build_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn schedule_fixed_installment(input_json: String) -> NapiResult<String> {
    let input: StrategyInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let schedule = mortgage_core::schedule_fixed_installment_with_desired_payment(
        &input.loan,
        &input.additional_payments,
        input.desired_monthly_payment,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&schedule).map_err(to_napi_error)
}

#[napi]
pub fn schedule_decreasing_installment(input_json: String) -> NapiResult<String> {
    let input: StrategyInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let schedule =
        mortgage_core::schedule_decreasing_installment(&input.loan, &input.additional_payments)
            .map_err(to_napi_error)?;
    serde_json::to_string(&schedule).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Installment
// ---------------------------------------------------------------------------

/// Annuity installment for `{principal, annual_interest_rate, loan_term_in_months}`.
#[napi]
pub fn monthly_payment_fixed(input_json: String) -> NapiResult<String> {
    let input: mortgage_core::PaymentQuoteInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let monthly_payment = mortgage_core::monthly_payment_fixed(
        input.principal,
        monthly_rate(input.annual_interest_rate),
        input.loan_term_in_months,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&MonthlyPaymentOutput { monthly_payment }).map_err(to_napi_error)
}

#[napi]
pub fn quote_monthly_payment(input_json: String) -> NapiResult<String> {
    let input: mortgage_core::PaymentQuoteInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = mortgage_core::quote_monthly_payment(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
