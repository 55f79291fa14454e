use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Installment strategy for a schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstallmentType {
    /// Annuity installment, recomputed each period from the current balance
    /// and the remaining term.
    #[default]
    Fixed,
    /// Constant principal portion; the total payment declines over time.
    Decreasing,
}

/// How an additional payment is meant to affect the rest of the schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverpaymentEffect {
    LowerInstallment,
    #[default]
    ShortenedLoanTerm,
}

/// Immutable parameters of a single loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Amount borrowed.
    pub principal: Money,
    /// Nominal annual rate (e.g., 0.06 = 6%), compounded monthly.
    pub annual_interest_rate: Rate,
    /// Contractual number of monthly payments.
    pub loan_term_in_months: u32,
    /// Date of the first payment.
    pub starting_date: NaiveDate,
}

/// An extra payment made on top of the regular installment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdditionalPayment {
    pub value: Money,
    #[serde(default)]
    pub overpayment_effect: OverpaymentEffect,
}

impl AdditionalPayment {
    pub fn new(value: Money) -> Self {
        Self {
            value,
            overpayment_effect: OverpaymentEffect::default(),
        }
    }
}

/// Extra payments keyed by 1-based payment number. Absent keys mean no extra
/// payment for that period.
pub type AdditionalPayments = BTreeMap<u32, AdditionalPayment>;

/// The same extra payment repeated over an inclusive range of payment numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdditionalPaymentRange {
    pub payment_number_from: u32,
    pub payment_number_to: u32,
    pub value: Money,
    #[serde(default)]
    pub overpayment_effect: OverpaymentEffect,
}

/// A single period of an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub payment_number: u32,
    pub date: NaiveDate,
    /// Total cash paid this period.
    pub payment: Money,
    /// Scheduled principal portion.
    pub principal_payment: Money,
    /// Extra principal paid on top of the installment.
    pub additional_payment: Money,
    pub interest_payment: Money,
    /// Balance after this payment; never negative.
    pub remaining_principal: Money,
}

/// Ordered schedule rows, one per period.
pub type Schedule = Vec<ScheduleRow>;

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
