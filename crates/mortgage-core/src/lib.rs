//! Amortization schedules for mortgage loans.
//!
//! Two installment strategies are provided: a recasting fixed installment
//! (annuity recomputed from the current balance every period) and a
//! decreasing installment (constant principal portion). Both honour a sparse
//! map of additional payments keyed by payment number. All math in
//! `rust_decimal::Decimal`.

pub mod amortization;
pub mod error;
pub mod time_value;
pub mod types;

pub use amortization::decreasing::schedule_decreasing_installment;
pub use amortization::fixed::{
    schedule_fixed_installment, schedule_fixed_installment_with_desired_payment,
};
pub use amortization::quote::{quote_monthly_payment, PaymentQuote, PaymentQuoteInput};
pub use amortization::schedule::{build_schedule, ScheduleInput, ScheduleOutput};
pub use amortization::summary::{PaymentStructure, ScheduleSummary};
pub use error::MortgageError;
pub use time_value::{monthly_payment_fixed, round_to_fixed_two};
pub use types::*;

/// Standard result type for all mortgage operations
pub type MortgageResult<T> = Result<T, MortgageError>;
