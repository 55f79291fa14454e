use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use mortgage_core::{quote_monthly_payment, PaymentQuoteInput};

use crate::input;

/// Arguments for a fixed installment quote
#[derive(Args)]
pub struct PaymentArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount borrowed
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Nominal annual interest rate as a decimal (0.05 = 5%)
    #[arg(long, alias = "rate")]
    pub annual_interest_rate: Option<Decimal>,

    /// Loan term in months
    #[arg(long, alias = "term")]
    pub term_months: Option<u32>,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let quote_input: PaymentQuoteInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        PaymentQuoteInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_interest_rate: args
                .annual_interest_rate
                .ok_or("--annual-interest-rate is required (or provide --input)")?,
            loan_term_in_months: args
                .term_months
                .ok_or("--term-months is required (or provide --input)")?,
        }
    };

    let result = quote_monthly_payment(&quote_input)?;
    Ok(serde_json::to_value(result)?)
}
