use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use mortgage_core::{
    build_schedule, AdditionalPayment, AdditionalPayments, InstallmentType, LoanParameters,
    ScheduleInput,
};

use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum InstallmentArg {
    Fixed,
    Decreasing,
}

impl From<InstallmentArg> for InstallmentType {
    fn from(arg: InstallmentArg) -> Self {
        match arg {
            InstallmentArg::Fixed => InstallmentType::Fixed,
            InstallmentArg::Decreasing => InstallmentType::Decreasing,
        }
    }
}

/// Arguments for schedule generation
#[derive(Args)]
pub struct ScheduleArgs {
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

    /// Date of the first payment (YYYY-MM-DD)
    #[arg(long)]
    pub starting_date: Option<NaiveDate>,

    /// Installment strategy
    #[arg(long, value_enum, default_value = "fixed")]
    pub installment_type: InstallmentArg,

    /// Additional payment as PAYMENT_NUMBER=AMOUNT (repeatable)
    #[arg(long = "additional", value_parser = parse_additional_payment)]
    pub additional: Vec<(u32, Decimal)>,

    /// Target total monthly payment (fixed installments only)
    #[arg(long)]
    pub desired_payment: Option<Decimal>,
}

fn parse_additional_payment(s: &str) -> Result<(u32, Decimal), String> {
    let (number, amount) = s
        .split_once('=')
        .ok_or_else(|| format!("expected PAYMENT_NUMBER=AMOUNT, got '{s}'"))?;
    let number: u32 = number
        .trim()
        .parse()
        .map_err(|e| format!("invalid payment number '{number}': {e}"))?;
    let amount: Decimal = amount
        .trim()
        .parse()
        .map_err(|e| format!("invalid amount '{amount}': {e}"))?;
    Ok((number, amount))
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule_input: ScheduleInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        schedule_input_from_flags(args)?
    };

    debug!(
        installment_type = ?schedule_input.installment_type,
        term = schedule_input.loan.loan_term_in_months,
        "building schedule"
    );
    let result = build_schedule(&schedule_input)?;
    Ok(serde_json::to_value(result)?)
}

fn schedule_input_from_flags(args: ScheduleArgs) -> Result<ScheduleInput, Box<dyn std::error::Error>> {
    let loan = LoanParameters {
        principal: args
            .principal
            .ok_or("--principal is required (or provide --input)")?,
        annual_interest_rate: args
            .annual_interest_rate
            .ok_or("--annual-interest-rate is required (or provide --input)")?,
        loan_term_in_months: args
            .term_months
            .ok_or("--term-months is required (or provide --input)")?,
        starting_date: args
            .starting_date
            .ok_or("--starting-date is required (or provide --input)")?,
    };

    let mut additional_payments = AdditionalPayments::new();
    for (number, amount) in args.additional {
        let entry = additional_payments
            .entry(number)
            .or_insert_with(|| AdditionalPayment::new(Decimal::ZERO));
        entry.value = entry
            .value
            .checked_add(amount)
            .ok_or_else(|| format!("additional payment {number} is too large"))?;
    }

    let mut schedule_input = ScheduleInput::new(loan, args.installment_type.into());
    schedule_input.additional_payments = additional_payments;
    schedule_input.desired_monthly_payment = args.desired_payment;
    Ok(schedule_input)
}
