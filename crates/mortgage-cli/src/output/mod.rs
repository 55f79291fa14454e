pub mod csv_out;
pub mod minimal;
pub mod table;

use mortgage_core::round_to_fixed_two;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::OutputFormat;

/// Schedule row fields in display order.
pub const ROW_COLUMNS: [&str; 7] = [
    "payment_number",
    "date",
    "payment",
    "principal_payment",
    "additional_payment",
    "interest_payment",
    "remaining_principal",
];

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Pretty-print the envelope when stdout is a terminal, one line otherwise.
fn print_json(value: &Value) {
    let rendered = if atty::is(atty::Stream::Stdout) {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match rendered {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

/// Schedule rows carried by a computation envelope, if any.
pub fn schedule_rows(value: &Value) -> Option<&Vec<Value>> {
    value.get("result")?.get("rows")?.as_array()
}

/// Render a JSON scalar for humans. Decimal strings are shown to the cent
/// when `to_cents` is set.
pub fn display_value(value: &Value, to_cents: bool) -> String {
    match value {
        Value::String(s) => match s.parse::<Decimal>() {
            Ok(d) if to_cents && d.scale() > 2 => round_to_fixed_two(d).to_string(),
            _ => s.clone(),
        },
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => arr
            .iter()
            .map(|v| display_value(v, to_cents))
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
