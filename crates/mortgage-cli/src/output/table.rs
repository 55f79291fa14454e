use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{display_value, schedule_rows, ROW_COLUMNS};

/// Format output as tables: the schedule rows (if any), then the remaining
/// result fields, warnings and methodology.
pub fn print_table(value: &Value) {
    let Some(envelope) = value.as_object() else {
        println!("{}", value);
        return;
    };

    if let Some(rows) = schedule_rows(value) {
        println!("{}", rows_table(rows));
    }

    if let Some(Value::Object(result)) = envelope.get("result") {
        let fields = match result.get("summary") {
            Some(Value::Object(summary)) => summary,
            _ => result,
        };
        println!("{}", field_table(fields));
    } else {
        println!("{}", field_table(envelope));
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn rows_table(rows: &[Value]) -> Table {
    let mut builder = Builder::default();
    builder.push_record(ROW_COLUMNS);
    for row in rows {
        builder.push_record(
            ROW_COLUMNS
                .iter()
                .map(|c| row.get(*c).map(|v| display_value(v, true)).unwrap_or_default()),
        );
    }
    builder.build()
}

fn field_table(fields: &Map<String, Value>) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in fields {
        builder.push_record([key.clone(), display_value(val, true)]);
    }
    builder.build()
}
