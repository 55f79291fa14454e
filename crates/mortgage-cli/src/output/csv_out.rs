use serde_json::Value;
use std::io;

use super::{display_value, schedule_rows, ROW_COLUMNS};

/// Write output as CSV to stdout: one line per schedule row at full
/// precision, or `field,value` pairs for other results.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());
    if let Err(e) = write_csv(&mut wtr, value).and_then(|_| wtr.flush().map_err(csv::Error::from)) {
        eprintln!("CSV output error: {}", e);
    }
}

fn write_csv<W: io::Write>(wtr: &mut csv::Writer<W>, value: &Value) -> csv::Result<()> {
    if let Some(rows) = schedule_rows(value) {
        wtr.write_record(ROW_COLUMNS)?;
        for row in rows {
            wtr.write_record(
                ROW_COLUMNS
                    .iter()
                    .map(|c| row.get(*c).map(|v| display_value(v, false)).unwrap_or_default()),
            )?;
        }
        return Ok(());
    }

    let fields = value
        .get("result")
        .and_then(Value::as_object)
        .or_else(|| value.as_object());
    match fields {
        Some(map) => {
            wtr.write_record(["field", "value"])?;
            for (key, val) in map {
                wtr.write_record([key.clone(), display_value(val, false)])?;
            }
        }
        None => wtr.write_record([display_value(value, false)])?,
    }
    Ok(())
}
