use serde_json::Value;

use super::display_value;

/// Fields printed by `--output minimal`, in order of preference.
const PRIORITY_KEYS: [&str; 3] = ["monthly_payment", "total_payment", "total_interest_payment"];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_answer(value));
}

fn minimal_answer(value: &Value) -> String {
    let result_obj = value.get("result").unwrap_or(value);
    let candidates = [Some(result_obj), result_obj.get("summary")];

    for key in PRIORITY_KEYS {
        for obj in candidates.iter().flatten() {
            if let Some(val) = obj.get(key).filter(|v| !v.is_null()) {
                return display_value(val, true);
            }
        }
    }

    match result_obj {
        Value::Object(map) => map
            .iter()
            .next()
            .map(|(key, val)| format!("{}: {}", key, display_value(val, true)))
            .unwrap_or_default(),
        other => display_value(other, true),
    }
}
