use serde_json::Value;

use super::scalar_to_string;

/// Print just the key answer value from the output.
///
/// Heuristic: the installment is the figure people want from a calculation,
/// the written path from an export; fall back to the first field.
pub fn print_minimal(value: &Value) {
    let priority_keys = ["installment", "total_interest", "written"];

    if let Value::Object(map) = value {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", scalar_to_string(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, scalar_to_string(val));
            return;
        }
    }

    println!("{}", scalar_to_string(value));
}
