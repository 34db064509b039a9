use serde_json::Value;
use std::io;

use super::{scalar_to_string, SCHEDULE_COLUMNS};

/// Write output as CSV to stdout. A result carrying a schedule prints the
/// schedule rows; anything else prints field,value pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            if let Some(Value::Array(schedule)) = map.get("schedule") {
                if !schedule.is_empty() {
                    write_schedule_csv(&mut wtr, schedule);
                    let _ = wtr.flush();
                    return;
                }
            }
            let _ = wtr.write_record(["field", "value"]);
            for (key, val) in map {
                if key == "schedule" {
                    continue;
                }
                let _ = wtr.write_record([key.as_str(), &scalar_to_string(val)]);
            }
        }
        other => {
            let _ = wtr.write_record([&scalar_to_string(other)]);
        }
    }

    let _ = wtr.flush();
}

fn write_schedule_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, schedule: &[Value]) {
    let _ = wtr.write_record(SCHEDULE_COLUMNS.map(|(_, title)| title));

    for row in schedule {
        if let Value::Object(fields) = row {
            let record: Vec<String> = SCHEDULE_COLUMNS
                .iter()
                .map(|(key, _)| fields.get(*key).map(scalar_to_string).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&record);
        }
    }
}
