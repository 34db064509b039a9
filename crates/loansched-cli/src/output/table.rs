use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{scalar_to_string, SCHEDULE_COLUMNS};

/// Format output as tables using the tabled crate: one Field/Value table
/// for the summary figures, then the schedule (if any) as its own table.
pub fn print_table(value: &Value) {
    let Value::Object(map) = value else {
        println!("{}", value);
        return;
    };

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        if key == "schedule" {
            continue;
        }
        builder.push_record([key.as_str(), &scalar_to_string(val)]);
    }
    println!("{}", Table::from(builder));

    if let Some(Value::Array(schedule)) = map.get("schedule") {
        if !schedule.is_empty() {
            println!();
            print_schedule_table(schedule);
        }
    }
}

fn print_schedule_table(schedule: &[Value]) {
    let mut builder = Builder::default();
    builder.push_record(SCHEDULE_COLUMNS.map(|(_, title)| title));

    for row in schedule {
        if let Value::Object(fields) = row {
            let record: Vec<String> = SCHEDULE_COLUMNS
                .iter()
                .map(|(key, _)| fields.get(*key).map(scalar_to_string).unwrap_or_default())
                .collect();
            builder.push_record(record);
        }
    }

    println!("{}", Table::from(builder));
}
