//! CSV schedule writer.
//!
//! UTF-8, LF-terminated records, one line per schedule row, values in raw
//! (unlocalized) decimal notation.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::LoanSchedError;
use crate::schedule::ScheduleRow;
use crate::LoanSchedResult;

use super::{ensure_not_empty, HEADER};

/// Render the schedule as CSV text.
pub fn csv_text(schedule: &[ScheduleRow]) -> LoanSchedResult<String> {
    ensure_not_empty(schedule)?;

    let mut wtr = csv::Writer::from_writer(Vec::new());
    write_records(schedule, &mut wtr)
        .map_err(|e| LoanSchedError::Serialization(e.to_string()))?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| LoanSchedError::Serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| LoanSchedError::Serialization(e.to_string()))
}

/// Write the schedule as CSV to a file path.
pub fn write_csv_file(schedule: &[ScheduleRow], path: &Path) -> LoanSchedResult<()> {
    ensure_not_empty(schedule)?;

    let file = File::create(path).map_err(|e| LoanSchedError::io(path, e))?;
    let mut wtr = csv::Writer::from_writer(file);
    write_records(schedule, &mut wtr).map_err(|e| csv_error(path, e))?;
    wtr.flush().map_err(|e| LoanSchedError::io(path, e))?;
    Ok(())
}

fn write_records<W: Write>(
    schedule: &[ScheduleRow],
    wtr: &mut csv::Writer<W>,
) -> Result<(), csv::Error> {
    wtr.write_record(HEADER)?;
    for row in schedule {
        wtr.write_record([
            row.period.to_string(),
            row.payment.to_string(),
            row.principal_portion.to_string(),
            row.interest_portion.to_string(),
            row.remaining_balance.to_string(),
        ])?;
    }
    Ok(())
}

fn csv_error(path: &Path, e: csv::Error) -> LoanSchedError {
    match e.into_kind() {
        csv::ErrorKind::Io(source) => LoanSchedError::io(path, source),
        other => LoanSchedError::Serialization(format!("{other:?}")),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn two_row_schedule() -> Vec<ScheduleRow> {
        vec![
            ScheduleRow {
                period: 1,
                payment: dec!(106.62),
                principal_portion: dec!(94.62),
                interest_portion: dec!(12.00),
                remaining_balance: dec!(1105.38),
            },
            ScheduleRow {
                period: 2,
                payment: dec!(106.62),
                principal_portion: dec!(95.57),
                interest_portion: dec!(11.05),
                remaining_balance: dec!(1009.81),
            },
        ]
    }

    // -----------------------------------------------------------------------
    // 1. Exact output: header then LF-terminated rows, raw decimals
    // -----------------------------------------------------------------------
    #[test]
    fn test_csv_text_exact() {
        let text = csv_text(&two_row_schedule()).unwrap();

        assert_eq!(
            text,
            "No,Payment,Principal,Interest,Balance\n\
             1,106.62,94.62,12.00,1105.38\n\
             2,106.62,95.57,11.05,1009.81\n"
        );
    }

    // -----------------------------------------------------------------------
    // 2. Empty schedule is rejected before any I/O
    // -----------------------------------------------------------------------
    #[test]
    fn test_csv_rejects_empty_schedule() {
        match csv_text(&[]).unwrap_err() {
            LoanSchedError::EmptySchedule => {}
            other => panic!("Expected EmptySchedule, got {:?}", other),
        }
    }

    // -----------------------------------------------------------------------
    // 3. Unwritable target surfaces as an I/O error carrying the path
    // -----------------------------------------------------------------------
    #[test]
    fn test_csv_unwritable_path() {
        let path = Path::new("/nonexistent-loansched-dir/schedule.csv");
        match write_csv_file(&two_row_schedule(), path).unwrap_err() {
            LoanSchedError::Io { path: p, .. } => assert_eq!(p, path.to_path_buf()),
            other => panic!("Expected Io, got {:?}", other),
        }
    }
}
