//! Schedule export writers.
//!
//! Both writers serialize the amortization schedule with the same column
//! order and header. They reject an empty schedule before any I/O: the flat
//! method produces no per-period breakdown, so there is nothing to export.

pub mod csv_out;
pub mod xlsx;

use crate::error::LoanSchedError;
use crate::schedule::ScheduleRow;
use crate::LoanSchedResult;

/// Column header shared by both writers.
pub const HEADER: [&str; 5] = ["No", "Payment", "Principal", "Interest", "Balance"];

/// Conventional output filenames.
pub const CSV_FILENAME: &str = "schedule.csv";
pub const XLSX_FILENAME: &str = "schedule.xlsx";

fn ensure_not_empty(schedule: &[ScheduleRow]) -> LoanSchedResult<()> {
    if schedule.is_empty() {
        return Err(LoanSchedError::EmptySchedule);
    }
    Ok(())
}
