use loansched_core::export::{csv_out, xlsx};
use loansched_core::schedule::{calculate, LoanInput};
use loansched_core::{LoanSchedError, RepaymentMethod};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// End-to-end: calculation through export
// ===========================================================================

fn car_loan() -> LoanInput {
    LoanInput {
        principal: dec!(18000),
        annual_rate: dec!(0.075),
        term_months: 48,
        method: RepaymentMethod::Reducing,
    }
}

#[test]
fn reducing_schedule_exports_to_csv() {
    let result = calculate(&car_loan()).unwrap();
    let text = csv_out::csv_text(&result.schedule).unwrap();

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("No,Payment,Principal,Interest,Balance"));
    assert_eq!(lines.count(), 48);

    // Every data line starts with its 1-based period number
    for (i, line) in text.lines().skip(1).enumerate() {
        let period: u32 = line.split(',').next().unwrap().parse().unwrap();
        assert_eq!(period as usize, i + 1);
    }
}

#[test]
fn reducing_schedule_exports_to_xlsx() {
    let result = calculate(&car_loan()).unwrap();
    let bytes = xlsx::xlsx_bytes(&result.schedule).unwrap();

    // PK zip magic; the writer tests cover the part contents
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn flat_result_has_nothing_to_export() {
    let result = calculate(&LoanInput {
        principal: dec!(1000),
        annual_rate: dec!(0.10),
        term_months: 12,
        method: RepaymentMethod::Flat,
    })
    .unwrap();

    assert!(result.schedule.is_empty());
    assert!(matches!(
        csv_out::csv_text(&result.schedule),
        Err(LoanSchedError::EmptySchedule)
    ));
    assert!(matches!(
        xlsx::xlsx_bytes(&result.schedule),
        Err(LoanSchedError::EmptySchedule)
    ));
}

#[test]
fn result_round_trips_through_json() {
    let result = calculate(&car_loan()).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let back: loansched_core::schedule::CalculationResult = serde_json::from_str(&json).unwrap();

    assert_eq!(back.schedule.len(), 48);
    assert_eq!(back.installment, result.installment);
    assert_eq!(back.method, RepaymentMethod::Reducing);
}

#[test]
fn total_interest_matches_schedule_interest() {
    let result = calculate(&car_loan()).unwrap();
    let schedule_interest: Decimal = result
        .schedule
        .iter()
        .map(|row| row.interest_portion)
        .sum();

    let diff = (schedule_interest - result.total_interest).abs();
    assert!(diff < dec!(0.0001), "{} vs {}", schedule_interest, result.total_interest);
}
