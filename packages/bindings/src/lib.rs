use napi::bindgen_prelude::Buffer;
use napi::Result as NapiResult;
use napi_derive::napi;

use loansched_core::export::{csv_out, xlsx};
use loansched_core::schedule::{calculate, LoanInput};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_input(input_json: &str) -> NapiResult<LoanInput> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_loan(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let output = calculate(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn loan_summary(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let output = calculate(&input).map_err(to_napi_error)?;
    Ok(output.summary())
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[napi]
pub fn schedule_csv(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let output = calculate(&input).map_err(to_napi_error)?;
    csv_out::csv_text(&output.schedule).map_err(to_napi_error)
}

#[napi]
pub fn schedule_xlsx(input_json: String) -> NapiResult<Buffer> {
    let input = parse_input(&input_json)?;
    let output = calculate(&input).map_err(to_napi_error)?;
    let bytes = xlsx::xlsx_bytes(&output.schedule).map_err(to_napi_error)?;
    Ok(bytes.into())
}
