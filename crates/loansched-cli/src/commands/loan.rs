use std::path::PathBuf;

use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::{json, Value};

use loansched_core::export::{csv_out, xlsx, CSV_FILENAME, XLSX_FILENAME};
use loansched_core::schedule::{calculate, LoanInput};
use loansched_core::RepaymentMethod;

use crate::input;

/// Arguments shared by calculate, summary, and export.
#[derive(Args)]
pub struct CalculateArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount borrowed
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate as a percentage (12 = 12%/yr)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Term in months
    #[arg(long)]
    pub term_months: Option<u32>,

    /// Interest method
    #[arg(long, value_enum)]
    pub method: Option<MethodArg>,
}

/// Arguments for schedule export
#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub calc: CalculateArgs,

    /// Export format
    #[arg(long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Directory the schedule file is written into
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MethodArg {
    Flat,
    Reducing,
}

impl From<MethodArg> for RepaymentMethod {
    fn from(m: MethodArg) -> Self {
        match m {
            MethodArg::Flat => RepaymentMethod::Flat,
            MethodArg::Reducing => RepaymentMethod::Reducing,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

pub fn run_calculate(args: CalculateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input = build_input(args)?;
    let result = calculate(&loan_input)?;
    Ok(serde_json::to_value(&result)?)
}

pub fn run_summary(args: CalculateArgs) -> Result<String, Box<dyn std::error::Error>> {
    let loan_input = build_input(args)?;
    let result = calculate(&loan_input)?;
    Ok(result.summary())
}

pub fn run_export(args: ExportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input = build_input(args.calc)?;
    let result = calculate(&loan_input)?;

    let path = match args.format {
        ExportFormat::Csv => {
            let path = args.dir.join(CSV_FILENAME);
            csv_out::write_csv_file(&result.schedule, &path)?;
            path
        }
        ExportFormat::Xlsx => {
            let path = args.dir.join(XLSX_FILENAME);
            xlsx::write_xlsx_file(&result.schedule, &path)?;
            path
        }
    };

    Ok(json!({
        "written": path.display().to_string(),
        "rows": result.schedule.len(),
    }))
}

/// Assemble the core input from a JSON file, piped JSON, or the flags.
/// The --rate flag is a percentage; JSON inputs use decimal rates.
fn build_input(args: CalculateArgs) -> Result<LoanInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let rate_percent = args
        .rate
        .ok_or("--rate is required (or provide --input)")?;

    Ok(LoanInput {
        principal: args
            .principal
            .ok_or("--principal is required (or provide --input)")?,
        annual_rate: rate_percent / Decimal::ONE_HUNDRED,
        term_months: args
            .term_months
            .ok_or("--term-months is required (or provide --input)")?,
        method: args
            .method
            .ok_or("--method is required (or provide --input)")?
            .into(),
    })
}
