use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanSchedError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("No schedule to export: the flat method produces a summary only")]
    EmptySchedule,

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl LoanSchedError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoanSchedError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for LoanSchedError {
    fn from(e: serde_json::Error) -> Self {
        LoanSchedError::Serialization(e.to_string())
    }
}

impl From<zip::result::ZipError> for LoanSchedError {
    fn from(e: zip::result::ZipError) -> Self {
        LoanSchedError::Spreadsheet(e.to_string())
    }
}
