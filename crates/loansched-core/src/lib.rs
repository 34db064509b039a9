//! Loan repayment calculations with schedule export.
//!
//! `loansched-core` turns a [`schedule::LoanInput`] into an installment
//! figure, total interest, and — for the reducing-balance method — a full
//! amortization schedule, and serializes that schedule to CSV or a
//! single-sheet XLSX workbook.

pub mod error;
pub mod export;
pub mod schedule;
pub mod types;

pub use error::LoanSchedError;
pub use types::*;

/// Standard result type for all loansched operations
pub type LoanSchedResult<T> = Result<T, LoanSchedError>;
