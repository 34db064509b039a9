//! Loan repayment engine.
//!
//! Computes installment and total-interest figures for flat-rate and
//! reducing-balance loans, and generates the month-by-month amortization
//! schedule for the reducing-balance method. The schedule is a strict
//! sequential fold: each row depends only on the previous balance, and the
//! whole schedule is regenerated fresh on every calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LoanSchedError;
use crate::types::{Money, Rate, RepaymentMethod};
use crate::LoanSchedResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// Full input for a loan calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed
    pub principal: Money,
    /// Annual interest rate as a decimal (0.12 = 12%)
    pub annual_rate: Rate,
    /// Term in months
    pub term_months: u32,
    /// Interest method
    pub method: RepaymentMethod,
}

/// A single period in the amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Period number (1-indexed)
    pub period: u32,
    /// Payment made this period
    pub payment: Money,
    /// Portion of the payment reducing the principal
    pub principal_portion: Money,
    /// Portion of the payment covering interest
    pub interest_portion: Money,
    /// Outstanding balance after the payment, clamped at zero
    pub remaining_balance: Money,
}

/// Complete output from a loan calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Interest method applied
    pub method: RepaymentMethod,
    /// Fixed payment per period
    pub installment: Money,
    /// Total interest paid over the full term
    pub total_interest: Money,
    /// Per-period breakdown; empty for the flat method
    pub schedule: Vec<ScheduleRow>,
}

impl CalculationResult {
    /// One-line human-readable summary, suitable as a share payload.
    pub fn summary(&self) -> String {
        format!(
            "{}: installment {}, total interest {}",
            self.method.label(),
            self.installment.round_dp(2),
            self.total_interest.round_dp(2)
        )
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute installment, total interest, and (for the reducing-balance
/// method) the full amortization schedule.
pub fn calculate(input: &LoanInput) -> LoanSchedResult<CalculationResult> {
    validate_input(input)?;

    match input.method {
        RepaymentMethod::Flat => compute_flat(input),
        RepaymentMethod::Reducing => compute_reducing(input),
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &LoanInput) -> LoanSchedResult<()> {
    if input.principal <= Decimal::ZERO {
        return Err(LoanSchedError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
        });
    }
    if input.annual_rate < Decimal::ZERO {
        return Err(LoanSchedError::InvalidInput {
            field: "annual_rate".into(),
            reason: "Annual rate must not be negative".into(),
        });
    }
    if input.term_months == 0 {
        return Err(LoanSchedError::InvalidInput {
            field: "term_months".into(),
            reason: "Term must be at least one month".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Flat method
// ---------------------------------------------------------------------------

/// Flat-rate loan: interest on the full original principal for the whole
/// term, split evenly across payments. No per-period breakdown exists for
/// this method, so the schedule is empty.
fn compute_flat(input: &LoanInput) -> LoanSchedResult<CalculationResult> {
    let years = Decimal::from(input.term_months) / MONTHS_PER_YEAR;
    let total_interest = input.principal * input.annual_rate * years;
    let installment = (input.principal + total_interest) / Decimal::from(input.term_months);

    Ok(CalculationResult {
        method: RepaymentMethod::Flat,
        installment,
        total_interest,
        schedule: Vec::new(),
    })
}

// ---------------------------------------------------------------------------
// Reducing-balance method
// ---------------------------------------------------------------------------

/// Reducing-balance loan: fixed installment from the standard amortization
/// formula, interest recomputed each period on the outstanding balance.
fn compute_reducing(input: &LoanInput) -> LoanSchedResult<CalculationResult> {
    let periods = Decimal::from(input.term_months);
    let monthly_rate = input.annual_rate / MONTHS_PER_YEAR;

    // Interest-free loans degrade the closed form to 0/0; handle up front.
    let (installment, total_interest) = if monthly_rate.is_zero() {
        (input.principal / periods, Decimal::ZERO)
    } else {
        // installment = P*r*f / (f - 1) with f = (1+r)^n, which is the
        // usual P*r / (1 - (1+r)^-n) without the negative exponent.
        let factor = growth_factor(monthly_rate, input.term_months);
        let denominator = factor - Decimal::ONE;
        if denominator.is_zero() {
            return Err(LoanSchedError::DivisionByZero {
                context: "amortization factor".into(),
            });
        }
        let installment = input.principal * monthly_rate * factor / denominator;
        let total_interest = installment * periods - input.principal;
        (installment, total_interest)
    };

    let schedule = generate_schedule(input.principal, monthly_rate, input.term_months, installment);

    Ok(CalculationResult {
        method: RepaymentMethod::Reducing,
        installment,
        total_interest,
        schedule,
    })
}

/// Build the amortization schedule: exactly `term_months` rows, folding the
/// balance forward one period at a time. A balance driven negative by
/// arithmetic drift on the final period is clamped to zero; the residual is
/// absorbed, not redistributed into the last installment.
fn generate_schedule(
    principal: Money,
    monthly_rate: Rate,
    term_months: u32,
    installment: Money,
) -> Vec<ScheduleRow> {
    let mut schedule = Vec::with_capacity(term_months as usize);
    let mut balance = principal;

    for period in 1..=term_months {
        let interest = balance * monthly_rate;
        let principal_portion = installment - interest;
        balance -= principal_portion;
        if balance < Decimal::ZERO {
            balance = Decimal::ZERO;
        }

        schedule.push(ScheduleRow {
            period,
            payment: installment,
            principal_portion,
            interest_portion: interest,
            remaining_balance: balance,
        });
    }

    schedule
}

/// (1 + r)^n by iterative multiplication.
fn growth_factor(rate: Rate, periods: u32) -> Decimal {
    let one_plus_r = Decimal::ONE + rate;
    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor *= one_plus_r;
    }
    factor
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
