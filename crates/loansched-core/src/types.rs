use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Interest method for a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepaymentMethod {
    /// Interest charged once on the original principal for the full term.
    Flat,
    /// Interest recomputed each period on the outstanding balance.
    Reducing,
}

impl RepaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            RepaymentMethod::Flat => "Flat",
            RepaymentMethod::Reducing => "Reducing balance",
        }
    }
}
