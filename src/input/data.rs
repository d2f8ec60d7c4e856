//! The three scalar inputs of a lumpsum projection

use crate::error::{CalculatorError, Result};
use serde::{Deserialize, Serialize};

/// One-time investment to project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInput {
    /// Initial invested amount, in whole currency units
    #[serde(default = "default_principal")]
    pub principal: f64,

    /// Expected annual return, quoted in percent (12.0 = 12%)
    #[serde(default = "default_rate", alias = "rate")]
    pub annual_rate_percent: f64,

    /// Investment horizon in whole years
    #[serde(default = "default_years")]
    pub years: u32,
}

fn default_principal() -> f64 { 100_000.0 }
fn default_rate() -> f64 { 12.0 }
fn default_years() -> u32 { 10 }

impl Default for InvestmentInput {
    fn default() -> Self {
        Self {
            principal: default_principal(),
            annual_rate_percent: default_rate(),
            years: default_years(),
        }
    }
}

impl InvestmentInput {
    pub fn new(principal: f64, annual_rate_percent: f64, years: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            years,
        }
    }

    /// Minimum sanity for values accepted outside the UI bounds
    ///
    /// Finite values, non-negative principal and a rate above -100%. The
    /// engine itself never checks this.
    pub fn check_domain(&self) -> Result<()> {
        if !self.principal.is_finite() {
            return Err(CalculatorError::invalid("principal", "must be a finite number"));
        }
        if self.principal < 0.0 {
            return Err(CalculatorError::invalid("principal", "must not be negative"));
        }
        if !self.annual_rate_percent.is_finite() {
            return Err(CalculatorError::invalid("rate", "must be a finite number"));
        }
        if self.annual_rate_percent <= -100.0 {
            return Err(CalculatorError::invalid("rate", "must be above -100%"));
        }
        Ok(())
    }
}
