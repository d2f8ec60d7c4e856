//! Slider bounds for the calculator inputs
//!
//! These are a UI policy, not part of the projection math: the engine
//! accepts any finite values. Callers either reject out-of-range input
//! ([`InputLimits::validate`]) or pull it back into range the way the
//! sliders do ([`InputLimits::clamp`]).

use super::InvestmentInput;
use crate::error::{CalculatorError, Result};
use serde::{Deserialize, Serialize};

/// Bounds and step sizes for each input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputLimits {
    #[serde(default = "default_min_principal")]
    pub min_principal: f64,
    #[serde(default = "default_max_principal")]
    pub max_principal: f64,
    /// Principal slider granularity
    #[serde(default = "default_principal_step")]
    pub principal_step: f64,

    #[serde(default = "default_min_rate")]
    pub min_rate: f64,
    #[serde(default = "default_max_rate")]
    pub max_rate: f64,
    /// Rate slider granularity (0.1 = one decimal place)
    #[serde(default = "default_rate_step")]
    pub rate_step: f64,

    #[serde(default = "default_min_years")]
    pub min_years: u32,
    #[serde(default = "default_max_years")]
    pub max_years: u32,
}

fn default_min_principal() -> f64 { 1_000.0 }
fn default_max_principal() -> f64 { 10_000_000.0 }
fn default_principal_step() -> f64 { 1_000.0 }
fn default_min_rate() -> f64 { 1.0 }
fn default_max_rate() -> f64 { 30.0 }
fn default_rate_step() -> f64 { 0.1 }
fn default_min_years() -> u32 { 1 }
fn default_max_years() -> u32 { 50 }

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_principal: default_min_principal(),
            max_principal: default_max_principal(),
            principal_step: default_principal_step(),
            min_rate: default_min_rate(),
            max_rate: default_max_rate(),
            rate_step: default_rate_step(),
            min_years: default_min_years(),
            max_years: default_max_years(),
        }
    }
}

impl InputLimits {
    /// Reject input that falls outside the bounds
    pub fn validate(&self, input: &InvestmentInput) -> Result<()> {
        input.check_domain()?;

        if input.principal < self.min_principal || input.principal > self.max_principal {
            return Err(CalculatorError::invalid(
                "principal",
                format!("must be between {} and {}", self.min_principal, self.max_principal),
            ));
        }
        if input.annual_rate_percent < self.min_rate || input.annual_rate_percent > self.max_rate {
            return Err(CalculatorError::invalid(
                "rate",
                format!("must be between {}% and {}%", self.min_rate, self.max_rate),
            ));
        }
        if input.years < self.min_years || input.years > self.max_years {
            return Err(CalculatorError::invalid(
                "years",
                format!("must be between {} and {}", self.min_years, self.max_years),
            ));
        }
        Ok(())
    }

    /// Pull input into range and onto the slider steps
    ///
    /// Non-finite values fall back to the lower bound.
    pub fn clamp(&self, input: &InvestmentInput) -> InvestmentInput {
        InvestmentInput {
            principal: clamp_to_step(
                input.principal,
                self.min_principal,
                self.max_principal,
                self.principal_step,
            ),
            annual_rate_percent: clamp_to_step(
                input.annual_rate_percent,
                self.min_rate,
                self.max_rate,
                self.rate_step,
            ),
            years: input.years.clamp(self.min_years, self.max_years.max(self.min_years)),
        }
    }
}

fn clamp_to_step(value: f64, min: f64, max: f64, step: f64) -> f64 {
    if !value.is_finite() {
        return min;
    }
    snap_to_step(value, step).clamp(min, max.max(min))
}

/// Round to the nearest multiple of `step`
///
/// Fractional steps divide by the reciprocal so 0.1 steps land on exact
/// one-decimal values (12.3, not 12.300000000000001).
fn snap_to_step(value: f64, step: f64) -> f64 {
    if step <= 0.0 || !step.is_finite() {
        return value;
    }
    let steps = (value / step).round();
    if step < 1.0 {
        steps / (1.0 / step).round()
    } else {
        steps * step
    }
}
