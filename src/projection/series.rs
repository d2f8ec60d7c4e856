//! Output rows and summary produced by a projection

use crate::input::InvestmentInput;
use serde::{Deserialize, Serialize};

/// Projected value at one year of the horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyPoint {
    pub year: u32,
    /// Total projected value at this year
    pub amount: f64,
    /// Constant, equal to the invested principal
    pub principal: f64,
    /// amount - principal
    pub returns: f64,
}

impl YearlyPoint {
    pub fn new(year: u32, amount: f64, principal: f64) -> Self {
        Self {
            year,
            amount,
            principal,
            returns: amount - principal,
        }
    }
}

/// Principal / returns split of a final amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub principal: f64,
    pub returns: f64,
    /// Returns as a whole-number percentage of principal (0 when principal is 0)
    pub wealth_gained_percent: i64,
}

/// Everything derived from one set of inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub input: InvestmentInput,
    pub final_amount: f64,
    pub series: Vec<YearlyPoint>,
    pub breakdown: Breakdown,
}

impl Projection {
    /// Final year's point; the series always holds year 0
    pub fn last_point(&self) -> Option<&YearlyPoint> {
        self.series.last()
    }
}
