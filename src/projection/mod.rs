//! Projection engine for lumpsum compound growth

mod engine;
mod series;

pub use engine::{
    compute_breakdown, compute_final_amount, compute_yearly_series, growth_percent, project,
    round_half_up,
};
pub use series::{Breakdown, Projection, YearlyPoint};

/// Percentage points per unit of rate (rates are quoted as e.g. 12.0 for 12%)
pub const PERCENT: f64 = 100.0;
