//! Compound-growth calculations
//!
//! Every function here is pure: identical inputs give identical outputs and
//! nothing is cached between calls. Amounts are rounded to whole currency
//! units, half-up towards positive infinity.

use super::series::{Breakdown, Projection, YearlyPoint};
use super::PERCENT;
use crate::input::InvestmentInput;
use log::debug;

/// Round to the nearest integer, ties towards positive infinity
///
/// Compares the exact fractional part instead of adding 0.5, which would
/// itself round (0.49999999999999994 + 0.5 == 1.0, and odd integers above
/// 2^52 would land on the next even one).
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Value of `principal` after compounding annually for `years` at `rate_percent`
///
/// `final = principal × (1 + rate/100)^years`, rounded to a whole unit.
/// Defined for fractional and negative rates; rates at or below -100% give
/// mathematically consistent (zero or sign-flipping) results rather than
/// an error.
pub fn compute_final_amount(principal: f64, rate_percent: f64, years: u32) -> f64 {
    let growth = 1.0 + rate_percent / PERCENT;
    round_half_up(principal * growth.powf(f64::from(years)))
}

/// Year-by-year projected value, year 0 through `years` inclusive
///
/// Year 0 passes the principal through unrounded. Each later year is a
/// fresh compounding from year 0 via [`compute_final_amount`], so rounding
/// never accumulates across the series.
pub fn compute_yearly_series(principal: f64, rate_percent: f64, years: u32) -> Vec<YearlyPoint> {
    let mut series = Vec::with_capacity(years as usize + 1);
    series.push(YearlyPoint {
        year: 0,
        amount: principal,
        principal,
        returns: 0.0,
    });

    for year in 1..=years {
        let amount = compute_final_amount(principal, rate_percent, year);
        series.push(YearlyPoint::new(year, amount, principal));
    }

    series
}

/// Returns as a whole-number percentage of principal
///
/// A zero principal (or any other non-finite ratio) reports 0%.
pub fn growth_percent(returns: f64, principal: f64) -> i64 {
    if principal == 0.0 {
        return 0;
    }
    let ratio = returns / principal * PERCENT;
    if !ratio.is_finite() {
        return 0;
    }
    round_half_up(ratio) as i64
}

/// Split a final amount into principal and returns
pub fn compute_breakdown(principal: f64, final_amount: f64) -> Breakdown {
    let returns = final_amount - principal;
    Breakdown {
        principal,
        returns,
        wealth_gained_percent: growth_percent(returns, principal),
    }
}

/// Recompute the final amount, series and breakdown for one input
pub fn project(input: &InvestmentInput) -> Projection {
    let series = compute_yearly_series(input.principal, input.annual_rate_percent, input.years);
    // Single-shot value; equals the last point for years >= 1 and rounds the
    // unrounded year-0 passthrough otherwise
    let final_amount = compute_final_amount(input.principal, input.annual_rate_percent, input.years);
    let breakdown = compute_breakdown(input.principal, final_amount);

    debug!(
        "projected principal={} rate={}% years={} -> final={}",
        input.principal, input.annual_rate_percent, input.years, final_amount
    );

    Projection {
        input: input.clone(),
        final_amount,
        series,
        breakdown,
    }
}
