//! Final amounts across a grid of rates and horizons
//!
//! Each cell is an independent projection, so the grid is computed in
//! parallel and printed as a magnitude-labelled table (or CSV).

use anyhow::{ensure, Result};
use clap::Parser;
use lumpsum_calculator::{compute_final_amount, CurrencyFormatter, MoneyFormat};
use rayon::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "rate_sweep", version, about = "Compare final amounts across rates and horizons")]
struct Cli {
    /// Initial investment
    #[arg(short = 'p', long, default_value_t = 100_000.0)]
    principal: f64,

    /// Lowest rate in percent
    #[arg(long, default_value_t = 6.0)]
    min_rate: f64,

    /// Highest rate in percent
    #[arg(long, default_value_t = 15.0)]
    max_rate: f64,

    /// Rate increment in percent
    #[arg(long, default_value_t = 1.0)]
    rate_step: f64,

    /// Horizons to compare, in years
    #[arg(short = 'y', long, value_delimiter = ',', default_values_t = vec![5, 10, 15, 20, 25, 30])]
    years: Vec<u32>,

    /// Emit raw numbers as CSV instead of a table
    #[arg(long)]
    csv: bool,
}

/// Final amounts for one rate, one entry per horizon
#[derive(Debug, Clone)]
struct SweepRow {
    rate: f64,
    finals: Vec<f64>,
}

/// Largest number of rates a single sweep will project
const MAX_GRID_RATES: usize = 10_000;

fn rate_grid(min: f64, max: f64, step: f64) -> Result<Vec<f64>> {
    ensure!(step > 0.0 && step.is_finite(), "rate step must be positive");
    ensure!(min.is_finite() && max.is_finite(), "rates must be finite");
    ensure!(max >= min, "max rate must not be below min rate");

    // Tolerance so 0.3 / 0.1 counts as three steps
    let steps = ((max - min) / step + 1e-9).floor();
    ensure!(
        steps < MAX_GRID_RATES as f64,
        "rate grid would hold more than {MAX_GRID_RATES} rates; use a larger step"
    );

    let count = steps as usize + 1;
    Ok((0..count)
        .map(|i| ((min + step * i as f64) * 100.0).round() / 100.0)
        .collect())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    ensure!(!cli.years.is_empty(), "at least one horizon is required");

    let start = Instant::now();
    let rates = rate_grid(cli.min_rate, cli.max_rate, cli.rate_step)?;

    let rows: Vec<SweepRow> = rates
        .par_iter()
        .map(|&rate| SweepRow {
            rate,
            finals: cli
                .years
                .iter()
                .map(|&years| compute_final_amount(cli.principal, rate, years))
                .collect(),
        })
        .collect();

    log::info!(
        "computed {} projections in {:?}",
        rows.len() * cli.years.len(),
        start.elapsed()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.csv {
        let header: Vec<String> = cli.years.iter().map(|y| format!("years_{y}")).collect();
        writeln!(out, "rate,{}", header.join(","))?;
        for row in &rows {
            let cells: Vec<String> = row.finals.iter().map(|v| format!("{v:.0}")).collect();
            writeln!(out, "{},{}", row.rate, cells.join(","))?;
        }
        return Ok(());
    }

    let money = CurrencyFormatter::indian_rupee();
    writeln!(out, "Principal: {}", money.format(cli.principal))?;
    write!(out, "{:>7}", "Rate")?;
    for years in &cli.years {
        write!(out, " {:>12}", format!("{years}y"))?;
    }
    writeln!(out)?;

    for row in &rows {
        write!(out, "{:>7}", format!("{:.1}%", row.rate))?;
        for value in &row.finals {
            write!(out, " {:>12}", money.format_magnitude(*value))?;
        }
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_grid_inclusive() {
        assert_eq!(rate_grid(6.0, 8.0, 1.0).expect("grid"), vec![6.0, 7.0, 8.0]);
        assert_eq!(rate_grid(1.0, 1.3, 0.1).expect("grid"), vec![1.0, 1.1, 1.2, 1.3]);
        assert_eq!(rate_grid(5.0, 5.0, 0.5).expect("grid"), vec![5.0]);
    }

    #[test]
    fn test_rate_grid_rejects_oversized_or_bad_steps() {
        assert!(rate_grid(1.0, 30.0, 1e-300).is_err());
        assert!(rate_grid(1.0, 30.0, 0.0).is_err());
        assert!(rate_grid(1.0, 30.0, -1.0).is_err());
        assert!(rate_grid(1.0, 30.0, f64::NAN).is_err());
        assert!(rate_grid(10.0, 5.0, 1.0).is_err());
        assert_eq!(rate_grid(0.0, 9_999.0, 1.0).expect("grid").len(), 10_000);
    }
}
