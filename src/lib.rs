//! Lumpsum investment calculator
//!
//! Projects a one-time investment under annual compound interest and
//! renders the results for display and reporting.
//!
//! - [`projection`]: final amount, year-by-year series and breakdown
//! - [`format`]: currency / percent / magnitude strings and email checks
//! - [`input`]: slider bounds, clamping and validation
//! - [`report`]: tabular summary, text/CSV export and (simulated) email
//! - [`config`]: JSON configuration

pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod projection;
pub mod report;

pub use config::CalculatorConfig;
pub use error::{CalculatorError, Result};
pub use format::{
    format_currency, format_magnitude, format_percent, validate_email_address, CurrencyFormatter,
    DigitGrouping, MoneyFormat,
};
pub use input::{InputLimits, InvestmentInput};
pub use projection::{
    compute_breakdown, compute_final_amount, compute_yearly_series, project, Breakdown, Projection,
    YearlyPoint,
};
pub use report::{InvestmentReport, ReportSettings};
