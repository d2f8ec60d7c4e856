//! Report tables and their text / CSV renderings

use crate::error::Result;
use crate::format::{format_percent, MoneyFormat};
use crate::projection::{growth_percent, Projection};
use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Layout settings for exported reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default = "default_title")]
    pub title: String,

    /// Printed at the bottom of every page
    #[serde(default = "default_footer")]
    pub footer: String,

    /// Body lines per page before the footer
    #[serde(default = "default_lines_per_page")]
    pub lines_per_page: usize,
}

fn default_title() -> String { "Lumpsum Investment Calculator".to_string() }
fn default_footer() -> String {
    "© 2025 Insightful Wealth Visualizer | For educational purposes only".to_string()
}
fn default_lines_per_page() -> usize { 50 }

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            footer: default_footer(),
            lines_per_page: default_lines_per_page(),
        }
    }
}

/// A titled table of pre-formatted cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTable {
    pub heading: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    fn new(heading: &str, columns: &[&str]) -> Self {
        Self {
            heading: heading.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Heading, column header, separator and one line per row
    fn render_lines(&self) -> Vec<String> {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in &self.rows {
            for (idx, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(idx) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }

        let render_row = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 3);
        lines.push(self.heading.clone());
        lines.push(render_row(&self.columns));
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        for row in &self.rows {
            lines.push(render_row(row));
        }
        lines
    }
}

/// One row of the CSV export
#[derive(Debug, Serialize)]
struct GrowthRow {
    year: u32,
    amount: f64,
    principal: f64,
    returns: f64,
    growth_percent: i64,
}

/// Tabular summary of one projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentReport {
    pub title: String,
    pub generated_on: NaiveDate,
    pub parameters: ReportTable,
    pub results: ReportTable,
    pub growth: ReportTable,
    pub projection: Projection,
}

impl InvestmentReport {
    /// Build the parameter, results and year-by-year tables
    pub fn build(
        projection: &Projection,
        money: &dyn MoneyFormat,
        generated_on: NaiveDate,
        settings: &ReportSettings,
    ) -> Self {
        let input = &projection.input;
        let breakdown = &projection.breakdown;

        let mut parameters = ReportTable::new("Investment Summary", &["Parameter", "Value"]);
        parameters.push_row(vec!["Initial Investment".into(), money.format(input.principal)]);
        parameters.push_row(vec![
            "Expected Return Rate".into(),
            format_percent(input.annual_rate_percent),
        ]);
        parameters.push_row(vec!["Time Period".into(), format!("{} years", input.years)]);

        let mut results = ReportTable::new("Results", &["Detail", "Value"]);
        results.push_row(vec!["Initial Investment".into(), money.format(input.principal)]);
        results.push_row(vec!["Final Amount".into(), money.format(projection.final_amount)]);
        results.push_row(vec!["Wealth Gained".into(), money.format(breakdown.returns)]);
        results.push_row(vec![
            "Returns Percentage".into(),
            format!("{}%", breakdown.wealth_gained_percent),
        ]);

        let mut growth = ReportTable::new(
            "Year-by-Year Growth",
            &["Year", "Amount", "Returns", "Growth"],
        );
        for point in &projection.series {
            growth.push_row(vec![
                point.year.to_string(),
                money.format(point.amount),
                money.format(point.returns),
                format!("{}%", growth_percent(point.returns, point.principal)),
            ]);
        }

        Self {
            title: settings.title.clone(),
            generated_on,
            parameters,
            results,
            growth,
            projection: projection.clone(),
        }
    }

    /// "Report generated on 19 October 2026"
    pub fn generated_line(&self) -> String {
        format!("Report generated on {}", self.generated_on.format("%-d %B %Y"))
    }

    /// Paginated plain-text document with a footer on every page
    pub fn render_text(&self, settings: &ReportSettings) -> String {
        let mut body = vec![self.title.clone(), self.generated_line(), String::new()];
        for table in [&self.parameters, &self.results, &self.growth] {
            body.extend(table.render_lines());
            body.push(String::new());
        }
        while body.last().is_some_and(|line| line.is_empty()) {
            body.pop();
        }

        let per_page = settings.lines_per_page.max(1);
        let pages: Vec<&[String]> = body.chunks(per_page).collect();
        let page_count = pages.len();

        let mut out = String::new();
        for (idx, page) in pages.iter().enumerate() {
            for line in page.iter() {
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
            out.push_str(&settings.footer);
            out.push('\n');
            out.push_str(&format!("Page {} of {}\n", idx + 1, page_count));
            if idx + 1 < page_count {
                out.push('\u{c}');
                out.push('\n');
            }
        }

        info!(
            "rendered text report: {} lines over {} page(s)",
            body.len(),
            page_count
        );
        out
    }

    /// Year-by-year series as CSV with raw numbers
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for point in &self.projection.series {
            csv_writer.serialize(GrowthRow {
                year: point.year,
                amount: point.amount,
                principal: point.principal,
                returns: point.returns,
                growth_percent: growth_percent(point.returns, point.principal),
            })?;
        }
        csv_writer.flush()?;
        info!("wrote CSV report with {} rows", self.projection.series.len());
        Ok(())
    }
}

/// `Lumpsum_Investment_2026-10-19.txt`
pub fn default_file_name(date: NaiveDate, extension: &str) -> String {
    format!("Lumpsum_Investment_{}.{}", date.format("%Y-%m-%d"), extension)
}
