//! Project a lumpsum investment and export the report
//!
//! Prints the summary table to stdout by default; `--format csv|json` and
//! `--output` export instead, `--email` sends through the simulated mailer.

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};
use log::warn;
use lumpsum_calculator::{
    project,
    report::{default_file_name, EmailRequest, ReportMailer, SimulatedMailer},
    CalculatorConfig, CurrencyFormatter, InvestmentInput, InvestmentReport,
};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lumpsum", version, about = "Lumpsum investment growth calculator")]
struct Cli {
    /// Initial investment (defaults to the configured starting value)
    #[arg(short = 'p', long)]
    principal: Option<f64>,

    /// Expected annual return in percent
    #[arg(short = 'r', long)]
    rate: Option<f64>,

    /// Investment horizon in years
    #[arg(short = 'y', long)]
    years: Option<u32>,

    /// JSON configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Output file; "-" for stdout, omitted for the dated default name when
    /// exporting csv/json
    #[arg(short = 'o', long)]
    output: Option<String>,

    /// Email the text report to this address
    #[arg(long)]
    email: Option<String>,

    /// Reject out-of-range input instead of clamping it
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CalculatorConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CalculatorConfig::default(),
    };

    let requested = InvestmentInput {
        principal: cli.principal.unwrap_or(config.defaults.principal),
        annual_rate_percent: cli.rate.unwrap_or(config.defaults.annual_rate_percent),
        years: cli.years.unwrap_or(config.defaults.years),
    };

    let input = if cli.strict {
        config.limits.validate(&requested)?;
        requested
    } else {
        let clamped = config.limits.clamp(&requested);
        if clamped != requested {
            warn!("input {:?} clamped to {:?}", requested, clamped);
        }
        clamped
    };

    let projection = project(&input);
    let today = Local::now().date_naive();
    let money = CurrencyFormatter::indian_rupee();
    let report = InvestmentReport::build(&projection, &money, today, &config.report);

    let output = match (&cli.output, cli.format) {
        (Some(path), _) => Some(path.clone()),
        (None, OutputFormat::Text) => None,
        (None, format) => Some(default_file_name(today, format.extension())),
    };

    let mut writer: Box<dyn Write> = match output.as_deref() {
        Some("-") | None => Box::new(io::stdout()),
        Some(path) => Box::new(File::create(path).with_context(|| format!("creating {path}"))?),
    };

    match cli.format {
        OutputFormat::Text => writer.write_all(report.render_text(&config.report).as_bytes())?,
        OutputFormat::Csv => report.write_csv(&mut writer)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &report)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;

    if let Some(path) = output.as_deref().filter(|p| *p != "-") {
        eprintln!("Report written to {path}");
    }

    if let Some(address) = &cli.email {
        let request = EmailRequest::for_report(address, &report, &config.report);
        let receipt = SimulatedMailer
            .send(&request)
            .context("Failed to send email")?;
        eprintln!("{}", receipt.message);
    }

    Ok(())
}
