//! Investment summary report: tables, text/CSV export and email delivery

mod document;
pub mod mail;

pub use document::{default_file_name, InvestmentReport, ReportSettings, ReportTable};
pub use mail::{DeliveryReceipt, EmailRequest, ReportMailer, SimulatedMailer};
