//! Emailing a report
//!
//! There is no mail backend: [`SimulatedMailer`] checks the address, logs
//! the delivery and hands back the confirmation the UI shows. A real
//! transport would implement [`ReportMailer`].

use super::{default_file_name, InvestmentReport, ReportSettings};
use crate::error::{CalculatorError, Result};
use crate::format::validate_email_address;
use log::info;
use serde::{Deserialize, Serialize};

/// An outgoing report email with its rendered attachment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailRequest {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub attachment_name: String,
    pub attachment: Vec<u8>,
}

impl EmailRequest {
    /// Attach the text rendering of `report`. The address is kept verbatim
    /// so the mailer validates exactly what was entered.
    pub fn for_report(to: &str, report: &InvestmentReport, settings: &ReportSettings) -> Self {
        Self {
            to: to.to_string(),
            subject: format!("{} report", report.title),
            body: format!(
                "{}.\nYour investment report is attached.",
                report.generated_line()
            ),
            attachment_name: default_file_name(report.generated_on, "txt"),
            attachment: report.render_text(settings).into_bytes(),
        }
    }
}

/// Outcome of a successful send
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    pub to: String,
    /// User-facing confirmation
    pub message: String,
    pub attachment_bytes: usize,
}

pub trait ReportMailer {
    fn send(&self, request: &EmailRequest) -> Result<DeliveryReceipt>;
}

/// Accepts any well-shaped address and delivers nowhere
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedMailer;

impl ReportMailer for SimulatedMailer {
    fn send(&self, request: &EmailRequest) -> Result<DeliveryReceipt> {
        if !validate_email_address(&request.to) {
            return Err(CalculatorError::InvalidEmail(request.to.clone()));
        }

        info!(
            "simulated delivery of {:?} ({} bytes) to {}",
            request.attachment_name,
            request.attachment.len(),
            request.to
        );

        Ok(DeliveryReceipt {
            to: request.to.clone(),
            message: format!("Your investment report has been sent to {}", request.to),
            attachment_bytes: request.attachment.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::CurrencyFormatter;
    use crate::input::InvestmentInput;
    use crate::projection::project;
    use chrono::NaiveDate;

    fn report() -> InvestmentReport {
        InvestmentReport::build(
            &project(&InvestmentInput::default()),
            &CurrencyFormatter::indian_rupee(),
            NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date"),
            &ReportSettings::default(),
        )
    }

    #[test]
    fn test_request_carries_rendered_report() {
        let settings = ReportSettings::default();
        let report = report();
        let request = EmailRequest::for_report("investor@example.com", &report, &settings);

        assert_eq!(request.to, "investor@example.com");
        assert_eq!(request.attachment_name, "Lumpsum_Investment_2026-10-19.txt");
        assert_eq!(request.attachment, report.render_text(&settings).into_bytes());
        assert!(request.body.starts_with("Report generated on 19 October 2026."));
    }

    #[test]
    fn test_simulated_send() {
        let request = EmailRequest::for_report("investor@example.com", &report(), &ReportSettings::default());
        let receipt = SimulatedMailer.send(&request).expect("valid address");

        assert_eq!(receipt.to, "investor@example.com");
        assert_eq!(
            receipt.message,
            "Your investment report has been sent to investor@example.com"
        );
        assert_eq!(receipt.attachment_bytes, request.attachment.len());
    }

    #[test]
    fn test_invalid_address_is_rejected() {
        let request = EmailRequest::for_report("investor@example", &report(), &ReportSettings::default());
        let err = SimulatedMailer.send(&request).expect_err("missing tld");
        assert!(matches!(err, CalculatorError::InvalidEmail(addr) if addr == "investor@example"));
    }

    #[test]
    fn test_surrounding_whitespace_is_rejected() {
        for address in [" investor@example.com", "investor@example.com ", "\tinvestor@example.com"] {
            let request = EmailRequest::for_report(address, &report(), &ReportSettings::default());
            assert_eq!(request.to, address);
            let err = SimulatedMailer.send(&request).expect_err("whitespace in address");
            assert!(matches!(err, CalculatorError::InvalidEmail(addr) if addr == address));
        }
    }
}
