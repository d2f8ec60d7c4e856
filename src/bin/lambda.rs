//! HTTP endpoint for the browser calculator
//!
//! POST a JSON body `{"principal": 100000, "rate": 12, "years": 10}` (plus
//! an optional `"email"`) and receive the projection, the formatted summary
//! cards and chart axis labels. Inputs are clamped to the slider bounds.

use chrono::{Local, NaiveDate};
use lambda_http::{run, service_fn, Body, Request, Response};
use lambda_runtime::Error;
use log::{info, warn};
use lumpsum_calculator::{
    format_percent, project,
    report::{DeliveryReceipt, EmailRequest, ReportMailer, SimulatedMailer},
    CalculatorConfig, CalculatorError, CurrencyFormatter, InvestmentInput, InvestmentReport,
    MoneyFormat, Projection,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct CalculateRequest {
    #[serde(flatten)]
    input: InvestmentInput,
    #[serde(default)]
    email: Option<String>,
}

/// Display strings for the result cards
#[derive(Debug, Serialize)]
struct Summary {
    initial_investment: String,
    expected_return_rate: String,
    final_amount: String,
    wealth_gained: String,
    returns_percentage: String,
}

#[derive(Debug, Serialize)]
struct CalculateResponse {
    input: InvestmentInput,
    projection: Projection,
    summary: Summary,
    /// Magnitude label per yearly point, for the chart's value axis
    axis_labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delivery: Option<DeliveryReceipt>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn summarize(projection: &Projection, money: &dyn MoneyFormat) -> Summary {
    Summary {
        initial_investment: money.format(projection.input.principal),
        expected_return_rate: format_percent(projection.input.annual_rate_percent),
        final_amount: money.format(projection.final_amount),
        wealth_gained: money.format(projection.breakdown.returns),
        returns_percentage: format!("{}%", projection.breakdown.wealth_gained_percent),
    }
}

/// Status code and JSON body for one request body
fn respond(body: &[u8], config: &CalculatorConfig, today: NaiveDate) -> (u16, String) {
    let request: CalculateRequest = match serde_json::from_slice(body) {
        Ok(request) => request,
        Err(e) => return error_response(400, &CalculatorError::from(e)),
    };

    let input = config.limits.clamp(&request.input);
    let projection = project(&input);
    let money = CurrencyFormatter::indian_rupee();

    let delivery = match request.email.as_deref() {
        Some(address) => {
            let report = InvestmentReport::build(&projection, &money, today, &config.report);
            let email = EmailRequest::for_report(address, &report, &config.report);
            match SimulatedMailer.send(&email) {
                Ok(receipt) => Some(receipt),
                Err(e) => return error_response(400, &e),
            }
        }
        None => None,
    };

    let response = CalculateResponse {
        summary: summarize(&projection, &money),
        axis_labels: projection
            .series
            .iter()
            .map(|p| money.format_magnitude(p.amount))
            .collect(),
        input,
        projection,
        delivery,
    };

    match serde_json::to_string(&response) {
        Ok(json) => (200, json),
        Err(e) => error_response(500, &CalculatorError::from(e)),
    }
}

fn error_response(status: u16, err: &CalculatorError) -> (u16, String) {
    warn!("request failed ({status}): {err}");
    let body = ErrorBody {
        error: err.to_string(),
    };
    let json = serde_json::to_string(&body)
        .unwrap_or_else(|_| r#"{"error":"internal error"}"#.to_string());
    (status, json)
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let config = CalculatorConfig::default();
    let (status, json) = respond(event.body(), &config, Local::now().date_naive());
    info!("responded {status}");

    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .header("access-control-allow-origin", "*")
        .body(Body::from(json))?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
