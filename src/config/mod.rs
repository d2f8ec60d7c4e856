//! Calculator configuration loaded from JSON
//!
//! Every section is optional; missing fields take the reference
//! calculator's values.

use crate::error::Result;
use crate::input::{InputLimits, InvestmentInput};
use crate::report::ReportSettings;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub limits: InputLimits,

    /// Starting values shown before the user moves a slider
    #[serde(default)]
    pub defaults: InvestmentInput,

    #[serde(default)]
    pub report: ReportSettings,
}

impl CalculatorConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        debug!("loaded calculator config from {}", path.display());
        Ok(config)
    }
}
