pub mod json;
pub mod md;

use crate::error::CardioError;
use crate::types::assessment::{RiskAssessment, RiskBand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

/// An assessment together with the context a reader needs to interpret it.
#[derive(Debug, Clone)]
pub struct AssessmentReport<'a> {
    pub assessment: &'a RiskAssessment,
    pub band: RiskBand,
    pub ruleset_version: &'a str,
    pub bmi: Option<f64>,
}

pub fn render(report: &AssessmentReport<'_>, format: OutputFormat) -> Result<String, CardioError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(CardioError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
