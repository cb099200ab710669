use super::AssessmentReport;
use chrono::Utc;
use serde_json::json;

pub fn to_json(report: &AssessmentReport<'_>) -> Result<String, serde_json::Error> {
    let envelope = json!({
        "tool": "cardiorisk",
        "version": env!("CARGO_PKG_VERSION"),
        "ruleset_version": report.ruleset_version,
        "generated_at": Utc::now().to_rfc3339(),
        "band": report.band,
        "band_label": report.band.label(),
        "band_description": report.band.description(),
        "bmi": report.bmi,
        "assessment": report.assessment,
    });
    serde_json::to_string_pretty(&envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::assessment::{FactorContribution, RiskAssessment, RiskBand};

    #[test]
    fn json_report_contains_score_band_and_factors() {
        let assessment = RiskAssessment {
            risk_score: 42,
            top_factors: vec![FactorContribution::new("Smoking Status", 15.0)],
            recommendations: vec!["Quit smoking.".to_string()],
            model_label: "Rule-Based Clinical Heuristics (Calibrated)".to_string(),
        };
        let report = AssessmentReport {
            assessment: &assessment,
            band: RiskBand::Moderate,
            ruleset_version: "2024.1",
            bmi: Some(24.2),
        };

        let rendered = to_json(&report).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(value["assessment"]["risk_score"], 42);
        assert_eq!(value["band"], "moderate");
        assert_eq!(value["band_label"], "Moderate Risk");
        assert_eq!(
            value["band_description"],
            "Some health indicators suggest room for improvement."
        );
        assert_eq!(value["ruleset_version"], "2024.1");
        assert_eq!(
            value["assessment"]["top_factors"][0]["direction"],
            "increases_risk"
        );
        assert!(value["generated_at"].is_string());
    }
}
