//! Wire types for the remote prediction service and the merge of its answer
//! into a locally scored assessment. The HTTP transport is not part of this
//! crate; callers post [`PatientPayload`] and hand back the decoded
//! [`PredictionResponse`].

use crate::error::{CardioError, Result};
use crate::types::assessment::RiskAssessment;
use crate::types::profile::HealthProfile;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientPayload {
    pub age: u32,
    pub gender: u8,
    pub height: f64,
    pub weight: f64,
    pub ap_hi: f64,
    pub ap_lo: f64,
    pub cholesterol: u8,
    pub gluc: u8,
    pub smoke: u8,
    pub alco: u8,
    pub active: u8,
}

impl PatientPayload {
    pub fn from_profile(profile: &HealthProfile) -> Self {
        Self {
            age: profile.age,
            gender: profile.sex.code(),
            height: profile.height_cm,
            weight: profile.weight_kg,
            ap_hi: profile.systolic_bp,
            ap_lo: profile.diastolic_bp,
            cholesterol: profile.cholesterol.code(),
            gluc: profile.glucose.code(),
            smoke: u8::from(profile.smokes),
            alco: u8::from(profile.drinks_alcohol),
            active: u8::from(profile.physically_active),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: u8,
    pub probability: f64,
    pub risk_label: String,
}

/// Replaces the local score and label with the remote service's answer.
///
/// Factors and recommendations stay local: the service returns no
/// explanation of its own.
pub fn merge(
    local: RiskAssessment,
    response: &PredictionResponse,
    model_label: &str,
) -> Result<RiskAssessment> {
    if !(response.probability.is_finite() && (0.0..=1.0).contains(&response.probability)) {
        return Err(CardioError::RemoteResponse(format!(
            "probability must be within [0, 1] (got {})",
            response.probability
        )));
    }
    if response.prediction > 1 {
        return Err(CardioError::RemoteResponse(format!(
            "prediction must be 0 or 1 (got {})",
            response.prediction
        )));
    }

    tracing::info!(
        local_score = local.risk_score,
        probability = response.probability,
        label = %response.risk_label,
        "merging remote prediction"
    );
    Ok(RiskAssessment {
        risk_score: (response.probability * 100.0).round() as u8,
        model_label: model_label.to_string(),
        ..local
    })
}

pub fn parse_response(content: &str) -> Result<PredictionResponse> {
    serde_json::from_str(content).map_err(|e| CardioError::RemoteResponse(e.to_string()))
}

/// Reads a saved service response; every failure names the file.
pub fn load_response(path: &Path) -> Result<PredictionResponse> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CardioError::RemoteResponse(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| CardioError::RemoteResponse(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;
    use std::fs;
    use tempfile::TempDir;
    use crate::types::profile::{Level, Sex};

    #[test]
    fn payload_uses_service_codes() {
        let profile = HealthProfile {
            sex: Sex::Male,
            cholesterol: Level::WellAboveNormal,
            glucose: Level::AboveNormal,
            smokes: true,
            ..HealthProfile::default()
        };
        let payload = PatientPayload::from_profile(&profile);
        assert_eq!(payload.gender, 2);
        assert_eq!(payload.cholesterol, 3);
        assert_eq!(payload.gluc, 2);
        assert_eq!((payload.smoke, payload.alco, payload.active), (1, 0, 1));
        assert_eq!(payload.ap_hi, 120.0);
        assert_eq!(payload.ap_lo, 80.0);
    }

    #[test]
    fn payload_serializes_with_service_field_names() {
        let payload = PatientPayload::from_profile(&HealthProfile::default());
        let json = serde_json::to_value(&payload).expect("payload should serialize");
        assert_eq!(json["gender"], 1);
        assert_eq!(json["height"], 165.0);
        assert_eq!(json["active"], 1);
    }

    #[test]
    fn payload_round_trips_into_profile() {
        let profile = HealthProfile {
            age: 58,
            drinks_alcohol: true,
            ..HealthProfile::default()
        };
        let json = serde_json::to_string(&PatientPayload::from_profile(&profile))
            .expect("payload should serialize");
        let decoded: HealthProfile = serde_json::from_str(&json).expect("payload should parse");
        assert_eq!(decoded, profile);
    }

    #[test]
    fn merge_replaces_score_and_label_only() {
        let local = engine::score(&HealthProfile::default()).expect("profile should score");
        let response = parse_response(
            r#"{"prediction": 1, "probability": 0.6349, "risk_label": "High Risk"}"#,
        )
        .expect("response should parse");

        let merged = merge(local.clone(), &response, "Gradient Boosting").expect("merge");
        assert_eq!(merged.risk_score, 63);
        assert_eq!(merged.model_label, "Gradient Boosting");
        assert_eq!(merged.top_factors, local.top_factors);
        assert_eq!(merged.recommendations, local.recommendations);
    }

    #[test]
    fn merge_rejects_probability_outside_unit_interval() {
        let local = engine::score(&HealthProfile::default()).expect("profile should score");
        for probability in [-0.1, 1.5, f64::NAN] {
            let response = PredictionResponse {
                prediction: 0,
                probability,
                risk_label: "Low Risk".to_string(),
            };
            let err = merge(local.clone(), &response, "remote").expect_err("should reject");
            assert!(matches!(err, CardioError::RemoteResponse(_)));
        }
    }

    #[test]
    fn parse_response_rejects_missing_fields() {
        let err = parse_response(r#"{"probability": 0.2}"#).expect_err("should fail");
        assert!(matches!(err, CardioError::RemoteResponse(_)));
    }

    #[test]
    fn load_response_names_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("response.json");
        let err = load_response(&path).expect_err("missing file should fail");
        assert!(matches!(err, CardioError::RemoteResponse(_)));
        assert!(err.to_string().contains("response.json"));
    }

    #[test]
    fn load_response_names_malformed_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").expect("response should write");
        let err = load_response(&path).expect_err("malformed file should fail");
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn load_response_reads_saved_answer() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("response.json");
        fs::write(
            &path,
            r#"{"prediction": 0, "probability": 0.12, "risk_label": "Low Risk"}"#,
        )
        .expect("response should write");
        let response = load_response(&path).expect("response should load");
        assert_eq!(response.prediction, 0);
        assert_eq!(response.risk_label, "Low Risk");
    }
}
