use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    IncreasesRisk,
    DecreasesRisk,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorContribution {
    pub name: String,
    pub signed_impact: f64,
    pub direction: Direction,
}

impl FactorContribution {
    pub fn new(name: impl Into<String>, signed_impact: f64) -> Self {
        let direction = if signed_impact > 0.0 {
            Direction::IncreasesRisk
        } else {
            Direction::DecreasesRisk
        };
        Self {
            name: name.into(),
            signed_impact,
            direction,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_score: u8,
    pub top_factors: Vec<FactorContribution>,
    pub recommendations: Vec<String>,
    pub model_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskBand {
    pub fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "Low Risk",
            RiskBand::Moderate => "Moderate Risk",
            RiskBand::High => "High Risk",
            RiskBand::Critical => "Critical Risk",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RiskBand::Low => "Your cardiovascular health indicators are within healthy ranges.",
            RiskBand::Moderate => "Some health indicators suggest room for improvement.",
            RiskBand::High => {
                "Multiple risk factors detected. Consider consulting a healthcare provider."
            }
            RiskBand::Critical => {
                "Significant cardiovascular risk factors present. Seek medical attention."
            }
        }
    }

    pub fn is_elevated(self) -> bool {
        matches!(self, RiskBand::High | RiskBand::Critical)
    }
}

/// Lower bounds (inclusive) of the moderate, high and critical bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandThresholds {
    pub moderate: u8,
    pub high: u8,
    pub critical: u8,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            moderate: 25,
            high: 50,
            critical: 75,
        }
    }
}

impl BandThresholds {
    pub fn classify(&self, score: u8) -> RiskBand {
        if score < self.moderate {
            RiskBand::Low
        } else if score < self.high {
            RiskBand::Moderate
        } else if score < self.critical {
            RiskBand::High
        } else {
            RiskBand::Critical
        }
    }
}
