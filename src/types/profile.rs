use crate::error::CardioError;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "CodeOrName")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Wire code used by the prediction service (1 = female, 2 = male).
    pub fn code(self) -> u8 {
        match self {
            Sex::Female => 1,
            Sex::Male => 2,
        }
    }
}

impl TryFrom<CodeOrName> for Sex {
    type Error = String;

    fn try_from(value: CodeOrName) -> Result<Self, Self::Error> {
        match value {
            CodeOrName::Code(1) => Ok(Sex::Female),
            CodeOrName::Code(2) => Ok(Sex::Male),
            CodeOrName::Code(other) => Err(format!("sex code must be 1 or 2, got {other}")),
            CodeOrName::Name(name) => match normalize(&name).as_str() {
                "female" | "f" => Ok(Sex::Female),
                "male" | "m" => Ok(Sex::Male),
                _ => Err(format!("unknown sex: {name}")),
            },
        }
    }
}

/// Graded laboratory reading used for both cholesterol and glucose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "CodeOrName")]
pub enum Level {
    Normal,
    AboveNormal,
    WellAboveNormal,
}

impl Level {
    pub fn code(self) -> u8 {
        match self {
            Level::Normal => 1,
            Level::AboveNormal => 2,
            Level::WellAboveNormal => 3,
        }
    }

    pub fn is_normal(self) -> bool {
        matches!(self, Level::Normal)
    }
}

impl TryFrom<CodeOrName> for Level {
    type Error = String;

    fn try_from(value: CodeOrName) -> Result<Self, Self::Error> {
        match value {
            CodeOrName::Code(1) => Ok(Level::Normal),
            CodeOrName::Code(2) => Ok(Level::AboveNormal),
            CodeOrName::Code(3) => Ok(Level::WellAboveNormal),
            CodeOrName::Code(other) => Err(format!("level code must be 1, 2 or 3, got {other}")),
            CodeOrName::Name(name) => match normalize(&name).as_str() {
                "normal" => Ok(Level::Normal),
                "abovenormal" => Ok(Level::AboveNormal),
                "wellabovenormal" => Ok(Level::WellAboveNormal),
                _ => Err(format!("unknown level: {name}")),
            },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
pub enum CodeOrName {
    Code(u8),
    Name(String),
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Code(u8),
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match FlagRepr::deserialize(deserializer)? {
        FlagRepr::Bool(flag) => Ok(flag),
        FlagRepr::Code(0) => Ok(false),
        FlagRepr::Code(1) => Ok(true),
        FlagRepr::Code(other) => Err(serde::de::Error::custom(format!(
            "flag must be true/false or 0/1, got {other}"
        ))),
    }
}

/// Health measurements collected by the intake form.
///
/// Field names follow this crate's snake_case convention; aliases accept the
/// names used by the web form and the prediction service payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthProfile {
    pub age: u32,
    #[serde(alias = "gender", alias = "biological_sex")]
    pub sex: Sex,
    #[serde(alias = "height")]
    pub height_cm: f64,
    #[serde(alias = "weight")]
    pub weight_kg: f64,
    #[serde(alias = "systolicBP", alias = "ap_hi")]
    pub systolic_bp: f64,
    #[serde(alias = "diastolicBP", alias = "ap_lo")]
    pub diastolic_bp: f64,
    #[serde(alias = "cholesterol_level")]
    pub cholesterol: Level,
    #[serde(alias = "gluc", alias = "glucose_level")]
    pub glucose: Level,
    #[serde(alias = "smoke", deserialize_with = "deserialize_flag")]
    pub smokes: bool,
    #[serde(alias = "alco", deserialize_with = "deserialize_flag")]
    pub drinks_alcohol: bool,
    #[serde(alias = "active", deserialize_with = "deserialize_flag")]
    pub physically_active: bool,
}

impl Default for HealthProfile {
    fn default() -> Self {
        Self {
            age: 50,
            sex: Sex::Female,
            height_cm: 165.0,
            weight_kg: 70.0,
            systolic_bp: 120.0,
            diastolic_bp: 80.0,
            cholesterol: Level::Normal,
            glucose: Level::Normal,
            smokes: false,
            drinks_alcohol: false,
            physically_active: true,
        }
    }
}

impl HealthProfile {
    /// Body mass index. Callers must have checked `height_cm > 0`.
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }

    /// Rejects measurements nothing downstream can divide by or score.
    ///
    /// Height and weight must be positive and finite; blood pressure readings
    /// must be finite and non-negative.
    pub fn validate(&self) -> Result<(), CardioError> {
        if !(self.height_cm.is_finite() && self.height_cm > 0.0) {
            return Err(CardioError::InvalidInput(format!(
                "height_cm must be a positive number (got {})",
                self.height_cm
            )));
        }
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(CardioError::InvalidInput(format!(
                "weight_kg must be a positive number (got {})",
                self.weight_kg
            )));
        }
        for (field, value) in [
            ("systolic_bp", self.systolic_bp),
            ("diastolic_bp", self.diastolic_bp),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(CardioError::InvalidInput(format!(
                    "{field} must be a non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }

    /// BMI rounded to one decimal, as shown next to the intake form.
    pub fn display_bmi(&self) -> Option<f64> {
        if self.height_cm > 0.0 && self.height_cm.is_finite() {
            Some((self.bmi() * 10.0).round() / 10.0)
        } else {
            None
        }
    }
}
