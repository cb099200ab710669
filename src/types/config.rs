use crate::error::CardioError;
use crate::types::assessment::BandThresholds;
use serde::Deserialize;

pub const DEFAULT_REMOTE_MODEL_LABEL: &str = "Gradient Boosting (Remote Service)";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardioConfig {
    pub intake: Option<IntakeConfig>,
    pub report: Option<ReportConfig>,
    pub remote: Option<RemoteConfig>,
    pub bands: Option<BandsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntakeConfig {
    #[serde(default)]
    pub enforce_form_ranges: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    pub model_label: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BandsConfig {
    pub moderate: Option<u8>,
    pub high: Option<u8>,
    pub critical: Option<u8>,
}

impl CardioConfig {
    pub fn enforce_form_ranges(&self) -> bool {
        self.intake
            .as_ref()
            .map(|intake| intake.enforce_form_ranges)
            .unwrap_or(false)
    }

    pub fn report_format(&self) -> Option<&str> {
        self.report
            .as_ref()
            .and_then(|report| report.format.as_deref())
    }

    pub fn remote_model_label(&self) -> &str {
        self.remote
            .as_ref()
            .and_then(|remote| remote.model_label.as_deref())
            .unwrap_or(DEFAULT_REMOTE_MODEL_LABEL)
    }

    pub fn band_thresholds(&self) -> BandThresholds {
        let defaults = BandThresholds::default();
        match &self.bands {
            Some(bands) => BandThresholds {
                moderate: bands.moderate.unwrap_or(defaults.moderate),
                high: bands.high.unwrap_or(defaults.high),
                critical: bands.critical.unwrap_or(defaults.critical),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), CardioError> {
        if let Some(format) = self.report_format() {
            if !matches!(format, "json" | "md") {
                return Err(CardioError::ConfigParse(format!(
                    "unsupported report.format: {format}"
                )));
            }
        }

        if let Some(label) = self
            .remote
            .as_ref()
            .and_then(|remote| remote.model_label.as_ref())
        {
            if label.trim().is_empty() {
                return Err(CardioError::ConfigParse(
                    "remote.model_label cannot be empty".to_string(),
                ));
            }
        }

        let bands = self.band_thresholds();
        if [bands.moderate, bands.high, bands.critical]
            .iter()
            .any(|threshold| *threshold > 100)
        {
            return Err(CardioError::ConfigParse(
                "bands thresholds must be between 0 and 100".to_string(),
            ));
        }
        if !(bands.moderate < bands.high && bands.high < bands.critical) {
            return Err(CardioError::ConfigParse(format!(
                "bands must be strictly ascending (found moderate={}, high={}, critical={})",
                bands.moderate, bands.high, bands.critical
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config_uses_defaults() {
        let cfg: CardioConfig = toml::from_str("").expect("empty config should parse");
        assert!(!cfg.enforce_form_ranges());
        assert_eq!(cfg.report_format(), None);
        assert_eq!(cfg.remote_model_label(), DEFAULT_REMOTE_MODEL_LABEL);
        assert_eq!(cfg.band_thresholds(), BandThresholds::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[intake]
enforce_form_ranges = true

[report]
format = "json"

[remote]
model_label = "Clinic Model v3"

[bands]
moderate = 20
high = 40
critical = 80
"#;
        let cfg: CardioConfig = toml::from_str(toml_str).expect("full config should parse");
        assert!(cfg.enforce_form_ranges());
        assert_eq!(cfg.report_format(), Some("json"));
        assert_eq!(cfg.remote_model_label(), "Clinic Model v3");
        assert_eq!(
            cfg.band_thresholds(),
            BandThresholds {
                moderate: 20,
                high: 40,
                critical: 80,
            }
        );
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_bands_fall_back_per_threshold() {
        let cfg: CardioConfig =
            toml::from_str("[bands]\nhigh = 60\n").expect("config should parse");
        let bands = cfg.band_thresholds();
        assert_eq!(bands.moderate, 25);
        assert_eq!(bands.high, 60);
        assert_eq!(bands.critical, 75);
    }

    #[test]
    fn validate_rejects_unknown_report_format() {
        let cfg: CardioConfig =
            toml::from_str("[report]\nformat = \"sarif\"\n").expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unsupported report.format"));
    }

    #[test]
    fn validate_rejects_non_ascending_bands() {
        let cfg: CardioConfig = toml::from_str("[bands]\nmoderate = 50\nhigh = 50\n")
            .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("strictly ascending"));
    }

    #[test]
    fn validate_rejects_band_above_hundred() {
        let cfg: CardioConfig =
            toml::from_str("[bands]\ncritical = 120\n").expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("between 0 and 100"));
    }

    #[test]
    fn validate_rejects_blank_remote_label() {
        let cfg: CardioConfig =
            toml::from_str("[remote]\nmodel_label = \"  \"\n").expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("remote.model_label"));
    }
}
