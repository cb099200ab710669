use crate::error::{CardioError, Result};
use crate::types::profile::HealthProfile;
use std::ops::RangeInclusive;
use std::path::Path;

/// Slider ranges offered by the intake form.
pub mod form_ranges {
    use std::ops::RangeInclusive;

    pub const AGE: RangeInclusive<u32> = 18..=100;
    pub const HEIGHT_CM: RangeInclusive<f64> = 140.0..=220.0;
    pub const WEIGHT_KG: RangeInclusive<f64> = 40.0..=150.0;
    pub const SYSTOLIC_BP: RangeInclusive<f64> = 90.0..=200.0;
    pub const DIASTOLIC_BP: RangeInclusive<f64> = 60.0..=130.0;
}

pub fn load_profile(path: &Path, enforce_form_ranges: bool) -> Result<HealthProfile> {
    if !path.exists() {
        return Err(CardioError::ProfileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let profile = match extension.as_deref() {
        Some("toml") => toml::from_str::<HealthProfile>(&content)
            .map_err(|e| CardioError::ProfileParse(format!("{}: {}", path.display(), e)))?,
        Some("json") => serde_json::from_str::<HealthProfile>(&content)
            .map_err(|e| CardioError::ProfileParse(format!("{}: {}", path.display(), e)))?,
        _ => {
            return Err(CardioError::UnsupportedProfileFormat(
                path.display().to_string(),
            ))
        }
    };
    tracing::debug!(path = %path.display(), ?profile, "loaded health profile");

    if enforce_form_ranges {
        check_form_ranges(&profile)?;
    }
    Ok(profile)
}

pub fn check_form_ranges(profile: &HealthProfile) -> Result<()> {
    if !form_ranges::AGE.contains(&profile.age) {
        return Err(out_of_range("age", f64::from(profile.age), &to_f64(&form_ranges::AGE)));
    }
    for (field, value, range) in [
        ("height_cm", profile.height_cm, form_ranges::HEIGHT_CM),
        ("weight_kg", profile.weight_kg, form_ranges::WEIGHT_KG),
        ("systolic_bp", profile.systolic_bp, form_ranges::SYSTOLIC_BP),
        ("diastolic_bp", profile.diastolic_bp, form_ranges::DIASTOLIC_BP),
    ] {
        if !range.contains(&value) {
            return Err(out_of_range(field, value, &range));
        }
    }
    Ok(())
}

fn to_f64(range: &RangeInclusive<u32>) -> RangeInclusive<f64> {
    f64::from(*range.start())..=f64::from(*range.end())
}

fn out_of_range(field: &str, value: f64, range: &RangeInclusive<f64>) -> CardioError {
    CardioError::InvalidInput(format!(
        "{field} = {value} is outside the form range {}..={}",
        range.start(),
        range.end()
    ))
}
