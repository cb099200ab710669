pub mod rules;

use crate::error::CardioError;
use crate::types::assessment::{FactorContribution, RiskAssessment};
use crate::types::profile::HealthProfile;
use rules::RuleTable;

/// Scores `profile` against the canonical rule table.
pub fn score(profile: &HealthProfile) -> Result<RiskAssessment, CardioError> {
    score_with(&rules::CANONICAL, profile)
}

/// Scores `profile` against `table`.
///
/// Pure: no I/O, no logging, no shared state. Preconditions are checked
/// before any arithmetic, so a rejected profile never yields a partial
/// assessment.
pub fn score_with(
    table: &RuleTable,
    profile: &HealthProfile,
) -> Result<RiskAssessment, CardioError> {
    profile.validate()?;

    let mut total = table.baseline;
    let mut factors = Vec::with_capacity(table.rules.len());
    let mut recommendations: Vec<String> = Vec::new();

    for rule in table.rules {
        let contribution = rule.contribution(profile);
        total += contribution;
        if rule.records(contribution) {
            factors.push(FactorContribution::new(rule.name, contribution));
        }
        if let Some(text) = rule.advise(profile) {
            push_distinct(&mut recommendations, text);
        }
    }

    factors.sort_by(|a, b| b.signed_impact.abs().total_cmp(&a.signed_impact.abs()));
    factors.truncate(table.max_factors);

    for filler in table.fillers {
        if recommendations.len() >= table.min_recommendations {
            break;
        }
        push_distinct(&mut recommendations, filler);
    }
    recommendations.truncate(table.max_recommendations);

    Ok(RiskAssessment {
        risk_score: total.clamp(0.0, 100.0).round() as u8,
        top_factors: factors,
        recommendations,
        model_label: table.model_label.to_string(),
    })
}

fn push_distinct(recommendations: &mut Vec<String>, text: &str) {
    if !recommendations.iter().any(|existing| existing == text) {
        recommendations.push(text.to_string());
    }
}
