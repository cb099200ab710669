use super::AssessmentReport;
use crate::engine::rules::{Recording, Response, RuleTable, Trigger};
use crate::types::assessment::Direction;

const DISCLAIMER: &str =
    "For educational and demonstration purposes only. Not intended for medical diagnosis.";

pub fn to_markdown(report: &AssessmentReport<'_>) -> String {
    let assessment = report.assessment;
    let mut output = String::new();
    output.push_str("# Cardiovascular Risk Assessment\n\n");
    output.push_str(&format!(
        "Risk score: {}/100 ({})\n\n",
        assessment.risk_score,
        report.band.label()
    ));
    output.push_str(&format!("{}\n\n", report.band.description()));
    if let Some(bmi) = report.bmi {
        output.push_str(&format!("BMI: {bmi:.1}\n\n"));
    }

    output.push_str("## Contributing Factors\n\n");
    if assessment.top_factors.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for factor in &assessment.top_factors {
            let arrow = match factor.direction {
                Direction::IncreasesRisk => "increases risk",
                Direction::DecreasesRisk => "decreases risk",
            };
            output.push_str(&format!(
                "- {}: {:+.2} ({})\n",
                factor.name, factor.signed_impact, arrow
            ));
        }
        output.push('\n');
    }

    output.push_str("## Recommendations\n\n");
    if assessment.recommendations.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for recommendation in &assessment.recommendations {
            output.push_str(&format!("- {recommendation}\n"));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Model: {} (rules {})\n\n",
        assessment.model_label, report.ruleset_version
    ));
    output.push_str(&format!("_{DISCLAIMER}_\n"));
    output
}

pub fn rules_to_markdown(table: &RuleTable) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Rule Table {}\n\n", table.version));
    output.push_str(&format!("Model: {}\n\n", table.model_label));
    output.push_str(&format!("Baseline score: {}\n\n", table.baseline));
    output.push_str("## Factors\n\n");
    for rule in table.rules {
        let response = match rule.response {
            Response::Linear {
                measure,
                pivot,
                weight,
            } => format!("({measure:?} - {pivot}) x {weight}"),
            Response::Graded {
                measure,
                normal,
                above_normal,
                well_above_normal,
            } => format!(
                "{measure:?}: normal {normal:+}, above normal {above_normal:+}, well above normal {well_above_normal:+}"
            ),
            Response::Flag {
                measure,
                when_true,
                when_false,
            } => format!("{measure:?}: yes {when_true:+}, no {when_false:+}"),
        };
        let recording = match rule.recording {
            Recording::Always => "always recorded",
            Recording::WhenNonZero => "recorded when nonzero",
        };
        output.push_str(&format!("- {}: {} ({})\n", rule.name, response, recording));
        if let Some(advisory) = rule.advisory {
            let trigger = match advisory.trigger {
                Trigger::Above(bound) => format!("above {bound}"),
                Trigger::Elevated => "above normal".to_string(),
                Trigger::FlagIs(true) => "when yes".to_string(),
                Trigger::FlagIs(false) => "when no".to_string(),
            };
            output.push_str(&format!("  - advise {}: {}\n", trigger, advisory.text));
        }
    }
    output.push_str(&format!(
        "\nTop {} factors by absolute impact; {} to {} recommendations.\n",
        table.max_factors, table.min_recommendations, table.max_recommendations
    ));
    output
}
