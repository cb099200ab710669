//! The canonical rule table for the additive cardiovascular risk heuristic.
//!
//! Every weight, recording policy and advisory lives here as data; the
//! engine only walks the table.

use crate::types::profile::{HealthProfile, Level};

/// Continuous measurements scored by a linear response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearMeasure {
    Age,
    Bmi,
    SystolicBp,
}

impl LinearMeasure {
    pub fn read(self, profile: &HealthProfile) -> f64 {
        match self {
            LinearMeasure::Age => f64::from(profile.age),
            LinearMeasure::Bmi => profile.bmi(),
            LinearMeasure::SystolicBp => profile.systolic_bp,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradedMeasure {
    Cholesterol,
    Glucose,
}

impl GradedMeasure {
    pub fn read(self, profile: &HealthProfile) -> Level {
        match self {
            GradedMeasure::Cholesterol => profile.cholesterol,
            GradedMeasure::Glucose => profile.glucose,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagMeasure {
    Smokes,
    DrinksAlcohol,
    PhysicallyActive,
}

impl FlagMeasure {
    pub fn read(self, profile: &HealthProfile) -> bool {
        match self {
            FlagMeasure::Smokes => profile.smokes,
            FlagMeasure::DrinksAlcohol => profile.drinks_alcohol,
            FlagMeasure::PhysicallyActive => profile.physically_active,
        }
    }
}

/// How a measurement turns into a signed score contribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response {
    /// `(value - pivot) * weight`
    Linear {
        measure: LinearMeasure,
        pivot: f64,
        weight: f64,
    },
    Graded {
        measure: GradedMeasure,
        normal: f64,
        above_normal: f64,
        well_above_normal: f64,
    },
    Flag {
        measure: FlagMeasure,
        when_true: f64,
        when_false: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recording {
    Always,
    WhenNonZero,
}

/// Condition under which a rule emits its advisory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Linear measurement strictly above the bound.
    Above(f64),
    /// Graded measurement anywhere above normal.
    Elevated,
    /// Flag measurement equal to the given value.
    FlagIs(bool),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advisory {
    pub trigger: Trigger,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorRule {
    pub name: &'static str,
    pub response: Response,
    pub recording: Recording,
    pub advisory: Option<Advisory>,
}

impl FactorRule {
    pub fn contribution(&self, profile: &HealthProfile) -> f64 {
        match self.response {
            Response::Linear {
                measure,
                pivot,
                weight,
            } => (measure.read(profile) - pivot) * weight,
            Response::Graded {
                measure,
                normal,
                above_normal,
                well_above_normal,
            } => match measure.read(profile) {
                Level::Normal => normal,
                Level::AboveNormal => above_normal,
                Level::WellAboveNormal => well_above_normal,
            },
            Response::Flag {
                measure,
                when_true,
                when_false,
            } => {
                if measure.read(profile) {
                    when_true
                } else {
                    when_false
                }
            }
        }
    }

    pub fn records(&self, contribution: f64) -> bool {
        match self.recording {
            Recording::Always => true,
            Recording::WhenNonZero => contribution != 0.0,
        }
    }

    /// Advisory text when this rule's trigger fires for `profile`.
    ///
    /// A trigger that does not match the response kind never fires.
    pub fn advise(&self, profile: &HealthProfile) -> Option<&'static str> {
        let advisory = self.advisory?;
        let fired = match (advisory.trigger, self.response) {
            (Trigger::Above(bound), Response::Linear { measure, .. }) => {
                measure.read(profile) > bound
            }
            (Trigger::Elevated, Response::Graded { measure, .. }) => {
                !measure.read(profile).is_normal()
            }
            (Trigger::FlagIs(expected), Response::Flag { measure, .. }) => {
                measure.read(profile) == expected
            }
            _ => false,
        };
        fired.then_some(advisory.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleTable {
    pub version: &'static str,
    pub model_label: &'static str,
    pub baseline: f64,
    pub max_factors: usize,
    pub min_recommendations: usize,
    pub max_recommendations: usize,
    pub fillers: &'static [&'static str],
    pub rules: &'static [FactorRule],
}

pub const CANONICAL: RuleTable = RuleTable {
    version: "2024.1",
    model_label: "Rule-Based Clinical Heuristics (Calibrated)",
    baseline: 30.0,
    max_factors: 6,
    min_recommendations: 2,
    max_recommendations: 5,
    fillers: &[
        "Continue maintaining your healthy lifestyle habits.",
        "Schedule regular check-ups with your healthcare provider.",
    ],
    rules: &[
        FactorRule {
            name: "Age",
            response: Response::Linear {
                measure: LinearMeasure::Age,
                pivot: 50.0,
                weight: 0.8,
            },
            recording: Recording::Always,
            advisory: None,
        },
        FactorRule {
            name: "BMI",
            response: Response::Linear {
                measure: LinearMeasure::Bmi,
                pivot: 25.0,
                weight: 1.5,
            },
            recording: Recording::Always,
            advisory: Some(Advisory {
                trigger: Trigger::Above(30.0),
                text: "Work towards a healthy weight through balanced nutrition and regular exercise.",
            }),
        },
        FactorRule {
            name: "Systolic BP",
            response: Response::Linear {
                measure: LinearMeasure::SystolicBp,
                pivot: 120.0,
                weight: 0.5,
            },
            recording: Recording::Always,
            advisory: Some(Advisory {
                trigger: Trigger::Above(130.0),
                text: "Consider reducing sodium intake and increasing physical activity to help lower blood pressure.",
            }),
        },
        FactorRule {
            name: "Cholesterol Levels",
            response: Response::Graded {
                measure: GradedMeasure::Cholesterol,
                normal: -5.0,
                above_normal: 10.0,
                well_above_normal: 20.0,
            },
            recording: Recording::Always,
            advisory: Some(Advisory {
                trigger: Trigger::Elevated,
                text: "Focus on heart-healthy foods rich in omega-3 fatty acids and fiber.",
            }),
        },
        FactorRule {
            name: "Glucose Levels",
            response: Response::Graded {
                measure: GradedMeasure::Glucose,
                normal: -5.0,
                above_normal: 8.0,
                well_above_normal: 15.0,
            },
            recording: Recording::Always,
            advisory: Some(Advisory {
                trigger: Trigger::Elevated,
                text: "Reduce sugar intake and monitor blood glucose levels.",
            }),
        },
        FactorRule {
            name: "Smoking Status",
            response: Response::Flag {
                measure: FlagMeasure::Smokes,
                when_true: 15.0,
                when_false: -5.0,
            },
            recording: Recording::Always,
            advisory: Some(Advisory {
                trigger: Trigger::FlagIs(true),
                text: "Quitting smoking is the single most effective way to reduce your cardiovascular risk.",
            }),
        },
        FactorRule {
            name: "Alcohol Consumption",
            response: Response::Flag {
                measure: FlagMeasure::DrinksAlcohol,
                when_true: 5.0,
                when_false: 0.0,
            },
            recording: Recording::WhenNonZero,
            advisory: Some(Advisory {
                trigger: Trigger::FlagIs(true),
                text: "Moderating alcohol intake can improve heart health.",
            }),
        },
        FactorRule {
            name: "Physical Activity",
            response: Response::Flag {
                measure: FlagMeasure::PhysicallyActive,
                when_true: -10.0,
                when_false: 10.0,
            },
            recording: Recording::Always,
            advisory: Some(Advisory {
                trigger: Trigger::FlagIs(false),
                text: "Aim for at least 150 minutes of moderate aerobic activity per week.",
            }),
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::profile::HealthProfile;
    use std::collections::HashSet;

    fn rule(name: &str) -> &'static FactorRule {
        CANONICAL
            .rules
            .iter()
            .find(|rule| rule.name == name)
            .expect("rule should exist")
    }

    #[test]
    fn rule_names_are_unique() {
        let names = CANONICAL
            .rules
            .iter()
            .map(|rule| rule.name)
            .collect::<HashSet<_>>();
        assert_eq!(names.len(), CANONICAL.rules.len());
    }

    #[test]
    fn every_advisory_trigger_matches_its_response_kind() {
        for rule in CANONICAL.rules {
            let Some(advisory) = rule.advisory else {
                continue;
            };
            let compatible = matches!(
                (advisory.trigger, rule.response),
                (Trigger::Above(_), Response::Linear { .. })
                    | (Trigger::Elevated, Response::Graded { .. })
                    | (Trigger::FlagIs(_), Response::Flag { .. })
            );
            assert!(compatible, "{} has a mismatched trigger", rule.name);
        }
    }

    #[test]
    fn linear_contribution_is_offset_from_pivot() {
        let profile = HealthProfile {
            age: 60,
            ..HealthProfile::default()
        };
        assert!((rule("Age").contribution(&profile) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn graded_contribution_follows_level() {
        let profile = HealthProfile {
            glucose: Level::AboveNormal,
            ..HealthProfile::default()
        };
        assert_eq!(rule("Glucose Levels").contribution(&profile), 8.0);
        assert_eq!(rule("Cholesterol Levels").contribution(&profile), -5.0);
    }

    #[test]
    fn alcohol_is_recorded_only_when_nonzero() {
        let alcohol = rule("Alcohol Consumption");
        assert!(!alcohol.records(0.0));
        assert!(alcohol.records(5.0));
        assert!(rule("Age").records(0.0));
    }

    #[test]
    fn advisory_thresholds_are_strict() {
        let at_bound = HealthProfile {
            systolic_bp: 130.0,
            ..HealthProfile::default()
        };
        let above_bound = HealthProfile {
            systolic_bp: 131.0,
            ..HealthProfile::default()
        };
        assert_eq!(rule("Systolic BP").advise(&at_bound), None);
        assert!(rule("Systolic BP").advise(&above_bound).is_some());
    }

    #[test]
    fn inactivity_triggers_activity_advisory() {
        let inactive = HealthProfile {
            physically_active: false,
            ..HealthProfile::default()
        };
        assert!(rule("Physical Activity").advise(&inactive).is_some());
        assert_eq!(rule("Physical Activity").advise(&HealthProfile::default()), None);
        assert_eq!(rule("Age").advise(&inactive), None);
    }
}
