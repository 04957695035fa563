use serde::{Deserialize, Serialize};

use super::domain::CategoryTag;

/// Vital sign a cascade reads from the normalized presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalKind {
    HeartRate,
    Spo2,
    RespiratoryRate,
    Systolic,
    Diastolic,
}

/// Comparison applied to a measured value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum Threshold {
    AtLeast(f64),
    AtMost(f64),
    Above(f64),
    Below(f64),
}

impl Threshold {
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Threshold::AtLeast(bound) => value >= bound,
            Threshold::AtMost(bound) => value <= bound,
            Threshold::Above(bound) => value > bound,
            Threshold::Below(bound) => value < bound,
        }
    }
}

/// Additive rule firing when any listed phrase was reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomRule {
    pub name: String,
    pub any_of: Vec<String>,
    pub points: f64,
    pub tag: CategoryTag,
}

/// Additive rule firing when a trauma context is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraumaRule {
    pub name: String,
    pub points: f64,
    pub tag: CategoryTag,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalTier {
    pub name: String,
    pub bound: Threshold,
    pub points: f64,
}

/// Severity tiers for one vital, most severe first. Only the first matching tier scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalCascade {
    pub vital: VitalKind,
    pub tiers: Vec<VitalTier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeRule {
    pub name: String,
    pub bound: Threshold,
    pub points: f64,
}

/// Ordered, inspectable scoring table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    pub symptom_rules: Vec<SymptomRule>,
    pub trauma_rule: TraumaRule,
    pub vital_cascades: Vec<VitalCascade>,
    pub age_rules: Vec<AgeRule>,
}

impl RuleTable {
    /// Red-flag table used by ambulance intake.
    pub fn standard() -> Self {
        Self {
            symptom_rules: vec![
                symptom_rule(
                    "cardiac_red_flag",
                    &["chest pain", "pressure chest"],
                    25.0,
                    CategoryTag::Cardiac,
                ),
                symptom_rule(
                    "respiratory_red_flag",
                    &["shortness of breath", "breathless"],
                    20.0,
                    CategoryTag::Resp,
                ),
                symptom_rule(
                    "neuro_red_flag",
                    &["unconscious", "seizure"],
                    30.0,
                    CategoryTag::Neuro,
                ),
            ],
            trauma_rule: TraumaRule {
                name: "trauma_context".to_string(),
                points: 15.0,
                tag: CategoryTag::Trauma,
            },
            vital_cascades: vec![
                VitalCascade {
                    vital: VitalKind::HeartRate,
                    tiers: vec![
                        tier("severe_tachycardia", Threshold::AtLeast(130.0), 25.0),
                        tier("tachycardia", Threshold::AtLeast(110.0), 15.0),
                        tier("bradycardia", Threshold::AtMost(45.0), 20.0),
                    ],
                },
                VitalCascade {
                    vital: VitalKind::Spo2,
                    tiers: vec![
                        tier("severe_hypoxia", Threshold::Below(90.0), 30.0),
                        tier("hypoxia", Threshold::Below(94.0), 15.0),
                    ],
                },
                VitalCascade {
                    vital: VitalKind::RespiratoryRate,
                    tiers: vec![
                        tier("severe_tachypnea", Threshold::AtLeast(30.0), 20.0),
                        tier("tachypnea", Threshold::AtLeast(24.0), 10.0),
                    ],
                },
                VitalCascade {
                    vital: VitalKind::Systolic,
                    tiers: vec![
                        tier("hypotension", Threshold::Below(90.0), 30.0),
                        tier("hypertension", Threshold::Above(180.0), 15.0),
                    ],
                },
            ],
            age_rules: vec![
                AgeRule {
                    name: "elderly".to_string(),
                    bound: Threshold::AtLeast(65.0),
                    points: 10.0,
                },
                AgeRule {
                    name: "young_child".to_string(),
                    bound: Threshold::AtMost(5.0),
                    points: 10.0,
                },
            ],
        }
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn symptom_rule(name: &str, any_of: &[&str], points: f64, tag: CategoryTag) -> SymptomRule {
    SymptomRule {
        name: name.to_string(),
        any_of: any_of.iter().map(|phrase| phrase.to_string()).collect(),
        points,
        tag,
    }
}

fn tier(name: &str, bound: Threshold, points: f64) -> VitalTier {
    VitalTier {
        name: name.to_string(),
        bound,
        points,
    }
}
