use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Age assumed when the intake form leaves it blank.
pub const DEFAULT_AGE: i32 = 40;

/// Vital signs as reported by the crew. Every field is independently optional and an absent
/// value means "not evaluated", never "normal".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    /// Heart rate in beats per minute.
    #[serde(default)]
    pub hr: Option<f64>,
    /// Free-text blood pressure, expected as `"<systolic>/<diastolic>"`.
    #[serde(default)]
    pub bp: Option<String>,
    /// Peripheral oxygen saturation in percent.
    #[serde(default)]
    pub spo2: Option<f64>,
    /// Respiratory rate in breaths per minute.
    #[serde(default)]
    pub rr: Option<f64>,
}

/// Patient presentation submitted for triage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientPresentation {
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub vitals: VitalSigns,
    #[serde(default)]
    pub age: Option<i32>,
    /// Only the presence of a non-empty label is scored; the value is not interpreted.
    #[serde(default)]
    pub trauma_type: Option<String>,
}

/// Clinical category raised by a scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryTag {
    Neuro,
    Cardiac,
    Resp,
    Trauma,
}

impl CategoryTag {
    /// Classification order. The first tag present wins.
    pub const PRIORITY: [CategoryTag; 4] = [
        CategoryTag::Neuro,
        CategoryTag::Cardiac,
        CategoryTag::Resp,
        CategoryTag::Trauma,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CategoryTag::Neuro => "neuro",
            CategoryTag::Cardiac => "cardiac",
            CategoryTag::Resp => "resp",
            CategoryTag::Trauma => "trauma",
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Points awarded by one rule, kept for audits of the final score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleContribution {
    pub rule: String,
    pub points: f64,
}

/// Running total and tags collected while the rule table is evaluated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreAccumulator {
    /// Unbounded until the aggregator clamps it.
    pub total: f64,
    pub tags: BTreeSet<CategoryTag>,
    pub contributions: Vec<RuleContribution>,
}

impl ScoreAccumulator {
    pub fn record(&mut self, rule: &str, points: f64, tag: Option<CategoryTag>) {
        self.total += points;
        if let Some(tag) = tag {
            self.tags.insert(tag);
        }
        self.contributions.push(RuleContribution {
            rule: rule.to_string(),
            points,
        });
    }

    /// Tags in classification priority order, independent of set iteration order.
    pub fn prioritized_tags(&self) -> Vec<CategoryTag> {
        CategoryTag::PRIORITY
            .into_iter()
            .filter(|tag| self.tags.contains(tag))
            .collect()
    }
}

/// Dominant emergency category reported to the receiving hospital.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmergencyType {
    #[serde(rename = "Neurological Emergency")]
    Neurological,
    #[serde(rename = "Cardiac Emergency")]
    Cardiac,
    #[serde(rename = "Respiratory Distress")]
    Respiratory,
    #[serde(rename = "Trauma")]
    Trauma,
    #[serde(rename = "General Emergency")]
    General,
}

impl EmergencyType {
    pub fn label(&self) -> &'static str {
        match self {
            EmergencyType::Neurological => "Neurological Emergency",
            EmergencyType::Cardiac => "Cardiac Emergency",
            EmergencyType::Respiratory => "Respiratory Distress",
            EmergencyType::Trauma => "Trauma",
            EmergencyType::General => "General Emergency",
        }
    }

    /// Bay and equipment preparation for the category, in display order.
    pub fn recommended_setup(&self) -> &'static [&'static str] {
        match self {
            EmergencyType::Neurological => &["CT-ready bay", "Airway kit", "Seizure protocol meds"],
            EmergencyType::Cardiac => &["ECG", "Defib ready", "Troponin kit", "Oxygen"],
            EmergencyType::Respiratory => &["Oxygen", "Nebulizer", "Ventilation support"],
            EmergencyType::Trauma => &["Trauma bay", "Blood products standby", "FAST ultrasound"],
            EmergencyType::General => &["Triage bay", "IV access", "Basic labs"],
        }
    }
}

impl From<Option<CategoryTag>> for EmergencyType {
    fn from(tag: Option<CategoryTag>) -> Self {
        match tag {
            Some(CategoryTag::Neuro) => EmergencyType::Neurological,
            Some(CategoryTag::Cardiac) => EmergencyType::Cardiac,
            Some(CategoryTag::Resp) => EmergencyType::Respiratory,
            Some(CategoryTag::Trauma) => EmergencyType::Trauma,
            None => EmergencyType::General,
        }
    }
}

impl fmt::Display for EmergencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse severity band derived from the urgency score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmergencyClass {
    Low,
    Medium,
    High,
}

impl EmergencyClass {
    pub fn label(&self) -> &'static str {
        match self {
            EmergencyClass::Low => "low",
            EmergencyClass::Medium => "medium",
            EmergencyClass::High => "high",
        }
    }
}

impl fmt::Display for EmergencyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Placeholder routing suggestion; not backed by facility capacity data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalRouting {
    pub hospital_code: String,
    pub rationale: String,
}

/// Resolved tags and the audit trail behind the recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupDetails {
    pub tags: Vec<CategoryTag>,
    pub contributions: Vec<RuleContribution>,
    /// Normalized symptoms echoed back for debugging.
    pub symptoms: Vec<String>,
}

/// Urgency assessment returned for a presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageResult {
    pub emergency_type: EmergencyType,
    pub probability: f64,
    pub recommended_setup: Vec<String>,
    pub urgency_score: f64,
    pub emergency_class: EmergencyClass,
    pub confidence: f64,
    pub recommended_setup_details: SetupDetails,
    pub hospital_routing: HospitalRouting,
}
