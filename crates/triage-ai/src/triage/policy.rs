use super::domain::{
    CategoryTag, EmergencyClass, EmergencyType, HospitalRouting, ScoreAccumulator, SetupDetails,
    TriageResult,
};

pub const HIGH_CLASS_THRESHOLD: f64 = 70.0;
pub const MEDIUM_CLASS_THRESHOLD: f64 = 40.0;
pub const PRIMARY_ROUTING_THRESHOLD: f64 = 60.0;
pub const PRIMARY_HOSPITAL: &str = "HOSP-001";
pub const SECONDARY_HOSPITAL: &str = "HOSP-002";
pub const ROUTING_RATIONALE: &str = "Nearest ER with capability for predicted class (demo).";

/// First tag present in priority order, regardless of how many fired.
pub fn dominant_tag(accumulator: &ScoreAccumulator) -> Option<CategoryTag> {
    CategoryTag::PRIORITY
        .into_iter()
        .find(|tag| accumulator.tags.contains(tag))
}

pub fn emergency_class(urgency: f64) -> EmergencyClass {
    if urgency >= HIGH_CLASS_THRESHOLD {
        EmergencyClass::High
    } else if urgency >= MEDIUM_CLASS_THRESHOLD {
        EmergencyClass::Medium
    } else {
        EmergencyClass::Low
    }
}

/// Grows with distance from the midpoint score, within `[0.5, 0.95]`.
pub fn confidence(urgency: f64) -> f64 {
    (0.5 + (urgency - 50.0).abs() / 100.0).min(0.95).max(0.5)
}

pub fn hospital_routing(urgency: f64) -> HospitalRouting {
    let hospital_code = if urgency >= PRIMARY_ROUTING_THRESHOLD {
        PRIMARY_HOSPITAL
    } else {
        SECONDARY_HOSPITAL
    };

    HospitalRouting {
        hospital_code: hospital_code.to_string(),
        rationale: ROUTING_RATIONALE.to_string(),
    }
}

pub(crate) fn decide_outcome(
    urgency: f64,
    probability: f64,
    accumulator: ScoreAccumulator,
    symptoms: Vec<String>,
) -> TriageResult {
    let emergency_type = EmergencyType::from(dominant_tag(&accumulator));
    let tags = accumulator.prioritized_tags();

    TriageResult {
        emergency_type,
        probability,
        recommended_setup: emergency_type
            .recommended_setup()
            .iter()
            .map(|item| item.to_string())
            .collect(),
        urgency_score: urgency,
        emergency_class: emergency_class(urgency),
        confidence: confidence(urgency),
        recommended_setup_details: SetupDetails {
            tags,
            contributions: accumulator.contributions,
            symptoms,
        },
        hospital_routing: hospital_routing(urgency),
    }
}
