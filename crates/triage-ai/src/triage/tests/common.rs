use axum::response::Response;
use serde_json::Value;

use crate::triage::domain::{PatientPresentation, TriageResult, VitalSigns};
use crate::triage::TriageEngine;

pub(super) fn engine() -> TriageEngine {
    TriageEngine::standard()
}

pub(super) fn presentation(symptoms: &[&str]) -> PatientPresentation {
    PatientPresentation {
        symptoms: symptoms.iter().map(|symptom| symptom.to_string()).collect(),
        ..PatientPresentation::default()
    }
}

pub(super) fn with_vitals(vitals: VitalSigns) -> PatientPresentation {
    PatientPresentation {
        vitals,
        ..PatientPresentation::default()
    }
}

pub(super) fn heart_rate(hr: f64) -> PatientPresentation {
    with_vitals(VitalSigns {
        hr: Some(hr),
        ..VitalSigns::default()
    })
}

pub(super) fn blood_pressure(bp: &str) -> PatientPresentation {
    with_vitals(VitalSigns {
        bp: Some(bp.to_string()),
        ..VitalSigns::default()
    })
}

/// Cardiac presentation with tachycardia, mild hypoxia and an elderly patient.
pub(super) fn cardiac_scenario() -> PatientPresentation {
    PatientPresentation {
        symptoms: vec!["chest pain".to_string()],
        vitals: VitalSigns {
            hr: Some(135.0),
            spo2: Some(92.0),
            ..VitalSigns::default()
        },
        age: Some(70),
        trauma_type: None,
    }
}

pub(super) fn urgency(presentation: &PatientPresentation) -> f64 {
    engine().assess(presentation).urgency_score
}

pub(super) fn fired_rules(result: &TriageResult) -> Vec<&str> {
    result
        .recommended_setup_details
        .contributions
        .iter()
        .map(|contribution| contribution.rule.as_str())
        .collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
