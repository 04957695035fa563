use serde::{Deserialize, Serialize};

use super::config::VitalKind;
use super::domain::{PatientPresentation, DEFAULT_AGE};

/// Systolic and diastolic pressure parsed from the free-text reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: f64,
    pub diastolic: f64,
}

/// Presentation after normalization, ready for rule matching.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPresentation {
    pub symptoms: Vec<String>,
    pub heart_rate: Option<f64>,
    pub blood_pressure: Option<BloodPressure>,
    pub spo2: Option<f64>,
    pub respiratory_rate: Option<f64>,
    pub age: i32,
    pub trauma_present: bool,
}

impl NormalizedPresentation {
    pub fn from_presentation(presentation: &PatientPresentation) -> Self {
        let vitals = &presentation.vitals;

        Self {
            symptoms: normalize_symptoms(&presentation.symptoms),
            heart_rate: vitals.hr,
            blood_pressure: parse_blood_pressure(vitals.bp.as_deref()),
            spo2: vitals.spo2,
            respiratory_rate: vitals.rr,
            age: presentation.age.unwrap_or(DEFAULT_AGE),
            trauma_present: presentation
                .trauma_type
                .as_deref()
                .is_some_and(|label| !label.is_empty()),
        }
    }

    /// Membership test against the normalized symptom list.
    pub fn has_symptom(&self, phrase: &str) -> bool {
        self.symptoms.iter().any(|symptom| symptom == phrase)
    }

    pub fn vital(&self, kind: VitalKind) -> Option<f64> {
        match kind {
            VitalKind::HeartRate => self.heart_rate,
            VitalKind::Spo2 => self.spo2,
            VitalKind::RespiratoryRate => self.respiratory_rate,
            VitalKind::Systolic => self.blood_pressure.map(|bp| bp.systolic),
            VitalKind::Diastolic => self.blood_pressure.map(|bp| bp.diastolic),
        }
    }
}

/// Lower-case and trim each symptom. Order and duplicates are kept.
pub fn normalize_symptoms(symptoms: &[String]) -> Vec<String> {
    symptoms
        .iter()
        .map(|symptom| symptom.trim().to_lowercase())
        .collect()
}

/// Split a `"systolic/diastolic"` reading. Anything that does not parse as exactly two numbers
/// yields `None` for both sides.
pub fn parse_blood_pressure(raw: Option<&str>) -> Option<BloodPressure> {
    let raw = raw.filter(|value| !value.is_empty())?;
    let mut parts = raw.split('/');
    let systolic = parts.next()?.trim().parse::<f64>().ok()?;
    let diastolic = parts.next()?.trim().parse::<f64>().ok()?;
    if parts.next().is_some() {
        return None;
    }

    Some(BloodPressure {
        systolic,
        diastolic,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::domain::VitalSigns;

    #[test]
    fn parses_well_formed_reading() {
        let bp = parse_blood_pressure(Some("120/80")).expect("reading parses");
        assert_eq!(bp.systolic, 120.0);
        assert_eq!(bp.diastolic, 80.0);

        let spaced = parse_blood_pressure(Some(" 85.5 / 60 ")).expect("spaced reading parses");
        assert_eq!(spaced.systolic, 85.5);
        assert_eq!(spaced.diastolic, 60.0);
    }

    #[test]
    fn malformed_readings_degrade_to_absent() {
        for raw in ["", "abc", "120", "120/", "/80", "120/abc", "120/80/60", "120-80"] {
            assert_eq!(parse_blood_pressure(Some(raw)), None, "reading {raw:?}");
        }
        assert_eq!(parse_blood_pressure(None), None);
    }

    #[test]
    fn symptoms_are_folded_and_trimmed_in_order() {
        let raw = vec![
            "  Chest Pain ".to_string(),
            "SEIZURE".to_string(),
            "chest pain".to_string(),
        ];
        assert_eq!(
            normalize_symptoms(&raw),
            vec!["chest pain", "seizure", "chest pain"]
        );
    }

    #[test]
    fn missing_age_defaults_and_empty_trauma_is_ignored() {
        let presentation = PatientPresentation {
            symptoms: Vec::new(),
            vitals: VitalSigns {
                bp: Some("95/60".to_string()),
                ..VitalSigns::default()
            },
            age: None,
            trauma_type: Some(String::new()),
        };

        let normalized = NormalizedPresentation::from_presentation(&presentation);

        assert_eq!(normalized.age, DEFAULT_AGE);
        assert!(!normalized.trauma_present);
        assert_eq!(normalized.vital(VitalKind::Systolic), Some(95.0));
        assert_eq!(normalized.vital(VitalKind::Diastolic), Some(60.0));
        assert_eq!(normalized.vital(VitalKind::HeartRate), None);
    }
}
