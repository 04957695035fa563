use super::common::*;
use crate::triage::config::{RuleTable, Threshold, VitalKind};
use crate::triage::domain::{CategoryTag, PatientPresentation, VitalSigns};
use crate::triage::TriageEngine;

#[test]
fn heart_rate_cascade_scores_only_the_highest_tier() {
    let result = engine().assess(&heart_rate(140.0));

    assert_eq!(result.urgency_score, 25.0);
    assert_eq!(fired_rules(&result), vec!["severe_tachycardia"]);
}

#[test]
fn heart_rate_tiers_respect_their_bounds() {
    assert_eq!(urgency(&heart_rate(130.0)), 25.0);
    assert_eq!(urgency(&heart_rate(129.9)), 15.0);
    assert_eq!(urgency(&heart_rate(110.0)), 15.0);
    assert_eq!(urgency(&heart_rate(109.0)), 0.0);
    assert_eq!(urgency(&heart_rate(45.0)), 20.0);
    assert_eq!(urgency(&heart_rate(46.0)), 0.0);
}

#[test]
fn oxygen_and_respiratory_cascades_score_by_tier() {
    let spo2 = |value: f64| {
        urgency(&with_vitals(VitalSigns {
            spo2: Some(value),
            ..VitalSigns::default()
        }))
    };
    assert_eq!(spo2(89.0), 30.0);
    assert_eq!(spo2(90.0), 15.0);
    assert_eq!(spo2(93.9), 15.0);
    assert_eq!(spo2(94.0), 0.0);

    let rr = |value: f64| {
        urgency(&with_vitals(VitalSigns {
            rr: Some(value),
            ..VitalSigns::default()
        }))
    };
    assert_eq!(rr(34.0), 20.0);
    assert_eq!(rr(30.0), 20.0);
    assert_eq!(rr(24.0), 10.0);
    assert_eq!(rr(23.0), 0.0);
}

#[test]
fn systolic_pressure_scores_hypotension_and_hypertension() {
    assert_eq!(urgency(&blood_pressure("85/50")), 30.0);
    assert_eq!(urgency(&blood_pressure("190/100")), 15.0);
    assert_eq!(urgency(&blood_pressure("90/60")), 0.0);
    assert_eq!(urgency(&blood_pressure("180/95")), 0.0);
}

#[test]
fn malformed_blood_pressure_is_treated_as_absent() {
    for raw in ["abc", "8550", "", "85/", "85/50/30"] {
        let result = engine().assess(&blood_pressure(raw));
        assert_eq!(result.urgency_score, 0.0, "reading {raw:?}");
        assert!(result.recommended_setup_details.contributions.is_empty());
    }
}

#[test]
fn age_extremes_add_points_and_missing_age_defaults() {
    let aged = |age: Option<i32>| {
        urgency(&PatientPresentation {
            age,
            ..PatientPresentation::default()
        })
    };
    assert_eq!(aged(Some(65)), 10.0);
    assert_eq!(aged(Some(64)), 0.0);
    assert_eq!(aged(Some(5)), 10.0);
    assert_eq!(aged(Some(0)), 10.0);
    assert_eq!(aged(Some(6)), 0.0);
    assert_eq!(aged(None), 0.0);
}

#[test]
fn any_non_empty_trauma_label_scores_once() {
    let trauma = |label: Option<&str>| {
        engine().assess(&PatientPresentation {
            trauma_type: label.map(str::to_string),
            ..PatientPresentation::default()
        })
    };

    let fall = trauma(Some("fall from height"));
    assert_eq!(fall.urgency_score, 15.0);
    assert_eq!(fall.recommended_setup_details.tags, vec![CategoryTag::Trauma]);

    assert_eq!(trauma(Some("rta")).urgency_score, 15.0);
    assert_eq!(trauma(Some("")).urgency_score, 0.0);
    assert_eq!(trauma(None).urgency_score, 0.0);
}

#[test]
fn symptom_matching_is_case_insensitive_but_exact() {
    assert_eq!(urgency(&presentation(&["  CHEST PAIN "])), 25.0);
    assert_eq!(urgency(&presentation(&["Pressure Chest"])), 25.0);
    assert_eq!(urgency(&presentation(&["chest pains"])), 0.0);
    assert_eq!(urgency(&presentation(&["severe chest pain"])), 0.0);
}

#[test]
fn duplicate_symptoms_do_not_stack() {
    let result = engine().assess(&presentation(&["seizure", "Unconscious", "SEIZURE"]));

    assert_eq!(result.urgency_score, 30.0);
    assert_eq!(fired_rules(&result), vec!["neuro_red_flag"]);
}

#[test]
fn raw_total_is_clamped_to_one_hundred() {
    let presentation = PatientPresentation {
        symptoms: vec![
            "chest pain".to_string(),
            "breathless".to_string(),
            "seizure".to_string(),
        ],
        vitals: VitalSigns {
            hr: Some(150.0),
            bp: Some("80/40".to_string()),
            spo2: Some(85.0),
            rr: Some(35.0),
        },
        age: Some(70),
        trauma_type: Some("crush injury".to_string()),
    };

    let result = engine().assess(&presentation);
    let raw_total: f64 = result
        .recommended_setup_details
        .contributions
        .iter()
        .map(|contribution| contribution.points)
        .sum();

    assert_eq!(raw_total, 205.0);
    assert_eq!(result.urgency_score, 100.0);
}

#[test]
fn standard_table_is_inspectable_as_data() {
    let table = RuleTable::standard();

    assert_eq!(table.symptom_rules.len(), 3);
    let heart = &table.vital_cascades[0];
    assert_eq!(heart.vital, VitalKind::HeartRate);
    assert_eq!(heart.tiers[0].bound, Threshold::AtLeast(130.0));

    let json = serde_json::to_value(&table).expect("table serializes");
    assert_eq!(json["vital_cascades"][0]["vital"], "heart_rate");
    assert_eq!(
        json["vital_cascades"][0]["tiers"][0]["bound"],
        serde_json::json!({ "op": "at_least", "value": 130.0 })
    );
    assert_eq!(json["symptom_rules"][0]["tag"], "cardiac");
}

#[test]
fn engine_applies_a_tuned_table() {
    let mut table = RuleTable::standard();
    table.age_rules.clear();
    table.symptom_rules[0].points = 40.0;
    let engine = TriageEngine::new(table);

    let result = engine.assess(&PatientPresentation {
        symptoms: vec!["chest pain".to_string()],
        age: Some(80),
        ..PatientPresentation::default()
    });

    assert_eq!(result.urgency_score, 40.0);
    assert_eq!(engine.rules().symptom_rules[0].points, 40.0);
}
