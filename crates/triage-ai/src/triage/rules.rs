use super::config::{RuleTable, VitalCascade};
use super::domain::ScoreAccumulator;
use super::normalize::NormalizedPresentation;

impl RuleTable {
    /// Sum every rule that fires. Symptom, trauma and age rules are additive; each vital
    /// contributes at most its first matching tier.
    pub fn evaluate(&self, presentation: &NormalizedPresentation) -> ScoreAccumulator {
        let mut accumulator = ScoreAccumulator::default();

        for rule in &self.symptom_rules {
            if rule
                .any_of
                .iter()
                .any(|phrase| presentation.has_symptom(phrase))
            {
                accumulator.record(&rule.name, rule.points, Some(rule.tag));
            }
        }

        if presentation.trauma_present {
            let rule = &self.trauma_rule;
            accumulator.record(&rule.name, rule.points, Some(rule.tag));
        }

        for cascade in &self.vital_cascades {
            apply_cascade(cascade, presentation, &mut accumulator);
        }

        let age = f64::from(presentation.age);
        for rule in &self.age_rules {
            if rule.bound.matches(age) {
                accumulator.record(&rule.name, rule.points, None);
            }
        }

        accumulator
    }
}

fn apply_cascade(
    cascade: &VitalCascade,
    presentation: &NormalizedPresentation,
    accumulator: &mut ScoreAccumulator,
) {
    let Some(value) = presentation.vital(cascade.vital) else {
        return;
    };

    if let Some(tier) = cascade.tiers.iter().find(|tier| tier.bound.matches(value)) {
        accumulator.record(&tier.name, tier.points, None);
    }
}
