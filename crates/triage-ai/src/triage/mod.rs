//! Triage scoring pipeline.
//!
//! A presentation flows through normalization, rule evaluation, clamping, the probability
//! curve and classification in a single pass. Every stage is a pure function and can be
//! called on its own; [`TriageEngine`] wires them together around a [`RuleTable`].

mod alert;
pub mod config;
pub mod domain;
pub mod normalize;
pub mod policy;
pub mod router;
mod rules;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use alert::PreAlert;
pub use config::{
    AgeRule, RuleTable, SymptomRule, Threshold, TraumaRule, VitalCascade, VitalKind, VitalTier,
};
pub use domain::{
    CategoryTag, EmergencyClass, EmergencyType, HospitalRouting, PatientPresentation,
    RuleContribution, ScoreAccumulator, SetupDetails, TriageResult, VitalSigns, DEFAULT_AGE,
};
pub use normalize::{BloodPressure, NormalizedPresentation};
pub use router::{triage_router, PredictResponse};

/// Stateless evaluator applying a rule table to patient presentations.
#[derive(Debug, Clone, Default)]
pub struct TriageEngine {
    rules: RuleTable,
}

impl TriageEngine {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    pub fn standard() -> Self {
        Self::new(RuleTable::standard())
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn assess(&self, presentation: &PatientPresentation) -> TriageResult {
        let normalized = NormalizedPresentation::from_presentation(presentation);
        let accumulator = self.rules.evaluate(&normalized);
        let urgency = scoring::urgency_score(accumulator.total);
        let probability = scoring::probability(urgency);

        policy::decide_outcome(urgency, probability, accumulator, normalized.symptoms)
    }
}

/// Assess a presentation against the standard rule table.
pub fn assess(presentation: &PatientPresentation) -> TriageResult {
    TriageEngine::standard().assess(presentation)
}
