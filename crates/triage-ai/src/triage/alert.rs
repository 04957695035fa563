use serde::{Deserialize, Serialize};

use super::domain::TriageResult;
use super::policy::HIGH_CLASS_THRESHOLD;

/// Hospital pre-alert raised ahead of arrival for high-urgency cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreAlert {
    pub hospital_code: String,
    pub severity: String,
    pub title: String,
    pub body: String,
}

impl TriageResult {
    /// Pre-alert for the routed hospital, only when urgency reaches the high band.
    pub fn pre_alert(&self) -> Option<PreAlert> {
        if self.urgency_score < HIGH_CLASS_THRESHOLD {
            return None;
        }

        Some(PreAlert {
            hospital_code: self.hospital_routing.hospital_code.clone(),
            severity: "HIGH".to_string(),
            title: format!("ER Pre-alert: {}", self.emergency_type),
            body: format!(
                "Urgency {}/100 • Setup: {}",
                self.urgency_score,
                self.recommended_setup.join(", ")
            ),
        })
    }
}
