use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::alert::PreAlert;
use super::domain::{PatientPresentation, TriageResult};
use super::TriageEngine;
use crate::error::AppError;

/// Predict payload: the assessment plus an optional hospital pre-alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(flatten)]
    pub result: TriageResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_alert: Option<PreAlert>,
}

impl From<TriageResult> for PredictResponse {
    fn from(result: TriageResult) -> Self {
        let pre_alert = result.pre_alert();
        Self { result, pre_alert }
    }
}

/// Router exposing the triage prediction endpoint.
pub fn triage_router(engine: Arc<TriageEngine>) -> Router {
    Router::new()
        .route("/predict", post(predict_handler))
        .with_state(engine)
}

pub(crate) async fn predict_handler(
    State(engine): State<Arc<TriageEngine>>,
    payload: Result<Json<PatientPresentation>, JsonRejection>,
) -> Result<Json<PredictResponse>, AppError> {
    let Json(presentation) = payload?;
    let result = engine.assess(&presentation);

    info!(
        urgency = result.urgency_score,
        class = %result.emergency_class,
        emergency_type = %result.emergency_type,
        hospital = %result.hospital_routing.hospital_code,
        "triage assessment completed"
    );

    Ok(Json(PredictResponse::from(result)))
}
