//! Wire boundary for the scorer, shaped for a request-handling layer.
//!
//! `predict` is the single entry point: validate → score → assemble
//! explanations. A `ValidationError` maps to a 400-class response
//! (`ValidationError::status_code`); valid input always yields a result.
//! Raw lab values are never logged here, only the outcome.

use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing::{debug, info};

use crate::assessment::ScoreResult;
use crate::engine;
use crate::explain::{self, Explanations};
use crate::observation::{RawObservation, ValidationError};

/// One-time metrics registration (so series show up wherever the embedding
/// service exports them).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "predictions_scored_total",
            "Observations that validated and were scored."
        );
        describe_counter!(
            "predictions_rejected_total",
            "Payloads rejected by validation before scoring."
        );
    });
}

/// JSON response returned for one scored observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResponse {
    pub predicted_label: u8,
    pub predicted_proba: f64,
    pub explanations: Explanations,
}

impl PredictionResponse {
    pub fn from_result(result: &ScoreResult) -> Self {
        Self {
            predicted_label: result.label,
            predicted_proba: result.probability,
            explanations: explain::explain(result),
        }
    }
}

/// Validate and score one wire payload.
pub fn predict(payload: &RawObservation) -> Result<PredictionResponse, ValidationError> {
    ensure_metrics_described();

    let obs = match payload.validate() {
        Ok(obs) => obs,
        Err(err) => {
            counter!("predictions_rejected_total").increment(1);
            debug!(target: "predict", error = %err, "payload rejected before scoring");
            return Err(err);
        }
    };

    let result = engine::score(&obs);
    counter!("predictions_scored_total").increment(1);
    info!(
        target: "predict",
        label = result.label,
        probability = result.probability,
        risk_level = result.risk_level().as_str(),
        "prediction scored"
    );

    Ok(PredictionResponse::from_result(&result))
}
