// src/explain/mod.rs
//! Explanation assembly: turns a `ScoreResult` into the serialized explanation
//! payload (SHAP-style contribution block + clinical interpretation).

pub mod clinical;
pub mod contributions;
pub mod recommend;

use serde::Serialize;

use crate::assessment::ScoreResult;

// Re-export convenient types.
pub use crate::explain::clinical::{ClinicalInterpretation, DISCLAIMER};
pub use crate::explain::contributions::{annotate, FeatureContribution, Impact, ImpactStrength};
pub use crate::explain::recommend::RecommendationCatalog;

/// Neutral baseline the contribution display is anchored on.
pub const SHAP_BASE_VALUE: f64 = 0.3;

/// The `explanations.shap` block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapExplanation {
    pub method: &'static str,
    /// Sorted by descending absolute contribution.
    pub feature_contributions: Vec<FeatureContribution>,
    /// Prefix of `feature_contributions`, at most 3 entries.
    pub top_features: Vec<FeatureContribution>,
    pub base_value: f64,
    pub prediction_value: f64,
}

/// Everything a caller can show about one prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanations {
    pub shap: ShapExplanation,
    pub clinical_interpretation: ClinicalInterpretation,
}

/// Assemble the explanation payload for a scored result.
pub fn explain(result: &ScoreResult) -> Explanations {
    let feature_contributions = annotate(&result.contributions);
    let top_features = feature_contributions.iter().take(3).cloned().collect();

    Explanations {
        shap: ShapExplanation {
            method: "rule_based_shap",
            feature_contributions,
            top_features,
            base_value: SHAP_BASE_VALUE,
            prediction_value: result.probability,
        },
        clinical_interpretation: ClinicalInterpretation::new(
            result.probability,
            result.recommendations.clone(),
        ),
    }
}
