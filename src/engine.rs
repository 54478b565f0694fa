//! # Risk Scorer
//! Pure, testable logic that maps a validated `LabObservation` → `ScoreResult`.
//! No I/O, no shared state, suitable for unit tests and offline evaluation.
//!
//! Policy: each of the five features yields one signed contribution from fixed
//! clinical thresholds; the signed sum, clamped to [0.05, 0.95], is the
//! probability and the label flips strictly above 0.5. Deterministic: the same
//! panel always produces the same result.

use std::cmp::Ordering;

use crate::assessment::{Feature, RiskFactor, ScoreResult};
use crate::explain::recommend::RecommendationCatalog;
use crate::observation::{Gender, LabObservation};

/// Anemia screening threshold for hemoglobin, per WHO convention:
/// 12.0 g/dL for women, 13.0 g/dL for men.
pub fn hemoglobin_threshold(gender: Gender) -> f64 {
    match gender {
        Gender::Female => 12.0,
        Gender::Male => 13.0,
    }
}

/// Score one observation against the built-in recommendation catalog.
pub fn score(obs: &LabObservation) -> ScoreResult {
    score_with_catalog(obs, RecommendationCatalog::builtin())
}

/// Same scoring, with a caller-supplied recommendation catalog (wording only;
/// the catalog cannot influence label or probability).
pub fn score_with_catalog(obs: &LabObservation, catalog: &RecommendationCatalog) -> ScoreResult {
    // 1) Hemoglobin (primary indicator): deficit below the gender threshold
    //    grades into severe/moderate/mild bands.
    let hb_threshold = hemoglobin_threshold(obs.gender);
    let hb_contribution = if obs.hemoglobin < hb_threshold {
        let deficit = hb_threshold - obs.hemoglobin;
        if deficit >= 3.0 {
            0.8
        } else if deficit >= 1.5 {
            0.6
        } else {
            0.4
        }
    } else {
        -0.3
    };

    // 2) MCV (cell size): microcytic below 80 fL, macrocytic above 100 fL.
    let mcv_contribution = if obs.mcv < 80.0 {
        0.25
    } else if obs.mcv > 100.0 {
        0.20
    } else {
        -0.10
    };

    // 3) MCH.
    let mch_contribution = if obs.mch < 27.0 {
        0.15
    } else if obs.mch > 32.0 {
        0.10
    } else {
        -0.05
    };

    // 4) MCHC.
    let mchc_contribution = if obs.mchc < 32.0 {
        0.12
    } else if obs.mchc > 36.0 {
        0.08
    } else {
        -0.02
    };

    // 5) Gender: women carry a small baseline risk premium.
    let gender_contribution = match obs.gender {
        Gender::Female => 0.05,
        Gender::Male => -0.02,
    };

    // Build in the fixed feature order; stable sorting preserves it on ties.
    let mut contributions = vec![
        RiskFactor::new(Feature::Hemoglobin, obs.hemoglobin, hb_contribution),
        RiskFactor::new(Feature::Mcv, obs.mcv, mcv_contribution),
        RiskFactor::new(Feature::Mch, obs.mch, mch_contribution),
        RiskFactor::new(Feature::Mchc, obs.mchc, mchc_contribution),
        RiskFactor::new(Feature::Gender, obs.gender.as_f64(), gender_contribution),
    ];

    // Signed sum over ALL five factors; protective (negative) terms count too.
    let raw_score: f64 = contributions.iter().map(|f| f.contribution).sum();

    contributions.sort_by(|a, b| {
        b.magnitude()
            .partial_cmp(&a.magnitude())
            .unwrap_or(Ordering::Equal)
    });

    let probability = crate::assessment::clamp_probability(raw_score);
    let recommendations = catalog.recommendations_for(obs, probability);

    ScoreResult::from_raw_score(raw_score, contributions, recommendations)
}
