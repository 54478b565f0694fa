//! assessment.rs — structures for the scored verdict, explainability and
//! ranked feature contributions.
//!
//! The goal: one standardized output for label + probability + ranked factors
//! + recommendations, so the explanation assembly and any presentation layer
//! work over the same shape.

use serde::{Deserialize, Serialize};

/// The five scored lab features, in the fixed order contributions are built:
/// hemoglobin, MCV, MCH, MCHC, gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feature {
    Hemoglobin,
    #[serde(rename = "MCV")]
    Mcv,
    #[serde(rename = "MCH")]
    Mch,
    #[serde(rename = "MCHC")]
    Mchc,
    Gender,
}

impl Feature {
    /// Build order of the contribution list; stable sorting preserves it on ties.
    pub const ORDER: [Feature; 5] = [
        Feature::Hemoglobin,
        Feature::Mcv,
        Feature::Mch,
        Feature::Mchc,
        Feature::Gender,
    ];

    /// Wire/display name of the feature.
    pub fn name(self) -> &'static str {
        match self {
            Feature::Hemoglobin => "Hemoglobin",
            Feature::Mcv => "MCV",
            Feature::Mch => "MCH",
            Feature::Mchc => "MCHC",
            Feature::Gender => "Gender",
        }
    }
}

/// Signed weight one lab feature adds to or subtracts from overall risk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub feature: Feature,
    pub value: f64,
    pub contribution: f64,
}

impl RiskFactor {
    pub fn new(feature: Feature, value: f64, contribution: f64) -> Self {
        Self {
            feature,
            value,
            contribution,
        }
    }

    /// Absolute contribution, the ranking key.
    pub fn magnitude(&self) -> f64 {
        self.contribution.abs()
    }
}

/// Risk bucket derived from probability thresholds 0.3 and 0.7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.7 {
            RiskLevel::High
        } else if probability > 0.3 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }
}

/// Complete scorer output. Transient: no identity, callers may store it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 1 = anemia predicted, 0 = not.
    pub label: u8,
    /// Clamped to [0.05, 0.95].
    pub probability: f64,
    /// Sorted by descending absolute contribution; ties keep `Feature::ORDER`.
    pub contributions: Vec<RiskFactor>,
    /// Human-readable follow-ups from the recommendation catalog.
    pub recommendations: Vec<String>,
}

impl ScoreResult {
    /// Build from the raw signed contribution sum; clamping and labeling
    /// happen here so every construction path agrees.
    pub fn from_raw_score(
        raw_score: f64,
        contributions: Vec<RiskFactor>,
        recommendations: Vec<String>,
    ) -> Self {
        let probability = clamp_probability(raw_score);
        Self {
            label: u8::from(probability > 0.5),
            probability,
            contributions,
            recommendations,
        }
    }

    /// The top-3 view used for compact explanation display.
    pub fn top_features(&self) -> &[RiskFactor] {
        let n = self.contributions.len().min(3);
        &self.contributions[..n]
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_probability(self.probability)
    }
}

/// Clamp a raw risk score into the probability band [0.05, 0.95].
pub fn clamp_probability(x: f64) -> f64 {
    x.clamp(0.05, 0.95)
}
