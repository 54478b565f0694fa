//! SHAP-style annotation of ranked risk factors.
//!
//! Each `RiskFactor` becomes a `FeatureContribution` carrying the display
//! fields a UI bar chart needs: absolute magnitude, direction of impact, and a
//! coarse strength bucket (|c| > 0.3 high, |c| > 0.1 medium, else low).

use serde::Serialize;

use crate::assessment::{Feature, RiskFactor};

/// Direction a factor pushes the overall risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    IncreasesRisk,
    DecreasesRisk,
}

/// Coarse magnitude bucket for compact display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactStrength {
    High,
    Medium,
    Low,
}

impl ImpactStrength {
    pub fn from_magnitude(magnitude: f64) -> Self {
        if magnitude > 0.3 {
            ImpactStrength::High
        } else if magnitude > 0.1 {
            ImpactStrength::Medium
        } else {
            ImpactStrength::Low
        }
    }
}

/// One annotated entry of `feature_contributions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureContribution {
    pub feature: Feature,
    pub value: f64,
    pub contribution: f64,
    pub abs_contribution: f64,
    pub impact: Impact,
    pub impact_strength: ImpactStrength,
}

impl FeatureContribution {
    pub fn from_factor(factor: &RiskFactor) -> Self {
        let magnitude = factor.magnitude();
        Self {
            feature: factor.feature,
            value: factor.value,
            contribution: factor.contribution,
            abs_contribution: magnitude,
            impact: if factor.contribution > 0.0 {
                Impact::IncreasesRisk
            } else {
                Impact::DecreasesRisk
            },
            impact_strength: ImpactStrength::from_magnitude(magnitude),
        }
    }
}

/// Annotate an already-ranked contribution list, preserving its order.
pub fn annotate(factors: &[RiskFactor]) -> Vec<FeatureContribution> {
    factors.iter().map(FeatureContribution::from_factor).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_buckets_are_exclusive_at_boundaries() {
        assert_eq!(ImpactStrength::from_magnitude(0.31), ImpactStrength::High);
        assert_eq!(ImpactStrength::from_magnitude(0.3), ImpactStrength::Medium);
        assert_eq!(ImpactStrength::from_magnitude(0.11), ImpactStrength::Medium);
        assert_eq!(ImpactStrength::from_magnitude(0.1), ImpactStrength::Low);
    }

    #[test]
    fn negative_contribution_decreases_risk() {
        let f = RiskFactor::new(Feature::Hemoglobin, 14.0, -0.3);
        let c = FeatureContribution::from_factor(&f);
        assert_eq!(c.impact, Impact::DecreasesRisk);
        assert!((c.abs_contribution - 0.3).abs() < 1e-9);
        assert_eq!(c.impact_strength, ImpactStrength::Medium);
    }

    #[test]
    fn serializes_with_snake_case_impacts() {
        let f = RiskFactor::new(Feature::Mcv, 75.0, 0.25);
        let v = serde_json::to_value(FeatureContribution::from_factor(&f)).unwrap();
        assert_eq!(v["impact"], serde_json::json!("increases_risk"));
        assert_eq!(v["impact_strength"], serde_json::json!("medium"));
        assert_eq!(v["feature"], serde_json::json!("MCV"));
    }
}
