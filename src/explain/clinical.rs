//! Clinical interpretation block: risk bucket, confidence, a one-line summary
//! and the recommendation list, always closed by the fixed disclaimer.

use serde::Serialize;

use crate::assessment::RiskLevel;

pub const DISCLAIMER: &str =
    "Please consult with a healthcare provider for proper diagnosis and treatment.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClinicalInterpretation {
    pub risk_level: RiskLevel,
    pub confidence: f64,
    pub summary: String,
    pub recommendations: Vec<String>,
    pub disclaimer: &'static str,
}

impl ClinicalInterpretation {
    pub fn new(probability: f64, recommendations: Vec<String>) -> Self {
        let risk_level = RiskLevel::from_probability(probability);
        Self {
            risk_level,
            confidence: probability,
            summary: format!(
                "Based on the lab values, the analysis indicates a {} risk of anemia (confidence: {:.2}%).",
                risk_level.as_str(),
                probability * 100.0
            ),
            recommendations,
            disclaimer: DISCLAIMER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_names_the_bucket_and_percentage() {
        let c = ClinicalInterpretation::new(0.41, vec!["rec".into()]);
        assert_eq!(c.risk_level, RiskLevel::Moderate);
        assert_eq!(
            c.summary,
            "Based on the lab values, the analysis indicates a moderate risk of anemia (confidence: 41.00%)."
        );
        assert_eq!(c.disclaimer, DISCLAIMER);
    }
}
