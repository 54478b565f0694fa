//! Recommendation catalog (built-in `config/recommendations.json`, embedded at
//! compile time).
//!
//! Minimal JSON DSL for conditions over the scored observation:
//! - `proba_above`:  match if probability > value
//! - `hb_below`:     match if hemoglobin < value
//! - `hb_at_least`:  match if hemoglobin >= value (guards an if/else-if chain)
//! - `mcv_below`:    match if MCV < value
//! - `mcv_above`:    match if MCV > value
//!
//! All present conditions must hold. Matching rules append their `then.add`
//! strings in file order; if nothing matched, the catalog's `fallback` pair is
//! returned instead. A file can re-word or re-order the catalog via
//! [`RecommendationCatalog::from_file`]; it can never change scoring.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::{fs, io, path::Path};

use crate::observation::LabObservation;

static BUILTIN: Lazy<RecommendationCatalog> = Lazy::new(|| {
    let raw = include_str!("../../config/recommendations.json");
    serde_json::from_str(raw).expect("valid built-in recommendation catalog")
});

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RecommendationCatalog {
    pub rules: Vec<RecommendationRule>,
    /// Returned when no rule matched.
    #[serde(default)]
    pub fallback: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRule {
    pub name: Option<String>,
    #[serde(default)]
    pub when: When,
    #[serde(default)]
    pub then: Then,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct When {
    pub proba_above: Option<f64>,
    pub hb_below: Option<f64>,
    pub hb_at_least: Option<f64>,
    pub mcv_below: Option<f64>,
    pub mcv_above: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Then {
    #[serde(default)]
    pub add: Vec<String>,
}

impl RecommendationCatalog {
    /// The compiled-in catalog; wording matches the clinical defaults.
    pub fn builtin() -> &'static RecommendationCatalog {
        &BUILTIN
    }

    /// Load a catalog override from disk.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        let catalog: RecommendationCatalog = serde_json::from_slice(&bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(catalog)
    }

    /// Collect recommendations for a scored observation, in rule order.
    pub fn recommendations_for(&self, obs: &LabObservation, probability: f64) -> Vec<String> {
        let mut out = Vec::new();
        for rule in &self.rules {
            if matches_when(obs, probability, &rule.when) {
                out.extend(rule.then.add.iter().cloned());
            }
        }
        if out.is_empty() {
            out.extend(self.fallback.iter().cloned());
        }
        out
    }
}

// --- internals ---

fn matches_when(obs: &LabObservation, probability: f64, w: &When) -> bool {
    if let Some(p) = w.proba_above {
        if probability <= p {
            return false;
        }
    }
    if let Some(hb) = w.hb_below {
        if obs.hemoglobin >= hb {
            return false;
        }
    }
    if let Some(hb) = w.hb_at_least {
        if obs.hemoglobin < hb {
            return false;
        }
    }
    if let Some(mcv) = w.mcv_below {
        if obs.mcv >= mcv {
            return false;
        }
    }
    if let Some(mcv) = w.mcv_above {
        if obs.mcv <= mcv {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::Gender;

    fn obs(hb: f64, mcv: f64) -> LabObservation {
        LabObservation::new(Gender::Female, hb, 30.0, 34.0, mcv)
            .expect("test panel within ranges")
    }

    #[test]
    fn builtin_catalog_parses_with_fallback() {
        let c = RecommendationCatalog::builtin();
        assert_eq!(c.rules.len(), 5);
        assert_eq!(c.fallback.len(), 2);
    }

    #[test]
    fn hemoglobin_chain_is_mutually_exclusive() {
        let c = RecommendationCatalog::builtin();

        let severe = c.recommendations_for(&obs(9.0, 90.0), 0.6);
        assert!(severe.iter().any(|r| r.contains("urgent medical attention")));
        assert!(!severe.iter().any(|r| r.contains("Iron deficiency")));

        let mild = c.recommendations_for(&obs(11.0, 90.0), 0.4);
        assert!(mild.iter().any(|r| r.contains("Iron deficiency")));
        assert!(!mild.iter().any(|r| r.contains("urgent medical attention")));
    }

    #[test]
    fn quiet_panel_gets_the_fallback_pair() {
        let c = RecommendationCatalog::builtin();
        let recs = c.recommendations_for(&obs(14.0, 90.0), 0.05);
        assert_eq!(
            recs,
            vec![
                "Continue regular health monitoring".to_string(),
                "Maintain balanced diet rich in iron, B12, and folate".to_string(),
            ]
        );
    }

    #[test]
    fn rule_order_is_file_order() {
        let c = RecommendationCatalog::builtin();
        // High probability + mild deficit + microcytic MCV: probability rule
        // first, then hemoglobin, then MCV.
        let recs = c.recommendations_for(&obs(10.5, 75.0), 0.95);
        assert!(recs[0].starts_with("High risk detected"));
        assert!(recs[2].starts_with("Iron deficiency"));
        assert!(recs[4].starts_with("Microcytic"));
    }
}
