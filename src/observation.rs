//! # Lab Observations
//!
//! Validated scoring input: the five CBC features, their clinical reference
//! ranges, and the wire payload shape a request layer hands over.
//!
//! - Wire keys are the panel's capitalized names (`Gender`, `Hemoglobin`,
//!   `MCH`, `MCHC`, `MCV`).
//! - Every numeric feature must sit inside a fixed clinical range; gender must
//!   be 0 (female) or 1 (male).
//! - Violations reject the payload with `ValidationError` before any scoring
//!   work happens; a `LabObservation` is valid by construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Patient gender as encoded on the wire: 0 = female, 1 = male.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Parse a wire-side number. CSV-sourced rows arrive as floats, so any
    /// number whose value is exactly 0 or 1 is accepted.
    pub fn from_numeric(raw: f64) -> Result<Self, ValidationError> {
        if raw == 0.0 {
            Ok(Gender::Female)
        } else if raw == 1.0 {
            Ok(Gender::Male)
        } else {
            Err(ValidationError::InvalidGender)
        }
    }

    /// Numeric wire encoding, used for the gender slot of the contribution list.
    pub fn as_f64(self) -> f64 {
        match self {
            Gender::Female => 0.0,
            Gender::Male => 1.0,
        }
    }
}

impl TryFrom<u8> for Gender {
    type Error = ValidationError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Gender::from_numeric(raw as f64)
    }
}

impl From<Gender> for u8 {
    fn from(g: Gender) -> u8 {
        g.as_f64() as u8
    }
}

/// Clinical reference range for one numeric feature.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceRange {
    pub feature: &'static str,
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
}

impl ReferenceRange {
    fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn check(&self, value: f64) -> Result<f64, ValidationError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(ValidationError::OutOfRange {
                feature: self.feature,
                min: self.min,
                max: self.max,
                unit: self.unit,
            })
        }
    }
}

/// Accepted ranges for the numeric features, wider than "normal" so that
/// pathological but real panels still score.
pub const REFERENCE_RANGES: [ReferenceRange; 4] = [
    ReferenceRange {
        feature: "Hemoglobin",
        min: 3.0,
        max: 25.0,
        unit: "g/dL",
    },
    ReferenceRange {
        feature: "MCH",
        min: 10.0,
        max: 50.0,
        unit: "pg",
    },
    ReferenceRange {
        feature: "MCHC",
        min: 20.0,
        max: 45.0,
        unit: "g/dL",
    },
    ReferenceRange {
        feature: "MCV",
        min: 50.0,
        max: 130.0,
        unit: "fL",
    },
];

fn range_for(feature: &str) -> ReferenceRange {
    *REFERENCE_RANGES
        .iter()
        .find(|r| r.feature == feature)
        .expect("feature present in reference table")
}

/// Rejection raised before scoring. Maps to a 400-class response upstream.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Missing required feature: {0}")]
    MissingFeature(&'static str),
    #[error("Gender must be 0 (female) or 1 (male)")]
    InvalidGender,
    #[error("{feature} must be between {min:?} and {max:?} {unit}")]
    OutOfRange {
        feature: &'static str,
        min: f64,
        max: f64,
        unit: &'static str,
    },
}

impl ValidationError {
    /// HTTP status class a request layer should answer with.
    pub fn status_code(&self) -> u16 {
        400
    }
}

/// Raw wire payload: every field optional so that a missing key becomes a
/// named `ValidationError` instead of a serde parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawObservation {
    #[serde(rename = "Gender")]
    pub gender: Option<f64>,
    #[serde(rename = "Hemoglobin")]
    pub hemoglobin: Option<f64>,
    #[serde(rename = "MCH")]
    pub mch: Option<f64>,
    #[serde(rename = "MCHC")]
    pub mchc: Option<f64>,
    #[serde(rename = "MCV")]
    pub mcv: Option<f64>,
}

impl RawObservation {
    /// Promote the payload to a scoreable observation.
    ///
    /// Order matches the rejection precedence: missing keys first (in wire key
    /// order), then the gender domain, then numeric ranges.
    pub fn validate(&self) -> Result<LabObservation, ValidationError> {
        let gender_raw = self
            .gender
            .ok_or(ValidationError::MissingFeature("Gender"))?;
        let hemoglobin = self
            .hemoglobin
            .ok_or(ValidationError::MissingFeature("Hemoglobin"))?;
        let mch = self.mch.ok_or(ValidationError::MissingFeature("MCH"))?;
        let mchc = self.mchc.ok_or(ValidationError::MissingFeature("MCHC"))?;
        let mcv = self.mcv.ok_or(ValidationError::MissingFeature("MCV"))?;

        let gender = Gender::from_numeric(gender_raw)?;
        LabObservation::new(gender, hemoglobin, mch, mchc, mcv)
    }
}

/// One validated CBC panel. Construct via [`LabObservation::new`] or
/// [`RawObservation::validate`]; fields are public for reading only by
/// convention (the type carries its own validity).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabObservation {
    pub gender: Gender,
    pub hemoglobin: f64,
    pub mch: f64,
    pub mchc: f64,
    pub mcv: f64,
}

impl LabObservation {
    /// Range-checked constructor. Checks run in the panel's wire order.
    pub fn new(
        gender: Gender,
        hemoglobin: f64,
        mch: f64,
        mchc: f64,
        mcv: f64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            gender,
            hemoglobin: range_for("Hemoglobin").check(hemoglobin)?,
            mch: range_for("MCH").check(mch)?,
            mchc: range_for("MCHC").check(mchc)?,
            mcv: range_for("MCV").check(mcv)?,
        })
    }
}
