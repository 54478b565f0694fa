// tests/response_shape.rs
//
// The serialized response shape a request layer forwards verbatim: key names,
// nesting, ordering guarantees and the fixed explanation fields.

use anemia_risk_analyzer::{api, RawObservation};
use serde_json::{json, Value};

fn respond(v: Value) -> Value {
    let payload: RawObservation = serde_json::from_value(v).unwrap();
    let resp = api::predict(&payload).expect("valid payload scores");
    serde_json::to_value(&resp).unwrap()
}

#[test]
fn response_shape_matches_the_wire_contract() {
    let v = respond(json!({
        "Gender": 1, "Hemoglobin": 10.5, "MCH": 25.0, "MCHC": 30.0, "MCV": 75.0
    }));

    assert_eq!(v["predicted_label"], json!(1));
    let proba = v["predicted_proba"].as_f64().unwrap();
    assert!((proba - 0.95).abs() < 1e-9, "proba ~= 0.95, got {proba}");

    let shap = &v["explanations"]["shap"];
    assert_eq!(shap["method"], json!("rule_based_shap"));
    assert_eq!(shap["base_value"], json!(0.3));
    assert!((shap["prediction_value"].as_f64().unwrap() - proba).abs() < 1e-12);

    let contributions = shap["feature_contributions"].as_array().unwrap();
    assert_eq!(contributions.len(), 5);
    for entry in contributions {
        for key in [
            "feature",
            "value",
            "contribution",
            "abs_contribution",
            "impact",
            "impact_strength",
        ] {
            assert!(entry.get(key).is_some(), "missing {key} in {entry}");
        }
    }

    // Largest factor first: the hemoglobin deficit.
    assert_eq!(contributions[0]["feature"], json!("Hemoglobin"));
    assert_eq!(contributions[0]["impact"], json!("increases_risk"));
    assert_eq!(contributions[0]["impact_strength"], json!("high"));

    let top = shap["top_features"].as_array().unwrap();
    assert_eq!(top.len(), 3);
    assert_eq!(top.as_slice(), &contributions[..3]);
}

#[test]
fn clinical_block_carries_bucket_summary_and_disclaimer() {
    let v = respond(json!({
        "Gender": 1, "Hemoglobin": 10.5, "MCH": 25.0, "MCHC": 30.0, "MCV": 75.0
    }));
    let clinical = &v["explanations"]["clinical_interpretation"];

    assert_eq!(clinical["risk_level"], json!("high"));
    let confidence = clinical["confidence"].as_f64().unwrap();
    assert!((confidence - 0.95).abs() < 1e-9);
    assert_eq!(
        clinical["summary"],
        json!("Based on the lab values, the analysis indicates a high risk of anemia (confidence: 95.00%).")
    );
    assert!(!clinical["recommendations"].as_array().unwrap().is_empty());
    assert_eq!(
        clinical["disclaimer"],
        json!("Please consult with a healthcare provider for proper diagnosis and treatment.")
    );
}

#[test]
fn low_risk_response_reports_the_low_bucket() {
    let v = respond(json!({
        "Gender": 0, "Hemoglobin": 14.0, "MCH": 30.0, "MCHC": 34.0, "MCV": 90.0
    }));
    assert_eq!(v["predicted_label"], json!(0));
    assert!((v["predicted_proba"].as_f64().unwrap() - 0.05).abs() < 1e-9);
    assert_eq!(
        v["explanations"]["clinical_interpretation"]["risk_level"],
        json!("low")
    );
    // Protective factors point the other way.
    let first = &v["explanations"]["shap"]["feature_contributions"][0];
    assert_eq!(first["impact"], json!("decreases_risk"));
}
