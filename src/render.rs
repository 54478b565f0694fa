//! Presentation adapter: bar-style visualizations over an already-computed
//! contribution list. Formatting only; nothing here feeds back into scoring.
//!
//! Two renderings:
//! - `html_chart`: self-contained HTML with one colored bar per factor
//!   (red = increases risk, blue = decreases risk, width ∝ impact).
//! - `text_chart`: plain-text ranking for consoles and plain-text mail.

use std::cmp::Ordering;
use std::fmt::Write as _;

use crate::assessment::RiskFactor;

const INCREASE_COLOR: &str = "#dc3545";
const DECREASE_COLOR: &str = "#007bff";

/// Render a self-contained HTML bar chart. Factors are re-ranked by absolute
/// contribution so callers can pass an unsorted list.
pub fn html_chart(factors: &[RiskFactor]) -> String {
    let mut html = String::from(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 20px auto;">
  <h3 style="text-align: center; color: #333; margin-bottom: 20px;">Feature Contributions to Anemia Risk</h3>
  <div style="background: #f8f9fa; padding: 20px; border-radius: 8px;">
"#,
    );

    for factor in ranked(factors) {
        let percentage = factor.magnitude() * 100.0;
        let (color, impact_text) = if factor.contribution > 0.0 {
            (INCREASE_COLOR, "Increases Risk")
        } else {
            (DECREASE_COLOR, "Decreases Risk")
        };
        let width = (percentage * 2.0).min(100.0);
        let name = html_escape::encode_text(factor.feature.name());

        let _ = write!(
            html,
            r#"    <div style="margin-bottom: 15px; padding: 10px; background: white; border-radius: 6px; border-left: 4px solid {color};">
      <div style="display: flex; justify-content: space-between; align-items: center;">
        <div>
          <strong style="color: #333;">{name}</strong>
          <div style="color: #666; font-size: 0.9em;">Value: {value}</div>
        </div>
        <div style="text-align: right;">
          <div style="color: {color}; font-weight: bold;">{impact_text}</div>
          <div style="color: #666; font-size: 0.9em;">{percentage:.1}% impact</div>
        </div>
      </div>
      <div style="margin-top: 8px; background: #e9ecef; height: 8px; border-radius: 4px;">
        <div style="background: {color}; height: 100%; width: {width:.0}%; border-radius: 4px;"></div>
      </div>
    </div>
"#,
            value = factor.value,
        );
    }

    html.push_str(
        r#"  </div>
  <div style="text-align: center; margin-top: 15px; color: #666; font-size: 0.9em;">
    How each lab parameter contributes to the anemia risk assessment
  </div>
</div>
"#,
    );
    html
}

/// Plain-text fallback of the same ranking.
pub fn text_chart(factors: &[RiskFactor]) -> String {
    let mut out = String::from("Feature Contributions to Anemia Risk:\n\n");
    for (i, factor) in ranked(factors).iter().enumerate() {
        let impact_text = if factor.contribution > 0.0 {
            "increases risk"
        } else {
            "decreases risk"
        };
        let _ = writeln!(
            out,
            "{}. {} (value: {}) - {} by {:.1}%",
            i + 1,
            factor.feature.name(),
            factor.value,
            impact_text,
            factor.magnitude() * 100.0
        );
    }
    out
}

fn ranked(factors: &[RiskFactor]) -> Vec<RiskFactor> {
    let mut sorted = factors.to_vec();
    sorted.sort_by(|a, b| {
        b.magnitude()
            .partial_cmp(&a.magnitude())
            .unwrap_or(Ordering::Equal)
    });
    sorted
}
