//! Demo that scores one observation end-to-end: JSON panel in (argument or
//! stdin), response JSON plus a text chart out, record kept in a MemoryStore.
//!
//! ```text
//! score_demo '{"Gender": 1, "Hemoglobin": 10.5, "MCH": 25.0, "MCHC": 30.0, "MCV": 75.0}'
//! ```

use std::io::Read;

use anemia_risk_analyzer::{
    api, engine, render, MemoryStore, PredictionRecord, PredictionStore, RawObservation,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let raw = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let payload: RawObservation = serde_json::from_str(raw.trim())?;
    let response = match api::predict(&payload) {
        Ok(resp) => resp,
        Err(err) => {
            eprintln!("rejected ({}): {err}", err.status_code());
            std::process::exit(1);
        }
    };
    println!("{}", serde_json::to_string_pretty(&response)?);

    // The scorer is pure, so re-running it for the domain-typed view is free.
    let obs = payload.validate().expect("validated by predict above");
    let result = engine::score(&obs);
    println!();
    println!("{}", render::text_chart(&result.contributions));

    let store = MemoryStore::with_capacity(16);
    store.save(PredictionRecord::new(1, obs, result)).await?;
    let kept = store.recent(1, 1).await?;
    println!(
        "stored {} record(s); latest at {}",
        kept.len(),
        kept[0].created_at
    );

    println!("score-demo done");
    Ok(())
}
