//! store.rs — persistence seam for scored predictions.
//!
//! The scorer itself is pure and knows nothing about storage. Callers that
//! want history (a patient's past predictions, "most recent" views) keep it
//! explicitly through this trait; there is no hidden process-wide "latest
//! prediction" state.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::assessment::ScoreResult;
use crate::observation::LabObservation;

/// One stored prediction: input, output, owner and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub user_id: i64,
    pub observation: LabObservation,
    pub result: ScoreResult,
    pub created_at: DateTime<Utc>,
}

impl PredictionRecord {
    pub fn new(user_id: i64, observation: LabObservation, result: ScoreResult) -> Self {
        Self {
            user_id,
            observation,
            result,
            created_at: Utc::now(),
        }
    }
}

/// Storage backend interface. Failures stay on the caller's side of the
/// boundary and never alter scorer output.
#[async_trait::async_trait]
pub trait PredictionStore: Send + Sync {
    async fn save(&self, record: PredictionRecord) -> Result<()>;
    /// Up to `limit` records for one owner, newest first.
    async fn recent(&self, user_id: i64, limit: usize) -> Result<Vec<PredictionRecord>>;
}

/// Bounded in-memory store for tests, demos and request-scoped caching.
#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<Vec<PredictionRecord>>,
    cap: usize,
}

impl MemoryStore {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            inner: Mutex::new(Vec::with_capacity(cap.min(10_000))),
            cap: cap.min(10_000),
        }
    }
}

#[async_trait::async_trait]
impl PredictionStore for MemoryStore {
    async fn save(&self, record: PredictionRecord) -> Result<()> {
        let mut v = self.inner.lock().expect("store mutex poisoned");
        v.push(record);
        if v.len() > self.cap {
            let excess = v.len() - self.cap;
            v.drain(0..excess);
        }
        Ok(())
    }

    async fn recent(&self, user_id: i64, limit: usize) -> Result<Vec<PredictionRecord>> {
        let v = self.inner.lock().expect("store mutex poisoned");
        Ok(v.iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .take(limit)
            .cloned()
            .collect())
    }
}
