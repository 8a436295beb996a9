//! Remote key-value backend: one JSON record per configured key, addressed
//! as `{endpoint}/{key}`. The store may be shared across processes;
//! last-writer-wins is the documented conflict policy; no distributed
//! locking is provided or required.
//!
//! Requests and responses travel in a versioned envelope carrying a request
//! id for tracing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use steer_core::errors::PersistenceError;
use steer_core::traits::IStatePersistence;
use steer_core::types::PersistedState;

/// Current envelope version.
pub const PROTOCOL_VERSION: &str = "1.0";

/// Envelope wrapping the persisted state on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KvEnvelope {
    /// Protocol version for forward compatibility.
    pub version: String,
    /// Unique request ID for tracing.
    pub request_id: String,
    /// When the envelope was written.
    pub timestamp: DateTime<Utc>,
    /// The actual state.
    pub state: PersistedState,
}

impl KvEnvelope {
    pub fn new(state: PersistedState) -> Self {
        Self {
            version: PROTOCOL_VERSION.to_string(),
            request_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state,
        }
    }
}

pub struct HttpKvStore {
    client: reqwest::blocking::Client,
    endpoint: String,
    key: String,
}

impl HttpKvStore {
    pub fn new(endpoint: String, key: String) -> Result<Self, PersistenceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|err| PersistenceError::remote(err.to_string()))?;
        Ok(Self {
            client,
            endpoint,
            key,
        })
    }

    fn record_url(&self) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), self.key)
    }
}

impl IStatePersistence for HttpKvStore {
    fn load(&self) -> Result<Option<PersistedState>, PersistenceError> {
        let response = self
            .client
            .get(self.record_url())
            .send()
            .map_err(|err| PersistenceError::remote(err.to_string()))?;

        // A missing key is a cold start, not a failure.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(PersistenceError::remote(format!(
                "load returned status {}",
                response.status()
            )));
        }

        let envelope: KvEnvelope = response
            .json()
            .map_err(|err| PersistenceError::corrupt(err.to_string()))?;
        tracing::debug!(
            request_id = %envelope.request_id,
            history_len = envelope.state.history.len(),
            "loaded remote feedback state"
        );
        Ok(Some(envelope.state))
    }

    fn save(&self, state: &PersistedState) -> Result<(), PersistenceError> {
        let envelope = KvEnvelope::new(state.clone());
        let response = self
            .client
            .put(self.record_url())
            .json(&envelope)
            .send()
            .map_err(|err| PersistenceError::remote(err.to_string()))?;

        if !response.status().is_success() {
            return Err(PersistenceError::remote(format!(
                "save returned status {}",
                response.status()
            )));
        }
        Ok(())
    }
}
