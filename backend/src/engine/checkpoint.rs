//! Checkpointing: snapshot and restore a running engine.
//!
//! A snapshot captures the full game state plus the RNG state and the id
//! sequences, so a restored engine continues the exact trajectory the
//! original would have taken. The snapshot also records a SHA-256 hash of
//! the canonical-JSON configuration (catalog + tunables); restoring under a
//! different configuration is refused rather than silently diverging.

use crate::engine::engine::{Engine, EngineConfig, EngineError};
use crate::engine::params::Tunables;
use crate::models::state::GameState;
use crate::refdata::ReferenceData;
use crate::rng::SimRng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// A complete, restorable capture of a running engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: GameState,
    pub rng_state: u64,
    pub next_entity_id: u64,
    pub next_log_id: u64,
    /// SHA-256 over the canonical JSON of the configuration.
    pub config_hash: String,
}

/// Rebuild a JSON value with every object's keys sorted, recursively.
fn canonicalize(value: &serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(map) => {
            let sorted: BTreeMap<String, serde_json::Value> = map
                .iter()
                .map(|(key, inner)| (key.clone(), canonicalize(inner)))
                .collect();
            serde_json::Value::Object(sorted.into_iter().collect())
        }
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(canonicalize).collect())
        }
        other => other.clone(),
    }
}

/// Hash the behavior-defining configuration. The seed is deliberately
/// excluded: continuation runs from the snapshotted RNG state, not the seed.
pub fn compute_config_hash(
    reference: &ReferenceData,
    tunables: &Tunables,
) -> Result<String, serde_json::Error> {
    let payload = serde_json::json!({
        "reference": serde_json::to_value(reference)?,
        "tunables": serde_json::to_value(tunables)?,
    });
    let encoded = serde_json::to_string(&canonicalize(&payload))?;

    let mut hasher = Sha256::new();
    hasher.update(encoded.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

impl Engine {
    /// Capture the engine for later restoration.
    pub fn snapshot(&self) -> Result<Snapshot, EngineError> {
        let config_hash = compute_config_hash(&self.reference, &self.tunables)?;
        Ok(Snapshot {
            state: self.state.clone(),
            rng_state: self.rng.get_state(),
            next_entity_id: self.next_entity_id,
            next_log_id: self.next_log_id,
            config_hash,
        })
    }

    /// Rebuild an engine from a snapshot under the given configuration.
    ///
    /// The configuration must hash to the value recorded in the snapshot;
    /// a mismatch is an error, never a silent divergence.
    pub fn restore(snapshot: Snapshot, config: EngineConfig) -> Result<Self, EngineError> {
        config.reference.validate()?;
        config.tunables.validate()?;

        let actual = compute_config_hash(&config.reference, &config.tunables)?;
        if actual != snapshot.config_hash {
            return Err(EngineError::ConfigMismatch {
                snapshot: snapshot.config_hash,
                actual,
            });
        }

        Ok(Self {
            state: snapshot.state,
            reference: config.reference,
            tunables: config.tunables,
            rng: SimRng::from_state(snapshot.rng_state),
            next_entity_id: snapshot.next_entity_id,
            next_log_id: snapshot.next_log_id,
        })
    }
}
